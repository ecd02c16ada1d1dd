//! Color to room-type lookup table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_BLOOD, COLOR_ENTRANCE, COLOR_FAIRY, COLOR_MINIBOSS, COLOR_PUZZLE, COLOR_ROOM,
    COLOR_TRAP, COLOR_UNKNOWN,
};
use crate::types::RoomType;

/// Maps map palette indices to room types.
///
/// Several colors may share a room type, but exactly one color must mark the
/// entrance since the entrance is the origin of every coordinate mapping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<u8, RoomType>,
    #[serde(skip)]
    entrance_color: u8,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = BTreeMap::from([
            (COLOR_ENTRANCE, RoomType::Entrance),
            (COLOR_ROOM, RoomType::Room),
            (COLOR_PUZZLE, RoomType::Puzzle),
            (COLOR_TRAP, RoomType::Trap),
            (COLOR_MINIBOSS, RoomType::Miniboss),
            (COLOR_FAIRY, RoomType::Fairy),
            (COLOR_BLOOD, RoomType::Blood),
            (COLOR_UNKNOWN, RoomType::Unknown),
        ]);

        Self {
            colors,
            entrance_color: COLOR_ENTRANCE,
        }
    }
}

impl Palette {
    /// Builds a palette from `(color, room type)` pairs.
    ///
    /// # Arguments
    /// * `entries` - Palette entries. Later duplicates of a color replace earlier ones.
    ///
    /// # Returns
    /// * An error if no color, or more than one color, maps to [`RoomType::Entrance`].
    pub fn new(entries: impl IntoIterator<Item = (u8, RoomType)>) -> anyhow::Result<Self> {
        Self::validated(entries.into_iter().collect())
    }

    fn validated(colors: BTreeMap<u8, RoomType>) -> anyhow::Result<Self> {
        let entrances: Vec<u8> = colors
            .iter()
            .filter(|(_, room_type)| **room_type == RoomType::Entrance)
            .map(|(color, _)| *color)
            .collect();

        let entrance_color = match entrances.as_slice() {
            [color] => *color,
            [] => bail!("palette has no entrance color"),
            many => bail!("palette has {} entrance colors: {:?}", many.len(), many),
        };

        Ok(Self {
            colors,
            entrance_color,
        })
    }

    /// Parses a palette from JSON, e.g. `{"colors": {"30": "entrance", "18": "blood"}}`.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let parsed: Palette = serde_json::from_str(json).context("malformed palette JSON")?;
        Self::validated(parsed.colors)
    }

    /// Reads and parses a JSON palette file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read palette file {}", path.display()))?;

        let palette = Self::from_json_str(&json)
            .with_context(|| format!("invalid palette file {}", path.display()))?;

        log::info!(
            "Loaded palette with {} colors from {}",
            palette.colors.len(),
            path.display()
        );
        Ok(palette)
    }

    /// Room type shown by `color`, or `None` for colors outside the table.
    pub fn classify(&self, color: u8) -> Option<RoomType> {
        self.colors.get(&color).copied()
    }

    pub fn entrance_color(&self) -> u8 {
        self.entrance_color
    }

    /// True when `color` is a real pixel color equal to the entrance color.
    #[inline]
    pub fn is_entrance(&self, color: Option<u8>) -> bool {
        color == Some(self.entrance_color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
