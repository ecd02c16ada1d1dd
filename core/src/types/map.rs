use serde::{Deserialize, Serialize};

use super::PixelPos;
use crate::constants::{ICON_CENTER, MAP_PIXELS, MAP_SIZE};

/// Map raster: one palette index per pixel, row-major (`x + z * 128`).
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    colors: Box<[u8]>,
}

impl PixelGrid {
    /// Wraps a raw color buffer. Returns `None` unless it holds exactly 128x128 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != MAP_PIXELS {
            return None;
        }

        Some(Self {
            colors: bytes.into(),
        })
    }

    /// Builds a grid by evaluating `color_at` for every pixel.
    pub fn from_fn(mut color_at: impl FnMut(PixelPos) -> u8) -> Self {
        let mut colors = Vec::with_capacity(MAP_PIXELS);
        for z in 0..MAP_SIZE {
            for x in 0..MAP_SIZE {
                colors.push(color_at(PixelPos::new(x, z)));
            }
        }

        Self {
            colors: colors.into_boxed_slice(),
        }
    }

    pub fn is_sane_coordinates(pos: PixelPos) -> bool {
        pos.x >= 0 && pos.z >= 0 && pos.x < MAP_SIZE && pos.z < MAP_SIZE
    }

    /// Color at `pos`, or `None` when `pos` lies outside the raster.
    ///
    /// `None` is the "no color" sentinel: it compares unequal to every palette
    /// index, so scans that walk off the edge of the map stop by themselves.
    #[inline]
    pub fn color(&self, pos: PixelPos) -> Option<u8> {
        if !Self::is_sane_coordinates(pos) {
            return None;
        }
        Some(self.colors[(pos.x + (pos.z << 7)) as usize])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.colors
    }
}

impl std::fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelGrid")
            .field("pixels", &self.colors.len())
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapIconKind {
    /// Marker of the local player.
    Frame,
    Player,
    RedMarker,
    BlueMarker,
    Other(u8),
}

/// Icon drawn on top of the map. Coordinates are doubled and centered on the
/// map, so they span the full signed byte range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIcon {
    pub kind: MapIconKind,
    pub x: i8,
    pub z: i8,
}

impl MapIcon {
    pub const fn new(kind: MapIconKind, x: i8, z: i8) -> Self {
        Self { kind, x, z }
    }

    /// Pixel this icon points at.
    pub fn pixel_pos(&self) -> PixelPos {
        PixelPos::new(
            ((self.x as i32) >> 1) + ICON_CENTER,
            ((self.z as i32) >> 1) + ICON_CENTER,
        )
    }
}

/// Raster and icons captured from the same rendered frame.
#[derive(Debug, Clone)]
pub struct MapSnapshot {
    pub grid: PixelGrid,
    pub icons: Vec<MapIcon>,
}

impl MapSnapshot {
    pub fn new(grid: PixelGrid, icons: Vec<MapIcon>) -> Self {
        Self { grid, icons }
    }

    /// Pixel under the local player's marker, if the map shows one.
    pub fn player_marker(&self) -> Option<PixelPos> {
        self.icons
            .iter()
            .find(|icon| icon.kind == MapIconKind::Frame)
            .map(MapIcon::pixel_pos)
    }
}
