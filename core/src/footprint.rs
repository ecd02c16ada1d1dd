//! Room footprint recovery.
//!
//! Multi-segment rooms are drawn as several room cells whose shared border is
//! painted in the room color. Walking from cell to cell across painted borders
//! recovers every segment of the room.

use std::collections::{BTreeSet, VecDeque};

use crate::constants::ROOM_GAP;
use crate::geometry::world_anchor_from_pixel;
use crate::types::{PixelGrid, PixelPos, WorldAnchor};

/// Top left corners of every segment of one room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFootprint {
    segments: BTreeSet<PixelPos>,
}

impl RoomFootprint {
    pub fn contains(&self, anchor: PixelPos) -> bool {
        self.segments.contains(&anchor)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment anchors ordered by `x`, then `z`.
    pub fn iter(&self) -> impl Iterator<Item = PixelPos> + '_ {
        self.segments.iter().copied()
    }

    /// World north-west corners of every segment.
    pub fn world_segments(
        &self,
        entrance_pixel: PixelPos,
        room_size: i32,
        entrance_world: WorldAnchor,
    ) -> Vec<WorldAnchor> {
        self.iter()
            .map(|anchor| world_anchor_from_pixel(entrance_pixel, room_size, entrance_world, anchor))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RoomFootprint {
    type Item = &'a PixelPos;
    type IntoIter = std::collections::btree_set::Iter<'a, PixelPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Collects every segment of the room whose segment at `start` is colored `color`.
///
/// Breadth-first over room cells: from a segment at `c`, the pixel just past
/// each edge (`c.x - 1`, `c.z - 1`, `c.x + room_size`, `c.z + room_size`) is
/// probed, and if it has the room color the segment one stride
/// (`room_size + ROOM_GAP`) away in that direction joins the room. The
/// footprint doubles as the visited set.
///
/// # Arguments
/// * `grid` - Map raster.
/// * `start` - Top left corner of one segment of the room.
/// * `room_size` - Width of one room cell on the map, without the border.
/// * `color` - Color of the room.
///
/// # Returns
/// * The footprint; it always contains `start`.
pub fn flood_fill_footprint(
    grid: &PixelGrid,
    start: PixelPos,
    room_size: i32,
    color: u8,
) -> RoomFootprint {
    let stride = room_size + ROOM_GAP;
    // (pixel probed relative to the segment, step to the neighbouring segment)
    let probes = [
        (PixelPos::new(-1, 0), PixelPos::new(-stride, 0)),
        (PixelPos::new(0, -1), PixelPos::new(0, -stride)),
        (PixelPos::new(room_size, 0), PixelPos::new(stride, 0)),
        (PixelPos::new(0, room_size), PixelPos::new(0, stride)),
    ];

    let mut footprint = RoomFootprint::default();
    let mut queue = VecDeque::new();
    footprint.segments.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (probe, step) in probes {
            if grid.color(current + probe) != Some(color) {
                continue;
            }

            let neighbour = current + step;
            if footprint.segments.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    log::debug!(
        "Found dungeon room segments: {:?}",
        footprint.segments.iter().collect::<Vec<_>>()
    );
    footprint
}
