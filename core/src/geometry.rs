//! Coordinate transforms between the map raster and the dungeon world grid.
//!
//! Map rooms are `room_size` pixels wide and separated by a [`ROOM_GAP`] pixel
//! border; world rooms are [`WORLD_ROOM_SIZE`] blocks wide. Both grids are
//! anchored at the entrance room, so one room step on the map is
//! `room_size + ROOM_GAP` pixels and one room step in the world is 32 blocks.
//! All divisions truncate toward zero, the same way on both axes.

use std::collections::BTreeSet;

use crate::constants::{
    ROOM_GAP, SEGMENT_EXTENT, WORLD_BORDER_SPLIT, WORLD_GRID_OFFSET, WORLD_ROOM_SIZE,
};
use crate::types::{BlockPos, Direction, PixelPos, WorldAnchor, WorldPos};

/// Map position of the top left corner of the room whose north-west corner is `world`.
///
/// # Arguments
/// * `entrance_world` - North-west corner of the entrance room in the world.
/// * `entrance_pixel` - Top left corner of the entrance room on the map.
/// * `room_size` - Width of one room on the map, without the border.
/// * `world` - North-west corner of the room to locate.
pub fn pixel_anchor_from_world(
    entrance_world: WorldAnchor,
    entrance_pixel: PixelPos,
    room_size: i32,
    world: WorldAnchor,
) -> PixelPos {
    let stride = room_size + ROOM_GAP;
    let delta = world - entrance_world;
    PixelPos::new(
        delta.x / WORLD_ROOM_SIZE * stride,
        delta.z / WORLD_ROOM_SIZE * stride,
    ) + entrance_pixel
}

/// World position of the north-west corner of the room whose top left map corner is `pixel`.
///
/// # Arguments
/// * `entrance_pixel` - Top left corner of the entrance room on the map.
/// * `room_size` - Width of one room on the map, without the border.
/// * `entrance_world` - North-west corner of the entrance room in the world.
/// * `pixel` - Top left corner of the room to locate.
pub fn world_anchor_from_pixel(
    entrance_pixel: PixelPos,
    room_size: i32,
    entrance_world: WorldAnchor,
    pixel: PixelPos,
) -> WorldAnchor {
    let stride = room_size + ROOM_GAP;
    let delta = pixel - entrance_pixel;
    WorldAnchor::new(
        delta.x / stride * WORLD_ROOM_SIZE,
        delta.z / stride * WORLD_ROOM_SIZE,
    ) + entrance_world
}

/// North-west corner of the room containing the player.
///
/// The position is shifted by half a block so room borders are evenly split,
/// and by the grid offset so rooms start on multiples of 32. Snapping down with
/// a floored modulo and undoing the offset gives the corner, for negative
/// coordinates too.
pub fn world_room_anchor_from_player(pos: WorldPos) -> WorldAnchor {
    let shift = f64::from(WORLD_GRID_OFFSET) + WORLD_BORDER_SPLIT;
    let x = (pos.x + shift).floor() as i32;
    let z = (pos.z + shift).floor() as i32;

    WorldAnchor::new(
        x - x.rem_euclid(WORLD_ROOM_SIZE) - WORLD_GRID_OFFSET,
        z - z.rem_euclid(WORLD_ROOM_SIZE) - WORLD_GRID_OFFSET,
    )
}

/// Splits segment corners into the distinct x and z values they use.
pub fn segment_axes(segments: &[WorldAnchor]) -> (BTreeSet<i32>, BTreeSet<i32>) {
    let xs = segments.iter().map(|segment| segment.x).collect();
    let zs = segments.iter().map(|segment| segment.z).collect();
    (xs, zs)
}

/// Corner of a room a layout rotated by `direction` is anchored on.
///
/// Returns `None` if either axis set is empty.
pub fn corner_from_direction(
    direction: Direction,
    x_segments: &BTreeSet<i32>,
    z_segments: &BTreeSet<i32>,
) -> Option<WorldAnchor> {
    let (min_x, max_x) = (*x_segments.first()?, *x_segments.last()?);
    let (min_z, max_z) = (*z_segments.first()?, *z_segments.last()?);

    let corner = match direction {
        Direction::NW => WorldAnchor::new(min_x, min_z),
        Direction::NE => WorldAnchor::new(max_x + SEGMENT_EXTENT, min_z),
        Direction::SW => WorldAnchor::new(min_x, max_z + SEGMENT_EXTENT),
        Direction::SE => WorldAnchor::new(max_x + SEGMENT_EXTENT, max_z + SEGMENT_EXTENT),
    };
    Some(corner)
}

/// Rotates a world block into the room-local frame anchored at `corner`.
///
/// The vertical axis is only carried through; rotations act on x and z.
pub fn relative_from_world(corner: WorldAnchor, direction: Direction, pos: BlockPos) -> BlockPos {
    let dx = pos.x - corner.x;
    let dz = pos.z - corner.z;

    match direction {
        Direction::NW => BlockPos::new(dx, pos.y, dz),
        Direction::NE => BlockPos::new(dz, pos.y, -dx),
        Direction::SW => BlockPos::new(-dz, pos.y, dx),
        Direction::SE => BlockPos::new(-dx, pos.y, -dz),
    }
}
