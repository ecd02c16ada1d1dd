//! Constants module - fixed geometry of the dungeon map and the dungeon world grid

// =============================================================================
// Map raster
// =============================================================================

/// Width and height of the map raster in pixels
pub const MAP_SIZE: i32 = 128;
/// Number of pixels in one map snapshot
pub const MAP_PIXELS: usize = (MAP_SIZE * MAP_SIZE) as usize;

/// Icon coordinates are doubled and centered on the map; `(v >> 1) + 64` decodes them
pub const ICON_CENTER: i32 = MAP_SIZE / 2;

// =============================================================================
// Room cells on the map
// =============================================================================

/// Border between two room cells on the map, in pixels
pub const ROOM_GAP: i32 = 4;

/// Shift applied to the player marker so it never lands on a border pixel.
/// Borders are split evenly between the two rooms they separate.
pub const BORDER_SPLIT: i32 = ROOM_GAP / 2;

// =============================================================================
// World grid
// =============================================================================

/// Dungeon rooms are laid out on a 32 by 32 block grid
pub const WORLD_ROOM_SIZE: i32 = 32;

/// The dungeon grid is shifted by 8 blocks relative to the world origin
pub const WORLD_GRID_OFFSET: i32 = 8;

/// Room boundaries fall on half-block lines
pub const WORLD_BORDER_SPLIT: f64 = 0.5;

/// Distance from the north-west corner of a room segment to its far edge.
/// A segment is 31 blocks wide.
pub const SEGMENT_EXTENT: i32 = 30;

// =============================================================================
// Palette (defaults)
// =============================================================================

pub const COLOR_ENTRANCE: u8 = 30;
pub const COLOR_ROOM: u8 = 63;
pub const COLOR_PUZZLE: u8 = 66;
pub const COLOR_TRAP: u8 = 62;
pub const COLOR_MINIBOSS: u8 = 74;
pub const COLOR_FAIRY: u8 = 82;
pub const COLOR_BLOOD: u8 = 18;
pub const COLOR_UNKNOWN: u8 = 85;
