//! Data types module - map snapshots, coordinates and room classification

mod coords;
mod map;
mod room;

// Re-export all types
pub use coords::{BlockPos, PixelPos, WorldAnchor, WorldPos};
pub use map::{MapIcon, MapIconKind, MapSnapshot, PixelGrid};
pub use room::{Direction, RoomType};
