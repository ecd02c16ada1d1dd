use serde::{Deserialize, Serialize};

/// Room category, as shown by its color on the dungeon map.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Entrance,
    Room,
    Puzzle,
    Trap,
    Miniboss,
    Fairy,
    Blood,
    /// Room that is on the map but not yet explored.
    Unknown,
}

impl RoomType {
    pub const ALL: [RoomType; 8] = [
        RoomType::Entrance,
        RoomType::Room,
        RoomType::Puzzle,
        RoomType::Trap,
        RoomType::Miniboss,
        RoomType::Fairy,
        RoomType::Blood,
        RoomType::Unknown,
    ];

    /// Returns the human-readable display name for this room type.
    pub fn name(&self) -> &'static str {
        match self {
            RoomType::Entrance => "Entrance",
            RoomType::Room => "Room",
            RoomType::Puzzle => "Puzzle",
            RoomType::Trap => "Trap",
            RoomType::Miniboss => "Miniboss",
            RoomType::Fairy => "Fairy",
            RoomType::Blood => "Blood",
            RoomType::Unknown => "Unknown",
        }
    }
}

/// Rotation of a room, named after the corner its layout is anchored on.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Direction {
    NW,
    NE,
    SW,
    SE,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::NW, Direction::NE, Direction::SW, Direction::SE];
}
