use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position on the map raster. `x` grows east, `z` grows south.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelPos {
    pub x: i32,
    pub z: i32,
}

impl PixelPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Returns a copy moved by `(dx, dz)`.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Component-wise non-negative remainder.
    pub fn rem_euclid(self, modulus: i32) -> Self {
        Self {
            x: self.x.rem_euclid(modulus),
            z: self.z.rem_euclid(modulus),
        }
    }
}

impl Add for PixelPos {
    type Output = PixelPos;

    fn add(self, rhs: PixelPos) -> PixelPos {
        PixelPos::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for PixelPos {
    type Output = PixelPos;

    fn sub(self, rhs: PixelPos) -> PixelPos {
        PixelPos::new(self.x - rhs.x, self.z - rhs.z)
    }
}

/// North-west corner of a room (or room segment) in world blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldAnchor {
    pub x: i32,
    pub z: i32,
}

impl WorldAnchor {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl Add for WorldAnchor {
    type Output = WorldAnchor;

    fn add(self, rhs: WorldAnchor) -> WorldAnchor {
        WorldAnchor::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for WorldAnchor {
    type Output = WorldAnchor;

    fn sub(self, rhs: WorldAnchor) -> WorldAnchor {
        WorldAnchor::new(self.x - rhs.x, self.z - rhs.z)
    }
}

/// Continuous world position, as reported for the player entity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPos {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Integer world block.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelPos, WorldAnchor};

    #[test]
    fn rem_euclid_is_never_negative() {
        let pos = PixelPos::new(-3, -25);
        assert_eq!(pos.rem_euclid(24), PixelPos::new(21, 23));
        assert_eq!(PixelPos::new(50, 24).rem_euclid(24), PixelPos::new(2, 0));
    }

    #[test]
    fn offset_returns_new_value_and_leaves_original() {
        let pos = PixelPos::new(10, 10);
        let moved = pos.offset(2, -3);
        assert_eq!(moved, PixelPos::new(12, 7));
        assert_eq!(pos, PixelPos::new(10, 10));
    }

    #[test]
    fn anchors_add_and_subtract_per_axis() {
        let a = WorldAnchor::new(-200, -8);
        let b = WorldAnchor::new(32, 64);
        assert_eq!(a + b, WorldAnchor::new(-168, 56));
        assert_eq!((a + b) - b, a);
    }
}
