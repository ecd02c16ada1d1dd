//! Map grid resolver
//!
//! Locates the entrance room on the dungeon map, measures rooms, finds the room
//! the player is in and ties the map raster to world coordinates.
//!
//! Every query works on one [`MapSnapshot`] and returns `None` when the snapshot
//! does not hold enough information yet (no player marker, player not on the
//! entrance, unexplored pixel). Callers skip the frame and try again on the next
//! one.

use crate::constants::{BORDER_SPLIT, ROOM_GAP};
use crate::footprint::{RoomFootprint, flood_fill_footprint};
use crate::geometry::{pixel_anchor_from_world, world_anchor_from_pixel, world_room_anchor_from_player};
use crate::palette::Palette;
use crate::types::{MapSnapshot, PixelGrid, PixelPos, RoomType, WorldAnchor, WorldPos};

/// Entrance room located both on the map and in the world.
///
/// Map and world positions can only be converted once both are known, so the
/// conversions live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceFix {
    /// Top left corner of the entrance room on the map
    pub pixel: PixelPos,
    /// North-west corner of the entrance room in the world
    pub world: WorldAnchor,
    /// Width of one room on the map, without the border
    pub room_size: i32,
}

impl EntranceFix {
    pub fn new(pixel: PixelPos, world: WorldAnchor, room_size: i32) -> Self {
        Self {
            pixel,
            world,
            room_size,
        }
    }

    pub fn pixel_from_world(&self, world: WorldAnchor) -> PixelPos {
        pixel_anchor_from_world(self.world, self.pixel, self.room_size, world)
    }

    pub fn world_from_pixel(&self, pixel: PixelPos) -> WorldAnchor {
        world_anchor_from_pixel(self.pixel, self.room_size, self.world, pixel)
    }

    pub fn world_from_pixels(&self, pixels: &[PixelPos]) -> Vec<WorldAnchor> {
        pixels
            .iter()
            .map(|pixel| self.world_from_pixel(*pixel))
            .collect()
    }
}

/// The room the player currently stands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoom {
    /// Top left corner, on the map, of the segment the player is in
    pub anchor: PixelPos,
    pub room_type: RoomType,
    pub footprint: RoomFootprint,
    /// North-west world corner of every segment, in footprint order
    pub world_segments: Vec<WorldAnchor>,
}

/// Resolves dungeon map snapshots against a color palette.
#[derive(Debug, Clone, Default)]
pub struct MapGridResolver {
    palette: Palette,
}

impl MapGridResolver {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Top left corner of the entrance room, found from the player marker.
    ///
    /// The player has to stand in the entrance: the marker pixel must carry the
    /// entrance color. From there the scan walks west, then north, while the
    /// color holds. Walking off the map reads no color, which ends the scan.
    pub fn locate_entrance_anchor(&self, snapshot: &MapSnapshot) -> Option<PixelPos> {
        let marker = snapshot.player_marker()?;
        let grid = &snapshot.grid;
        if !self.palette.is_entrance(grid.color(marker)) {
            log::trace!("Player marker at {:?} is not on the entrance", marker);
            return None;
        }

        let mut anchor = marker;
        while self.palette.is_entrance(grid.color(anchor.offset(-1, 0))) {
            anchor = anchor.offset(-1, 0);
        }
        while self.palette.is_entrance(grid.color(anchor.offset(0, -1))) {
            anchor = anchor.offset(0, -1);
        }

        Some(anchor)
    }

    /// Width of one room on the map, counted along the top edge of the entrance.
    ///
    /// `entrance` is expected to be entrance-colored, as returned by
    /// [`Self::locate_entrance_anchor`]; otherwise the result is 0.
    pub fn measure_room_size(&self, grid: &PixelGrid, entrance: PixelPos) -> i32 {
        let mut size = 0;
        while self.palette.is_entrance(grid.color(entrance.offset(size, 0))) {
            size += 1;
        }
        size
    }

    /// World north-west corner of the entrance, valid only while the player is on it.
    pub fn physical_entrance_anchor(
        &self,
        snapshot: &MapSnapshot,
        player: WorldPos,
    ) -> Option<WorldAnchor> {
        let marker = snapshot.player_marker()?;
        if self.palette.is_entrance(snapshot.grid.color(marker)) {
            Some(world_room_anchor_from_player(player))
        } else {
            None
        }
    }

    /// Locates the entrance on the map and in the world from one frame.
    pub fn capture_entrance(&self, snapshot: &MapSnapshot, player: WorldPos) -> Option<EntranceFix> {
        let pixel = self.locate_entrance_anchor(snapshot)?;
        let world = self.physical_entrance_anchor(snapshot, player)?;
        let room_size = self.measure_room_size(&snapshot.grid, pixel);

        log::debug!(
            "Entrance located at map {:?}, world {:?}, room size {}",
            pixel,
            world,
            room_size
        );
        Some(EntranceFix::new(pixel, world, room_size))
    }

    /// Room type shown at `pos`; `None` if the color is not in the palette
    /// or `pos` is off the map.
    pub fn classify_room(&self, grid: &PixelGrid, pos: PixelPos) -> Option<RoomType> {
        grid.color(pos).and_then(|color| self.palette.classify(color))
    }

    /// Classifies and maps out the room the player is in.
    pub fn resolve_current_room(
        &self,
        snapshot: &MapSnapshot,
        entrance: &EntranceFix,
    ) -> Option<ResolvedRoom> {
        let anchor = current_room_anchor(snapshot, entrance.pixel, entrance.room_size)?;
        let color = snapshot.grid.color(anchor)?;
        let room_type = self.palette.classify(color)?;

        let footprint = flood_fill_footprint(&snapshot.grid, anchor, entrance.room_size, color);
        let world_segments =
            footprint.world_segments(entrance.pixel, entrance.room_size, entrance.world);

        Some(ResolvedRoom {
            anchor,
            room_type,
            footprint,
            world_segments,
        })
    }
}

/// Top left corner, on the map, of the room cell under the player marker.
///
/// The marker is shifted by [`BORDER_SPLIT`] so border pixels count toward the
/// nearest room, then moved onto a grid aligned at the origin by subtracting
/// the entrance phase. Subtracting the remainder snaps it to the cell corner;
/// adding the phase back restores the map position.
pub fn current_room_anchor(
    snapshot: &MapSnapshot,
    entrance: PixelPos,
    room_size: i32,
) -> Option<PixelPos> {
    let cell = room_size + ROOM_GAP;
    let marker = snapshot.player_marker()?;
    let phase = entrance.rem_euclid(cell);

    let aligned = marker.offset(BORDER_SPLIT, BORDER_SPLIT) - phase;
    Some(aligned - aligned.rem_euclid(cell) + phase)
}

#[cfg(test)]
mod tests {
    use super::{EntranceFix, MapGridResolver, current_room_anchor};
    use crate::palette::Palette;
    use crate::types::{
        MapIcon, MapIconKind, MapSnapshot, PixelGrid, PixelPos, RoomType, WorldAnchor, WorldPos,
    };

    const ENTRANCE: u8 = 30;

    fn entrance_square(x: i32, z: i32, size: i32) -> PixelGrid {
        PixelGrid::from_fn(|pos| {
            if pos.x >= x && pos.x < x + size && pos.z >= z && pos.z < z + size {
                ENTRANCE
            } else {
                0
            }
        })
    }

    /// Icon whose decoded pixel is `(px, pz)`.
    fn frame_at(px: i32, pz: i32) -> MapIcon {
        MapIcon::new(MapIconKind::Frame, ((px - 64) * 2) as i8, ((pz - 64) * 2) as i8)
    }

    #[test]
    fn entrance_anchor_is_top_left_of_entrance() {
        let resolver = MapGridResolver::default();
        let snapshot = MapSnapshot::new(entrance_square(0, 0, 20), vec![frame_at(13, 7)]);

        assert_eq!(resolver.locate_entrance_anchor(&snapshot), Some(PixelPos::new(0, 0)));
    }

    #[test]
    fn entrance_anchor_from_doubled_icon_coordinates() {
        let resolver = MapGridResolver::default();
        // Icon (20, 20) decodes to pixel (74, 74).
        let snapshot = MapSnapshot::new(
            entrance_square(60, 64, 20),
            vec![MapIcon::new(MapIconKind::Frame, 20, 20)],
        );

        assert_eq!(resolver.locate_entrance_anchor(&snapshot), Some(PixelPos::new(60, 64)));
    }

    #[test]
    fn entrance_anchor_requires_marker_on_entrance() {
        let resolver = MapGridResolver::default();
        let grid = entrance_square(0, 0, 20);

        let off_entrance = MapSnapshot::new(grid.clone(), vec![frame_at(40, 40)]);
        assert_eq!(resolver.locate_entrance_anchor(&off_entrance), None);

        let no_marker = MapSnapshot::new(grid, vec![MapIcon::new(MapIconKind::Player, 0, 0)]);
        assert_eq!(resolver.locate_entrance_anchor(&no_marker), None);
    }

    #[test]
    fn room_size_counts_entrance_width() {
        let resolver = MapGridResolver::default();
        for size in [1, 10, 16, 18, 20] {
            let grid = entrance_square(5, 5, size);
            assert_eq!(resolver.measure_room_size(&grid, PixelPos::new(5, 5)), size);
        }
    }

    #[test]
    fn room_size_stops_at_map_edge() {
        let resolver = MapGridResolver::default();
        let grid = entrance_square(118, 0, 20);
        assert_eq!(resolver.measure_room_size(&grid, PixelPos::new(118, 0)), 10);
    }

    #[test]
    fn current_room_anchor_snaps_to_cell_with_entrance_phase() {
        let grid = entrance_square(5, 5, 16);
        let entrance = PixelPos::new(5, 5);
        let at = |px, pz| {
            current_room_anchor(&MapSnapshot::new(grid.clone(), vec![frame_at(px, pz)]), entrance, 16)
        };

        assert_eq!(at(12, 12), Some(PixelPos::new(5, 5)));
        assert_eq!(at(30, 12), Some(PixelPos::new(25, 5)));
        assert_eq!(at(40, 60), Some(PixelPos::new(25, 45)));
        // Border pixels split 2/2 between neighbouring rooms.
        assert_eq!(at(42, 5), Some(PixelPos::new(25, 5)));
        assert_eq!(at(43, 5), Some(PixelPos::new(45, 5)));
        // Left of the entrance grid phase.
        assert_eq!(at(3, 3), Some(PixelPos::new(5, 5)));
        assert_eq!(at(2, 2), Some(PixelPos::new(-15, -15)));
    }

    #[test]
    fn current_room_anchor_needs_marker() {
        let snapshot = MapSnapshot::new(entrance_square(5, 5, 16), Vec::new());
        assert_eq!(current_room_anchor(&snapshot, PixelPos::new(5, 5), 16), None);
    }

    #[test]
    fn classify_room_reports_unmapped_and_off_map_as_none() {
        let resolver = MapGridResolver::default();
        let grid = PixelGrid::from_fn(|pos| if pos.x < 64 { 18 } else { 7 });

        assert_eq!(resolver.classify_room(&grid, PixelPos::new(10, 10)), Some(RoomType::Blood));
        assert_eq!(resolver.classify_room(&grid, PixelPos::new(100, 10)), None);
        assert_eq!(resolver.classify_room(&grid, PixelPos::new(-1, 10)), None);
    }

    #[test]
    fn physical_entrance_only_while_on_entrance() {
        let resolver = MapGridResolver::default();
        let grid = entrance_square(0, 0, 20);
        let player = WorldPos::new(-190.0, 70.0, -180.0);

        let on = MapSnapshot::new(grid.clone(), vec![frame_at(10, 10)]);
        assert_eq!(
            resolver.physical_entrance_anchor(&on, player),
            Some(WorldAnchor::new(-200, -200))
        );

        let off = MapSnapshot::new(grid, vec![frame_at(50, 50)]);
        assert_eq!(resolver.physical_entrance_anchor(&off, player), None);
    }

    #[test]
    fn capture_entrance_combines_map_and_world() {
        let resolver = MapGridResolver::default();
        let snapshot = MapSnapshot::new(entrance_square(22, 2, 18), vec![frame_at(30, 10)]);
        let player = WorldPos::new(10.2, 70.0, -20.9);

        assert_eq!(
            resolver.capture_entrance(&snapshot, player),
            Some(EntranceFix::new(PixelPos::new(22, 2), WorldAnchor::new(-8, -40), 18))
        );
    }

    #[test]
    fn custom_palette_changes_entrance_color() {
        let palette = Palette::new([(12, RoomType::Entrance), (30, RoomType::Room)]).unwrap();
        let resolver = MapGridResolver::new(palette);
        let snapshot = MapSnapshot::new(entrance_square(0, 0, 20), vec![frame_at(5, 5)]);

        // Color 30 is an ordinary room under this palette.
        assert_eq!(resolver.locate_entrance_anchor(&snapshot), None);
        assert_eq!(
            resolver.classify_room(&snapshot.grid, PixelPos::new(5, 5)),
            Some(RoomType::Room)
        );
    }

    #[test]
    fn entrance_fix_converts_batches() {
        let fix = EntranceFix::new(PixelPos::new(5, 5), WorldAnchor::new(-200, -200), 16);
        let pixels = [PixelPos::new(5, 5), PixelPos::new(25, 45), PixelPos::new(105, 5)];

        assert_eq!(
            fix.world_from_pixels(&pixels),
            vec![
                WorldAnchor::new(-200, -200),
                WorldAnchor::new(-168, -136),
                WorldAnchor::new(-40, -200),
            ]
        );
        for pixel in pixels {
            assert_eq!(fix.pixel_from_world(fix.world_from_pixel(pixel)), pixel);
        }
    }
}
