// Pixel layout of the game sprite sheet
//
// Every rectangle here is a contract with the art: replacing the sheet must
// keep the exact geometry.

use crate::engine::assets::{FrameRegion, Transparency};

/// Side length of a character or prop cell
pub const CELL: u32 = 48;

/// The sheet's background colour is keyed out
pub const SHEET_TRANSPARENCY: Transparency = Transparency::BLACK_KEY;

const fn cell(name: &'static str, col: u32, row: u32) -> FrameRegion {
    FrameRegion::new(name, col * CELL, row * CELL, CELL, CELL)
}

/// Standing loop, facing left
pub const STAND: [FrameRegion; 4] = [
    cell("stand_0", 0, 0),
    cell("stand_1", 1, 0),
    cell("stand_2", 2, 0),
    cell("stand_3", 3, 0),
];

/// Walking loop, facing left
pub const WALK: [FrameRegion; 4] = [
    cell("walk_0", 0, 1),
    cell("walk_1", 1, 1),
    cell("walk_2", 2, 1),
    cell("walk_3", 3, 1),
];

/// Jump poses, facing left: the first is shown while rising, the last while falling
pub const JUMP: [FrameRegion; 5] = [
    cell("jump_0", 0, 2),
    cell("jump_1", 1, 2),
    cell("jump_2", 2, 2),
    cell("jump_3", 3, 2),
    cell("jump_4", 0, 3),
];

pub const FIRE: [FrameRegion; 4] = [
    cell("fire_0", 0, 4),
    cell("fire_1", 1, 4),
    cell("fire_2", 2, 4),
    cell("fire_3", 3, 4),
];

pub const URN: FrameRegion = FrameRegion::new("urn", 96, 240, CELL, CELL);
pub const LAMP: FrameRegion = FrameRegion::new("lamp", 144, 240, CELL, CELL);
pub const GROUND: FrameRegion = FrameRegion::new("ground", 0, 264, 96, 24);

/// Smallest sheet that holds every region above
pub const MIN_SHEET_WIDTH: u32 = 4 * CELL;
pub const MIN_SHEET_HEIGHT: u32 = 288;

#[cfg(test)]
mod tests {
    use super::*;

    fn all_regions() -> Vec<FrameRegion> {
        let mut regions = Vec::new();
        regions.extend_from_slice(&STAND);
        regions.extend_from_slice(&WALK);
        regions.extend_from_slice(&JUMP);
        regions.extend_from_slice(&FIRE);
        regions.extend([URN, LAMP, GROUND]);
        regions
    }

    #[test]
    fn test_known_offsets() {
        assert_eq!((WALK[2].x, WALK[2].y), (96, 48));
        assert_eq!((JUMP[4].x, JUMP[4].y), (0, 144));
        assert_eq!((FIRE[3].x, FIRE[3].y), (144, 192));
    }

    #[test]
    fn test_every_region_fits_minimum_sheet() {
        for region in all_regions() {
            assert!(
                region.fits_within(MIN_SHEET_WIDTH, MIN_SHEET_HEIGHT),
                "{} does not fit",
                region.name
            );
        }
    }

    #[test]
    fn test_region_names_unique() {
        let mut names = std::collections::HashSet::new();
        for region in all_regions() {
            assert!(names.insert(region.name), "duplicate name {}", region.name);
        }
    }
}
