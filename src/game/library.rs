// Every frame the game uses, cut from the sheet once at startup

use super::characters::animation::{AnimationSet, AnimationTable};
use super::characters::state::{AnimationState, Facing, MotionState};
use super::layout;
use super::settings::{props, PlayerTuning};
use crate::engine::assets::{AssetError, Frame, Spritesheet};
use log::info;
use std::sync::Arc;

/// Display-ready frames shared by all sprites
///
/// Built once, then only read.
#[derive(Debug)]
pub struct FrameLibrary {
    pub player: Arc<AnimationTable>,
    pub fire: Arc<AnimationSet>,
    pub ground: Frame,
    pub urn: Frame,
    pub lamp: Frame,
}

impl FrameLibrary {
    pub fn build(sheet: &Spritesheet, tuning: &PlayerTuning) -> Result<Self, AssetError> {
        let size = tuning.frame_size;

        let left = |motion| AnimationState::new(motion, Facing::Left).animation_name();

        let stand = AnimationSet::new(
            left(MotionState::Standing),
            sheet.extract_all(&layout::STAND, size, size)?,
        )?;
        let walk = AnimationSet::new(
            left(MotionState::Walking),
            sheet.extract_all(&layout::WALK, size, size)?,
        )?;
        let jump = AnimationSet::new(
            left(MotionState::Jumping),
            sheet.extract_all(&layout::JUMP, size, size)?,
        )?;
        let player = AnimationTable::from_left_facing(stand, walk, jump);

        let fire = AnimationSet::new(
            "fire",
            sheet.extract_all(&layout::FIRE, props::PROP_SIZE, props::PROP_SIZE)?,
        )?;

        let ground =
            sheet.extract_scaled(&layout::GROUND, props::GROUND_WIDTH, props::GROUND_HEIGHT)?;
        let urn = sheet.extract_scaled(&layout::URN, props::PROP_SIZE, props::PROP_SIZE)?;
        let lamp = sheet.extract_scaled(&layout::LAMP, props::PROP_SIZE, props::PROP_SIZE)?;

        info!(
            "Built frame library from {}x{} sheet",
            sheet.width(),
            sheet.height()
        );

        Ok(Self {
            player: Arc::new(player),
            fire: Arc::new(fire),
            ground,
            urn,
            lamp,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::assets::Transparency;
    use image::{Rgba, RgbaImage};

    /// A sheet of the minimum layout size where every pixel encodes its cell
    pub(crate) fn test_sheet() -> Spritesheet {
        let image = RgbaImage::from_fn(layout::MIN_SHEET_WIDTH, layout::MIN_SHEET_HEIGHT, |x, y| {
            Rgba([(x / layout::CELL) as u8 + 1, (y / layout::CELL) as u8 + 1, 0, 255])
        });
        Spritesheet::from_image(image, layout::SHEET_TRANSPARENCY)
    }

    pub(crate) fn test_library() -> Arc<FrameLibrary> {
        Arc::new(FrameLibrary::build(&test_sheet(), &PlayerTuning::default()).unwrap())
    }

    #[test]
    fn test_library_sizes() {
        let library = test_library();
        let tuning = PlayerTuning::default();

        for set in [
            library.player.get(Default::default(), Default::default()),
            library.fire.as_ref(),
        ] {
            assert_eq!(set.frame(0).width(), tuning.frame_size);
        }
        assert_eq!(library.fire.len(), 4);
        assert_eq!(
            (library.ground.width(), library.ground.height()),
            (props::GROUND_WIDTH, props::GROUND_HEIGHT)
        );
        assert_eq!(library.urn.height(), props::PROP_SIZE);
    }

    #[test]
    fn test_library_frames_come_from_their_cells() {
        let library = test_library();
        // walk_2 lives in column 2, row 1
        let walk = library.player.get(MotionState::Walking, Facing::Left);
        assert_eq!(walk.name(), "walk_left");
        assert_eq!(walk.frame(2).pixel(0, 0), Rgba([3, 2, 0, 255]));
        // the falling pose is the fifth jump frame at (0, 144)
        let jump = library.player.get(MotionState::Jumping, Facing::Left);
        assert_eq!(jump.frame(4).pixel(10, 10), Rgba([1, 4, 0, 255]));
        // lamp at (144, 240)
        assert_eq!(library.lamp.pixel(0, 0), Rgba([4, 6, 0, 255]));
    }

    #[test]
    fn test_library_rejects_small_sheet() {
        let sheet = Spritesheet::from_image(RgbaImage::new(96, 96), Transparency::Alpha);
        let err = FrameLibrary::build(&sheet, &PlayerTuning::default()).unwrap_err();
        assert!(matches!(err, AssetError::OutOfBounds { .. }));
    }
}
