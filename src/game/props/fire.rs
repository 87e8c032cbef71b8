// Looping fire animation

use crate::engine::assets::Frame;
use crate::engine::geometry::Rect;
use crate::game::characters::animation::{AnimationSet, FrameCursor};
use crate::game::settings::props::FIRE_CADENCE_MS;
use crate::game::sprite::{DrawLayer, Sprite, TickContext};
use std::sync::Arc;

/// Decorative fire: cycles its frames forever, registered as a light source
#[derive(Debug)]
pub struct Fire {
    frames: Arc<AnimationSet>,
    cursor: FrameCursor,
    rect: Rect,
}

impl Fire {
    pub fn new(frames: Arc<AnimationSet>, x: i32, y: i32) -> Self {
        let mut rect = frames.frame(0).rect();
        rect.set_topleft(x, y);
        Self {
            frames,
            cursor: FrameCursor::new(),
            rect,
        }
    }

    pub fn animate(&mut self, now: u64) {
        self.cursor.advance(now, FIRE_CADENCE_MS, self.frames.len());
    }

    pub fn frame_index(&self) -> usize {
        self.cursor.index()
    }
}

impl Sprite for Fire {
    fn update(&mut self, ctx: &TickContext<'_>) {
        self.animate(ctx.now);
    }

    fn image(&self) -> &Frame {
        self.frames.frame(self.cursor.index())
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn layer(&self) -> DrawLayer {
        DrawLayer::Fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::library::tests::test_library;

    #[test]
    fn test_fire_loops_on_cadence() {
        let library = test_library();
        let mut fire = Fire::new(library.fire.clone(), 100, 200);
        assert_eq!(fire.rect(), Rect::new(100, 200, 144, 144));

        let mut seen = Vec::new();
        let mut now = 0;
        for _ in 0..100 {
            now += 16;
            fire.animate(now);
            if seen.last() != Some(&fire.frame_index()) {
                seen.push(fire.frame_index());
            }
        }
        // 1.6s at one step per 128ms (first tick past 120ms)
        assert_eq!(&seen[..6], &[0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_fire_image_tracks_cursor() {
        let library = test_library();
        let mut fire = Fire::new(library.fire.clone(), 0, 0);
        assert_eq!(fire.image(), library.fire.frame(0));

        fire.animate(121);
        assert_eq!(fire.image(), library.fire.frame(1));
        assert_eq!(fire.rect().size(), glam::IVec2::new(144, 144));
    }
}
