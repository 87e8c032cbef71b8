// Sprite animation: frame sets, the (state, facing) lookup table and the frame cursor

use super::state::{AnimationState, Facing, MotionState};
use crate::core::math::elapsed_ms;
use crate::engine::assets::{AssetError, Frame};

/// An ordered, non-empty sequence of frames for one action and direction
#[derive(Debug, Clone)]
pub struct AnimationSet {
    name: &'static str,
    frames: Vec<Frame>,
}

impl AnimationSet {
    pub fn new(name: &'static str, frames: Vec<Frame>) -> Result<Self, AssetError> {
        if frames.is_empty() {
            return Err(AssetError::EmptyAnimation(name));
        }
        Ok(Self { name, frames })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, wrapping past the end
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index % self.frames.len()]
    }

    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Horizontally mirrored copy of every frame
    pub fn mirrored(&self, name: &'static str) -> Self {
        Self {
            name,
            frames: self.frames.iter().map(Frame::flipped_horizontal).collect(),
        }
    }
}

/// Lookup from (motion, facing) to the frames to show
///
/// Total over every key, so selection never fails.
#[derive(Debug, Clone)]
pub struct AnimationTable {
    sets: [[AnimationSet; 2]; 3],
}

impl AnimationTable {
    /// Build from left-facing art, mirroring each set for the right-facing entries
    pub fn from_left_facing(
        stand: AnimationSet,
        walk: AnimationSet,
        jump: AnimationSet,
    ) -> Self {
        let right = |motion| AnimationState::new(motion, Facing::Right).animation_name();
        let stand_right = stand.mirrored(right(MotionState::Standing));
        let walk_right = walk.mirrored(right(MotionState::Walking));
        let jump_right = jump.mirrored(right(MotionState::Jumping));

        Self {
            sets: [
                [stand, stand_right],
                [walk, walk_right],
                [jump, jump_right],
            ],
        }
    }

    pub fn get(&self, motion: MotionState, facing: Facing) -> &AnimationSet {
        &self.sets[motion.index()][facing.index()]
    }

    pub fn for_state(&self, state: AnimationState) -> &AnimationSet {
        self.get(state.motion, state.facing)
    }
}

/// Current frame index plus the time it was last advanced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCursor {
    index: usize,
    last_update: u64,
}

impl FrameCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_update(&self) -> u64 {
        self.last_update
    }

    /// Step to the next frame if more than `cadence_ms` passed since the last step
    ///
    /// Wraps modulo `len`. Returns whether the cursor moved.
    pub fn advance(&mut self, now: u64, cadence_ms: u64, len: usize) -> bool {
        debug_assert!(len > 0, "animation sets are never empty");
        if elapsed_ms(now, self.last_update) <= cadence_ms {
            return false;
        }

        self.last_update = now;
        self.index = (self.index + 1) % len;
        true
    }

    /// Jump straight to a frame without touching the cadence timer
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}
