// Character system
//
// - Player kinematics, jumping and frame selection
// - Motion state and facing, derived every tick
// - Animation sets, the (state, facing) lookup table and the frame cursor

pub mod animation;
pub mod player;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationSet, AnimationTable, FrameCursor};
pub use player::{KinematicState, Player};
pub use state::{AnimationState, Facing, MotionState};
