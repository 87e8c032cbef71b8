// Lamplight: sprite loading, animation selection and platformer kinematics
//
// - `core`: small math helpers shared by the engine and game layers
// - `engine`: assets (sprite sheets, frames), geometry, input and timing
// - `game`: the player, scenery props, fire and the host scene

pub mod core;
pub mod engine;
pub mod game;

pub use engine::assets::{AssetError, Frame, FrameRegion, Spritesheet, Transparency};
pub use engine::geometry::Rect;
pub use game::scene::Scene;
