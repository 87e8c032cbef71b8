// Game content: the player, props, their frames and the scene that hosts them

pub mod characters;
pub mod layout;
pub mod library;
pub mod props;
pub mod scene;
pub mod settings;
pub mod sprite;

pub use library::FrameLibrary;
pub use scene::{DrawItem, Scene, SpriteKey};
pub use sprite::{DrawLayer, Sprite, TickContext};
