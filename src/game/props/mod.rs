// Scenery: static platforms and decorations, plus animated fire

pub mod fire;
pub mod scenery;

pub use fire::Fire;
pub use scenery::{PropKind, StaticProp};
