// Asset loading
//
// Locates sprite sheet files on disk, decodes them and cuts them into
// display-ready frames.

mod frame;
mod loader;
mod region;
mod spritesheet;

pub use frame::Frame;
pub use loader::{AssetLoader, AssetType};
pub use region::FrameRegion;
pub use spritesheet::{Spritesheet, Transparency};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Region {name} ({x}, {y}, {width}x{height}) lies outside the {sheet_width}x{sheet_height} sheet"
    )]
    OutOfBounds {
        name: &'static str,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Animation {0} has no frames")]
    EmptyAnimation(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
