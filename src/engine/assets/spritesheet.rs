// Sprite sheet loading and frame extraction

use super::{AssetError, AssetLoader, AssetType, Frame, FrameRegion};
use image::{imageops, Rgb, Rgba, RgbaImage};
use log::{debug, info, warn};
use std::path::Path;

/// How transparent pixels are recognised in a sheet
///
/// Chosen once per asset, never per extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// The sheet carries per-pixel alpha; pixels are copied untouched
    Alpha,
    /// Per-pixel alpha is kept and every pixel of this colour becomes fully transparent
    ColorKey(Rgb<u8>),
}

impl Transparency {
    pub const BLACK_KEY: Self = Self::ColorKey(Rgb([0, 0, 0]));
    pub const WHITE_KEY: Self = Self::ColorKey(Rgb([255, 255, 255]));

    fn apply(&self, image: &mut RgbaImage) {
        let Transparency::ColorKey(key) = *self else {
            return;
        };

        for pixel in image.pixels_mut() {
            let Rgba([r, g, b, _]) = *pixel;
            if Rgb([r, g, b]) == key {
                *pixel = Rgba([r, g, b, 0]);
            }
        }
    }
}

/// A decoded bitmap that frames are cut from
///
/// Read-only after load and shared by every sprite built from it.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    image: RgbaImage,
    transparency: Transparency,
}

impl Spritesheet {
    /// Load and decode a sheet from disk
    pub fn load<P: AsRef<Path>>(path: P, transparency: Transparency) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !AssetLoader::is_supported(AssetType::Texture, path) {
            warn!("Unexpected sprite sheet extension: {}", path.display());
        }
        let bytes = AssetLoader::read_path(path)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        let sheet = Self::from_image(image.to_rgba8(), transparency);
        info!(
            "Loaded sprite sheet {} ({}x{})",
            path.display(),
            sheet.width(),
            sheet.height()
        );
        Ok(sheet)
    }

    /// Wrap an already-decoded image
    pub fn from_image(image: RgbaImage, transparency: Transparency) -> Self {
        Self {
            image,
            transparency,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn transparency(&self) -> Transparency {
        self.transparency
    }

    /// Copy a region out of the sheet at its native size
    pub fn extract(&self, region: &FrameRegion) -> Result<Frame, AssetError> {
        if !region.fits_within(self.width(), self.height()) {
            return Err(AssetError::OutOfBounds {
                name: region.name,
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                sheet_width: self.width(),
                sheet_height: self.height(),
            });
        }

        let mut image =
            imageops::crop_imm(&self.image, region.x, region.y, region.width, region.height)
                .to_image();
        self.transparency.apply(&mut image);

        debug!(
            "Extracted frame {} at ({}, {}) {}x{}",
            region.name, region.x, region.y, region.width, region.height
        );
        Ok(Frame::from_image(image))
    }

    /// Copy a region and rescale it to the given display size
    pub fn extract_scaled(
        &self,
        region: &FrameRegion,
        width: u32,
        height: u32,
    ) -> Result<Frame, AssetError> {
        Ok(self.extract(region)?.scaled(width, height))
    }

    /// Extract several regions at the same display size, in order
    pub fn extract_all(
        &self,
        regions: &[FrameRegion],
        width: u32,
        height: u32,
    ) -> Result<Vec<Frame>, AssetError> {
        regions
            .iter()
            .map(|region| self.extract_scaled(region, width, height))
            .collect()
    }
}
