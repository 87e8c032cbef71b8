// Display-ready sprite frames

use crate::engine::geometry::Rect;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// One extracted, display-ready sub-image of a sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Rectangle of this frame's size anchored at the origin
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Nearest-neighbour rescale to a fixed display size
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if self.image.dimensions() == (width, height) {
            return self.clone();
        }
        Self::from_image(imageops::resize(
            &self.image,
            width,
            height,
            FilterType::Nearest,
        ))
    }

    /// Mirror image, used to build right-facing frames from left-facing art
    pub fn flipped_horizontal(&self) -> Self {
        Self::from_image(imageops::flip_horizontal(&self.image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone() -> Frame {
        // left column red, right column blue
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        Frame::from_image(image)
    }

    #[test]
    fn test_scaled_replicates_pixels() {
        let frame = two_tone().scaled(6, 3);
        assert_eq!(frame.width(), 6);
        assert_eq!(frame.height(), 3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), Rgba([255, 0, 0, 255]));
                assert_eq!(frame.pixel(x + 3, y), Rgba([0, 0, 255, 255]));
            }
        }
    }

    #[test]
    fn test_scaled_same_size_is_identity() {
        let frame = two_tone();
        assert_eq!(frame.scaled(2, 1), frame);
    }

    #[test]
    fn test_flipped_horizontal() {
        let flipped = two_tone().flipped_horizontal();
        assert_eq!(flipped.pixel(0, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(flipped.pixel(1, 0), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_rect_matches_size() {
        let frame = two_tone().scaled(144, 72);
        assert_eq!(frame.rect(), Rect::new(0, 0, 144, 72));
    }
}
