// Named pixel regions within a sprite sheet

/// A rectangle within a sprite sheet, in source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    /// Name of the frame, used in logs and errors
    pub name: &'static str,

    /// Position in the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,
}

impl FrameRegion {
    pub const fn new(name: &'static str, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            name,
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region is non-empty and lies entirely inside a sheet of the given size
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);

        self.width > 0
            && self.height > 0
            && matches!(right, Some(r) if r <= sheet_width)
            && matches!(bottom, Some(b) if b <= sheet_height)
    }
}
