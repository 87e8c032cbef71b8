// Integer rectangles for sprite placement and collision

use glam::{IVec2, Vec2};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at the origin
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn midbottom(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.bottom())
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Move so the top-left corner sits at `(x, y)`
    pub fn set_topleft(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Anchor the bottom-center at a sub-pixel world position
    ///
    /// Coordinates are truncated toward zero, matching how integer sprite
    /// rectangles follow float positions.
    pub fn set_midbottom(&mut self, pos: Vec2) {
        let anchor = IVec2::new(pos.x as i32, pos.y as i32);
        self.x = anchor.x - self.width / 2;
        self.y = anchor.y - self.height;
    }

    /// Same rectangle translated by `(dx, dy)`
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Resize in place, keeping the bottom-center anchor
    pub fn resize_anchored_bottom(&mut self, width: i32, height: i32) {
        let anchor = self.midbottom();
        self.width = width;
        self.height = height;
        self.x = anchor.x - width / 2;
        self.y = anchor.y - height;
    }

    /// Whether the two rectangles share a region of positive area
    ///
    /// Rectangles that only touch along an edge do not collide.
    pub fn collides(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
