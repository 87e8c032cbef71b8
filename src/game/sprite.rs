// Capability shared by everything the scene updates and draws

use crate::engine::assets::Frame;
use crate::engine::geometry::Rect;
use crate::engine::input::PlayerInput;

/// Back-to-front render order; earlier variants are drawn first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Ground,
    Props,
    Fire,
    Player,
}

impl DrawLayer {
    pub const ALL: [DrawLayer; 4] = [Self::Ground, Self::Props, Self::Fire, Self::Player];
}

/// Everything a sprite may read during one tick
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub input: &'a PlayerInput,
    /// Game clock in milliseconds
    pub now: u64,
}

/// A sprite that can be updated once per tick and drawn at its rectangle
pub trait Sprite {
    /// Advance one tick. Static sprites keep the default no-op.
    fn update(&mut self, _ctx: &TickContext<'_>) {}

    /// Image to draw this frame
    fn image(&self) -> &Frame;

    /// Where to draw it, in screen pixels
    fn rect(&self) -> Rect;

    fn layer(&self) -> DrawLayer;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        assert!(DrawLayer::Ground < DrawLayer::Props);
        assert!(DrawLayer::Props < DrawLayer::Fire);
        assert!(DrawLayer::Fire < DrawLayer::Player);

        let mut sorted = DrawLayer::ALL;
        sorted.sort();
        assert_eq!(sorted, DrawLayer::ALL);
    }
}
