// Immovable sprites with a single fixed frame

use crate::engine::assets::Frame;
use crate::engine::geometry::Rect;
use crate::game::library::FrameLibrary;
use crate::game::sprite::{DrawLayer, Sprite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Ground,
    Urn,
    Lamp,
}

impl PropKind {
    pub fn layer(&self) -> DrawLayer {
        match self {
            PropKind::Ground => DrawLayer::Ground,
            PropKind::Urn | PropKind::Lamp => DrawLayer::Props,
        }
    }

    /// Whether the player can stand on it
    pub fn is_platform(&self) -> bool {
        match self {
            PropKind::Ground | PropKind::Urn | PropKind::Lamp => true,
        }
    }

    fn frame<'a>(&self, library: &'a FrameLibrary) -> &'a Frame {
        match self {
            PropKind::Ground => &library.ground,
            PropKind::Urn => &library.urn,
            PropKind::Lamp => &library.lamp,
        }
    }
}

/// A ground tile, urn or lamp placed by its top-left corner
#[derive(Debug, Clone)]
pub struct StaticProp {
    kind: PropKind,
    frame: Frame,
    rect: Rect,
}

impl StaticProp {
    pub fn new(kind: PropKind, library: &FrameLibrary, x: i32, y: i32) -> Self {
        let frame = kind.frame(library).clone();
        let mut rect = frame.rect();
        rect.set_topleft(x, y);
        Self { kind, frame, rect }
    }

    pub fn ground(library: &FrameLibrary, x: i32, y: i32) -> Self {
        Self::new(PropKind::Ground, library, x, y)
    }

    pub fn urn(library: &FrameLibrary, x: i32, y: i32) -> Self {
        Self::new(PropKind::Urn, library, x, y)
    }

    pub fn lamp(library: &FrameLibrary, x: i32, y: i32) -> Self {
        Self::new(PropKind::Lamp, library, x, y)
    }

    pub fn kind(&self) -> PropKind {
        self.kind
    }
}

impl Sprite for StaticProp {
    fn image(&self) -> &Frame {
        &self.frame
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn layer(&self) -> DrawLayer {
        self.kind.layer()
    }
}
