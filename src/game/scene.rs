// Host scene: owns every sprite, routes input and keeps draw order

use super::characters::Player;
use super::library::FrameLibrary;
use super::props::{Fire, PropKind, StaticProp};
use super::settings::{PlayerTuning, WorldSettings};
use super::sprite::{DrawLayer, Sprite, TickContext};
use crate::engine::assets::{Frame, Spritesheet};
use crate::engine::geometry::Rect;
use crate::engine::input::{Action, PlayerInput};
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Handle to a sprite registered in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Player,
    Prop(usize),
}

/// One entry of the back-to-front draw list
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub image: &'a Frame,
    pub rect: Rect,
    pub layer: DrawLayer,
}

/// The player plus every prop, bucketed by draw layer
pub struct Scene {
    library: Arc<FrameLibrary>,
    world: WorldSettings,
    player: Player,
    props: Vec<Box<dyn Sprite>>,
    /// Insertion-ordered keys per layer
    layers: BTreeMap<DrawLayer, Vec<SpriteKey>>,
    platforms: Vec<usize>,
    lights: Vec<usize>,
}

impl Scene {
    /// Cut every frame from `sheet` and place the player at its spawn point
    pub fn new(sheet: &Spritesheet, tuning: PlayerTuning, world: WorldSettings) -> Result<Self> {
        let library = FrameLibrary::build(sheet, &tuning).context("Failed to build frame library")?;
        Ok(Self::from_library(Arc::new(library), tuning, world))
    }

    pub fn from_library(
        library: Arc<FrameLibrary>,
        tuning: PlayerTuning,
        world: WorldSettings,
    ) -> Self {
        let player = Player::new(library.player.clone(), tuning, world);

        let mut layers = BTreeMap::new();
        layers.insert(player.layer(), vec![SpriteKey::Player]);

        info!(
            "Scene created ({}x{}), player at {:?}",
            world.width,
            world.height,
            player.position()
        );

        Self {
            library,
            world,
            player,
            props: Vec::new(),
            layers,
            platforms: Vec::new(),
            lights: Vec::new(),
        }
    }

    fn register(&mut self, sprite: Box<dyn Sprite>) -> usize {
        let index = self.props.len();
        self.layers
            .entry(sprite.layer())
            .or_default()
            .push(SpriteKey::Prop(index));
        self.props.push(sprite);
        index
    }

    fn spawn_static(&mut self, kind: PropKind, x: i32, y: i32) -> SpriteKey {
        let prop = StaticProp::new(kind, &self.library, x, y);
        let index = self.register(Box::new(prop));
        if kind.is_platform() {
            self.platforms.push(index);
        }
        debug!("Spawned {:?} at ({}, {})", kind, x, y);
        SpriteKey::Prop(index)
    }

    pub fn spawn_ground(&mut self, x: i32, y: i32) -> SpriteKey {
        self.spawn_static(PropKind::Ground, x, y)
    }

    pub fn spawn_urn(&mut self, x: i32, y: i32) -> SpriteKey {
        self.spawn_static(PropKind::Urn, x, y)
    }

    pub fn spawn_lamp(&mut self, x: i32, y: i32) -> SpriteKey {
        self.spawn_static(PropKind::Lamp, x, y)
    }

    pub fn spawn_fire(&mut self, x: i32, y: i32) -> SpriteKey {
        let fire = Fire::new(self.library.fire.clone(), x, y);
        let index = self.register(Box::new(fire));
        self.lights.push(index);
        debug!("Spawned fire at ({}, {})", x, y);
        SpriteKey::Prop(index)
    }

    /// Run one tick
    ///
    /// Jump edges are handled first, then every sprite updates in draw-layer
    /// order, then the player is snapped onto any platform it fell into.
    pub fn update(&mut self, input: &PlayerInput, now: u64) {
        let feet_before = Sprite::rect(&self.player).bottom();

        if input.just_pressed(Action::Jump) {
            let platforms = self.platforms();
            self.player.jump(&platforms);
        }
        if input.just_released(Action::Jump) {
            self.player.jump_cut();
        }

        let ctx = TickContext { input, now };
        for keys in self.layers.values() {
            for key in keys {
                match *key {
                    SpriteKey::Player => Sprite::update(&mut self.player, &ctx),
                    SpriteKey::Prop(index) => self.props[index].update(&ctx),
                }
            }
        }

        self.resolve_landing(feet_before);
    }

    /// Land a falling player on the highest platform whose top its feet crossed
    ///
    /// Only platforms the feet were at or above before this tick count, so
    /// rising through a platform or brushing one from the side never lands.
    fn resolve_landing(&mut self, feet_before: i32) {
        if self.player.velocity().y <= 0.0 {
            return;
        }

        let player_rect = Sprite::rect(&self.player);
        let highest = self
            .platforms
            .iter()
            .map(|&index| self.props[index].rect())
            .filter(|platform| player_rect.collides(platform))
            .filter(|platform| feet_before <= platform.top())
            .min_by_key(|platform| platform.top());

        if let Some(platform) = highest {
            self.player.land_on(platform.top() as f32);
        }
    }

    /// Every sprite's image and rectangle, back to front
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        self.layers
            .iter()
            .flat_map(|(&layer, keys)| {
                keys.iter().map(move |key| {
                    let sprite = self.sprite(*key);
                    DrawItem {
                        image: sprite.image(),
                        rect: sprite.rect(),
                        layer,
                    }
                })
            })
            .collect()
    }

    pub fn sprite(&self, key: SpriteKey) -> &dyn Sprite {
        match key {
            SpriteKey::Player => &self.player,
            SpriteKey::Prop(index) => self.props[index].as_ref(),
        }
    }

    /// Rectangles the player can stand on
    pub fn platforms(&self) -> Vec<Rect> {
        self.platforms
            .iter()
            .map(|&index| self.props[index].rect())
            .collect()
    }

    /// Rectangles of registered light sources
    pub fn lights(&self) -> Vec<Rect> {
        self.lights
            .iter()
            .map(|&index| self.props[index].rect())
            .collect()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn world(&self) -> WorldSettings {
        self.world
    }

    /// Number of sprites including the player
    pub fn sprite_count(&self) -> usize {
        self.props.len() + 1
    }
}
