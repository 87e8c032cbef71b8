// The player character: kinematics, jumping and animation selection

use super::animation::{AnimationTable, FrameCursor};
use super::state::{AnimationState, Facing, MotionState};
use crate::core::math::{clamp, deadband};
use crate::engine::assets::Frame;
use crate::engine::geometry::Rect;
use crate::engine::input::{Action, PlayerInput};
use crate::game::settings::{PlayerTuning, WorldSettings};
use crate::game::sprite::{DrawLayer, Sprite, TickContext};
use glam::Vec2;
use log::{debug, trace};
use std::sync::Arc;

/// Position, velocity and acceleration in screen pixels per tick
///
/// `pos` is the bottom-center of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
}

impl KinematicState {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }
}

/// The player-controlled character
#[derive(Debug)]
pub struct Player {
    kinematics: KinematicState,
    state: AnimationState,
    /// Sticky until a landing clears it
    jumping: bool,
    cursor: FrameCursor,
    /// Animation and frame currently on screen; lags `state` until the cursor advances
    shown: (AnimationState, usize),
    rect: Rect,
    frames: Arc<AnimationTable>,
    tuning: PlayerTuning,
    world: WorldSettings,
}

impl Player {
    pub fn new(frames: Arc<AnimationTable>, tuning: PlayerTuning, world: WorldSettings) -> Self {
        let state = AnimationState::default();
        let kinematics = KinematicState::at(Vec2::new(tuning.spawn_x, tuning.spawn_y));

        let mut rect = frames.for_state(state).frame(0).rect();
        rect.set_midbottom(kinematics.pos);

        Self {
            kinematics,
            state,
            jumping: false,
            cursor: FrameCursor::new(),
            shown: (state, 0),
            rect,
            frames,
            tuning,
            world,
        }
    }

    /// One tick: pick the frame to show, then integrate movement from the held input
    pub fn update(&mut self, input: &PlayerInput, now: u64) {
        self.animate(now);

        let tuning = self.tuning;
        let mut acc = Vec2::new(0.0, tuning.gravity);

        if input.is_pressed(Action::MoveLeft) {
            self.state.facing = Facing::Left;
            acc.x = -tuning.acceleration;
        }
        if input.is_pressed(Action::MoveRight) {
            self.state.facing = Facing::Right;
            acc.x = tuning.acceleration;
        }

        let k = &mut self.kinematics;
        acc.x += k.vel.x * tuning.friction;
        k.acc = acc;
        k.vel += acc;
        k.vel.x = deadband(k.vel.x, tuning.deadband);
        k.pos += k.vel + 0.5 * acc;
        k.pos.x = clamp(k.pos.x, 0.0, self.world.width);

        self.rect.set_midbottom(k.pos);
    }

    /// Start a jump if standing on one of `platforms` and not already airborne
    ///
    /// The rect is probed one pixel lower so resting exactly on a platform
    /// top counts as standing on it. Returns whether the jump started.
    pub fn jump(&mut self, platforms: &[Rect]) -> bool {
        if self.jumping {
            return false;
        }

        let probe = self.rect.moved(0, 1);
        if !platforms.iter().any(|platform| probe.collides(platform)) {
            return false;
        }

        self.jumping = true;
        self.kinematics.vel.y = -self.tuning.jump_velocity;
        debug!("Jump from y={:.1}", self.kinematics.pos.y);
        true
    }

    /// Cap upward speed when the jump input is released early
    pub fn jump_cut(&mut self) {
        let cap = -self.tuning.jump_cut_velocity;
        if self.jumping && self.kinematics.vel.y < cap {
            self.kinematics.vel.y = cap;
        }
    }

    /// Rest on a surface whose top edge is at `top`; ends any jump
    pub fn land_on(&mut self, top: f32) {
        if self.jumping {
            debug!("Landed at y={:.1}", top);
        }
        self.jumping = false;
        self.kinematics.pos.y = top;
        self.kinematics.vel.y = 0.0;
        self.rect.set_midbottom(self.kinematics.pos);
    }

    /// Derive the animation state and swap the displayed frame when due
    ///
    /// Standing and jumping frames face the last input direction. Walking
    /// frames face the way the player is actually moving.
    pub fn animate(&mut self, now: u64) {
        let vel = self.kinematics.vel;
        let motion = MotionState::derive(self.jumping, vel.x);
        self.state.motion = motion;

        let selected = match motion {
            MotionState::Walking => AnimationState::new(
                motion,
                Facing::from_velocity(vel.x).unwrap_or(self.state.facing),
            ),
            MotionState::Standing | MotionState::Jumping => self.state,
        };
        let set = self.frames.for_state(selected);
        match motion {
            MotionState::Walking | MotionState::Standing => {
                let cadence = if motion == MotionState::Walking {
                    self.tuning.walk_cadence_ms
                } else {
                    self.tuning.stand_cadence_ms
                };
                if self.cursor.advance(now, cadence, set.len()) {
                    trace!("{} frame {}", set.name(), self.cursor.index());
                    self.show(selected, self.cursor.index());
                }
            }
            MotionState::Jumping => {
                let index = if vel.y < 0.0 { 0 } else { set.last_index() };
                self.cursor.set_index(index);
                self.show(selected, index);
            }
        }
    }

    fn show(&mut self, state: AnimationState, index: usize) {
        self.shown = (state, index);
        let frame = self.frames.for_state(state).frame(index);
        self.rect
            .resize_anchored_bottom(frame.width() as i32, frame.height() as i32);
    }

    pub fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.kinematics.vel
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frame_index(&self) -> usize {
        self.cursor.index()
    }

    /// Animation state and index of the frame on screen
    pub fn shown(&self) -> (AnimationState, usize) {
        self.shown
    }
}

impl Sprite for Player {
    fn update(&mut self, ctx: &TickContext<'_>) {
        Player::update(self, ctx.input, ctx.now);
    }

    fn image(&self) -> &Frame {
        let (state, index) = self.shown;
        self.frames.for_state(state).frame(index)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn layer(&self) -> DrawLayer {
        DrawLayer::Player
    }
}
