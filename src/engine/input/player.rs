// Per-tick player input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use std::collections::HashSet;

/// Which actions are held, plus the press/release edges since the last tick
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Physical sources currently held down
    held_sources: HashSet<InputSource>,

    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that became pressed since the last tick
    just_pressed: HashSet<Action>,

    /// Actions that became released since the last tick
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this tick
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Feed a raw key event through the bindings
    ///
    /// An action stays pressed while any of its bound sources is held.
    /// Returns the action the source is bound to, if any.
    pub fn handle_source(
        &mut self,
        config: &InputConfig,
        source: InputSource,
        down: bool,
    ) -> Option<Action> {
        let action = config.get_action(source)?;

        if down {
            self.held_sources.insert(source);
        } else {
            self.held_sources.remove(&source);
        }

        let any_held = config
            .get_sources(action)
            .iter()
            .any(|s| self.held_sources.contains(s));

        if any_held {
            self.press(action);
        } else {
            self.release(action);
        }
        Some(action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear the press/release edges once a tick has consumed them
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_sources.clear();
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
