// Input handling
//
// - `action`: game actions and default key bindings
// - `config`: binding table from keys to actions
// - `player`: per-tick held state and press/release edges
//
// ```rust,ignore
// let config = InputConfig::default();
// let mut input = PlayerInput::new();
//
// // In the event loop
// input.handle_source(&config, InputSource::key(code), pressed);
//
// // After each fixed tick
// scene.update(&input, now);
// input.end_tick();
// ```

pub mod action;
pub mod config;
pub mod player;

pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use player::PlayerInput;
