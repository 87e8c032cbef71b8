// Tuning tables
//
// All values are per tick (60 Hz) and in screen pixels.

/// Player movement and animation tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    // Movement
    /// Horizontal acceleration while a direction is held
    pub acceleration: f32,
    /// Linear friction factor applied to horizontal velocity (negative)
    pub friction: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Upward speed at jump launch (applied as a negative y velocity)
    pub jump_velocity: f32,
    /// Upward speed kept when the jump input is released early
    pub jump_cut_velocity: f32,
    /// Horizontal speeds below this snap to zero
    pub deadband: f32,

    // Animation
    /// Minimum ms between walking frame advances
    pub walk_cadence_ms: u64,
    /// Minimum ms between standing frame advances
    pub stand_cadence_ms: u64,

    // Display
    /// On-screen size of every player frame
    pub frame_size: u32,
    /// Spawn position (bottom-center of the sprite)
    pub spawn_x: f32,
    pub spawn_y: f32,
}

pub const PLAYER_TUNING: PlayerTuning = PlayerTuning {
    acceleration: 0.5,
    friction: -0.12,
    gravity: 0.8,
    jump_velocity: 20.0,
    jump_cut_velocity: 3.0,
    deadband: 0.1,

    walk_cadence_ms: 120,
    stand_cadence_ms: 250,

    frame_size: 144,
    spawn_x: 1000.0,
    spawn_y: 500.0,
};

impl Default for PlayerTuning {
    fn default() -> Self {
        PLAYER_TUNING
    }
}

/// Visible play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
}

pub const WORLD: WorldSettings = WorldSettings {
    width: 1920.0,
    height: 1080.0,
};

impl Default for WorldSettings {
    fn default() -> Self {
        WORLD
    }
}

/// Prop animation and display tuning
pub mod props {
    /// Minimum ms between fire frame advances
    pub const FIRE_CADENCE_MS: u64 = 120;
    /// On-screen size of fire, urn and lamp frames
    pub const PROP_SIZE: u32 = 144;
    /// On-screen size of a ground tile
    pub const GROUND_WIDTH: u32 = 288;
    pub const GROUND_HEIGHT: u32 = 72;
}
