// Player animation state
//
// Recomputed every tick from velocity and the sticky jump flag rather than
// driven by transition events.

/// What the player is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    #[default]
    Standing,
    Walking,
    Jumping,
}

impl MotionState {
    pub const ALL: [MotionState; 3] = [Self::Standing, Self::Walking, Self::Jumping];

    /// Derive the state from the jump flag and horizontal velocity
    ///
    /// An active jump wins over walking.
    pub fn derive(jumping: bool, velocity_x: f32) -> Self {
        if jumping {
            Self::Jumping
        } else if velocity_x != 0.0 {
            Self::Walking
        } else {
            Self::Standing
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Standing => 0,
            Self::Walking => 1,
            Self::Jumping => 2,
        }
    }
}

/// Which way the sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 2] = [Self::Left, Self::Right];

    /// Facing implied by a horizontal velocity, `None` when at rest
    pub fn from_velocity(velocity_x: f32) -> Option<Self> {
        if velocity_x > 0.0 {
            Some(Self::Right)
        } else if velocity_x < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Motion state combined with the orthogonal facing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationState {
    pub motion: MotionState,
    pub facing: Facing,
}

impl AnimationState {
    pub fn new(motion: MotionState, facing: Facing) -> Self {
        Self { motion, facing }
    }

    /// Name of the animation set shown in this state
    pub fn animation_name(&self) -> &'static str {
        match (self.motion, self.facing) {
            (MotionState::Standing, Facing::Left) => "stand_left",
            (MotionState::Standing, Facing::Right) => "stand_right",
            (MotionState::Walking, Facing::Left) => "walk_left",
            (MotionState::Walking, Facing::Right) => "walk_right",
            (MotionState::Jumping, Facing::Left) => "jump_left",
            (MotionState::Jumping, Facing::Right) => "jump_right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AnimationState::default();
        assert_eq!(state.motion, MotionState::Standing);
        assert_eq!(state.facing, Facing::Left);
    }

    #[test]
    fn test_derive_standing_and_walking() {
        assert_eq!(MotionState::derive(false, 0.0), MotionState::Standing);
        assert_eq!(MotionState::derive(false, 2.5), MotionState::Walking);
        assert_eq!(MotionState::derive(false, -0.2), MotionState::Walking);
    }

    #[test]
    fn test_jump_wins_over_walking() {
        assert_eq!(MotionState::derive(true, 4.0), MotionState::Jumping);
        assert_eq!(MotionState::derive(true, 0.0), MotionState::Jumping);
    }

    #[test]
    fn test_facing_from_velocity() {
        assert_eq!(Facing::from_velocity(1.0), Some(Facing::Right));
        assert_eq!(Facing::from_velocity(-1.0), Some(Facing::Left));
        assert_eq!(Facing::from_velocity(0.0), None);
    }

    #[test]
    fn test_indices_are_dense() {
        let motions: Vec<usize> = MotionState::ALL.iter().map(|m| m.index()).collect();
        assert_eq!(motions, vec![0, 1, 2]);
        let facings: Vec<usize> = Facing::ALL.iter().map(|f| f.index()).collect();
        assert_eq!(facings, vec![0, 1]);
    }

    #[test]
    fn test_animation_names() {
        let walk_right = AnimationState::new(MotionState::Walking, Facing::Right);
        assert_eq!(walk_right.animation_name(), "walk_right");
        let jump_left = AnimationState::new(MotionState::Jumping, Facing::Left);
        assert_eq!(jump_left.animation_name(), "jump_left");
    }
}
