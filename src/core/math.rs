// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Snap a value to zero when its magnitude falls below `threshold`
///
/// Used to stop residual drift once friction has nearly stopped a body.
pub fn deadband(value: f32, threshold: f32) -> f32 {
    if value.abs() < threshold {
        0.0
    } else {
        value
    }
}

/// Milliseconds elapsed between two clock readings, zero if the clock went backwards
pub fn elapsed_ms(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_deadband() {
        assert_eq!(deadband(0.05, 0.1), 0.0);
        assert_eq!(deadband(-0.09, 0.1), 0.0);
        assert_eq!(deadband(0.1, 0.1), 0.1);
        assert_eq!(deadband(-3.0, 0.1), -3.0);
    }

    #[test]
    fn test_elapsed_ms() {
        assert_eq!(elapsed_ms(300, 100), 200);
        assert_eq!(elapsed_ms(100, 300), 0);
    }
}
