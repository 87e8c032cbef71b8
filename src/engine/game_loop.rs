//! Game loop timing
//!
//! Fixed timestep ticks driven by wall-clock frames. Sprites are tuned per
//! tick, so the host runs one `Scene::update` per tick returned by
//! `begin_frame`, passing the value from `tick` as the animation clock.

use std::time::{Duration, Instant};

/// Ticks per second
pub const TICK_RATE: u32 = 60;

const TICK_DURATION: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Wall time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Simulated time advanced by executed ticks
    game_time: Duration,

    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    frame_count: u64,

    tick_count: u64,

    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            game_time: Duration::ZERO,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame using the wall clock, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of elapsed wall time, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop what the cap could not absorb instead of replaying it later
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::debug!(
                "Dropping {:?} of frame time after {} ticks",
                self.accumulator,
                ticks
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Advance the simulated clock by one tick and return it in milliseconds
    ///
    /// Call once per tick, before updating the scene.
    pub fn tick(&mut self) -> u64 {
        self.tick_count += 1;
        self.game_time += TICK_DURATION;
        self.game_time_ms()
    }

    /// Monotonic simulated time in milliseconds
    pub fn game_time_ms(&self) -> u64 {
        self.game_time.as_millis() as u64
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert_eq!(game_loop.game_time_ms(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_one_tick_per_tick_duration() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(TICK_DURATION / 2), 0);
        assert_eq!(game_loop.advance(TICK_DURATION / 2), 1);
        assert_eq!(game_loop.advance(TICK_DURATION * 2), 2);
    }

    #[test]
    fn test_max_ticks_per_frame() {
        let mut game_loop = GameLoop::new();
        let ticks = game_loop.advance(Duration::from_millis(300));
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);

        // The backlog is dropped, not replayed
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert_eq!(game_loop.advance(Duration::from_millis(50)), 0);

        game_loop.resume();
        assert!(!game_loop.is_paused());
        assert_eq!(game_loop.advance(TICK_DURATION), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_game_time_advances_per_tick() {
        let mut game_loop = GameLoop::new();
        let mut last = 0;
        for _ in 0..TICK_RATE {
            let now = game_loop.tick();
            assert!(now >= last);
            last = now;
        }
        // 60 ticks of 16.666ms
        assert_eq!(game_loop.game_time_ms(), 999);
        assert_eq!(game_loop.tick_count(), 60);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }
}
