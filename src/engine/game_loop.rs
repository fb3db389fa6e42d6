/// Fixed timestep simulation clock
///
/// Wall-clock frame time is accumulated and converted into a whole number of
/// fixed simulation ticks. Character logic, timers and physics only ever see
/// `FIXED_TIMESTEP`, so deferred events are measured in simulation time and
/// do not drift with the render frame rate.
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Wall-clock time not yet consumed by fixed ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Total ticks executed
    tick_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.accumulate(frame_time)
    }

    /// Feed elapsed wall-clock time and return how many ticks it buys
    fn accumulate(&mut self, frame_time: Duration) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop the backlog instead of carrying it into the next frame
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Simulation time elapsed, in seconds
    pub fn simulation_time(&self) -> f64 {
        self.tick_count as f64 * FIXED_TIMESTEP as f64
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!(
                "Simulation paused at tick {} ({:.2}s)",
                self.tick_count(),
                self.simulation_time()
            );
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
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
    use approx::assert_relative_eq;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
        assert_eq!(game_loop.simulation_time(), 0.0);
    }

    #[test]
    fn test_one_tick_per_timestep() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.accumulate(FIXED_TIMESTEP_DURATION), 1);
        assert_eq!(game_loop.accumulate(FIXED_TIMESTEP_DURATION * 2), 2);
        assert_eq!(game_loop.tick_count(), 3);
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut game_loop = GameLoop::new();
        let half = FIXED_TIMESTEP_DURATION / 2;

        assert_eq!(game_loop.accumulate(half), 0);
        assert_eq!(game_loop.accumulate(half), 1);
    }

    #[test]
    fn test_tick_limit_drops_backlog() {
        let mut game_loop = GameLoop::new();

        // 300ms would allow 18 ticks
        assert_eq!(
            game_loop.accumulate(Duration::from_millis(300)),
            MAX_TICKS_PER_FRAME
        );
        assert_eq!(game_loop.accumulate(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert_eq!(game_loop.accumulate(Duration::from_millis(50)), 0);
        assert_eq!(game_loop.tick_count(), 0);
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
    fn test_simulation_time_follows_ticks() {
        let mut game_loop = GameLoop::new();
        game_loop.accumulate(FIXED_TIMESTEP_DURATION * 3);
        assert_relative_eq!(
            game_loop.simulation_time(),
            3.0 * FIXED_TIMESTEP as f64,
            epsilon = 1e-9
        );
    }
}
