/// Frame timing and control
///
/// One simulation tick runs per rendered frame with a variable delta time.
/// The loop also tracks frame counts, a smoothed FPS figure and a pause flag.
use std::time::{Duration, Instant};

/// Upper bound on a single tick's delta so a stall (window drag, debugger)
/// does not launch the character through the ground plane
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Source of per-tick elapsed time in seconds.
///
/// Implementations must return finite, non-negative values. The first call
/// may return 0.
pub trait Clock {
    fn tick(&mut self) -> f32;
}

/// Sanitize a raw frame delta into a usable tick duration
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DELTA)
    } else {
        0.0
    }
}

/// Wall-clock frame timer
pub struct GameLoop {
    /// Time of last frame (None until the first tick)
    last_frame_time: Option<Instant>,

    /// Time when game loop started
    start_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            last_frame_time: None,
            start_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame and return the simulation delta in seconds.
    ///
    /// The very first frame returns 0. Paused frames also return 0 but still
    /// count towards the FPS figure.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = match self.last_frame_time.replace(now) {
            Some(last) => now.duration_since(last),
            None => Duration::ZERO,
        };
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            0.0
        } else {
            sanitize_delta(frame_time.as_secs_f32())
        }
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Update FPS calculation
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

impl Clock for GameLoop {
    fn tick(&mut self) -> f32 {
        self.begin_frame()
    }
}

/// Deterministic clock returning the same step every tick
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: f32,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: sanitize_delta(step),
        }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.step
    }
}
