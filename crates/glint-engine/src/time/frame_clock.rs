use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Time since the clock was created. Widgets use this for blinking.
    pub elapsed: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous frames per second derived from `dt`.
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline. `elapsed` keeps counting from creation.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            elapsed: now.saturating_duration_since(self.start),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_and_elapsed_is_not() {
        let mut clock = FrameClock::new();
        let start = clock.start;
        let ft = clock.tick_at(start + Duration::from_secs(2));
        assert_eq!(ft.dt, 0.25);
        assert_eq!(ft.elapsed, Duration::from_secs(2));
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        let start = clock.start;
        assert_eq!(clock.tick_at(start + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(start + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn fps_from_dt() {
        let mut clock = FrameClock::new();
        let start = clock.start;
        let ft = clock.tick_at(start + Duration::from_millis(20));
        assert!((ft.fps() - 50.0).abs() < 0.01);
    }
}
