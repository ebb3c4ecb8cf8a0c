//! Frame clock and frame pacing for the explicit render loop.

use std::thread;
use std::time::{Duration, Instant};

/// Elapsed time since start, read once per frame
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    /// Seconds between the clock start and `now`
    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }

    /// Advance one frame; returns (elapsed, delta) in seconds
    pub fn tick_at(&mut self, now: Instant) -> (f32, f32) {
        let delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        (self.elapsed_at(now), delta)
    }

    pub fn tick(&mut self) -> (f32, f32) {
        self.tick_at(Instant::now())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocks until the next frame may start
pub trait FramePacer {
    fn wait_for_next_frame(&mut self);

    /// Whether the surface should present with vertical sync
    fn wants_vsync(&self) -> bool;
}

/// Pacing by the display: FIFO presentation blocks until vertical blank
pub struct VsyncPacer;

impl FramePacer for VsyncPacer {
    fn wait_for_next_frame(&mut self) {}

    fn wants_vsync(&self) -> bool {
        true
    }
}

/// Fixed-interval pacing for a frame cap
pub struct IntervalPacer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl IntervalPacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to sleep at `now`, advancing the deadline
    ///
    /// Deadlines advance by whole intervals; a frame that overran by more than
    /// one interval resets the schedule instead of bursting to catch up.
    pub fn sleep_duration(&mut self, now: Instant) -> Duration {
        let deadline = match self.next_deadline {
            Some(deadline) if deadline + self.interval > now => deadline,
            _ => now,
        };
        self.next_deadline = Some(deadline + self.interval);
        deadline.saturating_duration_since(now)
    }
}

impl FramePacer for IntervalPacer {
    fn wait_for_next_frame(&mut self) {
        let sleep = self.sleep_duration(Instant::now());
        if !sleep.is_zero() {
            thread::sleep(sleep);
        }
    }

    fn wants_vsync(&self) -> bool {
        false
    }
}

/// Pacer for an optional frame cap
pub fn pacer_for(max_fps: Option<u32>) -> Box<dyn FramePacer> {
    match max_fps {
        Some(fps) => Box::new(IntervalPacer::new(fps)),
        None => Box::new(VsyncPacer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_elapsed_and_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let (elapsed, delta) = clock.tick_at(start + Duration::from_millis(16));
        assert!((elapsed - 0.016).abs() < 1e-6);
        assert!((delta - 0.016).abs() < 1e-6);

        let (elapsed, delta) = clock.tick_at(start + Duration::from_millis(50));
        assert!((elapsed - 0.050).abs() < 1e-6);
        assert!((delta - 0.034).abs() < 1e-6);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let start = Instant::now() + Duration::from_secs(1);
        let clock = FrameClock::starting_at(start);
        assert_eq!(clock.elapsed_at(start - Duration::from_millis(5)), 0.0);
    }

    #[test]
    fn test_interval_pacer_schedule() {
        let mut pacer = IntervalPacer::new(50);
        assert_eq!(pacer.interval(), Duration::from_millis(20));

        let t0 = Instant::now();
        // First frame starts immediately
        assert_eq!(pacer.sleep_duration(t0), Duration::ZERO);

        // Frame took 5ms: sleep the remaining 15ms
        let sleep = pacer.sleep_duration(t0 + Duration::from_millis(5));
        assert_eq!(sleep, Duration::from_millis(15));

        // Next deadline is t0 + 40ms
        let sleep = pacer.sleep_duration(t0 + Duration::from_millis(30));
        assert_eq!(sleep, Duration::from_millis(10));
    }

    #[test]
    fn test_interval_pacer_resets_after_stall() {
        let mut pacer = IntervalPacer::new(50);
        let t0 = Instant::now();
        pacer.sleep_duration(t0);

        // A 200ms stall does not trigger a burst of zero-sleep frames
        let late = t0 + Duration::from_millis(200);
        assert_eq!(pacer.sleep_duration(late), Duration::ZERO);
        let sleep = pacer.sleep_duration(late + Duration::from_millis(4));
        assert_eq!(sleep, Duration::from_millis(16));
    }

    #[test]
    fn test_pacer_selection() {
        assert!(pacer_for(None).wants_vsync());
        assert!(!pacer_for(Some(30)).wants_vsync());
    }
}
