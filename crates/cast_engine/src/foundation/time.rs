//! Frame timing

use std::time::{Duration, Instant};

/// Frame timer with an optional fixed frame budget
///
/// The director ticks it once per frame and asks how long it may sleep
/// before the next frame is due.
pub struct Timer {
    started: Instant,
    frame_start: Instant,
    delta_time: f32,
    frame_count: u64,
    frame_budget: Option<Duration>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Timer {
    /// Create a timer targeting `frame_rate` frames per second (0 = unthrottled)
    pub fn new(frame_rate: u32) -> Self {
        let now = Instant::now();
        let frame_budget = (frame_rate > 0).then(|| Duration::from_secs(1) / frame_rate);
        Self {
            started: now,
            frame_start: now,
            delta_time: 0.0,
            frame_count: 0,
            frame_budget,
        }
    }

    /// Mark the start of a new frame
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.frame_start).as_secs_f32();
        self.frame_start = now;
        self.frame_count += 1;
    }

    /// Seconds between the last two ticks
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Seconds since the timer was created
    pub fn total_time(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Number of ticks so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per second since creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        let total = self.total_time();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }

    /// Time left in the current frame's budget
    ///
    /// Always zero for an unthrottled timer or an overrun frame.
    pub fn remaining_budget(&self) -> Duration {
        self.frame_budget
            .map_or(Duration::ZERO, |budget| budget.saturating_sub(self.frame_start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_frames() {
        let mut timer = Timer::new(0);
        timer.tick();
        timer.tick();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.delta_time() >= 0.0);
    }

    #[test]
    fn test_unthrottled_has_no_budget() {
        let mut timer = Timer::new(0);
        timer.tick();
        assert_eq!(timer.remaining_budget(), Duration::ZERO);
    }

    #[test]
    fn test_budget_never_exceeds_frame_length() {
        let mut timer = Timer::new(10);
        timer.tick();
        assert!(timer.remaining_budget() <= Duration::from_millis(100));
    }
}
