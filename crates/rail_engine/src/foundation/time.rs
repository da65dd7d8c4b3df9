//! Time management utilities
//!
//! Gameplay is frame-counted: [`FrameCountdown`] drives every periodic action.
//! [`Timer`] only measures wall-clock frame time for diagnostics.

use std::time::Instant;

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Repeating countdown measured in frames
///
/// Starts full, fires on the tick that brings it to zero and immediately
/// refills to the interval. Missed fires never accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCountdown {
    interval: u32,
    remaining: u32,
}

impl FrameCountdown {
    /// Create a countdown that fires every `interval` frames (minimum 1)
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Advance one frame; returns `true` on the frame the countdown fires
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_fires_on_interval() {
        let mut countdown = FrameCountdown::new(3);
        let fired: Vec<bool> = (0..9).map(|_| countdown.tick()).collect();
        assert_eq!(
            fired,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_countdown_zero_interval_clamps_to_one() {
        let mut countdown = FrameCountdown::new(0);
        assert!(countdown.tick());
        assert!(countdown.tick());
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= timer.delta_time());
    }
}
