//! Frame pacing and delta time

use std::time::{Duration, Instant};

/// Measures real time between frames and schedules the next one
pub struct FrameClock {
    period: Duration,
    last: Option<Instant>, // None until the first tick
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        Self {
            period,
            last: None,
            next_frame: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Seconds since the previous tick. The first tick returns 0, so
    /// window and GPU setup never count as frame time.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = self
            .last
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last = Some(now);
        dt
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Move the deadline one period on. If we have fallen behind by more
    /// than a frame, skip ahead instead of bursting to catch up.
    pub fn schedule_next(&mut self, now: Instant) {
        self.next_frame += self.period;
        if self.next_frame < now {
            self.next_frame = now + self.period;
        }
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }
}
