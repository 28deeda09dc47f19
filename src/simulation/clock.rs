//! Frame clock
//!
//! Turns display-refresh timestamps (milliseconds) into engine time steps:
//! `dt = (now - prev) / time_scale`, optionally clamped to `max_delta`.
//! The very first tick has no previous timestamp and yields zero.

#[derive(Debug, Clone)]
pub struct FrameClock {
    time_scale: f64,
    max_delta: Option<f64>,
    prev: Option<f64>,
}

impl FrameClock {
    pub fn new(time_scale: f64, max_delta: Option<f64>) -> Self {
        Self {
            time_scale,
            max_delta,
            prev: None,
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Time step for a frame stamped `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.prev {
            Some(prev) => ((now_ms - prev) / self.time_scale).max(0.0),
            None => 0.0,
        };
        self.prev = Some(now_ms);

        match self.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Forget the previous timestamp, e.g. after the driver was paused
    pub fn reset(&mut self) {
        self.prev = None;
    }
}
