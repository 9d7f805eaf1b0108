use std::time::Instant;

/// Measures real time between frames and clamps it so a stall (suspended
/// terminal, slow frame) never turns into one huge simulation step.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    max_step: f64,
}

impl FrameClock {
    pub fn new(max_step: f64) -> Self {
        Self {
            last: None,
            max_step,
        }
    }

    /// Reset the reference instant, e.g. at session start.
    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Seconds since the previous call, clamped to `[0, max_step]`.
    /// The first call after construction returns 0.
    pub fn step(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(self.max_step)
    }

    pub fn max_step(&self) -> f64 {
        self.max_step
    }
}
