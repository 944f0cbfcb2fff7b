//! Elapsed-time measurement

use std::time::Instant;

/// Stopwatch measuring elapsed time since construction or the last restart
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    started_at: Instant,
}

impl ElapsedTimer {
    /// Create a new timer, started now
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Reset the timer to now
    pub fn restart(&mut self) {
        self.started_at = Instant::now();
    }

    /// Seconds elapsed since the timer was started
    pub fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Milliseconds elapsed since the timer was started
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs() * 1e3
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}
