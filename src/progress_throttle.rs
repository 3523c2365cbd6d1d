use tokio::time::{Duration, Instant};

/// Limits how often a single task reports intermediate progress.
/// Uses tokio's clock so paused-time tests drive it deterministically.
pub struct ProgressThrottle {
    interval: Duration,
    next_emit: Instant,
}

impl ProgressThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_emit: Instant::now() + interval,
        }
    }

    /// True once the window has passed; opens the next window on success.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        if now > self.next_emit {
            self.next_emit = now + self.interval;
            return true;
        }
        false
    }
}
