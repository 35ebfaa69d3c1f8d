use std::time::{Duration, Instant};

/// Drops inputs that arrive within `interval` of the last accepted one
#[derive(Debug, Clone)]
pub struct Debounce {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Debounce {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Returns true and records `now` when the input should be handled
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted
            && now.saturating_duration_since(last) < self.interval
        {
            return false;
        }

        self.last_accepted = Some(now);
        true
    }
}
