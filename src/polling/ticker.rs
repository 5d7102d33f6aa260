//! Fixed-rate tick scheduling.
//!
//! The GUI event loop calls [`Ticker::poll`] on every frame. A tick fires
//! when its scheduled time has passed; missed ticks are skipped, not
//! replayed.

use std::time::{Duration, Instant};

/// Number of sensor polls per second.
pub const POLL_RATE_HZ: u32 = 20;

/// Interval between sensor polls.
pub const POLL_PERIOD: Duration = Duration::from_millis(1000 / POLL_RATE_HZ as u64);

/// Schedules ticks at a fixed period.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a ticker whose first tick is due immediately.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true if a tick is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) => {
                let next = due + self.period;
                // Fell more than a period behind: resume from now
                self.next_due = Some(if next <= now { now + self.period } else { next });
                true
            }
            None => {
                self.next_due = Some(now + self.period);
                true
            }
        }
    }

    /// Time remaining until the next tick is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(POLL_PERIOD)
    }
}
