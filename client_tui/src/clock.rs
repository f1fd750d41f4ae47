use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler.
///
/// Deadlines are spaced one interval apart. A late tick pushes the schedule
/// back instead of firing a burst of catch-up ticks, and the simulation is
/// never told how late it ran.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    /// Time left until the next tick is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Schedule the tick after the one that just ran
    pub fn advance(&mut self, now: Instant) {
        self.deadline = next_deadline(self.deadline, now, self.interval);
    }
}

pub fn next_deadline(deadline: Instant, now: Instant, interval: Duration) -> Instant {
    let next = deadline + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}
