use std::time::{Duration, Instant};

/// Fixed-interval frame deadline for a single-threaded loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    interval: Duration,
    deadline: Instant,
}

impl FramePacer {
    /// The first frame is due immediately.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now,
        }
    }

    /// Returns whether a frame is due at `now`, advancing the deadline if so.
    ///
    /// A loop that falls more than one interval behind is resynchronised to
    /// `now + interval` instead of rendering the missed frames back to back.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        let next = self.deadline + self.interval;
        self.deadline = if next <= now { now + self.interval } else { next };
        true
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
