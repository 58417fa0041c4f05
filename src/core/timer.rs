use std::time::{Duration, Instant};

/// Redraw cadence of the clock face
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Deadline-driven repeating timer for the event loop
///
/// The timer never sleeps itself: the loop waits until [`RepeatingTimer::deadline`]
/// (`ControlFlow::WaitUntil`) and then calls [`RepeatingTimer::poll`].
#[derive(Debug, Clone, Copy)]
pub struct RepeatingTimer {
    interval: Duration,
    deadline: Instant,
}

impl RepeatingTimer {
    /// First fire is one interval after `start`
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            deadline: start + interval,
        }
    }

    /// Timer using [`TICK_INTERVAL`], starting now
    pub fn every_second() -> Self {
        Self::new(TICK_INTERVAL, Instant::now())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Next instant the timer fires
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Fire at most once; returns true if the deadline has passed
    ///
    /// When the loop fell more than a full interval behind, the next deadline is
    /// measured from `now` so missed ticks collapse into one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        let next = self.deadline + self.interval;
        self.deadline = if next <= now { now + self.interval } else { next };
        true
    }
}
