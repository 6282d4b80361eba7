use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from process start.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock for tests and replays.
///
/// `step_ms` is added after every read, which lets a busy loop observe time
/// passing without a real sleep.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms: 0,
        }
    }

    /// Creates a clock that moves forward by `step_ms` on each read.
    #[must_use]
    pub fn stepping(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms,
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now.saturating_add(self.step_ms));
        now
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, MonotonicClock};

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::start();
        let first = clock.now_ms();
        let second = clock.now_ms();

        assert!(second >= first);
    }

    #[test]
    fn manual_clock_advances_on_request_and_per_read() {
        let clock = ManualClock::new(10);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 15);
        assert_eq!(clock.now_ms(), 15);

        let stepping = ManualClock::stepping(0, 3);
        assert_eq!(stepping.now_ms(), 0);
        assert_eq!(stepping.now_ms(), 3);
    }
}
