//! Time sources for the delayed draw.
//!
//! The session never sleeps. It records a deadline when a game starts and
//! compares it against a [`Clock`] whenever it is polled. Tests drive a
//! [`ManualClock`]; real callers use [`TokioClock`], which follows tokio's
//! (pausable) time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Hand-advanced clock. Clones share the same time.
///
/// ```
/// use std::time::Duration;
/// use who_pays::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_secs(4));
/// assert_eq!(clock.now(), Duration::from_secs(4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Clock backed by `tokio::time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

impl TokioClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
