//! Time sources for measuring attempt duration and tap debouncing.
//!
//! The core never reads the wall clock directly. Attempts are generic
//! over [`Clock`] so live input uses [`SystemClock`] while tests and
//! recorded-log replays drive a [`ManualClock`].

use std::cell::Cell;
use std::fmt::Debug;
use std::time::Duration;

/// A monotonic time source.
pub trait Clock {
    /// Opaque point in time.
    type Instant: Copy + Debug;

    /// The current instant.
    fn now(&self) -> Self::Instant;

    /// Time elapsed between `since` and now.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// [`Clock`] backed by `web_time::Instant`.
///
/// Uses `performance.now()` on WASM and `std::time::Instant` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = web_time::Instant;

    fn now(&self) -> Self::Instant {
        web_time::Instant::now()
    }

    fn elapsed(&self, since: &Self::Instant) -> Duration {
        since.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Instants are offsets from the clock's creation.
///
/// ```
/// use std::time::Duration;
/// use tracewise_scoring::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::default();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.elapsed(&start), Duration::from_millis(250));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get().saturating_add(by));
    }

    /// Jump to `at` after creation. Moving backwards is ignored.
    pub fn set(&self, at: Duration) {
        if at > self.offset.get() {
            self.offset.set(at);
        }
    }
}

impl Clock for ManualClock {
    type Instant = Duration;

    fn now(&self) -> Duration {
        self.offset.get()
    }

    fn elapsed(&self, since: &Duration) -> Duration {
        self.offset.get().saturating_sub(*since)
    }
}

impl<C: Clock> Clock for &C {
    type Instant = C::Instant;

    fn now(&self) -> Self::Instant {
        (**self).now()
    }

    fn elapsed(&self, since: &Self::Instant) -> Duration {
        (**self).elapsed(since)
    }
}

/// Round a duration to whole seconds, halves up.
#[must_use]
pub fn whole_seconds(duration: Duration) -> u64 {
    (duration.as_millis().saturating_add(500) / 1000)
        .try_into()
        .unwrap_or(u64::MAX)
}
