use std::time::{Duration, Instant};

use buoy_lights::{TimeDuration, TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;

/// Duration type using milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostDuration(pub u64);

impl TimeDuration for HostDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        HostDuration(millis)
    }
}

/// Milliseconds since the clock was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostInstant(pub u64);

impl TimeInstant for HostInstant {
    type Duration = HostDuration;

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(HostInstant)
    }
}

impl std::fmt::Display for HostInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1000, self.0 % 1000)
    }
}

/// Monotonic clock backed by `std::time::Instant`
pub struct HostClock {
    origin: Instant,
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource<HostInstant> for HostClock {
    fn now(&self) -> HostInstant {
        HostInstant(self.origin.elapsed().as_millis() as u64)
    }
}

/// Blocking delay that puts the current thread to sleep
pub struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms.into()));
    }
}
