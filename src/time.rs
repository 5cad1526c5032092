//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants are compared directly when ordering scheduled events, so the
/// clock behind them must be monotonic and must not wrap during a run.
pub trait TimeInstant: Copy + Ord {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// Converts a phase length in seconds to whole milliseconds, rounding to nearest.
///
/// Returns `None` for zero, negative and non-finite inputs as well as for
/// lengths that round down to zero milliseconds.
pub fn millis_from_secs(secs: f32) -> Option<u64> {
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }

    let millis = (secs * 1000.0 + 0.5) as u64;
    if millis == 0 { None } else { Some(millis) }
}
