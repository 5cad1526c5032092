//! Debug trace seam for scheduling decisions.

use crate::queue::ScheduledEvent;
use crate::types::LightId;

/// A scheduling decision reported to a [`TraceSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TraceEvent<'a, I> {
    /// An event was inserted into the queue.
    Scheduled { light: LightId, due: I },

    /// All lights received their initial event.
    Seeded {
        now: I,
        pending: &'a [ScheduledEvent<I>],
    },

    /// A light moved to a new phase.
    PhaseChanged { light: LightId, phase: usize },

    /// A light's lit signal was recomputed after a phase change.
    LightChanged { light: LightId, lit: bool },
}

/// Receiver for scheduling trace events.
///
/// Tracing never influences scheduling; a sink only observes.
pub trait TraceSink<I> {
    /// Records one trace event.
    fn trace(&mut self, event: TraceEvent<'_, I>);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl<I> TraceSink<I> for NoTrace {
    #[inline]
    fn trace(&mut self, _event: TraceEvent<'_, I>) {}
}
