//! Polling driver for a light simulation.
//!
//! Provides [`PollingDriver`], which reads the clock, fires at most one due
//! event per tick and then sleeps for a fixed tick. There are no timers or
//! interrupts involved, so the same loop runs on a bare microcontroller.
//!
//! The tick bounds how late an event can fire. It has no other effect on
//! scheduling: overdue events still fire in due order on the following ticks
//! and their successors are timed from the original due time, so lateness
//! never accumulates.

use crate::offset::OffsetSource;
use crate::panel::LightPanel;
use crate::simulation::{Simulation, SimulationError, Transition};
use crate::time::{TimeInstant, TimeSource};
use crate::trace::TraceSink;
use embedded_hal::delay::DelayNs;

/// Drives a [`Simulation`] from a time source and a blocking delay.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `D` - Delay implementation type
pub struct PollingDriver<'t, I: TimeInstant, T: TimeSource<I>, D: DelayNs> {
    time_source: &'t T,
    delay: D,
    tick_ms: u32,
    _instant: core::marker::PhantomData<I>,
}

impl<'t, I, T, D> PollingDriver<'t, I, T, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    D: DelayNs,
{
    /// Creates a driver sleeping `tick_ms` milliseconds between polls.
    pub fn new(time_source: &'t T, delay: D, tick_ms: u32) -> Self {
        Self {
            time_source,
            delay,
            tick_ms,
            _instant: core::marker::PhantomData,
        }
    }

    /// Polling tick in milliseconds.
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Seeds every light's first event at the current time.
    ///
    /// See [`Simulation::seed`].
    pub fn seed<O, S, const N: usize, const MAX_LIGHTS: usize>(
        &self,
        simulation: &mut Simulation<I, N, MAX_LIGHTS>,
        offsets: &mut O,
        trace: &mut S,
    ) -> Result<(), SimulationError>
    where
        O: OffsetSource + ?Sized,
        S: TraceSink<I> + ?Sized,
    {
        simulation.seed(self.time_source.now(), offsets, trace)
    }

    /// Runs one polling iteration.
    ///
    /// Fires the earliest event if it is due, shows the change on the panel,
    /// then sleeps one tick regardless of whether anything fired.
    ///
    /// # Returns
    /// * `Ok(Some(transition))` - An event fired this tick
    /// * `Ok(None)` - Nothing was due
    /// * `Err` - The simulation broke an invariant; stop polling
    pub fn poll<P, S, const N: usize, const MAX_LIGHTS: usize>(
        &mut self,
        simulation: &mut Simulation<I, N, MAX_LIGHTS>,
        panel: &mut P,
        trace: &mut S,
    ) -> Result<Option<Transition<I>>, SimulationError>
    where
        P: LightPanel + ?Sized,
        S: TraceSink<I> + ?Sized,
    {
        let now = self.time_source.now();
        let fired = simulation.fire_due(now, trace)?;

        if let Some(transition) = fired {
            panel.light_changed(transition.light, transition.lit);
            panel.refresh(simulation.lamps());
        }

        self.delay.delay_ms(self.tick_ms);
        Ok(fired)
    }

    /// Polls until `keep_running` returns false or the simulation fails.
    ///
    /// `keep_running` is checked before every iteration, so an external stop
    /// request takes effect within one tick.
    pub fn run<P, S, F, const N: usize, const MAX_LIGHTS: usize>(
        &mut self,
        simulation: &mut Simulation<I, N, MAX_LIGHTS>,
        panel: &mut P,
        trace: &mut S,
        mut keep_running: F,
    ) -> Result<(), SimulationError>
    where
        P: LightPanel + ?Sized,
        S: TraceSink<I> + ?Sized,
        F: FnMut() -> bool,
    {
        while keep_running() {
            self.poll(simulation, panel, trace)?;
        }
        Ok(())
    }

    /// Releases the delay provider.
    pub fn into_delay(self) -> D {
        self.delay
    }
}
