use crate::catalog::{CatalogEntry, Preset};
use crate::light::{LightDefinition, LightState};
use crate::offset::{OffsetSource, clamp_fraction};
use crate::panel::LampView;
use crate::queue::EventQueue;
use crate::time::{TimeDuration, TimeInstant};
use crate::trace::{TraceEvent, TraceSink};
use crate::types::{LightError, LightId, QueueError};
use heapless::Vec;

/// Errors that can occur while building or running a simulation.
///
/// None of these are recoverable: each one means the catalog does not fit the
/// configured capacities or an internal invariant broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimulationError {
    /// An event queue operation failed.
    Queue(QueueError),

    /// A catalog entry is not a valid light.
    Light(LightError),

    /// The catalog holds more lights than the simulation can store.
    TooManyLights,

    /// An event refers to a light the simulation does not know.
    UnknownLight(LightId),

    /// The light already has a pending event.
    AlreadyScheduled(LightId),

    /// A due time does not fit the instant type.
    TimeOverflow,
}

impl core::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SimulationError::Queue(err) => {
                write!(f, "event queue error: {}", err)
            }
            SimulationError::Light(err) => {
                write!(f, "invalid light: {}", err)
            }
            SimulationError::TooManyLights => {
                write!(f, "catalog exceeds light capacity")
            }
            SimulationError::UnknownLight(id) => {
                write!(f, "light {} does not exist in simulation", id.0)
            }
            SimulationError::AlreadyScheduled(id) => {
                write!(f, "light {} already has a pending event", id.0)
            }
            SimulationError::TimeOverflow => {
                write!(f, "due time overflows the clock")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimulationError {}

impl From<QueueError> for SimulationError {
    fn from(err: QueueError) -> Self {
        SimulationError::Queue(err)
    }
}

impl From<LightError> for SimulationError {
    fn from(err: LightError) -> Self {
        SimulationError::Light(err)
    }
}

/// Outcome of firing one scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition<I> {
    /// The light that changed.
    pub light: LightId,

    /// Phase the light entered.
    pub phase: usize,

    /// Whether the light is now lit.
    pub lit: bool,

    /// When the fired event was due.
    pub fired_at: I,

    /// When the light's successor event is due.
    pub next_due: I,
}

/// A light definition paired with its runtime cursor.
#[derive(Debug, Clone)]
struct Light<D: TimeDuration, const N: usize> {
    definition: LightDefinition<D, N>,
    state: LightState,
}

/// Simulation context for a bank of navigation lights.
///
/// Owns the light definitions, each light's phase cursor and the event queue.
/// The queue holds exactly one pending event per light once seeded, and every
/// fired event is replaced by the same light's next event before control
/// returns to the caller.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Maximum number of phases per light
/// * `MAX_LIGHTS` - Maximum number of lights, also the largest queue capacity
pub struct Simulation<I: TimeInstant, const N: usize, const MAX_LIGHTS: usize> {
    lights: Vec<Light<I::Duration, N>, MAX_LIGHTS>,
    queue: EventQueue<I, MAX_LIGHTS>,
}

impl<I, const N: usize, const MAX_LIGHTS: usize> Simulation<I, N, MAX_LIGHTS>
where
    I: TimeInstant,
    I::Duration: TimeDuration,
{
    /// Creates a simulation with no lights and a queue of `MAX_LIGHTS` slots.
    pub fn new() -> Self {
        Self::with_queue_capacity(MAX_LIGHTS)
    }

    /// Creates a simulation with no lights and a queue of `capacity` slots.
    ///
    /// `capacity` is capped at `MAX_LIGHTS`. Seeding more lights than the
    /// queue holds fails with `Queue(CapacityExceeded)`.
    pub fn with_queue_capacity(capacity: usize) -> Self {
        Self {
            lights: Vec::new(),
            queue: EventQueue::with_capacity(capacity),
        }
    }

    /// Creates a simulation holding every catalog entry in order.
    ///
    /// # Errors
    /// * `Light` - An entry has an empty, non-positive or oversized sequence
    /// * `TooManyLights` - The catalog is larger than `MAX_LIGHTS`
    pub fn from_catalog(catalog: &[CatalogEntry]) -> Result<Self, SimulationError> {
        Self::new().with_catalog(catalog)
    }

    /// Creates a simulation from a preset's catalog and queue capacity.
    ///
    /// # Errors
    /// See [`from_catalog`](Self::from_catalog).
    pub fn from_preset(preset: Preset) -> Result<Self, SimulationError> {
        Self::with_queue_capacity(preset.queue_capacity()).with_catalog(preset.entries())
    }

    fn with_catalog(mut self, catalog: &[CatalogEntry]) -> Result<Self, SimulationError> {
        for entry in catalog {
            self.add_light(entry.definition()?)?;
        }
        Ok(self)
    }

    /// Adds a light and returns its identifier.
    ///
    /// The light starts dark and has no pending event until [`seed`](Self::seed).
    ///
    /// # Errors
    /// Returns `TooManyLights` if the simulation already holds `MAX_LIGHTS`.
    pub fn add_light(
        &mut self,
        definition: LightDefinition<I::Duration, N>,
    ) -> Result<LightId, SimulationError> {
        let id = LightId(self.lights.len());
        self.lights
            .push(Light {
                definition,
                state: LightState::new(),
            })
            .map_err(|_| SimulationError::TooManyLights)?;
        Ok(id)
    }

    /// Schedules the first event of every light.
    ///
    /// Each light is due at `now + total_duration * fraction`, with one
    /// fraction drawn from `offsets` per light in catalog order.
    ///
    /// # Errors
    /// * `Queue(CapacityExceeded)` - More lights than queue slots
    /// * `AlreadyScheduled` - The simulation was seeded before
    /// * `TimeOverflow` - A start time does not fit the instant type
    pub fn seed<O, S>(&mut self, now: I, offsets: &mut O, trace: &mut S) -> Result<(), SimulationError>
    where
        O: OffsetSource + ?Sized,
        S: TraceSink<I> + ?Sized,
    {
        for index in 0..self.lights.len() {
            let total = self.lights[index].definition.total_duration().as_millis();
            let fraction = clamp_fraction(offsets.next_fraction());
            let offset = I::Duration::from_millis((total as f32 * fraction) as u64);
            let start = now.checked_add(offset).ok_or(SimulationError::TimeOverflow)?;
            self.schedule(LightId(index), start, trace)?;
        }

        trace.trace(TraceEvent::Seeded {
            now,
            pending: self.queue.as_slice(),
        });
        Ok(())
    }

    /// Inserts an event for a light.
    ///
    /// A light has at most one pending event at any time.
    ///
    /// # Errors
    /// * `UnknownLight` - The light does not exist
    /// * `AlreadyScheduled` - The light already has a pending event
    /// * `Queue(CapacityExceeded)` - The queue is full
    pub fn schedule<S>(&mut self, light: LightId, due: I, trace: &mut S) -> Result<(), SimulationError>
    where
        S: TraceSink<I> + ?Sized,
    {
        if light.0 >= self.lights.len() {
            return Err(SimulationError::UnknownLight(light));
        }

        if self.queue.contains(light) {
            return Err(SimulationError::AlreadyScheduled(light));
        }

        trace.trace(TraceEvent::Scheduled { light, due });
        self.queue.insert(light, due)?;
        Ok(())
    }

    /// Returns when the earliest pending event is due.
    ///
    /// # Errors
    /// Returns `Queue(EmptyQueue)` if nothing is scheduled.
    pub fn next_due(&self) -> Result<I, SimulationError> {
        Ok(self.queue.peek()?.due)
    }

    /// Fires the earliest event if it is due at `now`.
    ///
    /// Advances that light's phase and reschedules it at the fired event's due
    /// time plus the new phase's length. Only one event fires per call even if
    /// several are overdue; the rest fire on later calls in due order.
    ///
    /// # Returns
    /// * `Ok(Some(transition))` - An event fired
    /// * `Ok(None)` - The earliest event is not yet due
    /// * `Err` - The queue is empty, or the successor could not be scheduled
    pub fn fire_due<S>(&mut self, now: I, trace: &mut S) -> Result<Option<Transition<I>>, SimulationError>
    where
        S: TraceSink<I> + ?Sized,
    {
        if now < self.next_due()? {
            return Ok(None);
        }

        let event = self.queue.pop()?;
        let light = self
            .lights
            .get_mut(event.light.0)
            .ok_or(SimulationError::UnknownLight(event.light))?;

        let phase = light.state.advance(light.definition.phase_count());
        let lit = light.state.is_lit();
        trace.trace(TraceEvent::PhaseChanged {
            light: event.light,
            phase,
        });
        trace.trace(TraceEvent::LightChanged {
            light: event.light,
            lit,
        });

        let length = light
            .definition
            .phase(phase)
            .ok_or(SimulationError::UnknownLight(event.light))?;
        let next_due = event
            .due
            .checked_add(length)
            .ok_or(SimulationError::TimeOverflow)?;
        self.schedule(event.light, next_due, trace)?;

        Ok(Some(Transition {
            light: event.light,
            phase,
            lit,
            fired_at: event.due,
            next_due,
        }))
    }

    /// Read-only views of every light in catalog order.
    pub fn lamps(&self) -> impl Iterator<Item = LampView<'_>> + '_ {
        self.lights.iter().enumerate().map(|(index, light)| LampView {
            id: LightId(index),
            name: light.definition.name(),
            color: light.definition.color(),
            lit: light.state.is_lit(),
        })
    }

    /// Returns the definition of the specified light.
    ///
    /// # Errors
    /// Returns `UnknownLight` if the light does not exist.
    pub fn definition(&self, id: LightId) -> Result<&LightDefinition<I::Duration, N>, SimulationError> {
        self.lights
            .get(id.0)
            .map(|light| &light.definition)
            .ok_or(SimulationError::UnknownLight(id))
    }

    /// Returns the phase cursor of the specified light.
    ///
    /// # Errors
    /// Returns `UnknownLight` if the light does not exist.
    pub fn state(&self, id: LightId) -> Result<LightState, SimulationError> {
        self.lights
            .get(id.0)
            .map(|light| light.state)
            .ok_or(SimulationError::UnknownLight(id))
    }

    /// Read access to the pending events.
    pub fn queue(&self) -> &EventQueue<I, MAX_LIGHTS> {
        &self.queue
    }

    /// Returns the number of lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Returns true if the simulation holds no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

impl<I, const N: usize, const MAX_LIGHTS: usize> Default for Simulation<I, N, MAX_LIGHTS>
where
    I: TimeInstant,
    I::Duration: TimeDuration,
{
    fn default() -> Self {
        Self::new()
    }
}
