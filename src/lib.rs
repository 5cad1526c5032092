#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightDefinition`**: A light's name, colour and repeating on/off phase lengths
//! - **`LightState`**: Cursor into a light's phases; even phases are lit
//! - **`EventQueue`**: Fixed-capacity queue of pending transitions sorted by due time
//! - **`Simulation`**: Owns the lights and the queue; seeds and fires events
//! - **`PollingDriver`**: Polls the clock, fires at most one event per tick, then sleeps
//! - **`LightPanel`**: Trait to implement for your display
//! - **`TraceSink`**: Trait to implement to observe scheduling decisions
//! - **`OffsetSource`**: Injectable source of initial phase offsets
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Lamp colours are exposed as `Srgb<f32>` (0.0-1.0 range). Sleeping between
//! polls goes through `embedded_hal::delay::DelayNs`, so any HAL delay works.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod catalog;
pub mod driver;
pub mod light;
pub mod offset;
pub mod panel;
pub mod queue;
pub mod simulation;
pub mod time;
pub mod trace;
pub mod types;

pub use catalog::{CatalogEntry, Preset};
pub use driver::PollingDriver;
pub use light::{LightBuilder, LightDefinition, LightState};
pub use offset::{FixedOffset, NoOffset, OffsetSource, UniformOffset};
pub use panel::{LampView, LightPanel};
pub use queue::{EventQueue, ScheduledEvent};
pub use simulation::{Simulation, SimulationError, Transition};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use trace::{NoTrace, TraceEvent, TraceSink};
pub use types::{LightColor, LightError, LightId, QueueError};

/// Colour shown by a lamp in a dark phase.
pub const LAMP_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
