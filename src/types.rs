//! Core types shared by the catalog, queue and simulation.

use palette::Srgb;

/// An identifier for a light within a simulation.
///
/// This is the light's index in catalog order. It is assigned when the light
/// is added to a [`Simulation`](crate::Simulation) and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightId(pub usize);

impl From<usize> for LightId {
    fn from(id: usize) -> Self {
        LightId(id)
    }
}

impl From<LightId> for usize {
    fn from(id: LightId) -> Self {
        id.0
    }
}

impl core::fmt::Display for LightId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display colour of a navigation light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightColor {
    Red,
    Green,
    White,
    Black,
}

impl LightColor {
    /// Returns the lamp colour in sRGB (0.0-1.0 range).
    pub const fn srgb(self) -> Srgb {
        match self {
            LightColor::Red => Srgb::new(1.0, 0.0, 0.0),
            LightColor::Green => Srgb::new(0.0, 1.0, 0.0),
            LightColor::White => Srgb::new(1.0, 1.0, 1.0),
            LightColor::Black => Srgb::new(0.0, 0.0, 0.0),
        }
    }

    /// Lowercase colour name.
    pub const fn name(self) -> &'static str {
        match self {
            LightColor::Red => "red",
            LightColor::Green => "green",
            LightColor::White => "white",
            LightColor::Black => "black",
        }
    }
}

impl core::fmt::Display for LightColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Event queue errors.
///
/// Both variants are fatal for a running simulation: capacity is a static
/// bound and an empty queue means a fired event was not replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Insertion attempted while the queue holds its maximum number of events.
    CapacityExceeded,

    /// Peek or pop on a queue with no pending events.
    EmptyQueue,
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::CapacityExceeded => {
                write!(f, "event queue full, event not added")
            }
            QueueError::EmptyQueue => {
                write!(f, "event queue is empty")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}

/// Light definition validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightError {
    /// No phases provided.
    EmptySequence,

    /// A phase length is zero, negative or not a number.
    NonPositiveDuration,

    /// Phase capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for LightError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LightError::EmptySequence => {
                write!(f, "light sequence must have at least one phase")
            }
            LightError::NonPositiveDuration => {
                write!(f, "light phases must last at least one millisecond")
            }
            LightError::CapacityExceeded => {
                write!(f, "light sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LightError {}
