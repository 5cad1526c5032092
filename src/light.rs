use crate::time::{TimeDuration, millis_from_secs};
use crate::types::{LightColor, LightError};
use heapless::Vec;

/// A navigation light's characteristic: a named, coloured, repeating sequence
/// of on and off phases.
///
/// Phases alternate starting with an "on" phase, so even phase indices are lit
/// and odd ones are dark. The sequence repeats forever.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of phases this light can hold
#[derive(Debug, Clone)]
pub struct LightDefinition<D: TimeDuration, const N: usize> {
    name: &'static str,
    color: LightColor,
    phases: Vec<D, N>,
}

impl<D: TimeDuration, const N: usize> LightDefinition<D, N> {
    /// Creates a new definition builder.
    pub fn builder(name: &'static str, color: LightColor) -> LightBuilder<D, N> {
        LightBuilder::new(name, color)
    }

    /// Builds a definition from phase lengths given in seconds.
    ///
    /// # Errors
    /// * `EmptySequence` - `secs` is empty
    /// * `NonPositiveDuration` - A length rounds to less than one millisecond
    /// * `CapacityExceeded` - More than `N` phases
    pub fn from_secs(name: &'static str, color: LightColor, secs: &[f32]) -> Result<Self, LightError> {
        let mut builder = Self::builder(name, color);
        for &length in secs {
            let millis = millis_from_secs(length).ok_or(LightError::NonPositiveDuration)?;
            builder = builder.phase(D::from_millis(millis))?;
        }
        builder.build()
    }

    /// Display name, passed through for presentation only.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Display colour.
    pub fn color(&self) -> LightColor {
        self.color
    }

    /// Returns the number of phases in the sequence.
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Returns the length of the phase at the given index.
    pub fn phase(&self, index: usize) -> Option<D> {
        self.phases.get(index).copied()
    }

    /// Returns all phase lengths in order.
    pub fn phases(&self) -> &[D] {
        &self.phases
    }

    /// Calculates the length of one complete pass through the sequence.
    pub fn total_duration(&self) -> D {
        let total_millis: u64 = self.phases.iter().map(|p| p.as_millis()).sum();
        D::from_millis(total_millis)
    }
}

/// Builder for constructing validated light definitions.
#[derive(Debug)]
pub struct LightBuilder<D: TimeDuration, const N: usize> {
    name: &'static str,
    color: LightColor,
    phases: Vec<D, N>,
}

impl<D: TimeDuration, const N: usize> LightBuilder<D, N> {
    /// Creates a new builder with no phases.
    pub fn new(name: &'static str, color: LightColor) -> Self {
        Self {
            name,
            color,
            phases: Vec::new(),
        }
    }

    /// Appends a phase to the sequence.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the sequence already holds `N` phases.
    pub fn phase(mut self, duration: D) -> Result<Self, LightError> {
        self.phases
            .push(duration)
            .map_err(|_| LightError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the definition.
    ///
    /// # Errors
    /// * `EmptySequence` - No phases were added
    /// * `NonPositiveDuration` - A phase has zero length
    pub fn build(self) -> Result<LightDefinition<D, N>, LightError> {
        if self.phases.is_empty() {
            return Err(LightError::EmptySequence);
        }

        if self.phases.iter().any(|p| p.as_millis() == 0) {
            return Err(LightError::NonPositiveDuration);
        }

        Ok(LightDefinition {
            name: self.name,
            color: self.color,
            phases: self.phases,
        })
    }
}

/// Cursor into a light's phase sequence.
///
/// Starts unset (dark) and enters phase 0 on the light's first fired event,
/// then steps through the sequence circularly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightState {
    phase: Option<usize>,
}

impl LightState {
    /// Creates a state that has not started yet.
    pub const fn new() -> Self {
        Self { phase: None }
    }

    /// Current phase index, or `None` before the first event fired.
    pub fn phase(&self) -> Option<usize> {
        self.phase
    }

    /// True while the current phase is an "on" phase.
    pub fn is_lit(&self) -> bool {
        matches!(self.phase, Some(index) if index % 2 == 0)
    }

    /// Moves to the next phase of a sequence with `phase_count` phases and
    /// returns the new index.
    pub fn advance(&mut self, phase_count: usize) -> usize {
        let next = match self.phase {
            Some(index) if index + 1 < phase_count => index + 1,
            _ => 0,
        };
        self.phase = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_light_is_dark() {
        let state = LightState::new();
        assert_eq!(state.phase(), None);
        assert!(!state.is_lit());
    }

    #[test]
    fn first_advance_enters_phase_zero() {
        let mut state = LightState::new();
        assert_eq!(state.advance(4), 0);
        assert!(state.is_lit());
    }

    #[test]
    fn advance_wraps_after_last_phase() {
        let mut state = LightState::new();
        state.advance(3);
        assert_eq!(state.advance(3), 1);
        assert_eq!(state.advance(3), 2);
        assert_eq!(state.advance(3), 0);
    }

    #[test]
    fn single_phase_sequence_stays_lit() {
        let mut state = LightState::new();
        for _ in 0..5 {
            assert_eq!(state.advance(1), 0);
            assert!(state.is_lit());
        }
    }
}
