//! Sources for the initial phase offset of each light.
//!
//! Each light's first event is placed at a random point within one pass of
//! its sequence so that lights sharing a characteristic do not blink in
//! lockstep. The source is injected so runs can be made reproducible.

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

/// Supplies offset fractions in the range `[0.0, 1.0)`.
pub trait OffsetSource {
    /// Returns the next fraction of a light's total sequence length to delay
    /// its first event by.
    fn next_fraction(&mut self) -> f32;
}

/// Starts every light immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOffset;

impl OffsetSource for NoOffset {
    fn next_fraction(&mut self) -> f32 {
        0.0
    }
}

/// Starts every light at the same fraction of its sequence.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffset(pub f32);

impl OffsetSource for FixedOffset {
    fn next_fraction(&mut self) -> f32 {
        self.0
    }
}

/// Uniformly distributed offsets drawn from a random number generator.
#[derive(Debug, Clone)]
pub struct UniformOffset<R: RngCore> {
    rng: R,
}

impl<R: RngCore> UniformOffset<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformOffset<SmallRng> {
    /// Creates a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates an unseeded source from operating system entropy.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: RngCore> OffsetSource for UniformOffset<R> {
    fn next_fraction(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }
}

/// Clamps a fraction into `[0.0, 1.0)`, mapping NaN to zero.
pub(crate) fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() || fraction < 0.0 {
        0.0
    } else if fraction >= 1.0 {
        // Largest f32 below one.
        1.0 - f32::EPSILON / 2.0
    } else {
        fraction
    }
}
