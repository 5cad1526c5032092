//! Presentation seam for light states.
//!
//! Provides the [`LightPanel`] trait for hardware or terminal abstraction and
//! [`LampView`], the read-only snapshot of one light handed to it.

use crate::LAMP_OFF;
use crate::types::{LightColor, LightId};
use palette::Srgb;

/// Read-only view of one light for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampView<'a> {
    pub id: LightId,
    pub name: &'a str,
    pub color: LightColor,
    pub lit: bool,
}

impl LampView<'_> {
    /// Colour the lamp shows right now: its own colour when lit, off otherwise.
    pub fn srgb(&self) -> Srgb {
        if self.lit { self.color.srgb() } else { LAMP_OFF }
    }
}

/// Trait for abstracting the display of a bank of lights.
///
/// Implement this for your output (GPIO pins, an LED strip, a terminal) to
/// let the polling driver show light changes.
pub trait LightPanel {
    /// Called once per fired event with the light's new signal.
    ///
    /// Implementations driving one output per light switch it here. The
    /// default does nothing.
    fn light_changed(&mut self, _light: LightId, _lit: bool) {}

    /// Redraws every light in catalog order. Called after each fired event.
    fn refresh<'a, L>(&mut self, lamps: L)
    where
        L: Iterator<Item = LampView<'a>>;
}
