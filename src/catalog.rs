//! Built-in light catalogs.
//!
//! Sequence lengths are in seconds and alternate on and off, starting with an
//! "on" phase.

use crate::light::LightDefinition;
use crate::time::TimeDuration;
use crate::types::{LightColor, LightError};

/// Static description of one light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub color: LightColor,
    pub sequence: &'static [f32],
}

impl CatalogEntry {
    pub const fn new(name: &'static str, color: LightColor, sequence: &'static [f32]) -> Self {
        Self {
            name,
            color,
            sequence,
        }
    }

    /// Converts the entry into a validated light definition.
    pub fn definition<D: TimeDuration, const N: usize>(&self) -> Result<LightDefinition<D, N>, LightError> {
        LightDefinition::from_secs(self.name, self.color, self.sequence)
    }

    /// Length of one pass through the sequence, in seconds.
    pub fn period_secs(&self) -> f32 {
        self.sequence.iter().sum()
    }
}

/// Group flashing (2) every 5 s.
const CHANNEL_FL2_5S: &[f32] = &[0.7, 0.9, 0.7, 2.7];

/// Group flashing (2) every 10 s.
const CHANNEL_FL2_10S: &[f32] = &[1.0, 1.2, 1.0, 6.8];

/// Six quick flashes then a long eclipse.
const PIER_Q6: &[f32] = &[
    0.04, 0.06, //
    0.04, 0.06, //
    0.04, 0.06, //
    0.04, 0.06, //
    0.04, 0.06, //
    0.04, 0.06, //
    0.04, 0.3,
];

const CARDINAL_Q: &[f32] = &[0.3, 0.5];

/// Two pairs of channel markers.
pub const CHANNEL: &[CatalogEntry] = &[
    CatalogEntry::new("Channel Port 1", LightColor::Red, CHANNEL_FL2_5S),
    CatalogEntry::new("Channel Starboard 1", LightColor::Green, CHANNEL_FL2_5S),
    CatalogEntry::new("Channel Port 2", LightColor::Red, CHANNEL_FL2_10S),
    CatalogEntry::new("Channel Starboard 2", LightColor::Green, CHANNEL_FL2_10S),
];

/// Channel markers, a pier head pair and a north cardinal.
pub const HARBOUR: &[CatalogEntry] = &[
    CatalogEntry::new("Channel Port 1", LightColor::Red, CHANNEL_FL2_5S),
    CatalogEntry::new("Channel Starboard 1", LightColor::Green, CHANNEL_FL2_5S),
    CatalogEntry::new("Channel Port 2", LightColor::Red, CHANNEL_FL2_10S),
    CatalogEntry::new("Channel Starboard 2", LightColor::Green, CHANNEL_FL2_10S),
    CatalogEntry::new("Pier 1 Port", LightColor::Red, PIER_Q6),
    CatalogEntry::new("Pier 1 Starboard", LightColor::Green, PIER_Q6),
    CatalogEntry::new("Northern Cardinal 1", LightColor::White, CARDINAL_Q),
];

/// A named built-in catalog with its default polling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    /// [`CHANNEL`], polled every 10 ms.
    Channel,
    /// [`HARBOUR`], polled every 5 ms.
    Harbour,
}

impl Preset {
    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            Preset::Channel => CHANNEL,
            Preset::Harbour => HARBOUR,
        }
    }

    /// Default polling tick in milliseconds.
    pub fn tick_ms(self) -> u32 {
        match self {
            Preset::Channel => 10,
            Preset::Harbour => 5,
        }
    }

    /// Event queue capacity the catalog was designed for.
    pub fn queue_capacity(self) -> usize {
        match self {
            Preset::Channel => 5,
            Preset::Harbour => 10,
        }
    }
}
