//! Common types used throughout faderkit: the three value domains and the
//! identifiers controllers key their state by.

use std::fmt;

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Value Domains
// =============================================================================
//
// MIDI value:       integer in [0, MaxMidi], the quantization pivot.
// Normalized value: midi / MaxMidi, always a point on the MIDI grid.
// Real value:       what the application sees (Hz, on/off, "Saw").
//
// Every conversion between normalized and real goes through the MIDI grid so
// that a control never displays a position the host could not reproduce.
// =============================================================================

/// Integer value on a parameter's MIDI grid.
pub type MidiValue = u64;

/// Position within a parameter's travel, 0.0 to 1.0.
pub type NormalizedValue = f64;

/// Pointer identifier as delivered by the UI layer (mouse, pen, touch).
pub type PointerId = u32;

/// MIDI note number (0-127).
pub type NoteNumber = u8;

/// Bit depth of a parameter's MIDI grid.
///
/// Defines `MaxMidi = 2^bits - 1`. 7 bits matches a classic MIDI CC, 14 bits
/// an MSB/LSB CC pair, and the wider depths give continuous parameters a
/// pivot fine enough to be invisible in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum MidiResolution {
    /// Standard MIDI 1.0 CC (0-127).
    Bits7,
    /// One byte (0-255).
    Bits8,
    /// MSB/LSB CC pair (0-16383).
    Bits14,
    /// 16-bit (0-65535).
    Bits16,
    /// 32-bit, MIDI 2.0 controller depth.
    #[default]
    Bits32,
    /// 64-bit. Continuous round trips are limited by `f64` precision here.
    Bits64,
}

impl MidiResolution {
    /// All supported resolutions, narrowest first.
    pub const ALL: [MidiResolution; 6] = [
        Self::Bits7,
        Self::Bits8,
        Self::Bits14,
        Self::Bits16,
        Self::Bits32,
        Self::Bits64,
    ];

    /// Look up a resolution by bit count.
    pub fn from_bits(bits: u32) -> ConfigResult<Self> {
        match bits {
            7 => Ok(Self::Bits7),
            8 => Ok(Self::Bits8),
            14 => Ok(Self::Bits14),
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            other => Err(ConfigError::InvalidResolution(other)),
        }
    }

    /// Number of bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits7 => 7,
            Self::Bits8 => 8,
            Self::Bits14 => 14,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Largest value on the grid, `2^bits - 1`.
    #[inline]
    pub const fn max_midi(self) -> MidiValue {
        match self {
            Self::Bits64 => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }

    /// `max_midi()` as a float, for scaling.
    #[inline]
    pub fn max_midi_f64(self) -> f64 {
        self.max_midi() as f64
    }
}

impl TryFrom<u32> for MidiResolution {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<MidiResolution> for u32 {
    fn from(resolution: MidiResolution) -> Self {
        resolution.bits()
    }
}

// =============================================================================
// Real Values
// =============================================================================

/// Application-facing value of a parameter.
///
/// Continuous parameters produce numbers, boolean parameters booleans, and
/// discrete parameters whatever their options hold (numbers or strings).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RealValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RealValue {
    /// The number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric reading used by continuous parameters.
    ///
    /// Booleans read as 1/0 and text is parsed; unparseable text yields `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Truthiness used by boolean parameters.
    ///
    /// Numbers are true when non-zero (NaN is false), text when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for RealValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RealValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for RealValue {
    fn from(n: f32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for RealValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for RealValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for RealValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RealValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
