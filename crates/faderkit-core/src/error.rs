//! Configuration error types.
//!
//! Only malformed parameter definitions are errors. Out-of-range runtime
//! values and unrecognized interaction events are never reported here; they
//! are clamped, snapped or ignored by the converter and controllers.

use std::fmt;

/// Errors raised while validating a parameter definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Continuous range is empty, inverted or not finite.
    InvalidRange { id: String, min: f64, max: f64 },

    /// Step is not positive or does not evenly divide the range.
    InvalidStep { id: String, step: f64, span: f64 },

    /// Discrete parameter declared without options.
    EmptyOptions { id: String },

    /// Two discrete options share the same value.
    DuplicateOption { id: String, value: String },

    /// Explicit `midi_value` on a custom-mapped option exceeds the resolution.
    InvalidMidiValue { id: String, midi_value: u64, max_midi: u64 },

    /// MIDI resolution outside {7, 8, 14, 16, 32, 64}.
    InvalidResolution(u32),

    /// Scale constructor received an unusable shape parameter.
    InvalidScale(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { id, min, max } => {
                write!(f, "Parameter '{}': invalid range {}..={} (min must be < max)", id, min, max)
            }
            Self::InvalidStep { id, step, span } => write!(
                f,
                "Parameter '{}': step {} does not evenly divide range span {}",
                id, step, span
            ),
            Self::EmptyOptions { id } => {
                write!(f, "Parameter '{}': discrete parameter requires at least one option", id)
            }
            Self::DuplicateOption { id, value } => {
                write!(f, "Parameter '{}': duplicate option value {}", id, value)
            }
            Self::InvalidMidiValue { id, midi_value, max_midi } => write!(
                f,
                "Parameter '{}': option MIDI value {} exceeds maximum {}",
                id, midi_value, max_midi
            ),
            Self::InvalidResolution(bits) => write!(
                f,
                "Invalid MIDI resolution: {} bits (expected 7, 8, 14, 16, 32 or 64)",
                bits
            ),
            Self::InvalidScale(msg) => write!(f, "Invalid scale: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for parameter configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
