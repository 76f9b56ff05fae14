//! # faderkit-core
//!
//! Parameter model for audio plugin user interfaces.
//!
//! Every parameter value exists in three domains:
//!
//! - **Real** - what the application sees (Hz, dB, `true`, `"saw"`)
//! - **Normalized** - UI position in `[0, 1]`, after the parameter's scale
//! - **MIDI** - integer on a grid of `2^bits` values, the pivot for both
//!
//! [`AudioParameterConverter`] moves values between the domains so that a
//! value quantized once stays put on every later round trip. The interaction
//! controllers turn pointer and keyboard input into value changes and note
//! events without owning any rendering.
//!
//! ## Modules
//!
//! - [`parameter`] - [`AudioParameter`] and its three kinds
//! - [`converter`] - Real/normalized/MIDI conversion
//! - [`scale`] - Normalized-position curves (linear, log, exp, power, custom)
//! - [`factories`] - Common parameter presets
//! - [`selector`] - Enums as discrete options ([`SelectorOptions`])
//! - [`continuous`] - Drag/wheel/keyboard adjustment of continuous values
//! - [`discrete`] - Click/keyboard stepping through discrete options
//! - [`note`] - Multi-pointer note on/off with glissando
//! - [`format`] - Display strings and text entry
//!
//! ## Example
//!
//! ```
//! use faderkit_core::{create_midi_standard_7bit, AudioParameterConverter, RealValue};
//!
//! let volume = create_midi_standard_7bit("Volume");
//! let converter = AudioParameterConverter::new(volume).unwrap();
//!
//! assert_eq!(converter.to_midi(&RealValue::Number(127.0)), 127);
//! assert_eq!(converter.from_midi(64), RealValue::Number(64.0));
//! ```

pub mod continuous;
pub mod converter;
pub mod discrete;
pub mod error;
pub mod factories;
pub mod format;
pub mod input;
pub mod note;
pub mod parameter;
pub mod scale;
pub mod selector;
pub mod types;

// Re-exports for convenience
pub use continuous::{AdjustConfig, ContinuousControllerConfig, ContinuousInteractionController};
pub use converter::AudioParameterConverter;
pub use discrete::{DiscreteControllerConfig, DiscreteInteractionController};
pub use error::{ConfigError, ConfigResult};
pub use factories::{
    create_midi_standard_7bit, create_momentary, create_selector, create_selector_from, create_switch,
    parameter_id,
};
pub use format::{format_value, parse_value, Formatter};
pub use input::Key;
pub use note::{NoteControllerConfig, NoteInteractionController};
pub use parameter::{
    AudioParameter, BooleanMode, BooleanParameter, ContinuousParameter, DiscreteOption, DiscreteParameter,
    MidiMapping,
};
pub use scale::{ExpScale, LinearScale, LogScale, PowerScale, Scale, ScaleFunction};
pub use selector::SelectorOptions;
pub use types::{MidiResolution, MidiValue, NormalizedValue, NoteNumber, PointerId, RealValue};
