//! # faderkit
//!
//! Audio parameter model for plugin user interfaces.
//!
//! faderkit describes knobs, switches, selectors and keyboards as typed
//! parameters, converts their values between the real, normalized and MIDI
//! domains, and turns pointer/keyboard input into value changes and note
//! events. Rendering is left to the host UI.
//!
//! ## Architecture
//!
//! ```text
//! UI events (pointer, wheel, keys)
//!        ↓
//! Interaction controllers (continuous / discrete / note)
//!        ↓
//! AudioParameterConverter  ←→  MIDI / host automation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use faderkit::prelude::*;
//!
//! let cutoff = ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0)
//!     .with_unit("Hz")
//!     .with_scale(Scale::log(1000.0))
//!     .with_default(1000.0);
//!
//! let converter = AudioParameterConverter::new(cutoff.clone()).unwrap();
//! let midi = converter.to_midi(&RealValue::Number(1000.0));
//! let stable = converter.from_midi(midi);
//! assert_eq!(converter.to_midi(&stable), midi);
//!
//! let mut knob = ContinuousInteractionController::new(
//!     cutoff,
//!     ContinuousControllerConfig::new(1000.0),
//! ).unwrap();
//! assert!(knob.handle_drag(20.0, false) > 1000.0);
//! ```

// Re-export sub-crates
pub use faderkit_core as core;

// Re-export derive macros when feature is enabled
#[cfg(feature = "derive")]
pub use faderkit_macros::Selector;

/// Prelude module for convenient imports.
///
/// ```rust
/// use faderkit::prelude::*;
/// ```
pub mod prelude {
    pub use faderkit_core::{
        // Value domains
        MidiResolution, MidiValue, NormalizedValue, NoteNumber, PointerId, RealValue,
        // Parameter definitions
        AudioParameter, BooleanMode, BooleanParameter, ContinuousParameter, DiscreteOption,
        DiscreteParameter, MidiMapping, SelectorOptions,
        // Scales
        Scale, ScaleFunction,
        // Conversion
        AudioParameterConverter,
        // Factories
        create_midi_standard_7bit, create_momentary, create_selector, create_selector_from,
        create_switch,
        // Controllers
        AdjustConfig, ContinuousControllerConfig, ContinuousInteractionController,
        DiscreteControllerConfig, DiscreteInteractionController, NoteControllerConfig,
        NoteInteractionController,
        // Formatting
        format_value, parse_value, Formatter,
        // Error types
        ConfigError, ConfigResult,
    };

    #[cfg(feature = "derive")]
    pub use faderkit_macros::Selector;
}
