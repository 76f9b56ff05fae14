//! Ready-made parameter configurations.
//!
//! Each factory derives the parameter ID from its display name (lower-cased,
//! runs of other characters collapsed to `-`), so `"Filter Mode"` becomes
//! `"filter-mode"`. Use the `with_*` builders on the returned parameter to
//! adjust anything else.

use crate::parameter::{
    BooleanMode, BooleanParameter, ContinuousParameter, DiscreteOption, DiscreteParameter,
    MidiMapping,
};
use crate::selector::SelectorOptions;
use crate::types::MidiResolution;

/// A classic 7-bit MIDI CC: 0 to 127 in steps of 1.
pub fn create_midi_standard_7bit(name: &str) -> ContinuousParameter {
    ContinuousParameter::new(parameter_id(name), name, 0.0..=127.0)
        .with_step(1.0)
        .with_resolution(MidiResolution::Bits7)
}

/// Toggle switch, off by default.
pub fn create_switch(name: &str) -> BooleanParameter {
    BooleanParameter::new(parameter_id(name), name).with_mode(BooleanMode::Toggle)
}

/// Momentary button, on only while held.
pub fn create_momentary(name: &str) -> BooleanParameter {
    BooleanParameter::new(parameter_id(name), name).with_mode(BooleanMode::Momentary)
}

/// Spread-mapped 7-bit selector over `options`.
pub fn create_selector(name: &str, options: Vec<DiscreteOption>) -> DiscreteParameter {
    DiscreteParameter::new(parameter_id(name), name, options)
        .with_mapping(MidiMapping::Spread)
        .with_resolution(MidiResolution::Bits7)
}

/// Selector whose options are the variants of `E`, defaulting to `E`'s default.
pub fn create_selector_from<E: SelectorOptions>(name: &str) -> DiscreteParameter {
    create_selector(name, E::options()).with_default(E::default_value().to_value())
}

/// Parameter ID derived from a display name.
pub fn parameter_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if id.is_empty() {
        id.push_str("parameter");
    }
    id
}
