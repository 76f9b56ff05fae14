//! Parameter definitions.
//!
//! An [`AudioParameter`] is an immutable description of one control: its
//! kind, range or options, and the MIDI resolution of its quantization grid.
//! Parameters carry no current value; converters and controllers are built
//! from them.
//!
//! # Parameter Kinds
//!
//! - [`ContinuousParameter`] - Numeric range with optional step and scale
//! - [`BooleanParameter`] - On/off, toggle or momentary
//! - [`DiscreteParameter`] - Ordered list of options (waveforms, modes)
//!
//! # Example
//!
//! ```
//! use faderkit_core::parameter::{AudioParameter, ContinuousParameter};
//! use faderkit_core::scale::Scale;
//!
//! let cutoff = ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0)
//!     .with_unit("Hz")
//!     .with_scale(Scale::log(1000.0))
//!     .with_default(1000.0);
//!
//! let param = AudioParameter::from(cutoff);
//! assert!(param.validate().is_ok());
//! ```

use std::ops::RangeInclusive;

use faderkit_utils::{fnv1a_32, round_half_up};

use crate::error::{ConfigError, ConfigResult};
use crate::scale::{Scale, ScaleFunction};
use crate::types::{MidiResolution, MidiValue, RealValue};

/// Relative tolerance when checking that a step divides the range.
const STEP_TOLERANCE: f64 = 1e-9;

// =============================================================================
// ContinuousParameter
// =============================================================================

/// Numeric parameter over `min..=max`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContinuousParameter {
    pub id: String,
    pub name: String,
    pub min: f64,
    pub max: f64,
    /// Step grid on the real axis, anchored at `min`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub step: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unit: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Scale::is_linear"))]
    pub scale: Scale,
    #[cfg_attr(feature = "serde", serde(default))]
    pub midi_resolution: MidiResolution,
}

impl ContinuousParameter {
    /// Create a linear, unstepped parameter at the default MIDI resolution.
    pub fn new(id: impl Into<String>, name: impl Into<String>, range: RangeInclusive<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min: *range.start(),
            max: *range.end(),
            step: None,
            default_value: None,
            unit: None,
            scale: Scale::Linear,
            midi_resolution: MidiResolution::default(),
        }
    }

    /// Snap real values to multiples of `step` from `min`.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the display unit ("Hz", "dB", "ms").
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the normalized-position scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the MIDI resolution.
    pub fn with_resolution(mut self, resolution: MidiResolution) -> Self {
        self.midi_resolution = resolution;
        self
    }

    /// `max - min`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Default value clamped into range, or `min` when unset.
    pub fn default_or_min(&self) -> f64 {
        match self.default_value {
            Some(v) if v.is_finite() => v.clamp(self.min, self.max),
            _ => self.min,
        }
    }

    /// Unquantized normalized position of a real value (scale applied).
    ///
    /// NaN reads as `min`; out-of-range values clamp to the ends of travel.
    pub fn position_of(&self, value: f64) -> f64 {
        let value = if value.is_nan() { self.min } else { value };
        let fraction = ((value - self.min) / self.span()).clamp(0.0, 1.0);
        self.scale.forward(fraction)
    }

    /// Real value at an unquantized normalized position (no step snapping).
    pub fn value_at(&self, position: f64) -> f64 {
        let t = self.scale.inverse(position);
        // Endpoint-exact interpolation: t = 0 gives min, t = 1 gives max.
        (self.min * (1.0 - t) + self.max * t).clamp(self.min, self.max)
    }

    /// Snap to the nearest multiple of `step` from `min` (no-op without a step).
    pub fn snap_to_step(&self, value: f64) -> f64 {
        match self.step {
            Some(step) if step > 0.0 => {
                let steps = round_half_up((value - self.min) / step);
                (self.min + steps * step).clamp(self.min, self.max)
            }
            _ => value,
        }
    }

    /// Check range and step invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min < self.max) {
            return Err(ConfigError::InvalidRange {
                id: self.id.clone(),
                min: self.min,
                max: self.max,
            });
        }

        if let Some(step) = self.step {
            let span = self.span();
            let invalid = ConfigError::InvalidStep {
                id: self.id.clone(),
                step,
                span,
            };
            if !(step.is_finite() && step > 0.0 && step <= span) {
                return Err(invalid);
            }
            let steps = span / step;
            if (steps - steps.round()).abs() > STEP_TOLERANCE * steps.max(1.0) {
                return Err(invalid);
            }
        }

        Ok(())
    }
}

// =============================================================================
// BooleanParameter
// =============================================================================

/// How a boolean control reacts to a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BooleanMode {
    /// Each press flips the value.
    #[default]
    Toggle,
    /// True only while held.
    Momentary,
}

/// On/off parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BooleanParameter {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: BooleanMode,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub true_label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub false_label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub midi_resolution: MidiResolution,
}

impl BooleanParameter {
    /// Create a toggle defaulting to off.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_value: None,
            mode: BooleanMode::Toggle,
            true_label: None,
            false_label: None,
            midi_resolution: MidiResolution::default(),
        }
    }

    pub fn with_default(mut self, value: bool) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_mode(mut self, mode: BooleanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Display labels for the two states.
    pub fn with_labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        self.true_label = Some(true_label.into());
        self.false_label = Some(false_label.into());
        self
    }

    pub fn with_resolution(mut self, resolution: MidiResolution) -> Self {
        self.midi_resolution = resolution;
        self
    }

    /// Label for a state, falling back to "On"/"Off".
    pub fn label(&self, value: bool) -> &str {
        if value {
            self.true_label.as_deref().unwrap_or("On")
        } else {
            self.false_label.as_deref().unwrap_or("Off")
        }
    }
}

// =============================================================================
// DiscreteParameter
// =============================================================================

/// Strategy for placing discrete options on the MIDI grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MidiMapping {
    /// Options spread evenly over `[0, MaxMidi]`.
    #[default]
    Spread,
    /// Option index is the MIDI value (per-index CC values).
    Sequential,
    /// Each option's explicit `midi_value`, spread for options without one.
    Custom,
}

/// One entry of a discrete parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscreteOption {
    pub value: RealValue,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub midi_value: Option<MidiValue>,
}

impl DiscreteOption {
    pub fn new(value: impl Into<RealValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            midi_value: None,
        }
    }

    /// Pin this option to an explicit MIDI value (used by [`MidiMapping::Custom`]).
    pub fn with_midi_value(mut self, midi_value: MidiValue) -> Self {
        self.midi_value = Some(midi_value);
        self
    }
}

/// Parameter choosing among an ordered list of options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscreteParameter {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<RealValue>,
    pub options: Vec<DiscreteOption>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub midi_mapping: MidiMapping,
    #[cfg_attr(feature = "serde", serde(default))]
    pub midi_resolution: MidiResolution,
}

impl DiscreteParameter {
    /// Create a spread-mapped parameter over `options`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, options: Vec<DiscreteOption>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_value: None,
            options,
            midi_mapping: MidiMapping::Spread,
            midi_resolution: MidiResolution::default(),
        }
    }

    pub fn with_default(mut self, value: impl Into<RealValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_mapping(mut self, mapping: MidiMapping) -> Self {
        self.midi_mapping = mapping;
        self
    }

    pub fn with_resolution(mut self, resolution: MidiResolution) -> Self {
        self.midi_resolution = resolution;
        self
    }

    /// Index of the option whose value equals `value`.
    pub fn index_of(&self, value: &RealValue) -> Option<usize> {
        self.options.iter().position(|o| &o.value == value)
    }

    /// Index of the default option; `0` when unset or unmatched.
    pub fn default_index(&self) -> usize {
        self.default_value
            .as_ref()
            .and_then(|v| self.index_of(v))
            .unwrap_or(0)
    }

    /// Resolve any real value to an option index.
    ///
    /// Exact matches win. Unmatched numbers snap to the numerically closest
    /// numeric option (lower index on ties); everything else falls back to
    /// the default option.
    pub fn resolve_index(&self, value: &RealValue) -> usize {
        if let Some(index) = self.index_of(value) {
            return index;
        }

        if let Some(target) = value.as_number().filter(|n| !n.is_nan()) {
            let mut best: Option<(usize, f64)> = None;
            for (i, option) in self.options.iter().enumerate() {
                if let Some(n) = option.value.as_number() {
                    let distance = (n - target).abs();
                    if best.map_or(true, |(_, d)| distance < d) {
                        best = Some((i, distance));
                    }
                }
            }
            if let Some((index, _)) = best {
                log::trace!("'{}': snapped {} to option {}", self.id, target, index);
                return index;
            }
        }

        log::trace!("'{}': unmatched value {}, using default option", self.id, value);
        self.default_index()
    }

    /// Check option invariants against the given grid size.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.options.is_empty() {
            return Err(ConfigError::EmptyOptions { id: self.id.clone() });
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.value == option.value) {
                return Err(ConfigError::DuplicateOption {
                    id: self.id.clone(),
                    value: option.value.to_string(),
                });
            }
        }

        if self.midi_mapping == MidiMapping::Custom {
            let max_midi = self.midi_resolution.max_midi();
            for option in &self.options {
                if let Some(midi_value) = option.midi_value.filter(|&m| m > max_midi) {
                    return Err(ConfigError::InvalidMidiValue {
                        id: self.id.clone(),
                        midi_value,
                        max_midi,
                    });
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// AudioParameter
// =============================================================================

/// Any parameter, discriminated by kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum AudioParameter {
    Continuous(ContinuousParameter),
    Boolean(BooleanParameter),
    Discrete(DiscreteParameter),
}

impl AudioParameter {
    /// String ID.
    pub fn id(&self) -> &str {
        match self {
            Self::Continuous(p) => &p.id,
            Self::Boolean(p) => &p.id,
            Self::Discrete(p) => &p.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Continuous(p) => &p.name,
            Self::Boolean(p) => &p.name,
            Self::Discrete(p) => &p.name,
        }
    }

    /// Stable numeric ID (FNV-1a of the string ID).
    pub fn hashed_id(&self) -> u32 {
        fnv1a_32(self.id())
    }

    /// Kind discriminant as used in serialized definitions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Continuous(_) => "continuous",
            Self::Boolean(_) => "boolean",
            Self::Discrete(_) => "discrete",
        }
    }

    pub fn midi_resolution(&self) -> MidiResolution {
        match self {
            Self::Continuous(p) => p.midi_resolution,
            Self::Boolean(p) => p.midi_resolution,
            Self::Discrete(p) => p.midi_resolution,
        }
    }

    /// `2^resolution - 1`.
    pub fn max_midi(&self) -> MidiValue {
        self.midi_resolution().max_midi()
    }

    /// Default real value, after fallbacks.
    pub fn default_value(&self) -> RealValue {
        match self {
            Self::Continuous(p) => RealValue::Number(p.default_or_min()),
            Self::Boolean(p) => RealValue::Bool(p.default_value.unwrap_or(false)),
            Self::Discrete(p) => p
                .options
                .get(p.default_index())
                .map(|o| o.value.clone())
                .unwrap_or(RealValue::Number(0.0)),
        }
    }

    /// Check every invariant of the definition.
    pub fn validate(&self) -> ConfigResult<()> {
        let result = match self {
            Self::Continuous(p) => p.validate(),
            Self::Boolean(_) => Ok(()),
            Self::Discrete(p) => p.validate(),
        };
        if let Err(e) = &result {
            log::debug!("Rejected parameter definition: {}", e);
        }
        result
    }
}

impl From<ContinuousParameter> for AudioParameter {
    fn from(p: ContinuousParameter) -> Self {
        Self::Continuous(p)
    }
}

impl From<BooleanParameter> for AudioParameter {
    fn from(p: BooleanParameter) -> Self {
        Self::Boolean(p)
    }
}

impl From<DiscreteParameter> for AudioParameter {
    fn from(p: DiscreteParameter) -> Self {
        Self::Discrete(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waveforms() -> Vec<DiscreteOption> {
        vec![
            DiscreteOption::new("sine", "Sine"),
            DiscreteOption::new("saw", "Saw"),
            DiscreteOption::new("square", "Square"),
        ]
    }

    #[test]
    fn test_continuous_validation() {
        assert!(ContinuousParameter::new("a", "A", 0.0..=1.0).validate().is_ok());
        assert!(matches!(
            ContinuousParameter::new("a", "A", 1.0..=1.0).validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(matches!(
            ContinuousParameter::new("a", "A", 5.0..=1.0).validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(ContinuousParameter::new("a", "A", f64::NEG_INFINITY..=1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_step_must_divide_range() {
        let ok = ContinuousParameter::new("a", "A", 0.0..=1.0).with_step(0.1);
        assert!(ok.validate().is_ok());

        let ok = ContinuousParameter::new("a", "A", -24.0..=24.0).with_step(0.5);
        assert!(ok.validate().is_ok());

        let bad = ContinuousParameter::new("a", "A", 0.0..=1.0).with_step(0.3);
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidStep { .. })));

        let bad = ContinuousParameter::new("a", "A", 0.0..=1.0).with_step(0.0);
        assert!(bad.validate().is_err());

        let bad = ContinuousParameter::new("a", "A", 0.0..=1.0).with_step(2.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_continuous_default_clamped() {
        let p = ContinuousParameter::new("a", "A", 0.0..=10.0).with_default(42.0);
        assert_eq!(p.default_or_min(), 10.0);
        let p = ContinuousParameter::new("a", "A", 0.0..=10.0);
        assert_eq!(p.default_or_min(), 0.0);
    }

    #[test]
    fn test_position_and_value_at_are_inverse() {
        let p = ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0).with_scale(Scale::log(1000.0));
        for i in 0..=100 {
            let position = i as f64 / 100.0;
            let back = p.position_of(p.value_at(position));
            assert!((back - position).abs() < 1e-9);
        }
        assert_eq!(p.value_at(0.0), 20.0);
        assert_eq!(p.value_at(1.0), 20000.0);
        assert_eq!(p.position_of(f64::NAN), 0.0);
        assert_eq!(p.position_of(1e9), 1.0);
    }

    #[test]
    fn test_snap_to_step() {
        let p = ContinuousParameter::new("a", "A", -1.0..=1.0).with_step(0.5);
        assert_eq!(p.snap_to_step(0.3), 0.5);
        assert_eq!(p.snap_to_step(0.2), 0.0);
        assert_eq!(p.snap_to_step(-0.75), -0.5); // half goes up
        assert_eq!(p.snap_to_step(0.99), 1.0);
        let unstepped = ContinuousParameter::new("a", "A", 0.0..=1.0);
        assert_eq!(unstepped.snap_to_step(0.123), 0.123);
    }

    #[test]
    fn test_discrete_validation() {
        let empty = DiscreteParameter::new("wave", "Wave", vec![]);
        assert_eq!(
            empty.validate(),
            Err(ConfigError::EmptyOptions { id: "wave".to_string() })
        );

        let mut options = waveforms();
        options.push(DiscreteOption::new("saw", "Saw again"));
        let dup = DiscreteParameter::new("wave", "Wave", options);
        assert!(matches!(dup.validate(), Err(ConfigError::DuplicateOption { .. })));
    }

    #[test]
    fn test_custom_midi_value_bounded_by_resolution() {
        let options = vec![
            DiscreteOption::new(0, "Off").with_midi_value(0),
            DiscreteOption::new(1, "On").with_midi_value(200),
        ];
        let p = DiscreteParameter::new("m", "M", options)
            .with_mapping(MidiMapping::Custom)
            .with_resolution(MidiResolution::Bits7);
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidMidiValue { midi_value: 200, max_midi: 127, .. })
        ));
        assert!(p.with_resolution(MidiResolution::Bits8).validate().is_ok());
    }

    #[test]
    fn test_default_index_fallback() {
        let p = DiscreteParameter::new("wave", "Wave", waveforms()).with_default("square");
        assert_eq!(p.default_index(), 2);

        let p = DiscreteParameter::new("wave", "Wave", waveforms()).with_default("noise");
        assert_eq!(p.default_index(), 0);
        assert_eq!(AudioParameter::from(p).default_value(), RealValue::from("sine"));
    }

    #[test]
    fn test_resolve_index_snaps_numbers() {
        let options = vec![
            DiscreteOption::new(1, "1x"),
            DiscreteOption::new(2, "2x"),
            DiscreteOption::new(4, "4x"),
        ];
        let p = DiscreteParameter::new("os", "Oversampling", options);
        assert_eq!(p.resolve_index(&RealValue::from(4)), 2);
        assert_eq!(p.resolve_index(&RealValue::from(3.5)), 2);
        assert_eq!(p.resolve_index(&RealValue::from(3.0)), 1); // tie: lower index
        assert_eq!(p.resolve_index(&RealValue::from(-10.0)), 0);
        assert_eq!(p.resolve_index(&RealValue::from("4")), 0);
    }

    #[test]
    fn test_boolean_labels() {
        let p = BooleanParameter::new("bypass", "Bypass");
        assert_eq!(p.label(true), "On");
        assert_eq!(p.label(false), "Off");
        let p = p.with_labels("Active", "Bypassed");
        assert_eq!(p.label(true), "Active");
        assert_eq!(p.label(false), "Bypassed");
    }

    #[test]
    fn test_accessors() {
        let p = AudioParameter::from(BooleanParameter::new("bypass", "Bypass").with_default(true));
        assert_eq!(p.id(), "bypass");
        assert_eq!(p.name(), "Bypass");
        assert_eq!(p.kind(), "boolean");
        assert_eq!(p.hashed_id(), fnv1a_32("bypass"));
        assert_eq!(p.default_value(), RealValue::Bool(true));
        assert_eq!(p.max_midi(), MidiResolution::Bits32.max_midi());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_definitions() {
        let json = r#"[
            {"type": "continuous", "id": "cutoff", "name": "Cutoff", "min": 20, "max": 20000,
             "unit": "Hz", "scale": {"type": "log", "base": 1000}, "midiResolution": 14},
            {"type": "boolean", "id": "sync", "name": "Sync", "mode": "momentary"},
            {"type": "discrete", "id": "wave", "name": "Wave", "midiMapping": "sequential",
             "options": [{"value": "sine", "label": "Sine"}, {"value": 2, "label": "Two", "midiValue": 9}]}
        ]"#;
        let params: Vec<AudioParameter> = serde_json::from_str(json).unwrap();
        assert_eq!(params.len(), 3);

        match &params[0] {
            AudioParameter::Continuous(p) => {
                assert_eq!(p.max, 20000.0);
                assert_eq!(p.scale, Scale::log(1000.0));
                assert_eq!(p.midi_resolution, MidiResolution::Bits14);
            }
            other => panic!("expected continuous, got {:?}", other),
        }
        match &params[1] {
            AudioParameter::Boolean(p) => assert_eq!(p.mode, BooleanMode::Momentary),
            other => panic!("expected boolean, got {:?}", other),
        }
        match &params[2] {
            AudioParameter::Discrete(p) => {
                assert_eq!(p.midi_mapping, MidiMapping::Sequential);
                assert_eq!(p.options[1].value, RealValue::Number(2.0));
                assert_eq!(p.options[1].midi_value, Some(9));
                assert_eq!(p.midi_resolution, MidiResolution::Bits32);
            }
            other => panic!("expected discrete, got {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_unknown_kind_and_resolution() {
        let unknown = r#"{"type": "xy-pad", "id": "p", "name": "P"}"#;
        assert!(serde_json::from_str::<AudioParameter>(unknown).is_err());

        let bad_bits = r#"{"type": "boolean", "id": "b", "name": "B", "midiResolution": 12}"#;
        assert!(serde_json::from_str::<AudioParameter>(bad_bits).is_err());
    }
}
