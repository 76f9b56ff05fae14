//! Conversion between the real, normalized and MIDI value domains.
//!
//! [`AudioParameterConverter`] pivots every conversion through the integer
//! MIDI grid of its parameter:
//!
//! ```text
//!   real ──to_midi──▶ midi ──/ MaxMidi──▶ normalized
//!   real ◀─from_midi─ midi ◀─round(n·Max)─ normalized
//! ```
//!
//! Normalizing a real value therefore always yields a point on the grid, so
//! a UI that displays `normalize(x)` shows the quantized state the host will
//! actually see.
//!
//! # Example
//!
//! ```
//! use faderkit_core::converter::AudioParameterConverter;
//! use faderkit_core::factories::create_selector;
//! use faderkit_core::parameter::DiscreteOption;
//! use faderkit_core::types::RealValue;
//!
//! let wave = create_selector("Wave", vec![
//!     DiscreteOption::new("sine", "Sine"),
//!     DiscreteOption::new("saw", "Saw"),
//!     DiscreteOption::new("square", "Square"),
//! ]);
//! let converter = AudioParameterConverter::new(wave).unwrap();
//!
//! assert_eq!(converter.to_midi(&"saw".into()), 64);
//! assert_eq!(converter.from_midi(90), RealValue::from("saw"));
//! ```

use faderkit_utils::round_to_u64;

use crate::error::ConfigResult;
use crate::parameter::{AudioParameter, DiscreteParameter, MidiMapping};
use crate::types::{MidiValue, NormalizedValue, RealValue};

/// Bidirectional converter for one parameter.
///
/// Construction validates the parameter; after that every operation is
/// total. Out-of-range input is clamped or snapped, never rejected.
#[derive(Debug, Clone)]
pub struct AudioParameterConverter {
    parameter: AudioParameter,
    max_midi: MidiValue,
    /// MIDI value of each discrete option, empty for other kinds.
    option_grid: Vec<MidiValue>,
}

impl AudioParameterConverter {
    /// Validate `parameter` and build a converter for it.
    pub fn new(parameter: impl Into<AudioParameter>) -> ConfigResult<Self> {
        let parameter = parameter.into();
        parameter.validate()?;

        let max_midi = parameter.max_midi();
        let option_grid = match &parameter {
            AudioParameter::Discrete(p) => option_grid(p, max_midi),
            _ => Vec::new(),
        };

        log::debug!(
            "Converter for '{}' ({}, {} bits)",
            parameter.id(),
            parameter.kind(),
            parameter.midi_resolution().bits()
        );

        Ok(Self {
            parameter,
            max_midi,
            option_grid,
        })
    }

    /// The parameter this converter was built for.
    pub fn parameter(&self) -> &AudioParameter {
        &self.parameter
    }

    /// Largest MIDI value, `2^resolution - 1`.
    #[inline]
    pub fn max_midi(&self) -> MidiValue {
        self.max_midi
    }

    /// MIDI value of each discrete option, in option order.
    ///
    /// Empty for continuous and boolean parameters.
    pub fn option_midi_values(&self) -> &[MidiValue] {
        &self.option_grid
    }

    // =========================================================================
    // Real <-> MIDI
    // =========================================================================

    /// Quantize a real value onto the MIDI grid.
    pub fn to_midi(&self, real: &RealValue) -> MidiValue {
        match &self.parameter {
            AudioParameter::Continuous(p) => {
                let value = match real.coerce_number() {
                    Some(v) => v,
                    None => {
                        log::trace!("'{}': non-numeric value {} read as min", p.id, real);
                        p.min
                    }
                };
                let position = p.position_of(value);
                round_to_u64(position * self.max_midi as f64, self.max_midi)
            }
            AudioParameter::Boolean(_) => {
                if real.is_truthy() {
                    self.max_midi
                } else {
                    0
                }
            }
            AudioParameter::Discrete(p) => self.option_grid[p.resolve_index(real)],
        }
    }

    /// Real value at a point on the MIDI grid.
    ///
    /// Values above `max_midi()` are clamped.
    pub fn from_midi(&self, midi: MidiValue) -> RealValue {
        let midi = midi.min(self.max_midi);
        match &self.parameter {
            AudioParameter::Continuous(p) => {
                let position = midi as f64 / self.max_midi as f64;
                RealValue::Number(p.snap_to_step(p.value_at(position)))
            }
            // Lenient on input, strict on output: anything in the upper half is on.
            AudioParameter::Boolean(_) => RealValue::Bool(midi > self.max_midi / 2),
            AudioParameter::Discrete(p) => p.options[self.nearest_option(midi)].value.clone(),
        }
    }

    /// Index of the discrete option closest to `midi` (lower index on ties).
    ///
    /// Always 0 for non-discrete parameters.
    pub fn nearest_option(&self, midi: MidiValue) -> usize {
        let mut best = 0;
        let mut best_distance = MidiValue::MAX;
        for (i, &grid) in self.option_grid.iter().enumerate() {
            let distance = grid.abs_diff(midi);
            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }
        best
    }

    // =========================================================================
    // Normalized
    // =========================================================================

    /// Normalized position of a real value, quantized through the MIDI grid.
    pub fn normalize(&self, real: &RealValue) -> NormalizedValue {
        self.midi_to_normalized(self.to_midi(real))
    }

    /// Real value at a normalized position, quantized through the MIDI grid.
    pub fn denormalize(&self, normalized: NormalizedValue) -> RealValue {
        self.from_midi(self.normalized_to_midi(normalized))
    }

    /// `midi / max_midi`, clamped to `[0, 1]`.
    #[inline]
    pub fn midi_to_normalized(&self, midi: MidiValue) -> NormalizedValue {
        midi.min(self.max_midi) as f64 / self.max_midi as f64
    }

    /// Nearest grid point to a normalized position (NaN reads as 0).
    #[inline]
    pub fn normalized_to_midi(&self, normalized: NormalizedValue) -> MidiValue {
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        round_to_u64(normalized * self.max_midi as f64, self.max_midi)
    }

    /// Snap a real value to the nearest value the grid can represent.
    pub fn quantize(&self, real: &RealValue) -> RealValue {
        self.from_midi(self.to_midi(real))
    }
}

/// MIDI value of each option under the parameter's mapping strategy.
fn option_grid(p: &DiscreteParameter, max_midi: MidiValue) -> Vec<MidiValue> {
    let count = p.options.len();
    p.options
        .iter()
        .enumerate()
        .map(|(i, option)| match p.midi_mapping {
            MidiMapping::Spread => spread(i, count, max_midi),
            MidiMapping::Sequential => (i as MidiValue).min(max_midi),
            MidiMapping::Custom => option
                .midi_value
                .map(|m| m.min(max_midi))
                .unwrap_or_else(|| spread(i, count, max_midi)),
        })
        .collect()
}

/// `round_half_up(index / (count - 1) * max_midi)`, computed exactly.
fn spread(index: usize, count: usize, max_midi: MidiValue) -> MidiValue {
    if count <= 1 {
        return 0;
    }
    let denominator = (count - 1) as u128;
    let numerator = 2 * index as u128 * max_midi as u128 + denominator;
    (numerator / (2 * denominator)) as MidiValue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{BooleanParameter, ContinuousParameter, DiscreteOption};
    use crate::scale::Scale;
    use crate::types::MidiResolution;

    fn continuous(resolution: MidiResolution) -> AudioParameterConverter {
        AudioParameterConverter::new(
            ContinuousParameter::new("level", "Level", -60.0..=12.0).with_resolution(resolution),
        )
        .unwrap()
    }

    fn options(count: usize) -> Vec<DiscreteOption> {
        (0..count)
            .map(|i| DiscreteOption::new(format!("opt{}", i), format!("Option {}", i)))
            .collect()
    }

    fn discrete(count: usize, mapping: MidiMapping) -> AudioParameterConverter {
        AudioParameterConverter::new(
            DiscreteParameter::new("mode", "Mode", options(count))
                .with_mapping(mapping)
                .with_resolution(MidiResolution::Bits7),
        )
        .unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_rejects_invalid_definitions() {
        assert!(AudioParameterConverter::new(ContinuousParameter::new("x", "X", 1.0..=0.0)).is_err());
        assert!(AudioParameterConverter::new(DiscreteParameter::new("x", "X", vec![])).is_err());
    }

    // =========================================================================
    // Continuous
    // =========================================================================

    #[test]
    fn test_continuous_round_trip_exhaustive() {
        for resolution in [MidiResolution::Bits7, MidiResolution::Bits8, MidiResolution::Bits14] {
            let conv = continuous(resolution);
            for m in 0..=conv.max_midi() {
                assert_eq!(conv.to_midi(&conv.from_midi(m)), m, "{:?} m={}", resolution, m);
            }
        }
    }

    #[test]
    fn test_continuous_round_trip_sampled_wide() {
        for resolution in [MidiResolution::Bits16, MidiResolution::Bits32] {
            let conv = continuous(resolution);
            let max = conv.max_midi();
            let stride = (max / 5000).max(1);
            let mut m = 0;
            while m <= max {
                assert_eq!(conv.to_midi(&conv.from_midi(m)), m);
                m += stride;
            }
            assert_eq!(conv.to_midi(&conv.from_midi(max)), max);
            assert_eq!(conv.to_midi(&conv.from_midi(max - 1)), max - 1);
        }
    }

    #[test]
    fn test_scaled_round_trip() {
        let conv = AudioParameterConverter::new(
            ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0)
                .with_scale(Scale::log(1000.0))
                .with_resolution(MidiResolution::Bits14),
        )
        .unwrap();
        for m in 0..=conv.max_midi() {
            assert_eq!(conv.to_midi(&conv.from_midi(m)), m);
        }
        // Log travel: the midpoint sits at the geometric mean, not 10 kHz
        let mid = conv.denormalize(0.5).as_number().unwrap();
        assert!((mid - 632.45).abs() < 1.0, "mid = {}", mid);
    }

    #[test]
    fn test_continuous_endpoints_and_clamping() {
        let conv = continuous(MidiResolution::Bits7);
        assert_eq!(conv.from_midi(0), RealValue::Number(-60.0));
        assert_eq!(conv.from_midi(127), RealValue::Number(12.0));
        assert_eq!(conv.from_midi(5000), RealValue::Number(12.0));
        assert_eq!(conv.to_midi(&(-100.0).into()), 0);
        assert_eq!(conv.to_midi(&100.0.into()), 127);
        assert_eq!(conv.to_midi(&f64::NAN.into()), 0);
        assert_eq!(conv.to_midi(&f64::INFINITY.into()), 127);
        assert_eq!(conv.to_midi(&"loud".into()), 0);
        assert_eq!(conv.to_midi(&"12".into()), 127);
    }

    #[test]
    fn test_midi_standard_is_identity() {
        let conv = AudioParameterConverter::new(
            ContinuousParameter::new("cc", "CC", 0.0..=127.0)
                .with_step(1.0)
                .with_resolution(MidiResolution::Bits7),
        )
        .unwrap();
        for m in 0..=127u64 {
            assert_eq!(conv.from_midi(m), RealValue::Number(m as f64));
            assert_eq!(conv.to_midi(&(m as f64).into()), m);
        }
    }

    #[test]
    fn test_coarse_step_is_stable_after_one_round_trip() {
        let conv = AudioParameterConverter::new(
            ContinuousParameter::new("mix", "Mix", 0.0..=1.0)
                .with_step(0.1)
                .with_resolution(MidiResolution::Bits7),
        )
        .unwrap();
        for m in 0..=127 {
            let real = conv.from_midi(m);
            let once = conv.to_midi(&real);
            assert_eq!(conv.from_midi(once), real);
            assert_eq!(conv.to_midi(&conv.from_midi(once)), once);
        }
        let snapped = conv.quantize(&0.26.into()).as_number().unwrap();
        assert!((snapped - 0.3).abs() < 1e-12);
    }

    // =========================================================================
    // Normalized
    // =========================================================================

    #[test]
    fn test_normalize_goes_through_grid() {
        let conv = continuous(MidiResolution::Bits7);
        // -24 dB sits at 0.5 of the range, between grid points 63 and 64
        let n = conv.normalize(&(-24.0).into());
        assert_eq!(n, 64.0 / 127.0);
    }

    /// One converter of every kind: (exact round trip?, converter).
    fn every_kind() -> Vec<(bool, AudioParameterConverter)> {
        let scaled = AudioParameterConverter::new(
            ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0)
                .with_scale(Scale::log(1000.0))
                .with_resolution(MidiResolution::Bits14),
        )
        .unwrap();
        let stepped = AudioParameterConverter::new(
            ContinuousParameter::new("semis", "Semitones", -12.0..=12.0)
                .with_step(1.0)
                .with_resolution(MidiResolution::Bits8),
        )
        .unwrap();
        let boolean = AudioParameterConverter::new(
            BooleanParameter::new("sync", "Sync").with_resolution(MidiResolution::Bits7),
        )
        .unwrap();

        vec![
            (true, continuous(MidiResolution::Bits7)),
            (true, scaled),
            (false, stepped),
            (false, boolean),
            (false, discrete(3, MidiMapping::Spread)),
            (false, discrete(4, MidiMapping::Sequential)),
            (false, custom(5)),
        ]
    }

    /// Custom mapping with distinct, descending MIDI values.
    fn custom(count: usize) -> AudioParameterConverter {
        let options = options(count)
            .into_iter()
            .enumerate()
            .map(|(i, o)| o.with_midi_value(((count - i) * 7) as MidiValue))
            .collect();
        AudioParameterConverter::new(
            DiscreteParameter::new("mode", "Mode", options)
                .with_mapping(MidiMapping::Custom)
                .with_resolution(MidiResolution::Bits7),
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_denormalize_agree() {
        for (exact, conv) in every_kind() {
            let id = conv.parameter().id().to_string();
            for i in 0..=1000 {
                let n = i as f64 / 1000.0;
                let real = conv.denormalize(n);
                let back = conv.normalize(&real);

                assert_eq!(back, conv.midi_to_normalized(conv.to_midi(&real)), "{}", id);
                assert_eq!(conv.denormalize(back), real, "{} at n = {}", id, n);
                if exact {
                    assert_eq!(
                        conv.normalized_to_midi(back),
                        round_to_u64(n * conv.max_midi() as f64, conv.max_midi()),
                        "{} at n = {}",
                        id,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn test_denormalize_clamps() {
        let conv = continuous(MidiResolution::Bits7);
        assert_eq!(conv.denormalize(f64::NAN), RealValue::Number(-60.0));
        assert_eq!(conv.denormalize(2.0), RealValue::Number(12.0));
    }

    // =========================================================================
    // Boolean
    // =========================================================================

    #[test]
    fn test_boolean_asymmetry() {
        for resolution in MidiResolution::ALL {
            let conv = AudioParameterConverter::new(
                BooleanParameter::new("sync", "Sync").with_resolution(resolution),
            )
            .unwrap();
            let max = conv.max_midi();
            let half = max / 2 + 1; // ceil(max / 2) for odd max

            assert_eq!(conv.to_midi(&false.into()), 0);
            assert_eq!(conv.to_midi(&true.into()), max);
            assert_eq!(conv.from_midi(0), RealValue::Bool(false));
            assert_eq!(conv.from_midi(half - 1), RealValue::Bool(false));
            assert_eq!(conv.from_midi(half), RealValue::Bool(true));
            assert_eq!(conv.from_midi(max), RealValue::Bool(true));
        }
    }

    #[test]
    fn test_boolean_7bit_threshold() {
        let conv = AudioParameterConverter::new(
            BooleanParameter::new("sync", "Sync").with_resolution(MidiResolution::Bits7),
        )
        .unwrap();
        assert_eq!(conv.from_midi(63), RealValue::Bool(false));
        assert_eq!(conv.from_midi(64), RealValue::Bool(true));
        assert_eq!(conv.normalize(&true.into()), 1.0);
        assert_eq!(conv.denormalize(0.49), RealValue::Bool(false));
        assert_eq!(conv.to_midi(&1.into()), 127);
        assert_eq!(conv.to_midi(&0.into()), 0);
    }

    // =========================================================================
    // Discrete
    // =========================================================================

    #[test]
    fn test_spread_three_options() {
        let conv = discrete(3, MidiMapping::Spread);
        assert_eq!(conv.option_midi_values(), &[0, 64, 127]);
        assert_eq!(conv.from_midi(90), RealValue::from("opt1"));
        assert_eq!(conv.from_midi(96), RealValue::from("opt2"));
    }

    #[test]
    fn test_spread_ties_break_low() {
        let conv = discrete(3, MidiMapping::Spread);
        // 32 is exactly between 0 and 64
        assert_eq!(conv.nearest_option(32), 0);
        assert_eq!(conv.nearest_option(33), 1);
    }

    #[test]
    fn test_spread_even_count() {
        let conv = discrete(4, MidiMapping::Spread);
        // 127/3 = 42.33, 84.67
        assert_eq!(conv.option_midi_values(), &[0, 42, 85, 127]);
        let conv = discrete(2, MidiMapping::Spread);
        assert_eq!(conv.option_midi_values(), &[0, 127]);
        assert_eq!(conv.from_midi(63), RealValue::from("opt0"));
        assert_eq!(conv.from_midi(64), RealValue::from("opt1"));
    }

    #[test]
    fn test_single_option() {
        let conv = discrete(1, MidiMapping::Spread);
        assert_eq!(conv.option_midi_values(), &[0]);
        assert_eq!(conv.from_midi(127), RealValue::from("opt0"));
        assert_eq!(conv.to_midi(&"opt0".into()), 0);
    }

    #[test]
    fn test_sequential() {
        let conv = discrete(5, MidiMapping::Sequential);
        assert_eq!(conv.option_midi_values(), &[0, 1, 2, 3, 4]);
        assert_eq!(conv.to_midi(&"opt3".into()), 3);
        assert_eq!(conv.from_midi(100), RealValue::from("opt4"));
    }

    #[test]
    fn test_custom_with_fallback_to_spread() {
        let options = vec![
            DiscreteOption::new("a", "A").with_midi_value(10),
            DiscreteOption::new("b", "B"),
            DiscreteOption::new("c", "C").with_midi_value(20),
        ];
        let conv = AudioParameterConverter::new(
            DiscreteParameter::new("m", "M", options)
                .with_mapping(MidiMapping::Custom)
                .with_resolution(MidiResolution::Bits7),
        )
        .unwrap();
        assert_eq!(conv.option_midi_values(), &[10, 64, 20]);
        assert_eq!(conv.from_midi(16), RealValue::from("c"));
        assert_eq!(conv.from_midi(15), RealValue::from("a"));
        assert_eq!(conv.from_midi(50), RealValue::from("b"));
    }

    #[test]
    fn test_discrete_unmatched_values() {
        let conv = discrete(3, MidiMapping::Spread);
        assert_eq!(conv.to_midi(&"nope".into()), 0);
        assert_eq!(conv.to_midi(&true.into()), 0);
    }

    #[test]
    fn test_discrete_round_trip_stable() {
        for mapping in [MidiMapping::Spread, MidiMapping::Sequential, MidiMapping::Custom] {
            for count in 1..=9 {
                let conv = match mapping {
                    MidiMapping::Custom => custom(count),
                    _ => discrete(count, mapping),
                };
                for &grid in conv.option_midi_values() {
                    assert_eq!(conv.to_midi(&conv.from_midi(grid)), grid);
                }
                for m in 0..=127 {
                    let real = conv.from_midi(m);
                    assert_eq!(conv.from_midi(conv.to_midi(&real)), real);
                }
            }
        }
    }

    #[test]
    fn test_spread_exact_at_64_bits() {
        assert_eq!(spread(1, 3, u64::MAX), u64::MAX / 2 + 1);
        assert_eq!(spread(2, 3, u64::MAX), u64::MAX);
        assert_eq!(spread(0, 3, u64::MAX), 0);
    }
}
