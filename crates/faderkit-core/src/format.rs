//! Display strings for parameter values.
//!
//! [`Formatter`] handles the numeric units common on audio controls;
//! [`format_value`] and [`parse_value`] dispatch on the parameter kind so a
//! UI can render and edit any [`AudioParameter`] through one entry point.
//!
//! # Example
//!
//! ```
//! use faderkit_core::format::Formatter;
//!
//! let hz = Formatter::Frequency;
//! assert_eq!(hz.format(440.0), "440 Hz");
//! assert_eq!(hz.format(1500.0), "1.50 kHz");
//! assert_eq!(hz.parse("2.5 kHz"), Some(2500.0));
//! ```

use crate::parameter::{AudioParameter, BooleanParameter, ContinuousParameter, DiscreteParameter};
use crate::types::RealValue;

/// Decimals used when a parameter has no step.
const DEFAULT_PRECISION: usize = 2;

/// Upper bound on decimals derived from a step.
const MAX_PRECISION: usize = 6;

/// Numeric value formatter.
///
/// Values are real values in the parameter's own unit; no variant converts
/// between linear and logarithmic quantities.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    /// Plain number (e.g. "1.23").
    Float { precision: usize },

    /// Hertz with automatic kHz scaling: "82.4 Hz", "440 Hz", "1.50 kHz".
    Frequency,

    /// Signed decibels: "+3.0 dB", "-12.0 dB", "-inf dB" below `min_db`.
    Decibel { precision: usize, min_db: f64 },

    /// "10.0 ms"
    Milliseconds { precision: usize },

    /// "1.50 s"
    Seconds { precision: usize },

    /// Value already in percent: "75%".
    Percent { precision: usize },

    /// Signed whole semitones: "+12 st", "-7 st", "0 st".
    Semitones,

    /// Number followed by an arbitrary unit: "120 BPM".
    Unit { precision: usize, unit: String },
}

impl Formatter {
    /// Pick a formatter from a parameter's unit and step.
    pub fn for_parameter(parameter: &ContinuousParameter) -> Self {
        let precision = parameter.step.map_or(DEFAULT_PRECISION, precision_of_step);
        match parameter.unit.as_deref().map(str::trim) {
            None | Some("") => Formatter::Float { precision },
            Some("Hz") => Formatter::Frequency,
            Some("dB") => Formatter::Decibel {
                precision,
                min_db: f64::NEG_INFINITY,
            },
            Some("ms") => Formatter::Milliseconds { precision },
            Some("s") => Formatter::Seconds { precision },
            Some("%") => Formatter::Percent { precision },
            Some("st") => Formatter::Semitones,
            Some(unit) => Formatter::Unit {
                precision,
                unit: unit.to_string(),
            },
        }
    }

    /// Format a real value.
    pub fn format(&self, value: f64) -> String {
        match self {
            Formatter::Float { precision } => format!("{:.prec$}", value, prec = *precision),

            Formatter::Frequency => {
                if value >= 1000.0 {
                    format!("{:.2} kHz", value / 1000.0)
                } else if value >= 100.0 {
                    format!("{:.0} Hz", value)
                } else {
                    format!("{:.1} Hz", value)
                }
            }

            Formatter::Decibel { precision, min_db } => {
                // Strict less-than so min_db itself still shows a number
                if value < *min_db || value == f64::NEG_INFINITY {
                    "-inf dB".to_string()
                } else if value >= 0.0 {
                    format!("+{:.prec$} dB", value, prec = *precision)
                } else {
                    format!("{:.prec$} dB", value, prec = *precision)
                }
            }

            Formatter::Milliseconds { precision } => format!("{:.prec$} ms", value, prec = *precision),

            Formatter::Seconds { precision } => format!("{:.prec$} s", value, prec = *precision),

            Formatter::Percent { precision } => format!("{:.prec$}%", value, prec = *precision),

            Formatter::Semitones => {
                let st = value.round() as i64;
                if st > 0 {
                    format!("+{} st", st)
                } else {
                    format!("{} st", st)
                }
            }

            Formatter::Unit { precision, unit } => format!("{:.prec$} {}", value, unit, prec = *precision),
        }
    }

    /// Parse user text back to a real value, with or without the unit.
    pub fn parse(&self, s: &str) -> Option<f64> {
        let s = s.trim();

        match self {
            Formatter::Float { .. } => s.parse().ok(),

            Formatter::Frequency => {
                if let Some(khz) = strip_unit(s, &["kHz", "khz", "KHz"]) {
                    return khz.parse::<f64>().ok().map(|v| v * 1000.0);
                }
                strip_unit(s, &["Hz", "hz"]).unwrap_or(s).parse().ok()
            }

            Formatter::Decibel { min_db, .. } => {
                let trimmed = strip_unit(s, &["dB", "db"]).unwrap_or(s);
                if trimmed.eq_ignore_ascii_case("-inf") || trimmed == "-∞" || trimmed.eq_ignore_ascii_case("-infinity") {
                    return Some(*min_db);
                }
                trimmed.trim_start_matches('+').parse().ok()
            }

            Formatter::Milliseconds { .. } => strip_unit(s, &["ms"]).unwrap_or(s).parse().ok(),

            Formatter::Seconds { .. } => {
                if let Some(ms) = strip_unit(s, &["ms"]) {
                    return ms.parse::<f64>().ok().map(|v| v / 1000.0);
                }
                strip_unit(s, &["s"]).unwrap_or(s).parse().ok()
            }

            Formatter::Percent { .. } => s.trim_end_matches('%').trim().parse().ok(),

            Formatter::Semitones => strip_unit(s, &["st"])
                .unwrap_or(s)
                .trim_start_matches('+')
                .parse()
                .ok(),

            Formatter::Unit { unit, .. } => strip_unit(s, &[unit.as_str()]).unwrap_or(s).parse().ok(),
        }
    }

    /// Unit suffix shown by this formatter.
    pub fn units(&self) -> &str {
        match self {
            Formatter::Float { .. } => "",
            Formatter::Frequency => "Hz",
            Formatter::Decibel { .. } => "dB",
            Formatter::Milliseconds { .. } => "ms",
            Formatter::Seconds { .. } => "s",
            Formatter::Percent { .. } => "%",
            Formatter::Semitones => "st",
            Formatter::Unit { unit, .. } => unit.as_str(),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Float {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Display string for any parameter value.
pub fn format_value(parameter: &AudioParameter, value: &RealValue) -> String {
    match parameter {
        AudioParameter::Continuous(p) => {
            let number = value.coerce_number().filter(|n| !n.is_nan()).unwrap_or(p.min);
            Formatter::for_parameter(p).format(number.clamp(p.min, p.max))
        }
        AudioParameter::Boolean(p) => p.label(value.is_truthy()).to_string(),
        AudioParameter::Discrete(p) => p
            .options
            .get(p.resolve_index(value))
            .map(|o| o.label.clone())
            .unwrap_or_default(),
    }
}

/// Parse user text into a real value for `parameter`.
pub fn parse_value(parameter: &AudioParameter, text: &str) -> Option<RealValue> {
    let text = text.trim();
    match parameter {
        AudioParameter::Continuous(p) => parse_continuous(p, text).map(RealValue::Number),
        AudioParameter::Boolean(p) => parse_boolean(p, text).map(RealValue::Bool),
        AudioParameter::Discrete(p) => parse_discrete(p, text),
    }
}

fn parse_continuous(parameter: &ContinuousParameter, text: &str) -> Option<f64> {
    let value = Formatter::for_parameter(parameter).parse(text)?;
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(parameter.min, parameter.max))
}

fn parse_boolean(parameter: &BooleanParameter, text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case(parameter.label(true)) {
        return Some(true);
    }
    if text.eq_ignore_ascii_case(parameter.label(false)) {
        return Some(false);
    }
    match text.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" | "enabled" => Some(true),
        "off" | "false" | "no" | "0" | "disabled" => Some(false),
        _ => None,
    }
}

fn parse_discrete(parameter: &DiscreteParameter, text: &str) -> Option<RealValue> {
    parameter
        .options
        .iter()
        .find(|o| o.label.eq_ignore_ascii_case(text))
        .or_else(|| parameter.options.iter().find(|o| o.value.to_string() == text))
        .map(|o| o.value.clone())
}

fn strip_unit<'a>(s: &'a str, units: &[&str]) -> Option<&'a str> {
    units
        .iter()
        .find_map(|unit| s.strip_suffix(unit))
        .map(str::trim)
}

fn precision_of_step(step: f64) -> usize {
    let text = step.to_string();
    text.split_once('.')
        .map_or(0, |(_, decimals)| decimals.len())
        .min(MAX_PRECISION)
}
