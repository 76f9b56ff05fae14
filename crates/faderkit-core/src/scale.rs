//! Scale functions for continuous parameters.
//!
//! A scale bends the relationship between a control's position (the
//! normalized value) and the fraction of the real range it represents:
//!
//! - `forward(t)`: linear fraction of the real range → normalized position
//! - `inverse(n)`: normalized position → linear fraction of the real range
//!
//! Both operate on `[0, 1]` and must be exact inverses of each other within
//! floating-point tolerance. The step grid of a parameter is never scaled; it
//! always lives on the real-value axis.
//!
//! # Available Scales
//!
//! - [`LinearScale`] - Identity (most parameters)
//! - [`LogScale`] - More travel at the bottom of the range (frequency, time)
//! - [`ExpScale`] - Mirror of `LogScale`, more travel at the top
//! - [`PowerScale`] - Polynomial skew toward either end
//! - [`FnScale`] - A pair of closures for anything else
//!
//! # Example
//!
//! ```
//! use faderkit_core::scale::{LogScale, ScaleFunction};
//!
//! // 20 Hz - 20 kHz: the knob midpoint lands on the geometric mean (~632 Hz)
//! let scale = LogScale::for_range(20.0, 20000.0);
//! let fraction = scale.inverse(0.5);
//! let hz = 20.0 + fraction * (20000.0 - 20.0);
//! assert!((hz - 632.45).abs() < 0.5);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, ConfigResult};

/// Trait for invertible transforms on `[0, 1]`.
///
/// Implementations must be monotonic and invertible on `[0, 1]`; nothing else
/// about their functional form is assumed. They must be thread-safe so that
/// parameters can be shared between the UI and an audio thread.
pub trait ScaleFunction: Send + Sync {
    /// Linear fraction of the real range → normalized position.
    fn forward(&self, fraction: f64) -> f64;

    /// Normalized position → linear fraction of the real range.
    fn inverse(&self, normalized: f64) -> f64;
}

/// Identity scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearScale;

impl ScaleFunction for LinearScale {
    #[inline]
    fn forward(&self, fraction: f64) -> f64 {
        fraction
    }

    #[inline]
    fn inverse(&self, normalized: f64) -> f64 {
        normalized
    }
}

fn check_base(base: f64) -> ConfigResult<f64> {
    if base.is_finite() && base > 1.0 {
        Ok(base)
    } else {
        Err(ConfigError::InvalidScale(format!(
            "base must be finite and > 1, got {}",
            base
        )))
    }
}

/// Logarithmic scale.
///
/// `forward(t) = ln(1 + t(b - 1)) / ln(b)`. With `b = max / min` this is a
/// true logarithmic mapping of a positive range, see [`LogScale::for_range`].
///
/// # Example
///
/// ```
/// use faderkit_core::scale::{LogScale, ScaleFunction};
///
/// let scale = LogScale::new(100.0);
/// assert!((scale.forward(scale.inverse(0.3)) - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    base: f64,
    ln_base: f64,
}

impl LogScale {
    /// Create a logarithmic scale with the given curvature base.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not finite or not greater than 1.
    pub fn new(base: f64) -> Self {
        match Self::try_new(base) {
            Ok(scale) => scale,
            Err(e) => panic!("LogScale requires base > 1: {}", e),
        }
    }

    /// Fallible constructor for bases that come from user data.
    pub fn try_new(base: f64) -> ConfigResult<Self> {
        let base = check_base(base)?;
        Ok(Self {
            base,
            ln_base: base.ln(),
        })
    }

    /// Logarithmic scale matching a positive range `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min <= 0` or `max <= min`.
    pub fn for_range(min: f64, max: f64) -> Self {
        assert!(
            min > 0.0,
            "LogScale requires positive range start, got min={}",
            min
        );
        assert!(max > min, "LogScale requires max > min, got min={}, max={}", min, max);
        Self::new(max / min)
    }

    /// Curvature base.
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl ScaleFunction for LogScale {
    fn forward(&self, fraction: f64) -> f64 {
        (fraction * (self.base - 1.0)).ln_1p() / self.ln_base
    }

    fn inverse(&self, normalized: f64) -> f64 {
        (normalized * self.ln_base).exp_m1() / (self.base - 1.0)
    }
}

/// Exponential scale, the mirror image of [`LogScale`].
///
/// Gives more travel at the top of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpScale {
    base: f64,
    ln_base: f64,
}

impl ExpScale {
    /// Create an exponential scale with the given curvature base.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not finite or not greater than 1.
    pub fn new(base: f64) -> Self {
        match Self::try_new(base) {
            Ok(scale) => scale,
            Err(e) => panic!("ExpScale requires base > 1: {}", e),
        }
    }

    /// Fallible constructor for bases that come from user data.
    pub fn try_new(base: f64) -> ConfigResult<Self> {
        let base = check_base(base)?;
        Ok(Self {
            base,
            ln_base: base.ln(),
        })
    }

    /// Curvature base.
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl ScaleFunction for ExpScale {
    fn forward(&self, fraction: f64) -> f64 {
        (fraction * self.ln_base).exp_m1() / (self.base - 1.0)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        (normalized * (self.base - 1.0)).ln_1p() / self.ln_base
    }
}

/// Power curve scale.
///
/// - `exponent > 1.0`: more resolution at the maximum (thresholds near 0 dB)
/// - `exponent < 1.0`: more resolution at the minimum
/// - `exponent = 1.0`: linear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerScale {
    exponent: f64,
    inv_exponent: f64,
}

impl PowerScale {
    /// Create a power curve scale.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is not finite and positive.
    pub fn new(exponent: f64) -> Self {
        match Self::try_new(exponent) {
            Ok(scale) => scale,
            Err(e) => panic!("PowerScale requires positive exponent: {}", e),
        }
    }

    /// Fallible constructor for exponents that come from user data.
    pub fn try_new(exponent: f64) -> ConfigResult<Self> {
        if !(exponent.is_finite() && exponent > 0.0) {
            return Err(ConfigError::InvalidScale(format!(
                "exponent must be finite and > 0, got {}",
                exponent
            )));
        }
        Ok(Self {
            exponent,
            inv_exponent: 1.0 / exponent,
        })
    }

    /// Curve exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl ScaleFunction for PowerScale {
    fn forward(&self, fraction: f64) -> f64 {
        fraction.powf(self.exponent)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        normalized.powf(self.inv_exponent)
    }
}

/// Scale built from a pair of closures.
///
/// ```
/// use faderkit_core::scale::{FnScale, ScaleFunction};
///
/// let squared = FnScale::new(|t: f64| t * t, |n: f64| n.sqrt());
/// assert_eq!(squared.forward(0.5), 0.25);
/// ```
pub struct FnScale<F, I> {
    forward: F,
    inverse: I,
}

impl<F, I> FnScale<F, I>
where
    F: Fn(f64) -> f64 + Send + Sync,
    I: Fn(f64) -> f64 + Send + Sync,
{
    pub fn new(forward: F, inverse: I) -> Self {
        Self { forward, inverse }
    }
}

impl<F, I> ScaleFunction for FnScale<F, I>
where
    F: Fn(f64) -> f64 + Send + Sync,
    I: Fn(f64) -> f64 + Send + Sync,
{
    fn forward(&self, fraction: f64) -> f64 {
        (self.forward)(fraction)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        (self.inverse)(normalized)
    }
}

// =============================================================================
// Scale - the value stored on a continuous parameter
// =============================================================================

/// Scale attached to a continuous parameter.
///
/// Built-in variants are plain data (and serializable with the `serde`
/// feature); [`Scale::Custom`] holds any user [`ScaleFunction`]. Input and
/// output are clamped to `[0, 1]` so a misbehaving custom scale can never
/// push a value off the MIDI grid.
#[derive(Clone, Default)]
pub enum Scale {
    #[default]
    Linear,
    Log(LogScale),
    Exp(ExpScale),
    Power(PowerScale),
    Custom(Arc<dyn ScaleFunction>),
}

impl Scale {
    /// Logarithmic scale with the given base.
    pub fn log(base: f64) -> Self {
        Self::Log(LogScale::new(base))
    }

    /// Exponential scale with the given base.
    pub fn exp(base: f64) -> Self {
        Self::Exp(ExpScale::new(base))
    }

    /// Power curve scale.
    pub fn power(exponent: f64) -> Self {
        Self::Power(PowerScale::new(exponent))
    }

    /// Wrap a user scale.
    pub fn custom(scale: impl ScaleFunction + 'static) -> Self {
        Self::Custom(Arc::new(scale))
    }

    /// Custom scale from a pair of closures.
    pub fn from_fns<F, I>(forward: F, inverse: I) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        I: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::custom(FnScale::new(forward, inverse))
    }

    /// Short name of the scale kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log(_) => "log",
            Self::Exp(_) => "exp",
            Self::Power(_) => "power",
            Self::Custom(_) => "custom",
        }
    }

    /// True for the identity scale.
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }
}

impl ScaleFunction for Scale {
    fn forward(&self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        let out = match self {
            Self::Linear => fraction,
            Self::Log(s) => s.forward(fraction),
            Self::Exp(s) => s.forward(fraction),
            Self::Power(s) => s.forward(fraction),
            Self::Custom(s) => s.forward(fraction),
        };
        clamp_unit(out)
    }

    fn inverse(&self, normalized: f64) -> f64 {
        let normalized = normalized.clamp(0.0, 1.0);
        let out = match self {
            Self::Linear => normalized,
            Self::Log(s) => s.inverse(normalized),
            Self::Exp(s) => s.inverse(normalized),
            Self::Power(s) => s.inverse(normalized),
            Self::Custom(s) => s.inverse(normalized),
        };
        clamp_unit(out)
    }
}

#[inline]
fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Log(s) => f.debug_tuple("Log").field(&s.base).finish(),
            Self::Exp(s) => f.debug_tuple("Exp").field(&s.base).finish(),
            Self::Power(s) => f.debug_tuple("Power").field(&s.exponent).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Scale {
    /// Custom scales compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Linear, Self::Linear) => true,
            (Self::Log(a), Self::Log(b)) => a == b,
            (Self::Exp(a), Self::Exp(b)) => a == b,
            (Self::Power(a), Self::Power(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

    /// Wire shape of the built-in scales: `{"type": "log", "base": 1000}`.
    #[derive(Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
    enum ScaleSpec {
        Linear,
        Log { base: f64 },
        Exp { base: f64 },
        Power { exponent: f64 },
    }

    impl Serialize for Scale {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let spec = match self {
                Scale::Linear => ScaleSpec::Linear,
                Scale::Log(s) => ScaleSpec::Log { base: s.base },
                Scale::Exp(s) => ScaleSpec::Exp { base: s.base },
                Scale::Power(s) => ScaleSpec::Power {
                    exponent: s.exponent,
                },
                Scale::Custom(_) => {
                    return Err(ser::Error::custom("custom scales cannot be serialized"))
                }
            };
            spec.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Scale {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let scale = match ScaleSpec::deserialize(deserializer)? {
                ScaleSpec::Linear => Scale::Linear,
                ScaleSpec::Log { base } => Scale::Log(LogScale::try_new(base).map_err(de::Error::custom)?),
                ScaleSpec::Exp { base } => Scale::Exp(ExpScale::try_new(base).map_err(de::Error::custom)?),
                ScaleSpec::Power { exponent } => {
                    Scale::Power(PowerScale::try_new(exponent).map_err(de::Error::custom)?)
                }
            };
            Ok(scale)
        }
    }
}
