//! Relative adjustment of continuous values (knobs, faders, sliders).
//!
//! Movement happens on the normalized axis, after the parameter's scale is
//! applied, so a log-scaled cutoff knob moves evenly in octaves rather than
//! in hertz:
//!
//! ```text
//! n' = clamp(forward(current) + delta * sensitivity, 0, 1)
//! value = min + inverse(n') * (max - min)
//! ```
//!
//! The controller owns the current value and updates it on every change, so
//! consecutive drag or wheel events compose. Stepped parameters only ever
//! report values on their step grid; the unsnapped position is kept
//! internally so that sub-step movements still accumulate.
//!
//! # Example
//!
//! ```
//! use faderkit_core::continuous::{ContinuousControllerConfig, ContinuousInteractionController};
//! use faderkit_core::parameter::ContinuousParameter;
//!
//! let gain = ContinuousParameter::new("gain", "Gain", -60.0..=6.0).with_default(0.0);
//! let mut knob = ContinuousInteractionController::new(
//!     gain,
//!     ContinuousControllerConfig::new(0.0),
//! ).unwrap();
//!
//! // 100 px upward drag with the default 200 px per full travel.
//! let value = knob.handle_drag(100.0, false);
//! assert!((value - 6.0).abs() < 1e-9);
//! ```

use std::fmt;

use crate::error::ConfigResult;
use crate::input::Key;
use crate::parameter::ContinuousParameter;

// =============================================================================
// AdjustConfig
// =============================================================================

/// Gesture sensitivities, as fractions of the full normalized travel.
///
/// All builder methods are `const fn`:
///
/// ```
/// use faderkit_core::continuous::AdjustConfig;
///
/// const LONG_FADER: AdjustConfig = AdjustConfig::new().with_pixels_per_range(400.0);
/// assert_eq!(LONG_FADER.fine_multiplier, AdjustConfig::DEFAULT.fine_multiplier);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustConfig {
    /// Drag distance covering the whole range.
    pub pixels_per_range: f64,
    /// Factor applied to drag sensitivity while the fine modifier is held.
    pub fine_multiplier: f64,
    /// Travel per wheel delta unit.
    pub wheel_sensitivity: f64,
    /// Arrow-key nudge for parameters without a step.
    pub key_increment: f64,
    /// PageUp/PageDown nudge.
    pub page_increment: f64,
}

impl AdjustConfig {
    /// 200 px per full range, 10x finer with the modifier, 1% arrow, 10% page.
    pub const DEFAULT: Self = Self::new();

    /// Four times slower than [`DEFAULT`](Self::DEFAULT) on every gesture.
    pub const FINE: Self = Self::new()
        .with_pixels_per_range(800.0)
        .with_wheel_sensitivity(0.000_25)
        .with_key_increment(0.002_5)
        .with_page_increment(0.025);

    pub const fn new() -> Self {
        Self {
            pixels_per_range: 200.0,
            fine_multiplier: 0.1,
            wheel_sensitivity: 0.001,
            key_increment: 0.01,
            page_increment: 0.1,
        }
    }

    pub const fn with_pixels_per_range(mut self, pixels: f64) -> Self {
        self.pixels_per_range = pixels;
        self
    }

    pub const fn with_fine_multiplier(mut self, multiplier: f64) -> Self {
        self.fine_multiplier = multiplier;
        self
    }

    pub const fn with_wheel_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    pub const fn with_key_increment(mut self, increment: f64) -> Self {
        self.key_increment = increment;
        self
    }

    pub const fn with_page_increment(mut self, increment: f64) -> Self {
        self.page_increment = increment;
        self
    }

    /// Normalized travel per dragged pixel.
    pub fn drag_sensitivity(&self, fine: bool) -> f64 {
        if !(self.pixels_per_range > 0.0) {
            return 0.0;
        }
        let base = 1.0 / self.pixels_per_range;
        if fine {
            base * self.fine_multiplier
        } else {
            base
        }
    }
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Callback receiving a new real value.
pub type ContinuousCallback = Box<dyn FnMut(f64)>;

/// Value, callback and gesture settings for a continuous control.
pub struct ContinuousControllerConfig {
    pub value: f64,
    pub on_value_change: Option<ContinuousCallback>,
    pub disabled: bool,
    pub adjust: AdjustConfig,
}

impl ContinuousControllerConfig {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            on_value_change: None,
            disabled: false,
            adjust: AdjustConfig::DEFAULT,
        }
    }

    pub fn with_on_value_change(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_adjust(mut self, adjust: AdjustConfig) -> Self {
        self.adjust = adjust;
        self
    }
}

impl fmt::Debug for ContinuousControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousControllerConfig")
            .field("value", &self.value)
            .field("has_callback", &self.on_value_change.is_some())
            .field("disabled", &self.disabled)
            .field("adjust", &self.adjust)
            .finish()
    }
}

/// Drag, wheel and keyboard adjustment of one continuous parameter.
#[derive(Debug)]
pub struct ContinuousInteractionController {
    parameter: ContinuousParameter,
    config: ContinuousControllerConfig,
    /// Unsnapped normalized position behind `config.value`.
    position: f64,
}

impl ContinuousInteractionController {
    /// Fails if the parameter's range or step is invalid.
    ///
    /// The initial value is clamped into range and snapped to the step;
    /// NaN starts at the default.
    pub fn new(parameter: ContinuousParameter, mut config: ContinuousControllerConfig) -> ConfigResult<Self> {
        parameter.validate()?;
        config.value = Self::sanitize(&parameter, config.value);
        let position = parameter.position_of(config.value);
        Ok(Self {
            parameter,
            config,
            position,
        })
    }

    pub fn parameter(&self) -> &ContinuousParameter {
        &self.parameter
    }

    /// Current real value.
    pub fn value(&self) -> f64 {
        self.config.value
    }

    /// Current normalized position (scale applied, no step snapping).
    ///
    /// Between steps this runs ahead of [`value`](Self::value).
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Replace value, callback and settings, e.g. after the host changed the
    /// value. Does not emit.
    pub fn update_config(&mut self, mut config: ContinuousControllerConfig) {
        config.value = Self::sanitize(&self.parameter, config.value);
        self.position = self.parameter.position_of(config.value);
        self.config = config;
    }

    /// Move by `delta * sensitivity` along the normalized axis.
    ///
    /// The reported value is snapped to the step grid and only emitted when
    /// the snapped value changes. Negative or non-finite sensitivities and
    /// non-finite deltas do not move. Returns the resulting value.
    pub fn adjust_value(&mut self, delta: f64, sensitivity: f64) -> f64 {
        if self.config.disabled {
            return self.config.value;
        }
        let sensitivity = if sensitivity.is_finite() && sensitivity > 0.0 {
            sensitivity
        } else {
            0.0
        };
        let offset = delta * sensitivity;
        if !offset.is_finite() || offset == 0.0 {
            return self.config.value;
        }

        self.position = (self.position + offset).clamp(0.0, 1.0);
        let value = self.parameter.snap_to_step(self.parameter.value_at(self.position));
        self.emit(value)
    }

    /// Mouse wheel. Negative `delta_y` (scrolling up) increases the value.
    pub fn handle_wheel(&mut self, delta_y: f64) -> f64 {
        self.adjust_value(-delta_y, self.config.adjust.wheel_sensitivity)
    }

    /// Pointer drag. Positive `delta_pixels` (upward or rightward) increases
    /// the value; `fine` applies the fine multiplier.
    pub fn handle_drag(&mut self, delta_pixels: f64, fine: bool) -> f64 {
        let sensitivity = self.config.adjust.drag_sensitivity(fine);
        self.adjust_value(delta_pixels, sensitivity)
    }

    /// Returns `true` if the key belongs to this control.
    ///
    /// Arrows move by one step (or [`AdjustConfig::key_increment`] without a
    /// step), PageUp/PageDown by [`AdjustConfig::page_increment`], Home/End
    /// jump to the bounds.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        let Some(key) = Key::parse(key) else {
            return false;
        };
        let adjust = self.config.adjust;
        match key {
            k if k.is_increment() => self.nudge(1.0),
            k if k.is_decrement() => self.nudge(-1.0),
            Key::PageUp => {
                self.adjust_value(1.0, adjust.page_increment);
            }
            Key::PageDown => {
                self.adjust_value(-1.0, adjust.page_increment);
            }
            Key::Home => {
                self.set_value(self.parameter.min);
            }
            Key::End => {
                self.set_value(self.parameter.max);
            }
            _ => return false,
        }
        true
    }

    /// Jump to the parameter default (double-click).
    pub fn reset_to_default(&mut self) -> f64 {
        if self.config.disabled {
            return self.config.value;
        }
        self.commit(self.parameter.default_or_min())
    }

    /// Set an absolute value, clamped into range. NaN is ignored.
    pub fn set_value(&mut self, value: f64) -> f64 {
        if self.config.disabled || value.is_nan() {
            return self.config.value;
        }
        self.commit(value.clamp(self.parameter.min, self.parameter.max))
    }

    fn nudge(&mut self, direction: f64) {
        match self.parameter.step {
            Some(step) => {
                let target = self.parameter.snap_to_step(self.config.value + direction * step);
                self.set_value(target);
            }
            None => {
                self.adjust_value(direction, self.config.adjust.key_increment);
            }
        }
    }

    /// Jump to an absolute, already clamped value.
    fn commit(&mut self, value: f64) -> f64 {
        let value = self.parameter.snap_to_step(value);
        self.position = self.parameter.position_of(value);
        self.emit(value)
    }

    fn emit(&mut self, value: f64) -> f64 {
        if value != self.config.value {
            log::trace!("{} -> {}", self.parameter.id, value);
            self.config.value = value;
            if let Some(callback) = self.config.on_value_change.as_mut() {
                callback(value);
            }
        }
        self.config.value
    }

    fn sanitize(parameter: &ContinuousParameter, value: f64) -> f64 {
        let value = if value.is_nan() {
            parameter.default_or_min()
        } else {
            value.clamp(parameter.min, parameter.max)
        };
        parameter.snap_to_step(value)
    }
}
