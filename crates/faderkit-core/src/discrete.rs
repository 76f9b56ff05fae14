//! Interaction logic for discrete controls (selectors, mode buttons).
//!
//! [`DiscreteInteractionController`] turns clicks and key presses into a
//! move along an ordered option list and reports the new value through a
//! callback. It never stores the value it emits: the owner applies the
//! change and hands the new value back with
//! [`update_config`](DiscreteInteractionController::update_config).
//!
//! | input | transition |
//! |---|---|
//! | click, Space, Enter | next option, wrapping from last to first |
//! | ArrowRight, ArrowUp | next option, stopping at the last |
//! | ArrowLeft, ArrowDown | previous option, stopping at the first |

use std::fmt;

use crate::input::Key;
use crate::parameter::{DiscreteOption, DiscreteParameter};
use crate::types::RealValue;

/// Callback receiving a newly selected value.
pub type ValueCallback = Box<dyn FnMut(RealValue)>;

/// Everything the controller reads, replaced wholesale on every update.
pub struct DiscreteControllerConfig {
    /// Currently selected value, as owned by the caller.
    pub value: RealValue,
    pub options: Vec<DiscreteOption>,
    pub on_value_change: Option<ValueCallback>,
    pub disabled: bool,
}

impl DiscreteControllerConfig {
    pub fn new(value: impl Into<RealValue>, options: Vec<DiscreteOption>) -> Self {
        Self {
            value: value.into(),
            options,
            on_value_change: None,
            disabled: false,
        }
    }

    /// Options of `parameter`, starting at its default value.
    pub fn from_parameter(parameter: &DiscreteParameter) -> Self {
        let value = parameter
            .options
            .get(parameter.default_index())
            .map(|o| o.value.clone())
            .unwrap_or(RealValue::Number(0.0));
        Self::new(value, parameter.options.clone())
    }

    pub fn with_on_value_change(mut self, callback: impl FnMut(RealValue) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for DiscreteControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteControllerConfig")
            .field("value", &self.value)
            .field("options", &self.options.len())
            .field("has_callback", &self.on_value_change.is_some())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Click/keyboard stepping over a discrete option list.
#[derive(Debug)]
pub struct DiscreteInteractionController {
    config: DiscreteControllerConfig,
}

impl DiscreteInteractionController {
    pub fn new(config: DiscreteControllerConfig) -> Self {
        Self { config }
    }

    /// Replace the whole configuration (value, options, callback, disabled).
    pub fn update_config(&mut self, config: DiscreteControllerConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &DiscreteControllerConfig {
        &self.config
    }

    /// Index of the current value, or 0 if it matches no option.
    pub fn current_index(&self) -> usize {
        self.config
            .options
            .iter()
            .position(|o| o.value == self.config.value)
            .unwrap_or(0)
    }

    /// Advance to the next option, wrapping to the first.
    pub fn cycle_next(&mut self) {
        let len = self.config.options.len();
        if self.config.disabled || len <= 1 {
            return;
        }
        self.emit((self.current_index() + 1) % len);
    }

    /// Advance to the next option; no-op on the last.
    pub fn step_next(&mut self) {
        if self.config.disabled {
            return;
        }
        let next = self.current_index() + 1;
        if next < self.config.options.len() {
            self.emit(next);
        }
    }

    /// Go back to the previous option; no-op on the first.
    pub fn step_prev(&mut self) {
        if self.config.disabled || self.config.options.is_empty() {
            return;
        }
        let current = self.current_index();
        if current > 0 {
            self.emit(current - 1);
        }
    }

    /// Select `value` directly if it is one of the options.
    ///
    /// Emits only when the value differs from the current one.
    pub fn select(&mut self, value: &RealValue) {
        if self.config.disabled || *value == self.config.value {
            return;
        }
        if let Some(index) = self.config.options.iter().position(|o| &o.value == value) {
            self.emit(index);
        }
    }

    /// Click on the control. Ignored if a handler upstream prevented it.
    pub fn handle_click(&mut self, default_prevented: bool) {
        if default_prevented || self.config.disabled {
            return;
        }
        self.cycle_next();
    }

    /// Returns `true` if the key belongs to this control.
    ///
    /// Recognized keys count as handled even when the move is clamped, so the
    /// page does not scroll on an arrow press at the end of the list.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        match Key::parse(key) {
            Some(Key::Space | Key::Enter) => self.cycle_next(),
            Some(k) if k.is_increment() => self.step_next(),
            Some(k) if k.is_decrement() => self.step_prev(),
            _ => {
                log::trace!("Discrete control ignoring key {:?}", key);
                return false;
            }
        }
        true
    }

    fn emit(&mut self, index: usize) {
        let value = self.config.options[index].value.clone();
        log::trace!("Discrete control -> option {} ({})", index, value);
        if let Some(callback) = self.config.on_value_change.as_mut() {
            callback(value);
        }
    }
}
