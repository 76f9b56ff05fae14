//! Rust enums as discrete parameter options.
//!
//! [`SelectorOptions`] is implemented by `#[derive(Selector)]` and lets a
//! plain unit-variant enum describe the options of a discrete parameter, so
//! application code can work with `FilterMode::HighPass` instead of strings.
//!
//! ```ignore
//! use faderkit::Selector;
//!
//! #[derive(Copy, Clone, PartialEq, Selector)]
//! pub enum FilterMode {
//!     #[name = "Low Pass"]
//!     LowPass,
//!     #[default]
//!     #[name = "High Pass"]
//!     HighPass,
//!     Notch,
//! }
//!
//! let mode = create_selector_from::<FilterMode>("Filter Mode");
//! ```

use crate::parameter::DiscreteOption;
use crate::types::RealValue;

/// Enum whose variants are the options of a discrete parameter.
///
/// Option values are the variants' value IDs (`"low-pass"`), labels come
/// from `#[name = "..."]` or the variant identifier.
pub trait SelectorOptions: Copy + PartialEq + Send + Sync + 'static {
    /// Number of variants.
    const COUNT: usize;

    /// Index of the default variant (from `#[default]` or the first variant).
    const DEFAULT_INDEX: usize;

    /// Variant at a 0-based index.
    fn from_index(index: usize) -> Option<Self>;

    /// 0-based index of this variant.
    fn to_index(self) -> usize;

    /// Display labels, in variant order.
    fn labels() -> &'static [&'static str];

    /// Option value IDs, in variant order.
    fn value_ids() -> &'static [&'static str];

    /// The default variant.
    fn default_value() -> Self {
        match Self::from_index(Self::DEFAULT_INDEX) {
            Some(v) => v,
            None => panic!("SelectorOptions::DEFAULT_INDEX out of range"),
        }
    }

    /// Option list for a [`DiscreteParameter`](crate::parameter::DiscreteParameter).
    fn options() -> Vec<DiscreteOption> {
        Self::value_ids()
            .iter()
            .zip(Self::labels())
            .map(|(&value, &label)| DiscreteOption::new(value, label))
            .collect()
    }

    /// Real value carried by this variant's option.
    fn to_value(self) -> RealValue {
        RealValue::from(Self::value_ids()[self.to_index()])
    }

    /// Variant whose option value is `value`.
    fn from_value(value: &RealValue) -> Option<Self> {
        let id = value.as_str()?;
        let index = Self::value_ids().iter().position(|&v| v == id)?;
        Self::from_index(index)
    }

    /// Display label of this variant.
    fn label(self) -> &'static str {
        Self::labels()[self.to_index()]
    }
}
