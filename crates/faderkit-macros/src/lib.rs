//! Derive macros for faderkit.
//!
//! `#[derive(Selector)]` turns a unit-only enum into the option list of a
//! discrete parameter by implementing `faderkit::core::selector::SelectorOptions`.
//!
//! # Example
//!
//! ```ignore
//! use faderkit::prelude::*;
//!
//! #[derive(Copy, Clone, PartialEq, Selector)]
//! pub enum Waveform {
//!     Sine,
//!     #[default]
//!     Saw,
//!     #[name = "Square (50%)"]
//!     Square,
//! }
//!
//! let wave = create_selector_from::<Waveform>("Waveform");
//! ```

use proc_macro::TokenStream;

mod selector;
mod validate;

/// Derive macro for implementing `SelectorOptions` on enums.
///
/// # Requirements
///
/// - The type must be an enum with at least one variant
/// - All variants must be unit variants (no fields)
/// - The enum must also derive `Copy`, `Clone`, and `PartialEq`
///
/// # Attributes
///
/// - `#[name = "..."]` - Display label. Defaults to the variant identifier.
/// - `#[value = "..."]` - Option value ID. Defaults to the identifier in
///   kebab case (`LowPass` becomes `"low-pass"`).
/// - `#[default]` - The default option. Defaults to the first variant; at
///   most one variant may carry it.
///
/// Value IDs must be unique; duplicates are a compile error.
///
/// # Example
///
/// ```ignore
/// use faderkit::Selector;
///
/// #[derive(Copy, Clone, PartialEq, Selector)]
/// pub enum FilterMode {
///     #[name = "Low Pass"]
///     LowPass,
///     #[default]
///     #[name = "High Pass"]
///     HighPass,
///     #[value = "bp"]
///     #[name = "Band Pass"]
///     BandPass,
///     Notch,
/// }
///
/// assert_eq!(FilterMode::value_ids(), &["low-pass", "high-pass", "bp", "notch"]);
/// ```
#[proc_macro_derive(Selector, attributes(name, value, default))]
pub fn derive_selector(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match derive_selector_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_selector_impl(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ir = selector::parse(&input)?;
    validate::validate(&ir)?;
    Ok(selector::generate(&ir))
}
