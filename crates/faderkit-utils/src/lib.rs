//! Internal utilities for the faderkit parameter model.
//!
//! Low-level helpers used by `faderkit-core`. The crate has zero external
//! dependencies.
//!
//! # Contents
//!
//! - [`fnv1a_32`] - FNV-1a hash for deriving numeric parameter IDs
//! - [`round_half_up`] - The single rounding rule used by every quantizer

pub mod hash;
pub mod round;

pub use hash::fnv1a_32;
pub use round::{round_half_up, round_to_u64};
