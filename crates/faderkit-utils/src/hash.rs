//! Hash functions for stable numeric parameter IDs.
//!
//! Parameters are declared with human-readable string IDs (`"cutoff"`,
//! `"filter-mode"`). Hosts and MIDI-learn tables usually want a number, so
//! every parameter also exposes a hashed ID computed here.

/// Compute the FNV-1a 32-bit hash of a string.
///
/// Deterministic across platforms and usable in `const` context.
///
/// # Examples
///
/// ```
/// use faderkit_utils::fnv1a_32;
///
/// let id = fnv1a_32("cutoff");
/// const MODE_ID: u32 = fnv1a_32("filter-mode");
/// assert_ne!(id, MODE_ID);
/// ```
#[inline]
pub const fn fnv1a_32(s: &str) -> u32 {
    const FNV_OFFSET: u32 = 2166136261;
    const FNV_PRIME: u32 = 16777619;

    let bytes = s.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(fnv1a_32(""), 2166136261);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(fnv1a_32("a"), 0xe40c292c);
    }

    #[test]
    fn test_const_context() {
        const HASH: u32 = fnv1a_32("resonance");
        assert_eq!(HASH, fnv1a_32("resonance"));
    }

    #[test]
    fn test_distinct_parameter_ids() {
        assert_ne!(fnv1a_32("cutoff"), fnv1a_32("resonance"));
        assert_ne!(fnv1a_32("osc-1-wave"), fnv1a_32("osc-2-wave"));
    }
}
