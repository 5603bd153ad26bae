//! Byte \<-\> integer conversion helpers.

use num_bigint::BigUint;

/// Interprets `bytes` as a big-endian non-negative integer.
#[must_use]
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes `value` as a big-endian byte sequence of exactly `width` bytes,
/// left-padded with `0x00`.
///
/// Used on both the encrypt and decrypt paths so that a block is always
/// re-padded to the full block width before [`crate::padding`] looks at
/// it, eliminating any ambiguity from a dropped leading zero.
///
/// # Panics
///
/// Panics if `value` does not fit in `width` bytes; callers are expected to
/// uphold the `value < n` invariant before calling this.
#[must_use]
pub fn int_to_fixed_bytes(value: &BigUint, width: usize) -> Vec<u8> {
    let raw = value.to_bytes_be();
    assert!(raw.len() <= width, "integer does not fit in {width} bytes");

    let mut out = vec![0u8; width];
    out[width - raw.len()..].copy_from_slice(&raw);
    out
}

/// The byte width `k = ceil(bitlen(n) / 8)` of a modulus.
#[must_use]
pub fn block_width(n: &BigUint) -> usize {
    ((n.bits() as usize) + 7) / 8
}
