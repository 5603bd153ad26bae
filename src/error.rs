//! Error kinds for every fallible operation in the crate.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong, from arithmetic preconditions up through
/// key-file loading and the block cipher's padding checks.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// A modular inverse was requested for `a` and `m` with `gcd(a, m) != 1`.
    #[error("no modular inverse exists (gcd != 1)")]
    NoInverse,

    /// CRT recombination was asked to combine two moduli sharing a factor.
    #[error("CRT moduli are not coprime")]
    NotCoprime,

    /// An encryption input integer was not smaller than the modulus `n`.
    #[error("message integer is out of range for modulus")]
    MessageOutOfRange,

    /// Ciphertext length was not a positive multiple of the block width `k`.
    #[error("ciphertext length is not a multiple of the block size")]
    MalformedCiphertext,

    /// A single block failed PKCS#1 v1.5 padding validation.
    #[error("PKCS#1 v1.5 padding check failed for a block")]
    PaddingError,

    /// A key file had too few numeric lines, or a line was not a valid integer.
    #[error("key file is missing fields or contains non-integer data")]
    InvalidKey,

    /// Decryption was requested without any private key material.
    #[error("no private key supplied for decryption")]
    MissingKey,

    /// Repeated collisions of `p == q` during key generation.
    #[error("failed to generate two distinct primes within the retry budget")]
    PrimeDistinctness,

    /// Pollard's rho's cycle collapsed (`gcd == n`) without yielding a split.
    #[error("Pollard's rho failed to find a nontrivial factor")]
    FactorizationFailure,
}
