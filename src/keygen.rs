//! Composes [`generate_prime`] twice into a validated RSA keypair.

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::bigint::{gcd, mod_inverse};
use crate::error::{Error, Result};
use crate::prime_gen::generate_prime;

/// Fixed public exponent used by [`generate_keypair`].
pub const DEFAULT_EXPONENT: u32 = 65537;

/// How many times `generate_keypair` will retry a `p == q` collision before
/// giving up with [`Error::PrimeDistinctness`]. Collisions at any realistic
/// bit length are vanishingly rare; this bound only guards against a
/// pathologically small `prime_bits`.
const DISTINCTNESS_RETRY_BUDGET: usize = 64;

/// An RSA public key: the modulus `n` and public exponent `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

/// Private key material, modeled as a tagged variant over which fast path
/// decryption can use rather than a variable-length field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyMaterial {
    /// `d` and `n` only — forces the standard `mod_pow(c, d, n)` path.
    Standard { d: BigUint, n: BigUint },
    /// `d`, `n`, `p`, `q` — enables the CRT fast path.
    Crt {
        d: BigUint,
        n: BigUint,
        p: BigUint,
        q: BigUint,
    },
}

impl PrivateKeyMaterial {
    /// The modulus, regardless of which variant this is.
    #[must_use]
    pub fn n(&self) -> &BigUint {
        match self {
            PrivateKeyMaterial::Standard { n, .. } | PrivateKeyMaterial::Crt { n, .. } => n,
        }
    }

    /// The private exponent, regardless of which variant this is.
    #[must_use]
    pub fn d(&self) -> &BigUint {
        match self {
            PrivateKeyMaterial::Standard { d, .. } | PrivateKeyMaterial::Crt { d, .. } => d,
        }
    }
}

/// Generates an RSA keypair with the fixed exponent [`DEFAULT_EXPONENT`]:
/// samples `p`, rejects it if `(p - 1) mod e == 0`, samples a distinct `q`
/// the same way, then derives `n`, `φ(n)`, and `d`.
///
/// # Errors
///
/// Returns [`Error::PrimeDistinctness`] if `p == q` keeps recurring past
/// the retry budget, or [`Error::NoInverse`] if `e` and `φ(n)` are
/// unexpectedly not coprime (should not occur given the rejection above).
pub fn generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
    prime_bits: u64,
) -> Result<(PublicKey, PrivateKeyMaterial)> {
    generate_keypair_with_exponent(rng, prime_bits, &BigUint::from(DEFAULT_EXPONENT))
}

/// Legacy-compatible variant accepting an arbitrary public exponent `e`,
/// coprime to `φ(n)`, instead of the fixed `65537`. The CLI does not
/// expose this; it exists for callers loading keys generated with a
/// non-fixed exponent.
///
/// # Errors
///
/// Same as [`generate_keypair`].
pub fn generate_keypair_with_exponent<R: RngCore + CryptoRng>(
    rng: &mut R,
    prime_bits: u64,
    e: &BigUint,
) -> Result<(PublicKey, PrivateKeyMaterial)> {
    let one = BigUint::from(1u32);

    let p = generate_prime_coprime_to(rng, prime_bits, e);

    let mut q = generate_prime_coprime_to(rng, prime_bits, e);
    let mut attempts = 0;
    while q == p {
        if attempts >= DISTINCTNESS_RETRY_BUDGET {
            return Err(Error::PrimeDistinctness);
        }
        q = generate_prime_coprime_to(rng, prime_bits, e);
        attempts += 1;
    }

    let n = &p * &q;
    let phi = (&p - &one) * (&q - &one);

    if gcd(e, &phi) != one {
        return Err(Error::NoInverse);
    }

    let d = mod_inverse(e, &phi)?;

    Ok((
        PublicKey {
            e: e.clone(),
            n: n.clone(),
        },
        PrivateKeyMaterial::Crt { d, n, p, q },
    ))
}

fn generate_prime_coprime_to<R: RngCore + CryptoRng>(
    rng: &mut R,
    bits: u64,
    e: &BigUint,
) -> BigUint {
    let one = BigUint::from(1u32);

    loop {
        let candidate = generate_prime(rng, bits);

        if (&candidate - &one) % e != BigUint::from(0u32) {
            return candidate;
        }
    }
}
