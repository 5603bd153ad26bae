//! Random prime candidate generation.

use num_bigint::{BigUint, RandBigInt};
use rand_core::CryptoRng;
use rand_core::RngCore;

use crate::primality::{is_probable_prime, DEFAULT_ROUNDS};

/// Samples random odd integers of exactly `bits` bits until the oracle
/// (`rounds = DEFAULT_ROUNDS`) declares one prime, and returns it.
///
/// The top bit and bottom bit are forced to `1` so the result has exactly
/// `bits` bits and is odd. `rng` is injected rather than pulled from a
/// process-wide singleton, so callers can seed it for reproducible tests.
#[must_use]
pub fn generate_prime<R: RngCore + CryptoRng>(rng: &mut R, bits: u64) -> BigUint {
    loop {
        let mut candidate = rng.gen_biguint(bits);

        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);

        if is_probable_prime(&candidate, DEFAULT_ROUNDS) {
            return candidate;
        }
    }
}
