//! Probabilistic primality testing: a fixed small-prime sieve followed by
//! Miller–Rabin witnessing.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand::thread_rng;

/// Default number of Miller–Rabin rounds, giving a false-positive bound of
/// `4^-20`.
pub const DEFAULT_ROUNDS: usize = 20;

/// Fixed trial-division sieve, deliberately small and auditable, unlike a
/// lazily-grown sieve — every candidate either clears all fifteen divisors
/// or is rejected immediately.
static SMALL_PRIMES: Lazy<Vec<BigUint>> = Lazy::new(|| {
    [3u32, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53]
        .iter()
        .map(|&p| BigUint::from(p))
        .collect()
});

/// Decomposes `n - 1` into `2^s * d` with `d` odd.
fn decompose(n_minus_one: &BigUint) -> (u32, BigUint) {
    let mut d = n_minus_one.clone();
    let mut s = 0u32;

    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    (s, d)
}

fn passes_round(n: &BigUint, n_minus_one: &BigUint, s: u32, d: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    let n_minus_two = n - &two;

    let a = thread_rng().gen_biguint_range(&two, &n_minus_two);
    let mut x = a.modpow(d, n);

    if x.is_one() || &x == n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = x.modpow(&two, n);

        if &x == n_minus_one {
            return true;
        }
    }

    false
}

/// Declares `n` probably prime with false-positive probability bounded by
/// `4^-rounds`. Never panics or raises; a malformed `n` (`<= 1`) simply
/// returns `false`.
#[must_use]
pub fn is_probable_prime(n: &BigUint, rounds: usize) -> bool {
    let one = BigUint::one();

    if n <= &one {
        return false;
    }

    if n == &BigUint::from(2u32) || n == &BigUint::from(3u32) {
        return true;
    }

    if n.is_even() {
        return false;
    }

    if SMALL_PRIMES.iter().any(|p| (n % p).is_zero() && n != p) {
        return false;
    }

    let n_minus_one = n - &one;
    let (s, d) = decompose(&n_minus_one);

    (0..rounds).all(|_| passes_round(n, &n_minus_one, s, &d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_non_primes() {
        assert!(!is_probable_prime(&BigUint::from(0u32), DEFAULT_ROUNDS));
        assert!(!is_probable_prime(&BigUint::from(1u32), DEFAULT_ROUNDS));
        assert!(!is_probable_prime(&BigUint::from(15u32), DEFAULT_ROUNDS));
    }

    #[test]
    fn accepts_small_primes() {
        for p in [2u32, 3, 5, 7, 11, 13, 47, 53] {
            assert!(is_probable_prime(&BigUint::from(p), DEFAULT_ROUNDS), "{p} should be prime");
        }
    }

    #[test]
    fn rejects_carmichael_number() {
        assert!(!is_probable_prime(&BigUint::from(561u32), DEFAULT_ROUNDS));
    }

    #[test]
    fn accepts_known_large_prime() {
        assert!(is_probable_prime(&BigUint::from(65537u32), DEFAULT_ROUNDS));
    }

    #[test]
    fn defense_in_depth_rounds_agree() {
        for p in [561u32, 65537, 15, 97] {
            let n = BigUint::from(p);
            assert_eq!(
                is_probable_prime(&n, DEFAULT_ROUNDS),
                is_probable_prime(&n, 40),
                "rounds should not change the verdict for {p}"
            );
        }
    }
}
