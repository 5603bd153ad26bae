//! [Pollard's rho](https://en.wikipedia.org/wiki/Pollard%27s_rho_algorithm)
//! factoring: an adversarial demonstration of why undersized RSA moduli
//! are unsafe.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::bigint::gcd;
use crate::error::{Error, Result};

fn f(v: &BigUint, n: &BigUint) -> BigUint {
    (v * v + BigUint::one()) % n
}

/// Attempts to find a nontrivial factor of `n` via tortoise-and-hare cycle
/// detection over `f(v) = v^2 + 1 mod n`.
///
/// # Errors
///
/// Returns [`Error::FactorizationFailure`] if the cycle collapses
/// (`gcd(|x - y|, n) == n`) without ever yielding a proper split — a
/// legitimate outcome that invites a retry with a different seed or
/// polynomial, not a bug.
pub fn pollards_rho(n: &BigUint) -> Result<BigUint> {
    let two = BigUint::from(2u32);

    if n.is_even() {
        return Ok(two);
    }

    let mut x = two.clone();
    let mut y = two.clone();

    loop {
        x = f(&x, n);
        y = f(&f(&y, n), n);

        let diff = if x > y { &x - &y } else { &y - &x };
        let d = gcd(&diff, n);

        if d == *n {
            return Err(Error::FactorizationFailure);
        }

        if d != BigUint::one() {
            return Ok(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_known_composite() {
        let n = BigUint::from(8051u32);
        let factor = pollards_rho(&n).unwrap();

        assert!(factor == BigUint::from(83u32) || factor == BigUint::from(97u32));
        assert_eq!(&n % &factor, BigUint::zero());
    }

    #[test]
    fn returns_two_for_even_input() {
        assert_eq!(pollards_rho(&BigUint::from(100u32)).unwrap(), BigUint::from(2u32));
    }

    #[test]
    fn finds_a_factor_of_a_small_rsa_modulus() {
        // Two distinct primes under 30 bits each.
        let p = BigUint::from(104729u32);
        let q = BigUint::from(104723u32);
        let n = &p * &q;

        let factor = pollards_rho(&n).unwrap();
        assert!(factor == p || factor == q);
    }
}
