//! Arbitrary-precision modular arithmetic: modular exponentiation, gcd,
//! extended gcd, modular inverse, and two-modulus CRT recombination.
//!
//! Every non-negative result is returned as a [`BigUint`]; intermediate
//! signed values only ever appear inside [`ext_gcd`], and are reduced back
//! to a non-negative residue before crossing back out of this module.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use crate::error::{Error, Result};

/// `base^exp mod modulus`, via square-and-multiply (delegated to
/// [`BigUint::modpow`]'s own implementation of the same algorithm).
///
/// # Errors
///
/// Returns [`Error::MessageOutOfRange`] if `modulus` is zero — mirroring
/// the contract that a modular exponentiation is undefined mod 0.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::MessageOutOfRange);
    }

    Ok(base.modpow(exp, modulus))
}

/// Non-negative gcd via the iterative Euclidean algorithm.
///
/// `gcd(a, 0) == a`, `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Extended Euclidean algorithm: returns `(g, x, y)` such that
/// `a*x + b*y == g`, with `g == gcd(|a|, |b|)` returned non-negative.
///
/// Iterative, following the standard two-accumulator formulation; `x` and
/// `y` may be negative even though `g` never is.
#[must_use]
pub fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::from(1), BigInt::from(0));
    let (mut old_t, mut t) = (BigInt::from(0), BigInt::from(1));

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let new_r = &old_r - &quotient * &r;
        old_r = r;
        r = new_r;

        let new_s = &old_s - &quotient * &s;
        old_s = s;
        s = new_s;

        let new_t = &old_t - &quotient * &t;
        old_t = t;
        t = new_t;
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Modular inverse of `a` mod `m`, in `[0, m)`.
///
/// # Errors
///
/// Returns [`Error::NoInverse`] if `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let a_signed = BigInt::from(a.clone());
    let m_signed = BigInt::from(m.clone());

    let (g, x, _) = ext_gcd(&a_signed, &m_signed);

    if g != BigInt::from(1) {
        return Err(Error::NoInverse);
    }

    let reduced = ((x % &m_signed) + &m_signed) % &m_signed;
    Ok(reduced
        .to_biguint()
        .expect("reduced residue is non-negative by construction"))
}

/// Chinese Remainder recombination over two coprime moduli: the unique
/// `x` in `[0, m_a * m_b)` with `x ≡ r_a (mod m_a)` and `x ≡ r_b (mod m_b)`.
///
/// Uses both cross-inverses (`m_b` mod `m_a` and `m_a` mod `m_b`) and
/// reduces the final sum modulo `m_a * m_b`, so it stays correct even
/// though the inverses are computed through signed intermediates.
///
/// # Errors
///
/// Returns [`Error::NotCoprime`] if `gcd(m_a, m_b) != 1`.
pub fn crt2(r_a: &BigUint, r_b: &BigUint, m_a: &BigUint, m_b: &BigUint) -> Result<BigUint> {
    if gcd(m_a, m_b) != BigUint::from(1u32) {
        return Err(Error::NotCoprime);
    }

    let m = m_a * m_b;

    let m_b_inv_mod_a = mod_inverse(m_b, m_a).map_err(|_| Error::NotCoprime)?;
    let m_a_inv_mod_b = mod_inverse(m_a, m_b).map_err(|_| Error::NotCoprime)?;

    let term_a = r_a * m_b * m_b_inv_mod_a;
    let term_b = r_b * m_a * m_a_inv_mod_b;

    Ok((term_a + term_b) % m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::ToBigInt;

    #[test]
    fn mod_pow_basic() {
        let result = mod_pow(
            &BigUint::from(4u32),
            &BigUint::from(7u32),
            &BigUint::from(33u32),
        )
        .unwrap();
        assert_eq!(result, BigUint::from(16u32));
    }

    #[test]
    fn mod_pow_rejects_zero_modulus() {
        assert_eq!(
            mod_pow(&BigUint::from(2u32), &BigUint::from(2u32), &BigUint::from(0u32)),
            Err(Error::MessageOutOfRange)
        );
    }

    #[test]
    fn gcd_matches_known_values() {
        assert_eq!(gcd(&BigUint::from(48u32), &BigUint::from(18u32)), BigUint::from(6u32));
        assert_eq!(gcd(&BigUint::from(7u32), &BigUint::from(0u32)), BigUint::from(7u32));
        assert_eq!(gcd(&BigUint::from(0u32), &BigUint::from(0u32)), BigUint::from(0u32));
    }

    #[test]
    fn ext_gcd_bezout_identity_holds() {
        let a = 3.to_bigint().unwrap();
        let b = 11.to_bigint().unwrap();
        let (g, x, y) = ext_gcd(&a, &b);

        assert_eq!(g, BigInt::from(1));
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn mod_inverse_known_values() {
        assert_eq!(
            mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap(),
            BigUint::from(4u32)
        );
        assert_eq!(
            mod_inverse(&BigUint::from(7u32), &BigUint::from(20u32)).unwrap(),
            BigUint::from(3u32)
        );
    }

    #[test]
    fn mod_inverse_rejects_non_coprime() {
        assert_eq!(
            mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)),
            Err(Error::NoInverse)
        );
    }

    #[test]
    fn crt2_known_value() {
        let x = crt2(
            &BigUint::from(2u32),
            &BigUint::from(3u32),
            &BigUint::from(3u32),
            &BigUint::from(5u32),
        )
        .unwrap();

        assert_eq!(x, BigUint::from(8u32));
    }

    #[test]
    fn crt2_rejects_non_coprime_moduli() {
        assert_eq!(
            crt2(
                &BigUint::from(1u32),
                &BigUint::from(1u32),
                &BigUint::from(4u32),
                &BigUint::from(6u32),
            ),
            Err(Error::NotCoprime)
        );
    }
}
