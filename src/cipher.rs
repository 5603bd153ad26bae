//! Segments a payload into padded blocks, encrypts/decrypts them under an
//! RSA key, and reassembles the result.

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::bigint::{crt2, mod_pow};
use crate::convert::{block_width, bytes_to_int, int_to_fixed_bytes};
use crate::error::{Error, Result};
use crate::keygen::{PrivateKeyMaterial, PublicKey};
use crate::padding::{self, max_payload_len};

/// Per-block padding-failure policy for [`decrypt_payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecryptPolicy {
    /// Drop the offending block (after logging a warning) and continue.
    #[default]
    Lenient,
    /// Promote the first [`Error::PaddingError`] to a fatal error.
    Strict,
}

/// Encrypts `payload` under `public_key`, returning the raw concatenation
/// of `k`-byte blocks (no header, no length prefix).
///
/// Empty input yields empty output: emitting a padded empty block would
/// spend a keypair operation to encrypt nothing.
///
/// # Errors
///
/// Returns [`Error::MessageOutOfRange`] if the key's modulus is too narrow
/// to fit even the padding overhead (`k <= 11`), or if a padded segment
/// does not end up smaller than `n`.
pub fn encrypt_payload<R: RngCore + CryptoRng>(
    rng: &mut R,
    payload: &[u8],
    public_key: &PublicKey,
) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    let k = block_width(&public_key.n);
    let max_payload = max_payload_len(k);

    if max_payload == 0 {
        return Err(Error::MessageOutOfRange);
    }

    let mut ciphertext =
        Vec::with_capacity(k * ((payload.len() + max_payload - 1) / max_payload));

    for segment in payload.chunks(max_payload) {
        let padded = padding::pad(rng, segment, k)?;
        let m_int = bytes_to_int(&padded);

        if m_int >= public_key.n {
            return Err(Error::MessageOutOfRange);
        }

        let c_int = mod_pow(&m_int, &public_key.e, &public_key.n)?;
        ciphertext.extend(int_to_fixed_bytes(&c_int, k));
    }

    Ok(ciphertext)
}

/// Decrypts `ciphertext` produced by [`encrypt_payload`] under
/// `private_key`. Uses the CRT fast path when `private_key` carries `p`
/// and `q`, otherwise the standard `mod_pow(c, d, n)` path.
///
/// # Errors
///
/// Returns [`Error::MalformedCiphertext`] if the ciphertext length is not
/// a positive multiple of the block width (a non-empty, non-multiple
/// length always indicates a truncated trailing block). Returns
/// [`Error::PaddingError`] for the first bad block under
/// [`DecryptPolicy::Strict`]; under [`DecryptPolicy::Lenient`] (the
/// default) bad blocks are logged and dropped instead.
pub fn decrypt_payload(
    ciphertext: &[u8],
    private_key: &PrivateKeyMaterial,
    policy: DecryptPolicy,
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Ok(Vec::new());
    }

    let k = block_width(private_key.n());

    if k == 0 || ciphertext.len() % k != 0 {
        return Err(Error::MalformedCiphertext);
    }

    let mut plaintext = Vec::new();

    for (index, chunk) in ciphertext.chunks(k).enumerate() {
        let c_int = bytes_to_int(chunk);
        let m_int = decrypt_block(&c_int, private_key)?;
        let padded = int_to_fixed_bytes(&m_int, k);

        match padding::unpad(&padded) {
            Ok(data) => plaintext.extend(data),
            Err(Error::PaddingError) if policy == DecryptPolicy::Lenient => {
                log::warn!("block {index} failed PKCS#1 v1.5 padding check, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(plaintext)
}

fn decrypt_block(c_int: &BigUint, private_key: &PrivateKeyMaterial) -> Result<BigUint> {
    match private_key {
        PrivateKeyMaterial::Standard { d, n } => mod_pow(c_int, d, n),
        PrivateKeyMaterial::Crt { d, p, q, .. } => crt_decrypt(c_int, d, p, q),
    }
}

/// `m = crt2(c^(d mod p-1) mod p, c^(d mod q-1) mod q, p, q)`.
fn crt_decrypt(c_int: &BigUint, d: &BigUint, p: &BigUint, q: &BigUint) -> Result<BigUint> {
    let one = BigUint::from(1u32);
    let d_p = d % (p - &one);
    let d_q = d % (q - &one);

    let m1 = mod_pow(c_int, &d_p, p)?;
    let m2 = mod_pow(c_int, &d_q, q)?;

    crt2(&m1, &m2, p, q)
}
