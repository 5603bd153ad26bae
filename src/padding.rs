//! [PKCS#1 v1.5](https://en.wikipedia.org/wiki/PKCS_1) type-2 (encryption)
//! padding: `0x00 0x02 PS 0x00 DATA`, where `PS` is a nonzero random
//! padding string. Distinct from type-1 signature padding, which fills
//! `PS` with constant `0xFF` bytes instead.

use rand_core::RngCore;

use crate::error::{Error, Result};

/// Smallest sensible block width: 2 fixed bytes + 1 separator + 8-byte
/// minimum padding string.
const MIN_PADDING_LEN: usize = 8;
const OVERHEAD: usize = 11;

/// The largest payload a block of width `k` can carry.
#[must_use]
pub fn max_payload_len(k: usize) -> usize {
    k.saturating_sub(OVERHEAD)
}

/// Builds a `k`-byte padded block `0x00 0x02 PS 0x00 DATA` around `data`.
///
/// `PS` is drawn uniformly from `{0x01, .., 0xFF}` — never `0x00`, so the
/// separator byte that follows it is unambiguous.
///
/// # Errors
///
/// Returns [`Error::MessageOutOfRange`] if `data` is longer than
/// `max_payload_len(k)`.
pub fn pad<R: RngCore>(rng: &mut R, data: &[u8], k: usize) -> Result<Vec<u8>> {
    let m = data.len();

    if m > max_payload_len(k) {
        return Err(Error::MessageOutOfRange);
    }

    let ps_len = k - 3 - m;
    debug_assert!(ps_len >= MIN_PADDING_LEN);

    let mut block = Vec::with_capacity(k);
    block.push(0x00);
    block.push(0x02);
    block.extend(random_nonzero_bytes(rng, ps_len));
    block.push(0x00);
    block.extend_from_slice(data);

    debug_assert_eq!(block.len(), k);
    Ok(block)
}

/// Parses a `k`-byte padded block back into its data suffix.
///
/// The block must already be re-padded to exactly `k` bytes before calling
/// this — it never tolerates a dropped leading zero.
///
/// # Errors
///
/// Returns [`Error::PaddingError`] if the `0x00 0x02` prefix or the `0x00`
/// separator is missing.
pub fn unpad(block: &[u8]) -> Result<Vec<u8>> {
    if block.len() < OVERHEAD || block[0] != 0x00 || block[1] != 0x02 {
        return Err(Error::PaddingError);
    }

    let separator = block[2..]
        .iter()
        .position(|&b| b == 0x00)
        .ok_or(Error::PaddingError)?;

    Ok(block[2 + separator + 1..].to_vec())
}

fn random_nonzero_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);

    while out.len() < len {
        let mut chunk = vec![0u8; len - out.len()];
        rng.fill_bytes(&mut chunk);
        out.extend(chunk.into_iter().filter(|&b| b != 0x00));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pad_then_unpad_round_trips() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        let data = b"hello";
        let k = 32;

        let block = pad(&mut rng, data, k).unwrap();
        assert_eq!(block.len(), k);
        assert_eq!(block[0], 0x00);
        assert_eq!(block[1], 0x02);
        assert!(block[2..k - 1 - data.len()].iter().all(|&b| b != 0x00));

        let recovered = unpad(&block).unwrap();
        assert_eq!(recovered, data);
    }

    #[test]
    fn pad_rejects_oversized_payload() {
        let mut rng = ChaCha8Rng::from_seed([2; 32]);
        let k = 16;
        let too_long = vec![0u8; max_payload_len(k) + 1];

        assert_eq!(pad(&mut rng, &too_long, k), Err(Error::MessageOutOfRange));
    }

    #[test]
    fn pad_accepts_empty_payload() {
        let mut rng = ChaCha8Rng::from_seed([3; 32]);
        let k = 16;

        let block = pad(&mut rng, &[], k).unwrap();
        let recovered = unpad(&block).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn unpad_rejects_missing_prefix() {
        let block = vec![0x01, 0x02, 0x03, 0x00, 0x04];
        assert_eq!(unpad(&block), Err(Error::PaddingError));
    }

    #[test]
    fn unpad_rejects_missing_separator() {
        let mut block = vec![0x00, 0x02];
        block.extend(vec![0xff; 10]);
        assert_eq!(unpad(&block), Err(Error::PaddingError));
    }

    #[test]
    fn two_encryptions_of_same_data_differ() {
        let mut rng = ChaCha8Rng::from_seed([4; 32]);
        let data = b"same plaintext";
        let k = 64;

        let first = pad(&mut rng, data, k).unwrap();
        let second = pad(&mut rng, data, k).unwrap();

        assert_ne!(first, second);
    }
}
