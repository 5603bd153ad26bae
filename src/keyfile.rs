//! Line-delimited decimal key (de)serialization.

use std::fs;
use std::path::Path;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::keygen::{PrivateKeyMaterial, PublicKey};

/// Reads a two-line `e` / `n` public key file.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if the file has fewer than two lines or
/// any line is not a valid non-negative integer.
pub fn read_public_key_file(path: impl AsRef<Path>) -> Result<PublicKey> {
    let contents = fs::read_to_string(path).map_err(|_| Error::InvalidKey)?;
    let lines = numeric_lines(&contents)?;

    if lines.len() < 2 {
        return Err(Error::InvalidKey);
    }

    Ok(PublicKey {
        e: lines[0].clone(),
        n: lines[1].clone(),
    })
}

/// Reads a private key file: two lines (`d`, `n`) force the standard
/// decrypt path, four lines (`d`, `n`, `p`, `q`) enable the CRT fast path.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if the file has fewer than two lines, has
/// three lines (not a supported shape), or any line is not a valid
/// non-negative integer.
pub fn read_private_key_file(path: impl AsRef<Path>) -> Result<PrivateKeyMaterial> {
    let contents = fs::read_to_string(path).map_err(|_| Error::InvalidKey)?;
    let lines = numeric_lines(&contents)?;

    match lines.len() {
        2 => Ok(PrivateKeyMaterial::Standard {
            d: lines[0].clone(),
            n: lines[1].clone(),
        }),
        4 => Ok(PrivateKeyMaterial::Crt {
            d: lines[0].clone(),
            n: lines[1].clone(),
            p: lines[2].clone(),
            q: lines[3].clone(),
        }),
        _ => Err(Error::InvalidKey),
    }
}

/// Writes `public_key` as a two-line `e` / `n` file.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if the file could not be written.
pub fn write_public_key_file(path: impl AsRef<Path>, public_key: &PublicKey) -> Result<()> {
    let contents = format!("{}\n{}\n", public_key.e, public_key.n);
    fs::write(path, contents).map_err(|_| Error::InvalidKey)
}

/// Writes `private_key` as a two- or four-line file, depending on whether
/// CRT material is present.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if the file could not be written.
pub fn write_private_key_file(path: impl AsRef<Path>, private_key: &PrivateKeyMaterial) -> Result<()> {
    let contents = match private_key {
        PrivateKeyMaterial::Standard { d, n } => format!("{d}\n{n}\n"),
        PrivateKeyMaterial::Crt { d, n, p, q } => format!("{d}\n{n}\n{p}\n{q}\n"),
    };

    fs::write(path, contents).map_err(|_| Error::InvalidKey)
}

fn numeric_lines(contents: &str) -> Result<Vec<BigUint>> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().parse::<BigUint>().map_err(|_| Error::InvalidKey))
        .collect()
}
