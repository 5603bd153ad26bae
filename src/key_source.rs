//! `KeySource`: a single typed variant over where decrypt obtains its
//! private key material from, either a file path or an in-memory key.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::keyfile::read_private_key_file;
use crate::keygen::PrivateKeyMaterial;

/// Where to obtain private key material from for a decrypt operation.
#[derive(Debug, Clone)]
pub enum KeySource {
    FromFile(PathBuf),
    InMemory(PrivateKeyMaterial),
}

impl KeySource {
    /// Resolves this source into concrete [`PrivateKeyMaterial`].
    ///
    /// # Errors
    ///
    /// Propagates [`Error::InvalidKey`] from [`read_private_key_file`] for
    /// the `FromFile` variant.
    pub fn resolve(self) -> Result<PrivateKeyMaterial> {
        match self {
            KeySource::FromFile(path) => read_private_key_file(path),
            KeySource::InMemory(material) => Ok(material),
        }
    }
}

/// Resolves an optional [`KeySource`] into private key material.
///
/// # Errors
///
/// Returns [`Error::MissingKey`] if `source` is `None`; otherwise
/// propagates [`KeySource::resolve`]'s errors.
pub fn resolve_private_key(source: Option<KeySource>) -> Result<PrivateKeyMaterial> {
    source.ok_or(Error::MissingKey)?.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn missing_source_is_an_error() {
        assert_eq!(resolve_private_key(None), Err(Error::MissingKey));
    }

    #[test]
    fn in_memory_source_resolves_directly() {
        let material = PrivateKeyMaterial::Standard {
            d: BigUint::from(3u32),
            n: BigUint::from(33u32),
        };

        let resolved = resolve_private_key(Some(KeySource::InMemory(material.clone()))).unwrap();
        assert_eq!(resolved, material);
    }
}
