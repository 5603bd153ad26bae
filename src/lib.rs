//! A from-scratch, educational RSA cryptosystem.
//!
//! Generates keypairs, encrypts and decrypts file-sized payloads using
//! block segmentation with PKCS#1 v1.5-style padding, and exposes a
//! Chinese Remainder Theorem acceleration path for private-key operations.
//! A [`pollard_rho`] factoring demo shows why undersized moduli are unsafe.
//!
//! This is **not** a crypto library _(don't roll your own crypto!)_ — no
//! constant-time guarantees, no side-channel resistance, no interop with
//! standard key/certificate encodings. It exists to make the arithmetic
//! behind RSA legible.
//!
//! Five layers compose bottom-up: [`bigint`] (modular arithmetic),
//! [`primality`] (the Miller–Rabin oracle), [`prime_gen`] (candidate
//! sampling), [`keygen`] (the keypair pipeline), and [`cipher`] (the block
//! cipher core). [`padding`] and [`convert`] are internal collaborators of
//! [`cipher`]; [`keyfile`] handles the on-disk key format; [`key_source`]
//! picks between a key file and an in-memory key; [`pollard_rho`] is the
//! standalone adversarial attack.

#![deny(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod bigint;
pub mod cipher;
pub mod convert;
pub mod error;
pub mod key_source;
pub mod keyfile;
pub mod keygen;
pub mod padding;
pub mod pollard_rho;
pub mod primality;
pub mod prime_gen;

pub use cipher::{decrypt_payload, encrypt_payload, DecryptPolicy};
pub use error::{Error, Result};
pub use key_source::{resolve_private_key, KeySource};
pub use keygen::{generate_keypair, generate_keypair_with_exponent, PrivateKeyMaterial, PublicKey};
pub use pollard_rho::pollards_rho;
