// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Block RSA
//!
//! RSA with PKCS#1 v1.5 padding can only encrypt messages up to
//! `key_size - 11` bytes. This crate lifts that limit by cutting the input
//! into blocks of that size, encrypting each block on its own and
//! concatenating the results. Every ciphertext block is exactly `key_size`
//! bytes, so decryption walks the ciphertext in `key_size` steps and needs no
//! framing.
//!
//! The single-block primitive and DER key decoding come from the
//! [`rsa`] crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blockrsa::{BlockCipherCodec, DecryptBytes, EncryptBytes, EncryptText};
//!
//! let pem = std::fs::read_to_string("private.pem")?;
//! let codec = BlockCipherCodec::from_private_pem(&pem)?;
//!
//! let message = b"longer than a single RSA block ".repeat(16);
//! let ciphertext = codec.encrypt_bytes(&message)?;
//! assert_eq!(ciphertext.len() % codec.key_size(), 0);
//!
//! let plaintext = codec.decrypt_bytes(&ciphertext)?;
//! assert_eq!(message, plaintext);
//!
//! let text = codec.encrypt_to_text(&message)?;
//! # let _ = text;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Security
//!
//! Blocks are independent, so reordering or dropping whole blocks goes
//! unnoticed. Encrypt a short symmetric key instead when the integrity of the
//! whole payload matters.

mod codec;
mod error;
mod key;
mod text;

pub use codec::*;
pub use error::*;
pub use key::*;
pub use text::*;
