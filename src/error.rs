// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while loading keys or running block operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to parse key material: {0}")]
    KeyParse(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("ciphertext length {len} is not a multiple of the {key_size}-byte key size")]
    MalformedCiphertext { len: usize, key_size: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid base64 text: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
