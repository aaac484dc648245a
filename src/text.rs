// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base64 wrappers around the byte-level codec.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::codec::{DecryptBytes, EncryptBytes};
use crate::error::Result;

/// Encrypts to padded standard base64 text.
pub trait EncryptText: EncryptBytes {
    fn encrypt_to_text<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<String> {
        let ciphertext = self.encrypt_bytes(plaintext)?;
        Ok(STANDARD.encode(ciphertext))
    }
}

impl<T: EncryptBytes> EncryptText for T {}

/// Decrypts text produced by [`EncryptText::encrypt_to_text`].
pub trait DecryptText: DecryptBytes {
    /// Base64-decode `text`, then decrypt it.
    ///
    /// Line breaks (`\r`, `\n`) are skipped, so MIME-style wrapped text is
    /// accepted. Anything else that is not valid padded standard base64 fails
    /// with [`Error::InvalidEncoding`](crate::Error::InvalidEncoding).
    fn decrypt_from_text<S: AsRef<str>>(&self, text: S) -> Result<Vec<u8>> {
        let compact: Vec<u8> =
            text.as_ref().bytes().filter(|b| !matches!(b, b'\r' | b'\n')).collect();
        let ciphertext = STANDARD.decode(compact)?;
        self.decrypt_bytes(ciphertext)
    }
}

impl<T: DecryptBytes> DecryptText for T {}
