// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{BlockCipherCodec, EncryptBytes};
use crate::error::{Error, Result};

use rand::{CryptoRng, RngCore};
use rsa::Pkcs1v15Encrypt;
use tracing::{debug, trace};

impl<R: CryptoRng + RngCore> EncryptBytes for BlockCipherCodec<R> {
    fn encrypt_bytes<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Vec<u8>> {
        let plaintext = plaintext.as_ref();
        if plaintext.is_empty() {
            return Err(Error::InvalidArgument("plaintext is empty"));
        }

        let public_key = self.key.public_key();
        let block_size = self.encrypt_block_size;
        let mut ciphertext = Vec::with_capacity(self.ciphertext_len(plaintext.len()));

        debug!(
            len = plaintext.len(),
            blocks = super::util::block_count(plaintext.len(), block_size),
            key_size = self.key_size(),
            "encrypting"
        );

        // Every chunk but the last is exactly `block_size`; the last holds the
        // remainder and is never empty.
        let mut rng = self.lock_rng();
        for (index, chunk) in plaintext.chunks(block_size).enumerate() {
            let block = public_key.encrypt(&mut *rng, Pkcs1v15Encrypt, chunk).map_err(|err| {
                debug!(block = index, %err, "block encryption failed");
                Error::EncryptionFailed(format!("block {index}: {err}"))
            })?;

            trace!(block = index, len = chunk.len(), "block encrypted");
            ciphertext.extend_from_slice(&block);
        }

        Ok(ciphertext)
    }
}
