// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{BlockCipherCodec, DecryptBytes};
use crate::error::{Error, Result};

use rand::{CryptoRng, RngCore};
use rsa::Pkcs1v15Encrypt;
use tracing::{debug, trace};
use zeroize::Zeroizing;

impl<R: CryptoRng + RngCore> DecryptBytes for BlockCipherCodec<R> {
    fn decrypt_bytes<C: AsRef<[u8]>>(&self, ciphertext: C) -> Result<Vec<u8>> {
        let ciphertext = ciphertext.as_ref();
        if ciphertext.is_empty() {
            return Err(Error::InvalidArgument("ciphertext is empty"));
        }

        let private_key = self
            .key
            .private_key()
            .ok_or(Error::InvalidArgument("codec holds no private key"))?;

        // Reject a short trailing block up front instead of handing it to the
        // primitive.
        let key_size = self.key_size();
        if ciphertext.len() % key_size != 0 {
            return Err(Error::MalformedCiphertext { len: ciphertext.len(), key_size });
        }

        let blocks = ciphertext.len() / key_size;
        debug!(len = ciphertext.len(), blocks, key_size, "decrypting");

        // Partial output is wiped if a later block fails.
        let mut plaintext = Zeroizing::new(Vec::with_capacity(blocks * self.encrypt_block_size));

        let mut rng = self.lock_rng();
        for (index, block) in ciphertext.chunks_exact(key_size).enumerate() {
            let chunk = private_key
                .decrypt_blinded(&mut *rng, Pkcs1v15Encrypt, block)
                .map(Zeroizing::new)
                .map_err(|err| {
                    debug!(block = index, %err, "block decryption failed");
                    Error::DecryptionFailed(format!("block {index}: {err}"))
                })?;

            trace!(block = index, len = chunk.len(), "block decrypted");
            plaintext.extend_from_slice(&chunk);
        }

        Ok(std::mem::take(&mut *plaintext))
    }
}
