#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use blockrsa::{BlockCipherCodec, DecryptBytes, EncryptBytes};

static CODEC: OnceLock<BlockCipherCodec> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let codec = CODEC.get_or_init(|| {
        BlockCipherCodec::from_private_pem(include_str!("../../testdata/private_1024.pem"))
            .expect("fixture key must parse")
    });

    if data.is_empty() {
        assert!(codec.encrypt_bytes(data).is_err(), "empty plaintext must be rejected");
        return;
    }

    let ciphertext = codec.encrypt_bytes(data).expect("encryption of non-empty input failed");
    assert_eq!(ciphertext.len(), codec.ciphertext_len(data.len()));
    assert_eq!(ciphertext.len() % codec.key_size(), 0);

    let plaintext = codec.decrypt_bytes(&ciphertext).expect("decryption of fresh ciphertext failed");
    assert_eq!(data, plaintext.as_slice(), "roundtrip mismatch");
});
