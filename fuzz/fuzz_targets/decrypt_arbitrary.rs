#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use blockrsa::{BlockCipherCodec, DecryptBytes, Error};

static CODEC: OnceLock<BlockCipherCodec> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let codec = CODEC.get_or_init(|| {
        BlockCipherCodec::from_private_pem(include_str!("../../testdata/private_1024.pem"))
            .expect("fixture key must parse")
    });

    // Arbitrary ciphertext must fail cleanly or decrypt; it must never panic.
    match codec.decrypt_bytes(data) {
        Ok(plaintext) => {
            let max = (data.len() / codec.key_size()) * codec.encrypt_block_size();
            assert!(plaintext.len() <= max, "plaintext longer than its blocks can carry");
        }
        Err(Error::InvalidArgument(_)) => assert!(data.is_empty()),
        Err(Error::MalformedCiphertext { len, key_size }) => {
            assert_eq!(len, data.len());
            assert_ne!(len % key_size, 0);
        }
        Err(Error::DecryptionFailed(_)) => assert_eq!(data.len() % codec.key_size(), 0),
        Err(other) => panic!("unexpected error kind: {other}"),
    }
});
