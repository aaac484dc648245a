#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use blockrsa::{BlockCipherCodec, DecryptText, EncryptText};

static CODEC: OnceLock<BlockCipherCodec> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let codec = CODEC.get_or_init(|| {
        BlockCipherCodec::from_private_pem(include_str!("../../testdata/private_1024.pem"))
            .expect("fixture key must parse")
    });

    // Arbitrary text input must never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = codec.decrypt_from_text(text);
    }

    if data.is_empty() {
        return;
    }

    let text = codec.encrypt_to_text(data).expect("encryption of non-empty input failed");
    let plaintext = codec.decrypt_from_text(&text).expect("decryption of fresh text failed");
    assert_eq!(data, plaintext.as_slice());
});
