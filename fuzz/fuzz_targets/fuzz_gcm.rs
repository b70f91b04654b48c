#![no_main]

use arbitrary::Arbitrary;
use gcmseal::{AesGcm, CryptoError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct GcmFuzzInput {
    key: Vec<u8>,
    nonce: [u8; 12],
    plaintext: Vec<u8>,
    associated_data: Vec<u8>,
    sealed: Vec<u8>,
    flip: Option<(usize, u8)>,
}

fuzz_target!(|input: GcmFuzzInput| {
    // Fall back to an AES-256 key when the fuzzed one has the wrong size
    let cipher = match AesGcm::new(&input.key) {
        Ok(cipher) => cipher,
        Err(CryptoError::InvalidKeyLength { .. }) => AesGcm::new(&[0u8; 32]).unwrap(),
        Err(e) => panic!("unexpected key error: {}", e),
    };

    let sealed = cipher
        .seal(&input.nonce, &input.plaintext, &input.associated_data)
        .unwrap();
    assert_eq!(sealed.len(), input.plaintext.len() + 16);

    let opened = cipher
        .open(&input.nonce, &sealed, &input.associated_data)
        .unwrap();
    assert_eq!(opened, input.plaintext);

    // Any single-byte modification must be rejected
    if let Some((pos, mask)) = input.flip.filter(|&(_, mask)| mask != 0) {
        let mut tampered = sealed.clone();
        let pos = pos % tampered.len();
        tampered[pos] ^= mask;
        assert_eq!(
            cipher.open(&input.nonce, &tampered, &input.associated_data),
            Err(CryptoError::AuthenticationFailure)
        );
    }

    // Arbitrary input must never panic
    let _ = cipher.open(&input.nonce, &input.sealed, &input.associated_data);
});
