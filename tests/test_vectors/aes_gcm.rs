// AES-GCM Test Vectors for Interoperability
// Known-answer vectors from the GCM specification plus vectors generated by
// the RustCrypto aes-gcm crate as an independent reference

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

type Aes192Gcm = aes_gcm::AesGcm<aes::Aes192, U12>;

/// Test vector structure for AES-GCM operations, hex encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AesGcmTestVector {
    pub name: String,
    pub key: String,
    pub nonce: String,
    pub plaintext: String,
    pub aad: String,
    pub ciphertext: String,
    pub tag: String,
}

impl AesGcmTestVector {
    fn new(
        name: &str,
        key: &str,
        nonce: &str,
        plaintext: &str,
        aad: &str,
        ciphertext: &str,
        tag: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            nonce: nonce.to_string(),
            plaintext: plaintext.to_string(),
            aad: aad.to_string(),
            ciphertext: ciphertext.to_string(),
            tag: tag.to_string(),
        }
    }

    pub fn decode(&self) -> DecodedVector {
        DecodedVector {
            key: hex::decode(&self.key).expect("bad key hex"),
            nonce: hex::decode(&self.nonce).expect("bad nonce hex"),
            plaintext: hex::decode(&self.plaintext).expect("bad plaintext hex"),
            aad: hex::decode(&self.aad).expect("bad aad hex"),
            ciphertext: hex::decode(&self.ciphertext).expect("bad ciphertext hex"),
            tag: hex::decode(&self.tag).expect("bad tag hex"),
        }
    }
}

/// Raw bytes of a test vector
pub struct DecodedVector {
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub aad: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl DecodedVector {
    /// `ciphertext || tag`
    pub fn sealed(&self) -> Vec<u8> {
        let mut out = self.ciphertext.clone();
        out.extend_from_slice(&self.tag);
        out
    }
}

const GCM_KEY_128: &str = "feffe9928665731c6d6a8f9467308308";
const GCM_KEY_256: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";
const GCM_IV: &str = "cafebabefacedbaddecaf888";
const GCM_AAD: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";
const GCM_PLAINTEXT_60: &str = concat!(
    "d9313225f88406e5a55909c5aff5269a",
    "86a7a9531534f7da2e4c303d8a318a72",
    "1c3c0c95956809532fcf0e2449a6b525",
    "b16aedf5aa0de657ba637b39",
);

/// Known-answer vectors from the GCM specification (McGrew & Viega)
pub fn nist_test_vectors() -> Vec<AesGcmTestVector> {
    vec![
        AesGcmTestVector::new(
            "gcm-spec case 1: AES-128, empty",
            "00000000000000000000000000000000",
            "000000000000000000000000",
            "",
            "",
            "",
            "58e2fccefa7e3061367f1d57a4e7455a",
        ),
        AesGcmTestVector::new(
            "gcm-spec case 2: AES-128, one zero block",
            "00000000000000000000000000000000",
            "000000000000000000000000",
            "00000000000000000000000000000000",
            "",
            "0388dace60b6a392f328c2b971b2fe78",
            "ab6e47d42cec13bdf53a67b21257bddf",
        ),
        AesGcmTestVector::new(
            "gcm-spec case 4: AES-128, aad and partial block",
            GCM_KEY_128,
            GCM_IV,
            GCM_PLAINTEXT_60,
            GCM_AAD,
            concat!(
                "42831ec2217774244b7221b784d0d49c",
                "e3aa212f2c02a4e035c17e2329aca12e",
                "21d514b25466931c7d8f6a5aac84aa05",
                "1ba30b396a0aac973d58e091",
            ),
            "5bc94fbc3221a5db94fae95ae7121a47",
        ),
        AesGcmTestVector::new(
            "gcm-spec case 14: AES-256, one zero block",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "000000000000000000000000",
            "00000000000000000000000000000000",
            "",
            "cea7403d4d606b6e074ec5d3baf39d18",
            "d0d1c8a799996bf0265b98b5d48ab919",
        ),
        AesGcmTestVector::new(
            "gcm-spec case 16: AES-256, aad and partial block",
            GCM_KEY_256,
            GCM_IV,
            GCM_PLAINTEXT_60,
            GCM_AAD,
            concat!(
                "522dc1f099567d07f47f37a32a84427d",
                "643a8cdcbfe5c0c97598a2bd2555d1aa",
                "8cb08e48590dbb3da7b08b1056828838",
                "c5f61e6393ba7a0abcc9f662",
            ),
            "76fc6ece0f4e1768cddf8853bb2d551b",
        ),
    ]
}

/// Seal with the RustCrypto implementation matching the key size
pub fn reference_seal(key: &[u8], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Vec<u8> {
    let nonce = aes_gcm::Nonce::from_slice(nonce);
    let payload = Payload {
        msg: plaintext,
        aad,
    };

    let sealed = match key.len() {
        16 => Aes128Gcm::new_from_slice(key).unwrap().encrypt(nonce, payload),
        24 => Aes192Gcm::new_from_slice(key).unwrap().encrypt(nonce, payload),
        32 => Aes256Gcm::new_from_slice(key).unwrap().encrypt(nonce, payload),
        n => panic!("no reference cipher for {} byte keys", n),
    };
    sealed.expect("reference encryption failed")
}

/// Deterministic vectors covering every key size and a spread of plaintext
/// and associated-data lengths around block boundaries
pub fn reference_test_vectors() -> Vec<AesGcmTestVector> {
    let mut rng = StdRng::seed_from_u64(0x6763_6d73);
    let mut vectors = Vec::new();

    for key_size in [16usize, 24, 32] {
        for (pt_len, aad_len) in [(0, 0), (1, 0), (16, 16), (17, 3), (36, 0), (64, 20), (257, 33)] {
            let key: Vec<u8> = (0..key_size).map(|_| rng.gen()).collect();
            let nonce: [u8; 12] = rng.gen();
            let plaintext: Vec<u8> = (0..pt_len).map(|_| rng.gen()).collect();
            let aad: Vec<u8> = (0..aad_len).map(|_| rng.gen()).collect();

            let sealed = reference_seal(&key, &nonce, &plaintext, &aad);
            let (ciphertext, tag) = sealed.split_at(pt_len);

            vectors.push(AesGcmTestVector {
                name: format!("reference AES-{} pt={} aad={}", key_size * 8, pt_len, aad_len),
                key: hex::encode(&key),
                nonce: hex::encode(nonce),
                plaintext: hex::encode(&plaintext),
                aad: hex::encode(&aad),
                ciphertext: hex::encode(ciphertext),
                tag: hex::encode(tag),
            });
        }
    }

    vectors
}

/// The cross-check input: a raw 32-byte key, a fixed nonce and a short
/// ASCII message
pub fn sample_text_vector() -> AesGcmTestVector {
    let key = hex::decode("000102030405060708090A0B0C0E0F101112131415161718191A1B1C1E1F2021")
        .unwrap();
    let nonce = [
        0x00, 0xAA, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
    ];
    let plaintext = b"sample text. this text is test text.";

    let sealed = reference_seal(&key, &nonce, plaintext, &[]);
    let (ciphertext, tag) = sealed.split_at(plaintext.len());

    AesGcmTestVector {
        name: "sample text".to_string(),
        key: hex::encode(&key),
        nonce: hex::encode(nonce),
        plaintext: hex::encode(plaintext),
        aad: String::new(),
        ciphertext: hex::encode(ciphertext),
        tag: hex::encode(tag),
    }
}

/// Negative test cases: (name, sealed input, aad) that must fail to open
/// under the key and nonce of `sample_text_vector`
pub fn negative_test_vectors() -> Vec<(String, Vec<u8>, Vec<u8>)> {
    let base = sample_text_vector().decode();
    let sealed = base.sealed();
    let mut vectors = Vec::new();

    let mut flipped_ct = sealed.clone();
    flipped_ct[3] ^= 0x10;
    vectors.push(("flipped ciphertext bit".to_string(), flipped_ct, Vec::new()));

    let mut flipped_tag = sealed.clone();
    let last = flipped_tag.len() - 1;
    flipped_tag[last] ^= 0x01;
    vectors.push(("flipped tag bit".to_string(), flipped_tag, Vec::new()));

    let mut truncated = sealed.clone();
    truncated.pop();
    vectors.push(("truncated tag".to_string(), truncated, Vec::new()));

    let mut extended = sealed.clone();
    extended.push(0);
    vectors.push(("extra trailing byte".to_string(), extended, Vec::new()));

    vectors.push(("unexpected aad".to_string(), sealed.clone(), b"aad".to_vec()));
    vectors.push(("tag only".to_string(), sealed[sealed.len() - 16..].to_vec(), Vec::new()));
    vectors.push(("empty input".to_string(), Vec::new(), Vec::new()));

    vectors
}
