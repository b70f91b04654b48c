use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::block::{xor_blocks, Aes, Block, BlockCipher, TAG_SIZE};
use crate::counter::{apply_keystream_with, Counter, Nonce};
use crate::error::{CryptoError, CryptoResult};
use crate::ghash::{ghash, HashSubkey};

/// A 16-byte authentication tag
pub type Tag = [u8; TAG_SIZE];

struct SealingKey {
    cipher: Aes,
    h: HashSubkey,
}

/// AES-GCM context for one key
///
/// Expands the AES key schedule and derives the GHASH subkey once, then
/// seals and opens any number of messages with them. Cloning is cheap and
/// clones share the same key material. The context holds no mutable state,
/// so one instance can be used from several threads at once.
///
/// # Nonce reuse
///
/// Every call to [`AesGcm::seal`] under the same key must use a different
/// nonce. Sealing two messages with the same key and nonce reveals the XOR
/// of their plaintexts and lets an attacker forge tags. Nothing here can
/// detect reuse; tracking nonces is the caller's job.
///
/// # Examples
///
/// ```
/// use gcmseal::gcm::AesGcm;
///
/// let key = [0x42; 32];
/// let cipher = AesGcm::new(&key).unwrap();
///
/// let nonce = [0x24; 12];
/// let plaintext = b"Secret message";
/// let aad = b"Additional authenticated data";
/// let sealed = cipher.seal(&nonce, plaintext, aad).unwrap();
/// assert_eq!(sealed.len(), plaintext.len() + 16);
///
/// let opened = cipher.open(&nonce, &sealed, aad).unwrap();
/// assert_eq!(opened, plaintext);
/// ```
#[derive(Clone)]
pub struct AesGcm {
    key: Arc<SealingKey>,
}

impl std::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcm")
            .field("key_size", &self.key_size())
            .field("cipher", &"[AES-GCM Cipher]")
            .finish()
    }
}

impl AesGcm {
    /// Create a new AES-GCM context from a 16, 24 or 32 byte key
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] for any other key length
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let cipher = Aes::new(key)?;
        let h = HashSubkey::derive(&cipher);

        Ok(Self {
            key: Arc::new(SealingKey { cipher, h }),
        })
    }

    /// Length in bytes of the AES key
    pub fn key_size(&self) -> usize {
        self.key.cipher.key_size()
    }

    /// Encrypt and authenticate `plaintext`, authenticating `aad` as well
    ///
    /// Returns `ciphertext || tag`, always exactly 16 bytes longer than the
    /// plaintext. The nonce must be unique per key (see the type-level
    /// docs).
    ///
    /// # Errors
    ///
    /// * [`CryptoError::UnsupportedNonceLength`] if the nonce is not 12 bytes
    /// * [`CryptoError::MessageTooLong`] if the plaintext needs more than
    ///   2^32 - 2 blocks
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> CryptoResult<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce)?;
        let j0 = Counter::new(&nonce);

        let mut sealed = apply_keystream_with(&self.key.cipher, plaintext, j0.increment())?;
        let tag = compute_tag(&self.key.cipher, &self.key.h, &j0, aad, &sealed);
        sealed.extend_from_slice(&tag);

        log::trace!(
            "sealed {} bytes with {} bytes of associated data",
            plaintext.len(),
            aad.len()
        );
        Ok(sealed)
    }

    /// Verify and decrypt `ciphertext || tag` produced by [`AesGcm::seal`]
    ///
    /// The tag is recomputed over the received ciphertext and compared in
    /// constant time. No plaintext is produced unless it matches.
    ///
    /// # Errors
    ///
    /// * [`CryptoError::UnsupportedNonceLength`] if the nonce is not 12 bytes
    /// * [`CryptoError::AuthenticationFailure`] if the input is shorter than
    ///   a tag, or the tag does not match the ciphertext, nonce and `aad`
    pub fn open(&self, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> CryptoResult<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce)?;
        if sealed.len() < TAG_SIZE {
            log::debug!("sealed input of {} bytes is shorter than a tag", sealed.len());
            return Err(CryptoError::AuthenticationFailure);
        }

        let (ciphertext, received_tag) = sealed.split_at(sealed.len() - TAG_SIZE);
        let j0 = Counter::new(&nonce);
        let expected_tag = compute_tag(&self.key.cipher, &self.key.h, &j0, aad, ciphertext);

        if !bool::from(expected_tag[..].ct_eq(received_tag)) {
            log::debug!("AES-GCM authentication failed");
            return Err(CryptoError::AuthenticationFailure);
        }

        let plaintext = apply_keystream_with(&self.key.cipher, ciphertext, j0.increment())?;
        log::trace!(
            "opened {} bytes with {} bytes of associated data",
            plaintext.len(),
            aad.len()
        );
        Ok(plaintext)
    }
}

/// tag = E(K, J0) XOR GHASH(H, aad, ciphertext)
pub(crate) fn compute_tag<C: BlockCipher + ?Sized>(
    cipher: &C,
    h: &HashSubkey,
    j0: &Counter,
    aad: &[u8],
    ciphertext: &[u8],
) -> Tag {
    let s = ghash(ciphertext, aad, h);
    let encrypted_j0: Block = cipher.encrypt_block(j0.as_block());
    xor_blocks(&encrypted_j0, &s)
}

/// Seal `plaintext` under `key` and `nonce`, authenticating `aad`
///
/// One-shot form of [`AesGcm::seal`]; the key schedule and hash subkey are
/// derived for this call and dropped afterwards. The nonce must never be
/// reused with the same key.
///
/// # Examples
///
/// ```
/// use gcmseal::gcm::{open, seal};
///
/// let key = [0x01; 16];
/// let nonce = [0x02; 12];
/// let sealed = seal(b"hello", &key, &nonce, b"header").unwrap();
/// assert_eq!(sealed.len(), 5 + 16);
/// assert_eq!(open(&sealed, &key, &nonce, b"header").unwrap(), b"hello");
/// ```
///
/// # Errors
///
/// * [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or 32 bytes
/// * [`CryptoError::UnsupportedNonceLength`] if the nonce is not 12 bytes
/// * [`CryptoError::MessageTooLong`] if the plaintext needs more than
///   2^32 - 2 blocks
pub fn seal(plaintext: &[u8], key: &[u8], nonce: &[u8], aad: &[u8]) -> CryptoResult<Vec<u8>> {
    AesGcm::new(key)?.seal(nonce, plaintext, aad)
}

/// Verify and decrypt the output of [`seal`]
///
/// # Errors
///
/// * [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or 32 bytes
/// * [`CryptoError::UnsupportedNonceLength`] if the nonce is not 12 bytes
/// * [`CryptoError::AuthenticationFailure`] if the tag does not verify
pub fn open(sealed: &[u8], key: &[u8], nonce: &[u8], aad: &[u8]) -> CryptoResult<Vec<u8>> {
    AesGcm::new(key)?.open(nonce, sealed, aad)
}
