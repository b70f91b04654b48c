use crate::block::{
    block_count, padded_blocks, xor_blocks, Aes, Block, BlockCipher, BLOCK_SIZE, NONCE_SIZE,
};
use crate::error::{CryptoError, CryptoResult};

/// Most blocks a single GCM invocation may encrypt: the counter field starts
/// at 2 for the first keystream block and stops at 2^32 - 1
pub const MAX_BLOCKS: u64 = (1 << 32) - 2;

/// Value of the 32-bit counter field in J0
pub const INITIAL_COUNTER: u32 = 1;

/// A 96-bit GCM nonce
///
/// The caller must never reuse a nonce under the same key. Doing so leaks
/// the XOR of the two plaintexts and lets an attacker forge tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Wrap 12 nonce bytes
    pub const fn new(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a nonce out of a slice
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnsupportedNonceLength`] unless the slice is
    /// exactly 12 bytes long
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != NONCE_SIZE {
            log::debug!("rejecting nonce of {} bytes", bytes.len());
            return Err(CryptoError::UnsupportedNonceLength {
                actual: bytes.len(),
            });
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(bytes);
        Ok(Self(nonce))
    }

    /// The raw nonce bytes
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> CryptoResult<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A GCM counter block: nonce in bytes 0..12, big-endian 32-bit counter in
/// bytes 12..16
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter(Block);

impl Counter {
    /// J0 for `nonce`: the nonce followed by a counter field of 1
    pub fn new(nonce: &Nonce) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        block[..NONCE_SIZE].copy_from_slice(nonce.as_bytes());
        Self(block).with_value(INITIAL_COUNTER)
    }

    /// Treat an arbitrary block as a counter
    pub const fn from_block(block: Block) -> Self {
        Self(block)
    }

    /// The 32-bit counter field
    pub fn value(&self) -> u32 {
        u32::from_be_bytes([self.0[12], self.0[13], self.0[14], self.0[15]])
    }

    /// The full 16-byte counter block
    pub fn as_block(&self) -> &Block {
        &self.0
    }

    /// Add one to the counter field modulo 2^32, leaving the nonce bytes
    /// untouched
    pub fn increment(self) -> Self {
        self.with_value(self.value().wrapping_add(1))
    }

    /// Add one to the counter field, or `None` if it would wrap to zero
    pub fn checked_increment(self) -> Option<Self> {
        self.value().checked_add(1).map(|v| self.with_value(v))
    }

    fn with_value(mut self, value: u32) -> Self {
        self.0[NONCE_SIZE..].copy_from_slice(&value.to_be_bytes());
        self
    }
}

/// Number of keystream blocks available from `start` before the counter
/// field would wrap
pub fn max_blocks_from(start: &Counter) -> u64 {
    (1u64 << 32) - u64::from(start.value())
}

/// XOR `data` with the AES-CTR keystream for `key` starting at `start`
///
/// Re-applying with the same key and starting counter recovers the input,
/// so the same call both encrypts and decrypts. The input is never modified;
/// the result is a new buffer of the same length.
///
/// # Errors
///
/// * [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or 32 bytes
/// * [`CryptoError::MessageTooLong`] if the counter field would wrap
pub fn apply_keystream(data: &[u8], key: &[u8], start: Counter) -> CryptoResult<Vec<u8>> {
    let cipher = Aes::new(key)?;
    apply_keystream_with(&cipher, data, start)
}

/// [`apply_keystream`] with an already-expanded block cipher
pub fn apply_keystream_with<C: BlockCipher + ?Sized>(
    cipher: &C,
    data: &[u8],
    start: Counter,
) -> CryptoResult<Vec<u8>> {
    let blocks = block_count(data.len());
    let limit = max_blocks_from(&start);
    if blocks > limit {
        log::debug!(
            "keystream request of {} blocks exceeds the {} left in the counter",
            blocks,
            limit
        );
        return Err(CryptoError::MessageTooLong { blocks, limit });
    }

    let mut out = Vec::with_capacity(blocks as usize * BLOCK_SIZE);
    let mut counter = start;
    for block in padded_blocks(data) {
        let mask = cipher.encrypt_block(counter.as_block());
        out.extend_from_slice(&xor_blocks(&block, &mask));
        counter = counter.increment();
    }

    // Drop the keystream bytes that covered the padding
    out.truncate(data.len());
    Ok(out)
}

/// Plain AES-CTR with the keystream seeded at J0 itself
///
/// GCM never uses this directly (its keystream starts at J0 + 1), but it is
/// the standard 32-bit-counter CTR mode for a 96-bit nonce.
pub fn encrypt(data: &[u8], key: &[u8], nonce: &Nonce) -> CryptoResult<Vec<u8>> {
    apply_keystream(data, key, Counter::new(nonce))
}
