use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::error::{CryptoError, CryptoResult};

/// Size of a cipher block, counter block and GHASH element in bytes
pub const BLOCK_SIZE: usize = 16;

/// Size of a GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Accepted AES key sizes in bytes (AES-128, AES-192, AES-256)
pub const KEY_SIZES: [usize; 3] = [16, 24, 32];

/// A single 16-byte block
pub type Block = [u8; BLOCK_SIZE];

/// The all-zero block, encrypted to derive the GHASH subkey
pub const ZERO_BLOCK: Block = [0u8; BLOCK_SIZE];

/// Forward permutation of one 16-byte block under a fixed key.
///
/// Implementations must be deterministic and must not carry mutable state
/// between calls, so one instance can serve any number of concurrent
/// operations.
pub trait BlockCipher {
    /// Encrypt a single block
    fn encrypt_block(&self, block: &Block) -> Block;
}

#[derive(Clone)]
enum AesKind {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// AES block cipher with the key schedule expanded once at construction
///
/// The variant is selected from the key length: 16 bytes gives AES-128,
/// 24 bytes AES-192 and 32 bytes AES-256.
///
/// # Examples
///
/// ```
/// use gcmseal::block::{Aes, BlockCipher};
///
/// let cipher = Aes::new(&[0x42; 32]).unwrap();
/// let out = cipher.encrypt_block(&[0u8; 16]);
/// assert_eq!(out.len(), 16);
/// ```
#[derive(Clone)]
pub struct Aes {
    kind: AesKind,
}

impl std::fmt::Debug for Aes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aes")
            .field("key_size", &self.key_size())
            .field("schedule", &"[REDACTED]")
            .finish()
    }
}

impl Aes {
    /// Expand the key schedule for `key`
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] if the key is not 16, 24 or
    /// 32 bytes long
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let invalid = |_| CryptoError::InvalidKeyLength { actual: key.len() };

        let kind = match key.len() {
            16 => AesKind::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            24 => AesKind::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            32 => AesKind::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
            actual => {
                log::debug!("rejecting AES key of {} bytes", actual);
                return Err(CryptoError::InvalidKeyLength { actual });
            }
        };

        Ok(Self { kind })
    }

    /// Length in bytes of the key this schedule was expanded from
    pub fn key_size(&self) -> usize {
        match self.kind {
            AesKind::Aes128(_) => 16,
            AesKind::Aes192(_) => 24,
            AesKind::Aes256(_) => 32,
        }
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &Block) -> Block {
        let mut buf = GenericArray::clone_from_slice(block);
        match &self.kind {
            AesKind::Aes128(c) => c.encrypt_block(&mut buf),
            AesKind::Aes192(c) => c.encrypt_block(&mut buf),
            AesKind::Aes256(c) => c.encrypt_block(&mut buf),
        }

        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&buf);
        out
    }
}

/// Iterator over the 16-byte blocks of a byte slice
///
/// The final chunk is zero-padded on the right when the input length is not
/// a multiple of [`BLOCK_SIZE`]. Padding happens on a copy; the input slice
/// is never touched. An empty input yields no blocks.
#[derive(Debug, Clone)]
pub struct PaddedBlocks<'a> {
    chunks: std::slice::Chunks<'a, u8>,
}

/// Split `data` into zero-padded 16-byte blocks
pub fn padded_blocks(data: &[u8]) -> PaddedBlocks<'_> {
    PaddedBlocks {
        chunks: data.chunks(BLOCK_SIZE),
    }
}

impl<'a> Iterator for PaddedBlocks<'a> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks.next().map(|chunk| {
            let mut block = ZERO_BLOCK;
            block[..chunk.len()].copy_from_slice(chunk);
            block
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for PaddedBlocks<'_> {}

/// Number of blocks needed to cover `len` bytes
pub fn block_count(len: usize) -> u64 {
    (len as u64).div_ceil(BLOCK_SIZE as u64)
}

/// Byte-wise XOR of two blocks
pub fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    for (o, v) in out.iter_mut().zip(b.iter()) {
        *o ^= v;
    }
    out
}
