use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{padded_blocks, Block, BlockCipher, BLOCK_SIZE, ZERO_BLOCK};
use crate::gf128::{add, mul, Gf128};

/// The GHASH key H, the encryption of the all-zero block
///
/// Only valid together with the key it was derived from. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HashSubkey(Gf128);

impl std::fmt::Debug for HashSubkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashSubkey([REDACTED])")
    }
}

impl HashSubkey {
    /// H = E(K, 0^128)
    pub fn derive<C: BlockCipher + ?Sized>(cipher: &C) -> Self {
        Self::from_block(&cipher.encrypt_block(&ZERO_BLOCK))
    }

    /// Use a raw 16-byte block as the subkey
    pub fn from_block(block: &Block) -> Self {
        Self(Gf128::from_block(block))
    }

    pub(crate) fn element(&self) -> Gf128 {
        self.0
    }
}

/// Incremental GHASH state
///
/// Feed the associated data with one [`Ghash::update`] call and the
/// ciphertext with another, then call [`Ghash::finalize`] with both byte
/// lengths. Each `update` zero-pads its own input to a block boundary, so a
/// single input must not be split across calls at a non-block boundary.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ghash {
    h: Gf128,
    x: Gf128,
}

impl Ghash {
    /// Start a new accumulator at zero
    pub fn new(h: &HashSubkey) -> Self {
        Self {
            h: h.element(),
            x: Gf128::ZERO,
        }
    }

    /// Absorb `data`, zero-padding the final partial block
    pub fn update(&mut self, data: &[u8]) {
        for block in padded_blocks(data) {
            self.absorb(&block);
        }
    }

    /// Absorb the length block and return the hash
    ///
    /// `aad_len` and `ct_len` are byte lengths; they enter the length block
    /// as 64-bit big-endian bit counts.
    pub fn finalize(mut self, aad_len: usize, ct_len: usize) -> Block {
        let mut lengths = [0u8; BLOCK_SIZE];
        lengths[..8].copy_from_slice(&bit_length(aad_len).to_be_bytes());
        lengths[8..].copy_from_slice(&bit_length(ct_len).to_be_bytes());
        self.absorb(&lengths);

        self.x.to_block()
    }

    fn absorb(&mut self, block: &Block) {
        self.x = mul(add(self.x, Gf128::from_block(block)), self.h);
    }
}

impl std::fmt::Debug for Ghash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ghash").finish_non_exhaustive()
    }
}

fn bit_length(len: usize) -> u64 {
    (len as u64) * 8
}

/// GHASH of `aad` followed by `ciphertext` under subkey `h`
///
/// Pure and deterministic; no state is kept between calls.
pub fn ghash(ciphertext: &[u8], aad: &[u8], h: &HashSubkey) -> Block {
    let mut state = Ghash::new(h);
    state.update(aad);
    state.update(ciphertext);
    state.finalize(aad.len(), ciphertext.len())
}
