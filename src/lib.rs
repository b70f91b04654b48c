/*!
 * gcmseal: the AES-GCM construction
 *
 * This crate implements Galois/Counter Mode on top of an AES block cipher:
 *
 * - GF(2^128) arithmetic under the GCM reduction polynomial
 * - Counter-mode encryption with 32-bit big-endian counters
 * - The GHASH universal hash over associated data and ciphertext
 * - Sealing (`ciphertext || tag`) and constant-time opening
 *
 * The AES block transform itself comes from the RustCrypto `aes` crate;
 * everything above the single-block operation lives here. Only 96-bit
 * nonces are supported.
 *
 * Nonces must be unique per key. Sealing two messages with the same key and
 * nonce destroys both confidentiality and integrity, and nothing in this
 * crate can detect it.
 */

/// Block cipher collaborator and block-level helpers
pub mod block;

/// GF(2^128) field arithmetic
pub mod gf128;

/// Counter-mode keystream
pub mod counter;

/// GHASH universal hash
pub mod ghash;

/// AES-GCM seal and open
pub mod gcm;

/// Common error types
pub mod error;

// Re-export main types for convenience
pub use block::{Aes, BlockCipher, BLOCK_SIZE, NONCE_SIZE, TAG_SIZE};
pub use counter::{Counter, Nonce};
pub use error::{CryptoError, CryptoResult};
pub use gcm::{open, seal, AesGcm, Tag};
pub use gf128::Gf128;

/// The most commonly used items in one import.
pub mod prelude {
    pub use crate::error::{CryptoError, CryptoResult};
    pub use crate::gcm::{open, seal, AesGcm};
    pub use crate::counter::Nonce;
}
