/*!
 * Block cipher collaborator
 *
 * The mode logic in this crate only ever needs "encrypt one 16-byte block
 * under a key". This module puts that operation behind the [`BlockCipher`]
 * trait, provides the AES implementation backed by the RustCrypto `aes`
 * crate, and hosts the block-level helpers shared by CTR and GHASH.
 */

mod cipher;

pub use cipher::*;
