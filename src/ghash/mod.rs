/*!
 * GHASH universal hash
 *
 * Horner-form evaluation over GF(2^128) of the associated data, the
 * ciphertext and a final length block, keyed by the hash subkey
 * H = E(K, 0^128).
 */

mod ghash;

pub use ghash::*;
