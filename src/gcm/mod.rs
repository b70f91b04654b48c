/*!
 * AES-GCM sealing
 *
 * Composes the counter-mode cipher and GHASH into authenticated encryption
 * with associated data. `seal` produces `ciphertext || tag`; `open` checks
 * the tag in constant time before releasing any plaintext.
 */

mod gcm;

pub use gcm::*;
