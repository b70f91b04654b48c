/*!
 * Counter-mode cipher
 *
 * Builds GCM counter blocks from a 96-bit nonce and turns a block cipher
 * into a keystream by encrypting successive counter values. The 32-bit
 * counter field never wraps silently: a run that would need a counter value
 * past 2^32 - 1 is rejected before any output is produced.
 */

mod counter;

pub use counter::*;
