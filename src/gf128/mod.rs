/*!
 * GF(2^128) arithmetic
 *
 * Field elements, addition and multiplication under the GCM reduction
 * polynomial x^128 + x^7 + x^2 + x + 1, using GCM's bit-reflected
 * convention.
 */

mod gf128;

pub use gf128::*;
