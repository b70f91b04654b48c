use std::ops::{BitXor, BitXorAssign, Mul};

use zeroize::Zeroize;

use crate::block::Block;

/// An element of GF(2^128)
///
/// Stored as two 64-bit words, most significant bit first: bit 127 of the
/// element is the top bit of `hi`, bit 0 the bottom bit of `lo`. Under the
/// GCM convention bit 127 holds the coefficient of x^0, so [`Gf128::ONE`]
/// is the element with only that bit set.
///
/// Values are always fully reduced; every 128-bit pattern is a distinct
/// field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gf128 {
    hi: u64,
    lo: u64,
}

/// Reduction constant for x^128 + x^7 + x^2 + x + 1 in reflected form:
/// 0xE1 followed by 120 zero bits
pub const R: Gf128 = Gf128 {
    hi: 0xe100_0000_0000_0000,
    lo: 0,
};

impl Gf128 {
    /// Additive identity
    pub const ZERO: Gf128 = Gf128 { hi: 0, lo: 0 };

    /// Multiplicative identity (only bit 127 set)
    pub const ONE: Gf128 = Gf128 {
        hi: 0x8000_0000_0000_0000,
        lo: 0,
    };

    /// Build an element from its high and low words
    pub const fn new(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// High 64 bits
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// Low 64 bits
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    /// Read a block as two big-endian words, high word first
    pub fn from_block(block: &Block) -> Self {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&block[..8]);
        lo.copy_from_slice(&block[8..]);

        Self {
            hi: u64::from_be_bytes(hi),
            lo: u64::from_be_bytes(lo),
        }
    }

    /// Serialize as high word then low word, each big-endian
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        block[..8].copy_from_slice(&self.hi.to_be_bytes());
        block[8..].copy_from_slice(&self.lo.to_be_bytes());
        block
    }

    /// Value of bit `pos` (0..=127) as 0 or 1
    fn bit(&self, pos: u32) -> u64 {
        if pos >= 64 {
            (self.hi >> (pos - 64)) & 1
        } else {
            (self.lo >> pos) & 1
        }
    }

    /// Multiply by x: shift one bit toward the low end and fold the bit
    /// that falls off back in with [`R`]
    fn shift_right_reduce(self) -> Self {
        let carry = self.lo & 1;
        let shifted = Gf128 {
            hi: self.hi >> 1,
            lo: (self.lo >> 1) | (self.hi << 63),
        };
        shifted ^ R.masked(carry)
    }

    /// `self` if `bit` is 1, zero if it is 0
    fn masked(self, bit: u64) -> Self {
        let mask = 0u64.wrapping_sub(bit);
        Gf128 {
            hi: self.hi & mask,
            lo: self.lo & mask,
        }
    }
}

/// Field addition: bitwise XOR
pub fn add(a: Gf128, b: Gf128) -> Gf128 {
    Gf128 {
        hi: a.hi ^ b.hi,
        lo: a.lo ^ b.lo,
    }
}

/// Field multiplication
///
/// Scans the bits of `a` from position 127 down to 0. For every set bit the
/// running multiple of `b` is added to the sum; after each step that
/// multiple is advanced by one power of x. The loop is branch-free so the
/// running time does not depend on either operand.
pub fn mul(a: Gf128, b: Gf128) -> Gf128 {
    let mut sum = Gf128::ZERO;
    let mut r = b;

    for pos in (0..128).rev() {
        sum = add(sum, r.masked(a.bit(pos)));
        r = r.shift_right_reduce();
    }

    sum
}

impl BitXor for Gf128 {
    type Output = Gf128;

    fn bitxor(self, rhs: Gf128) -> Gf128 {
        add(self, rhs)
    }
}

impl BitXorAssign for Gf128 {
    fn bitxor_assign(&mut self, rhs: Gf128) {
        *self = add(*self, rhs);
    }
}

impl Mul for Gf128 {
    type Output = Gf128;

    fn mul(self, rhs: Gf128) -> Gf128 {
        mul(self, rhs)
    }
}

impl From<Block> for Gf128 {
    fn from(block: Block) -> Self {
        Gf128::from_block(&block)
    }
}

impl From<Gf128> for Block {
    fn from(element: Gf128) -> Self {
        element.to_block()
    }
}

impl Zeroize for Gf128 {
    fn zeroize(&mut self) {
        self.hi.zeroize();
        self.lo.zeroize();
    }
}
