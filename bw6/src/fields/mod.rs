use crate::bytes::{FromBytes, ToBytes};
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{One, Zero};

#[macro_use]
mod macros;

pub mod fp;
pub use self::fp::*;

pub mod fp3;
pub use self::fp3::*;

pub mod fp6;
pub use self::fp6::*;

#[cfg(test)]
mod tests;

/// The interface shared by every level of the tower.
///
/// `inverse` is total: the inverse of zero is zero. Every operation returns
/// a fully reduced element except `lazy_add` and `lazy_double`, whose output
/// is only meant to be fed into a multiplication.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Hash
    + Zero
    + One
    + ToBytes
    + FromBytes
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
{
    /// Degree of the extension over `Fp`.
    const DEGREE: usize;

    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    /// Doubles `self` in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self {
        let mut copy = *self;
        copy.square_in_place();
        copy
    }

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Returns the multiplicative inverse, or zero for zero.
    #[must_use]
    fn inverse(&self) -> Self;

    fn inverse_in_place(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Addition whose result may stay in `[0, 2p)` per base coefficient.
    #[must_use]
    fn lazy_add(&self, other: &Self) -> Self;

    /// Doubling whose result may stay in `[0, 2p)` per base coefficient.
    #[must_use]
    fn lazy_double(&self) -> Self;

    /// Raises `self` to `p^power`.
    fn frobenius_map(&mut self, power: usize);

    /// Square-and-multiply over little-endian `u64` limbs, most significant
    /// bit first. `pow(0) == 1`.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();

        for i in BitIteratorBE::new(exp) {
            res.square_in_place();
            if i {
                res *= self;
            }
        }
        res
    }
}

/// Iterates over the bits of a little-endian limb slice, most significant first.
#[derive(Debug)]
pub struct BitIteratorBE<Slice: AsRef<[u64]>> {
    s: Slice,
    n: usize,
}

impl<Slice: AsRef<[u64]>> BitIteratorBE<Slice> {
    pub fn new(s: Slice) -> Self {
        let n = s.as_ref().len() * 64;
        BitIteratorBE { s, n }
    }

    /// Skips the leading zeros.
    pub fn without_leading_zeros(s: Slice) -> impl Iterator<Item = bool> {
        Self::new(s).skip_while(|b| !b)
    }
}

impl<Slice: AsRef<[u64]>> Iterator for BitIteratorBE<Slice> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);

            Some(self.s.as_ref()[part] & (1 << bit) > 0)
        }
    }
}
