use crate::{
    biginteger::BigInteger768,
    bytes::{check_length, FromBytes, ToBytes},
    error::Error,
    fields::{BitIteratorBE, Field, Fp, Fp3},
    Vec,
};
use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// `Fp3[w] / (w^2 - v)`, stored as `c0 + c1 * w`. The pairing target group
/// lives here.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Fp6 {
    pub c0: Fp3,
    pub c1: Fp3,
}

impl Fp6 {
    /// Byte width of the fixed encoding.
    pub const BYTES: usize = 2 * Fp3::BYTES;

    /// `Fp3::NONRESIDUE^((p^i - 1) / 6)` for `i = 0..6`
    pub const FROBENIUS_COEFF_FP6_C1: [Fp; 6] = [
        Fp(BigInteger768([
            0x0202ffffffff85d5,
            0x5a5826358fff8ce7,
            0x9e996e43827faade,
            0xda6aff320ee47df4,
            0xece9cb3e1d94b80b,
            0xc0e667a25248240b,
            0xa74da5bfdcad3905,
            0x2352e7fe462f2103,
            0x7b56588008b1c87c,
            0x45848a63e711022f,
            0xd7a81ebb9f65a9df,
            0x0051f77ef127e87d,
        ])),
        Fp(BigInteger768([
            0x8cfcb51bd8404a93,
            0x495e69d68495a383,
            0xd23cbc9234705263,
            0x8d2b4c2b5fcf4f52,
            0x6a798a5d20c612ce,
            0x3e825d90eb6c2443,
            0x772b249f2c9525fe,
            0x521b2ed366e4b9bb,
            0x84abb49bd7c4471d,
            0x907062359c0f17e3,
            0x3385e55030cc6f12,
            0x003f11a3a41a2606,
        ])),
        Fp(BigInteger768([
            0x7f96b51bd840c549,
            0xd59782096496171f,
            0x49b046fd9ce14bbc,
            0x4b6163bba7527a56,
            0xef6c92fb771d59f1,
            0x0425bedbac1dfdc7,
            0xd3ac39de759c0ffd,
            0x9f43ed0e063a81d0,
            0x5bd7d20b4f9a3ce2,
            0x0411f03c36cf5c3c,
            0x2d658fd49661c472,
            0x01100249ae760b93,
        ])),
        Fp(BigInteger768([
            0xf29a000000007ab6,
            0x8c391832e000739b,
            0x77738a6b6870f959,
            0xbe36179047832b03,
            0x84f3089e56574722,
            0xc5a3614ac0b1d984,
            0x5c81153f4906e9fe,
            0x4d28be3a9f55c815,
            0xd72c1d6f77d5f5c5,
            0x73a18e069ac04458,
            0xf9dfaa846595555f,
            0x00d0f0a60a5be58c,
        ])),
        Fp(BigInteger768([
            0x67a04ae427bfb5f8,
            0x9d32d491eb6a5cff,
            0x43d03c1cb68051d4,
            0x0b75ca96f69859a5,
            0x0763497f5325ec60,
            0x48076b5c278dd94d,
            0x8ca3965ff91efd06,
            0x1e6077657ea02f5d,
            0xcdd6c153a8c37724,
            0x28b5b634e5c22ea4,
            0x9e01e3efd42e902c,
            0x00e3d6815769a804,
        ])),
        Fp(BigInteger768([
            0x75064ae427bf3b42,
            0x10f9bc5f0b69e963,
            0xcc5cb1b14e0f587b,
            0x4d3fb306af152ea1,
            0x827040e0fccea53d,
            0x82640a1166dbffc8,
            0x30228120b0181307,
            0xd137b92adf4a6748,
            0xf6aaa3e430ed815e,
            0xb514282e4b01ea4b,
            0xa422396b6e993acc,
            0x0012e5db4d0dc277,
        ])),
    ];

    pub const fn new(c0: Fp3, c1: Fp3) -> Self {
        Fp6 { c0, c1 }
    }

    /// Multiplies an `Fp3` element by `w^2 = v`.
    #[inline]
    pub fn mul_base_field_by_nonresidue(fe: &Fp3) -> Fp3 {
        fe.mul_by_nonresidue()
    }

    /// The `p^3`-power Frobenius, which for this tower negates `c1`.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// Inverse of an element of norm one.
    pub fn unitary_inverse(&self) -> Self {
        Fp6::new(self.c0, -self.c1)
    }

    /// Karatsuba squaring.
    pub fn square_karatsuba(&self) -> Self {
        let v0 = self.c0.square();
        let v1 = self.c1.square();
        let c1 = (self.c0 + &self.c1).square() - &v0 - &v1;
        let c0 = Self::mul_base_field_by_nonresidue(&v1) + &v0;
        Fp6::new(c0, c1)
    }

    /// Squaring for elements of the cyclotomic subgroup, that is anything
    /// already raised to `(p^3 - 1)(p + 1)`. Other inputs give garbage.
    pub fn cyclotomic_square(&self) -> Self {
        let t = self.c1.square();
        let vt = Self::mul_base_field_by_nonresidue(&t);

        let c0 = vt.double() + &Fp3::one();
        let c1 = (self.c0 + &self.c1).square() - &Fp3::one() - &vt - &t;
        Fp6::new(c0, c1)
    }

    /// Square-and-multiply with cyclotomic squarings. Same input
    /// restriction as `cyclotomic_square`.
    pub fn cyclotomic_exp<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();

        for i in BitIteratorBE::without_leading_zeros(exp) {
            res = res.cyclotomic_square();
            if i {
                res *= self;
            }
        }
        res
    }

    /// Multiplies by the sparse element with `Fp` coefficients `c0`, `c1`, `c4`
    /// in slots `(c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2) = 0..5`.
    pub fn mul_by_014(&mut self, c0: &Fp, c1: &Fp, c4: &Fp) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let o = c1.lazy_add(c4);

        let mut t = self.c0.lazy_add(&self.c1);
        t.mul_by_01(c0, &o);
        self.c1 = t - &aa - &bb;

        self.c0 = Self::mul_base_field_by_nonresidue(&bb) + &aa;
    }

    /// Multiplies by the sparse element with `Fp` coefficients `c0`, `c3`, `c4`
    /// in slots `(c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2) = 0..5`.
    pub fn mul_by_034(&mut self, c0: &Fp, c3: &Fp, c4: &Fp) {
        let aa = self.c0.mul_by_fp(c0);
        let mut bb = self.c1;
        bb.mul_by_01(c3, c4);
        let o = c0.lazy_add(c3);

        let mut t = self.c0.lazy_add(&self.c1);
        t.mul_by_01(&o, c4);
        self.c1 = t - &aa - &bb;

        self.c0 = Self::mul_base_field_by_nonresidue(&bb) + &aa;
    }
}

impl Zero for Fp6 {
    fn zero() -> Self {
        Fp6::new(Fp3::zero(), Fp3::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl One for Fp6 {
    fn one() -> Self {
        Fp6::new(Fp3::one(), Fp3::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }
}

impl Field for Fp6 {
    const DEGREE: usize = 6;

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    /// Complex squaring.
    fn square_in_place(&mut self) -> &mut Self {
        let v0 = self.c0.lazy_sub(&self.c1);
        let v3 = self
            .c0
            .lazy_sub(&Self::mul_base_field_by_nonresidue(&self.c1));
        let v2 = self.c0 * &self.c1;
        let v0 = v0 * &v3 + &v2;

        self.c0 = Self::mul_base_field_by_nonresidue(&v2) + &v0;
        self.c1 = v2.double();
        self
    }

    fn inverse(&self) -> Self {
        if self.is_zero() {
            return *self;
        }

        let t = self.c0.square() - &Self::mul_base_field_by_nonresidue(&self.c1.square());
        let t = t.inverse();

        Fp6::new(self.c0 * &t, -(self.c1 * &t))
    }

    fn lazy_add(&self, other: &Self) -> Self {
        Fp6::new(self.c0.lazy_add(&other.c0), self.c1.lazy_add(&other.c1))
    }

    fn lazy_double(&self) -> Self {
        Fp6::new(self.c0.lazy_double(), self.c1.lazy_double())
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c1
            .mul_assign_by_fp(&Self::FROBENIUS_COEFF_FP6_C1[power % 6]);
    }
}

impl<'a> AddAssign<&'a Self> for Fp6 {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}

impl<'a> SubAssign<&'a Self> for Fp6 {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}

impl<'a> MulAssign<&'a Self> for Fp6 {
    /// Karatsuba over `Fp3`.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        self.c1 = self.c0.lazy_add(&self.c1) * &other.c0.lazy_add(&other.c1) - &v0 - &v1;
        self.c0 = Self::mul_base_field_by_nonresidue(&v1) + &v0;
    }
}

impl Neg for Fp6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp6::new(-self.c0, -self.c1)
    }
}

impl_field_ops_from_ref!(Fp6);

impl From<Fp3> for Fp6 {
    fn from(fe: Fp3) -> Self {
        Fp6::new(fe, Fp3::zero())
    }
}

impl From<u64> for Fp6 {
    fn from(value: u64) -> Self {
        Fp6::from(Fp3::from(value))
    }
}

impl ToBytes for Fp6 {
    /// `c0.c0 || c0.c1 || c0.c2 || c1.c0 || c1.c1 || c1.c2`, 96 bytes each.
    fn to_bytes(&self) -> Vec<u8> {
        [self.c0, self.c1][..].to_bytes()
    }
}

impl FromBytes for Fp6 {
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, Self::BYTES)?;
        Ok(Fp6::new(
            Fp3::from_bytes(&bytes[..Fp3::BYTES])?,
            Fp3::from_bytes(&bytes[Fp3::BYTES..])?,
        ))
    }
}

impl Distribution<Fp6> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp6 {
        Fp6::new(rng.gen(), rng.gen())
    }
}

impl Display for Fp6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp6({} + {} * w)", self.c0, self.c1)
    }
}
