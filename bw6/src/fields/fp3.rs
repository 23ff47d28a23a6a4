use crate::{
    biginteger::BigInteger768,
    bytes::{check_length, FromBytes, ToBytes},
    error::Error,
    fields::{Field, Fp},
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

/// `Fp[v] / (v^3 + 4)`, stored as `c0 + c1 * v + c2 * v^2`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Fp3 {
    pub c0: Fp,
    pub c1: Fp,
    pub c2: Fp,
}

impl Fp3 {
    /// Byte width of the fixed encoding.
    pub const BYTES: usize = 3 * BigInteger768::BYTES;

    /// `v^3`
    pub const NONRESIDUE: Fp = Fp::NONRESIDUE;

    /// `NONRESIDUE^((p^i - 1) / 3)` for `i = 0..3`
    pub const FROBENIUS_COEFF_FP3_C1: [Fp; 3] = [
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
    ];

    /// `NONRESIDUE^((2 p^i - 2) / 3)` for `i = 0..3`
    pub const FROBENIUS_COEFF_FP3_C2: [Fp; 3] = [
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
    ];

    pub const fn new(c0: Fp, c1: Fp, c2: Fp) -> Self {
        Fp3 { c0, c1, c2 }
    }

    /// Multiplies an `Fp` element by the non-residue.
    #[inline]
    pub fn mul_base_field_by_nonresidue(fe: &Fp) -> Fp {
        fe.mul_by_nonresidue()
    }

    /// Multiplies by `v`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp3::new(Self::mul_base_field_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    /// Scales every coefficient by an `Fp` element.
    #[inline]
    pub fn mul_by_fp(&self, fe: &Fp) -> Self {
        Fp3::new(self.c0 * fe, self.c1 * fe, self.c2 * fe)
    }

    pub fn mul_assign_by_fp(&mut self, fe: &Fp) {
        self.c0 *= fe;
        self.c1 *= fe;
        self.c2 *= fe;
    }

    /// Multiplies by `b0 + b1 * v`.
    pub fn mul_by_01(&mut self, b0: &Fp, b1: &Fp) {
        let a_a = self.c0 * b0;
        let b_b = self.c1 * b1;

        let t1 = (self.c2 * b1).mul_by_nonresidue() + &a_a;
        let t2 = b0.lazy_add(b1) * &self.c0.lazy_add(&self.c1) - &a_a - &b_b;
        let t3 = self.c2 * b0 + &b_b;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    /// Multiplies by `b1 * v`.
    pub fn mul_by_1(&mut self, b1: &Fp) {
        let t1 = (self.c2 * b1).mul_by_nonresidue();
        let t2 = self.c0 * b1;
        let t3 = self.c1 * b1;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    /// Coefficient-wise `lazy_sub`.
    pub fn lazy_sub(&self, other: &Self) -> Self {
        Fp3::new(
            self.c0.lazy_sub(&other.c0),
            self.c1.lazy_sub(&other.c1),
            self.c2.lazy_sub(&other.c2),
        )
    }
}

impl Zero for Fp3 {
    fn zero() -> Self {
        Fp3::new(Fp::zero(), Fp::zero(), Fp::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl One for Fp3 {
    fn one() -> Self {
        Fp3::new(Fp::one(), Fp::zero(), Fp::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl Field for Fp3 {
    const DEGREE: usize = 3;

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    /// Chung-Hasan SQR2.
    fn square_in_place(&mut self) -> &mut Self {
        let a = self.c0;
        let b = self.c1;
        let c = self.c2;

        let s0 = a.square();
        let s1 = (a * &b).double();
        let s2 = (a - &b + &c).square();
        let s3 = (b * &c).double();
        let s4 = c.square();

        self.c0 = s3.mul_by_nonresidue() + &s0;
        self.c1 = s4.mul_by_nonresidue() + &s1;
        self.c2 = s1 + &s2 + &s3 - &s0 - &s4;
        self
    }

    fn inverse(&self) -> Self {
        if self.is_zero() {
            return *self;
        }

        let t0 = self.c0.square() - &(self.c1 * &self.c2).mul_by_nonresidue();
        let t1 = self.c2.square().mul_by_nonresidue() - &(self.c0 * &self.c1);
        let t2 = self.c1.square() - &(self.c0 * &self.c2);

        let t3 = self.c0 * &t0 + &(self.c2 * &t1 + &(self.c1 * &t2)).mul_by_nonresidue();
        let t3 = t3.inverse();

        Fp3::new(t0 * &t3, t1 * &t3, t2 * &t3)
    }

    fn lazy_add(&self, other: &Self) -> Self {
        Fp3::new(
            self.c0.lazy_add(&other.c0),
            self.c1.lazy_add(&other.c1),
            self.c2.lazy_add(&other.c2),
        )
    }

    fn lazy_double(&self) -> Self {
        Fp3::new(
            self.c0.lazy_double(),
            self.c1.lazy_double(),
            self.c2.lazy_double(),
        )
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c1 *= &Self::FROBENIUS_COEFF_FP3_C1[power % 3];
        self.c2 *= &Self::FROBENIUS_COEFF_FP3_C2[power % 3];
    }
}

impl<'a> AddAssign<&'a Self> for Fp3 {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }
}

impl<'a> SubAssign<&'a Self> for Fp3 {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }
}

impl<'a> MulAssign<&'a Self> for Fp3 {
    /// Karatsuba with lazily added operand sums, so operands may carry
    /// coefficients up to `4p`.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (other.c0, other.c1, other.c2);

        let v0 = a0 * &b0;
        let v1 = a1 * &b1;
        let v2 = a2 * &b2;

        self.c0 = (a1.lazy_add(&a2) * &b1.lazy_add(&b2) - &v1 - &v2).mul_by_nonresidue() + &v0;
        self.c1 = a0.lazy_add(&a1) * &b0.lazy_add(&b1) - &v0 - &v1 + &v2.mul_by_nonresidue();
        self.c2 = a0.lazy_add(&a2) * &b0.lazy_add(&b2) - &v0 - &v2 + &v1;
    }
}

impl Neg for Fp3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp3::new(-self.c0, -self.c1, -self.c2)
    }
}

impl_field_ops_from_ref!(Fp3);

impl From<Fp> for Fp3 {
    fn from(fe: Fp) -> Self {
        Fp3::new(fe, Fp::zero(), Fp::zero())
    }
}

impl From<u64> for Fp3 {
    fn from(value: u64) -> Self {
        Fp3::from(Fp::from(value))
    }
}

impl ToBytes for Fp3 {
    /// `c0 || c1 || c2`, 96 bytes each.
    fn to_bytes(&self) -> Vec<u8> {
        [self.c0, self.c1, self.c2][..].to_bytes()
    }
}

impl FromBytes for Fp3 {
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, Self::BYTES)?;
        let w = BigInteger768::BYTES;
        Ok(Fp3::new(
            Fp::from_bytes(&bytes[..w])?,
            Fp::from_bytes(&bytes[w..2 * w])?,
            Fp::from_bytes(&bytes[2 * w..])?,
        ))
    }
}

impl Distribution<Fp3> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp3 {
        Fp3::new(rng.gen(), rng.gen(), rng.gen())
    }
}

impl Display for Fp3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp3({} + {} * v + {} * v^2)", self.c0, self.c1, self.c2)
    }
}
