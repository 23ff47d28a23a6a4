use crate::{
    biginteger::{arithmetic as fa, BigInteger768},
    bytes::{FromBytes, ToBytes},
    error::Error,
    fields::Field,
    Vec,
};
use core::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// An element of the 761-bit base field, held in Montgomery form `a * R mod p`
/// with `R = 2^768`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fp(pub BigInteger768);

impl Fp {
    pub const MODULUS: BigInteger768 = BigInteger768([
        0xf49d00000000008b,
        0xe6913e6870000082,
        0x160cf8aeeaf0a437,
        0x98a116c25667a8f8,
        0x71dcd3dc73ebff2e,
        0x8689c8ed12f9fd90,
        0x03cebaff25b42304,
        0x707ba638e584e919,
        0x528275ef8087be41,
        0xb926186a81d14688,
        0xd187c94004faff3e,
        0x0122e824fb83ce0a,
    ]);

    pub const MODULUS_BITS: u32 = 761;

    /// Byte width of the fixed encoding.
    pub const BYTES: usize = BigInteger768::BYTES;

    /// Bits above `MODULUS_BITS` in the top limb.
    pub const REPR_SHAVE_BITS: u32 = 7;

    /// `R mod p`, the Montgomery form of one.
    pub const R: BigInteger768 = BigInteger768([
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
    ]);

    pub const R2: BigInteger768 = BigInteger768([
        0xc686392d2d1fa659,
        0x7b14c9b2f79484ab,
        0x7fa1e825c1d2b459,
        0xd6ec28f848329d88,
        0x4afb427b73a1ed40,
        0x972c69400d5930ae,
        0x2c7a26bf8c995976,
        0xac52e458c6e57af9,
        0xac731bfa0c536dfe,
        0x121e5c630b103f50,
        0x8f1b0953b886cda4,
        0x00ad253c2da8d807,
    ]);

    /// `-p^{-1} mod 2^64`
    pub const INV: u64 = 0x0a5593568fa798dd;

    pub const MODULUS_MINUS_ONE_DIV_TWO: BigInteger768 = BigInteger768([
        0x7a4e800000000045,
        0xf3489f3438000041,
        0x0b067c577578521b,
        0x4c508b612b33d47c,
        0x38ee69ee39f5ff97,
        0x4344e476897cfec8,
        0x81e75d7f92da1182,
        0xb83dd31c72c2748c,
        0x29413af7c043df20,
        0x5c930c3540e8a344,
        0x68c3e4a0027d7f9f,
        0x009174127dc1e705,
    ]);

    pub const MODULUS_PLUS_ONE_DIV_FOUR: BigInteger768 = BigInteger768([
        0xbd27400000000023,
        0xf9a44f9a1c000020,
        0x05833e2bbabc290d,
        0xa62845b09599ea3e,
        0x1c7734f71cfaffcb,
        0x21a2723b44be7f64,
        0x40f3aebfc96d08c1,
        0x5c1ee98e39613a46,
        0x14a09d7be021ef90,
        0xae49861aa07451a2,
        0xb461f250013ebfcf,
        0x0048ba093ee0f382,
    ]);

    /// The cubic non-residue `-4` the tower is built on.
    pub const NONRESIDUE: Fp = Fp(BigInteger768([
        0xe12e00000001e9c2,
        0x63c1e3faa001cd69,
        0xb1b4384fcbe29cf6,
        0xc79630bc713d5a1d,
        0x30127ac071851e2d,
        0x0979f350dcd36af1,
        0x6a66defed8b361f2,
        0x53abac78b24d4e23,
        0xb7ab89dede485a92,
        0x5c3a0745675e8452,
        0x446f17918c5f5700,
        0x00fdf24e3267fa1e,
    ]));

    /// Wraps a limb array that is already in Montgomery form.
    #[inline]
    pub const fn new(element: BigInteger768) -> Self {
        Fp(element)
    }

    /// Maps a canonical integer into Montgomery form. Values at or above
    /// the modulus are reduced.
    #[inline]
    pub fn from_repr(repr: BigInteger768) -> Self {
        Fp(repr).mont_mul(&Fp(Self::R2))
    }

    /// The canonical integer this element represents.
    #[inline]
    pub fn into_repr(&self) -> BigInteger768 {
        self.mont_mul(&Fp(BigInteger768::from(1))).0
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_repr(BigInteger768::from_biguint(&(value % Self::MODULUS.to_biguint())))
    }

    pub fn to_biguint(&self) -> BigUint {
        self.into_repr().to_biguint()
    }

    /// Whether the raw limbs are below the modulus.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 < Self::MODULUS
    }

    #[inline]
    fn reduce(&mut self) {
        if !self.is_valid() {
            self.0.sub_noborrow(&Self::MODULUS);
        }
    }

    /// Montgomery product `a * b * R^{-1}`. Operands may be up to `2p`.
    #[inline]
    fn mont_mul(&self, other: &Self) -> Self {
        let a = &(self.0).0;
        let b = &(other.0).0;
        let mut r = [0u64; 24];

        for i in 0..12 {
            let mut carry = 0;
            for j in 0..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], a[i], b[j], &mut carry);
            }
            r[i + 12] = carry;
        }

        Self::mont_reduce(r)
    }

    #[inline]
    fn mont_square(&self) -> Self {
        let a = &(self.0).0;
        let mut r = [0u64; 24];

        for i in 0..11 {
            let mut carry = 0;
            for j in (i + 1)..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], a[i], a[j], &mut carry);
            }
            r[i + 12] = carry;
        }

        r[23] = r[22] >> 63;
        for i in (1..23).rev() {
            r[i] = (r[i] << 1) | (r[i - 1] >> 63);
        }
        r[0] <<= 1;

        let mut carry = 0;
        for i in 0..12 {
            r[2 * i] = fa::mac_with_carry(r[2 * i], a[i], a[i], &mut carry);
            r[2 * i + 1] = fa::adc(r[2 * i + 1], 0, &mut carry);
        }

        Self::mont_reduce(r)
    }

    #[inline]
    fn mont_reduce(mut r: [u64; 24]) -> Self {
        let modulus = &Self::MODULUS.0;
        let mut carry2 = 0;

        for i in 0..12 {
            let k = r[i].wrapping_mul(Self::INV);
            let mut carry = 0;
            fa::mac_with_carry(r[i], k, modulus[0], &mut carry);
            for j in 1..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], k, modulus[j], &mut carry);
            }
            r[i + 12] = fa::adc(r[i + 12], carry2, &mut carry);
            carry2 = carry;
        }

        let mut limbs = [0u64; 12];
        limbs.copy_from_slice(&r[12..]);
        let mut res = Fp(BigInteger768(limbs));
        res.reduce();
        res
    }

    /// `self * (-4)`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        -self.double().double()
    }

    /// `self - other` without the final reduction: returns `self + p - other`,
    /// which lies in `(0, 2p)`.
    #[inline]
    pub fn lazy_sub(&self, other: &Self) -> Self {
        let mut res = *self;
        res.0.add_nocarry(&Self::MODULUS);
        res.0.sub_noborrow(&other.0);
        res
    }

    /// A square root by the `(p + 1) / 4` exponent, valid since `p = 3 mod 4`.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(Self::MODULUS_PLUS_ONE_DIV_FOUR);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Euler's criterion. Zero is not a non-residue.
    pub fn is_quadratic_non_residue(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        !self.pow(Self::MODULUS_MINUS_ONE_DIV_TWO).is_one()
    }

    /// Whether the canonical value is at most the canonical value of its
    /// negation.
    pub fn sign_be(&self) -> bool {
        let z = self.into_repr();
        let neg_z = (-*self).into_repr();
        neg_z >= z
    }

    /// Whether the canonical value is even.
    pub fn sign(&self) -> bool {
        self.into_repr().is_even()
    }
}

impl Zero for Fp {
    #[inline]
    fn zero() -> Self {
        Fp(BigInteger768::from(0))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fp {
    #[inline]
    fn one() -> Self {
        Fp(Self::R)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == Self::R
    }
}

impl Field for Fp {
    const DEGREE: usize = 1;

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        self.0.mul2();
        self.reduce();
        self
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        *self = self.mont_square();
        self
    }

    /// Binary extended Euclid on the raw limbs, starting from `R^2` so the
    /// result comes out in Montgomery form.
    fn inverse(&self) -> Self {
        if self.is_zero() {
            return *self;
        }

        let one = BigInteger768::from(1);
        let modulus = Self::MODULUS;

        let mut u = self.0;
        let mut v = modulus;
        let mut b = Fp(Self::R2);
        let mut c = Self::zero();

        while u != one && v != one {
            while u.is_even() {
                u.div2();

                if b.0.is_even() {
                    b.0.div2();
                } else {
                    b.0.add_nocarry(&modulus);
                    b.0.div2();
                }
            }

            while v.is_even() {
                v.div2();

                if c.0.is_even() {
                    c.0.div2();
                } else {
                    c.0.add_nocarry(&modulus);
                    c.0.div2();
                }
            }

            if v < u {
                u.sub_noborrow(&v);
                b -= &c;
            } else {
                v.sub_noborrow(&u);
                c -= &b;
            }
        }

        if u == one {
            b
        } else {
            c
        }
    }

    #[inline]
    fn lazy_add(&self, other: &Self) -> Self {
        let mut res = *self;
        res.0.add_nocarry(&other.0);
        res
    }

    #[inline]
    fn lazy_double(&self) -> Self {
        let mut res = *self;
        res.0.mul2();
        res
    }

    #[inline]
    fn frobenius_map(&mut self, _power: usize) {}
}

impl<'a> AddAssign<&'a Self> for Fp {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.0.add_nocarry(&other.0);
        self.reduce();
    }
}

impl<'a> SubAssign<&'a Self> for Fp {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        if other.0 > self.0 {
            self.0.add_nocarry(&Self::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a> MulAssign<&'a Self> for Fp {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        *self = self.mont_mul(other);
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        let mut tmp = Self::MODULUS;
        tmp.sub_noborrow(&self.0);
        Fp(tmp)
    }
}

impl_field_ops_from_ref!(Fp);

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Self::from_repr(BigInteger768::from(value))
    }
}

impl From<BigInteger768> for Fp {
    fn from(repr: BigInteger768) -> Self {
        Self::from_repr(repr)
    }
}

impl From<Fp> for BigInteger768 {
    fn from(fe: Fp) -> Self {
        fe.into_repr()
    }
}

impl ToBytes for Fp {
    /// 96-byte big-endian canonical value.
    fn to_bytes(&self) -> Vec<u8> {
        self.into_repr().to_bytes_be()
    }
}

impl FromBytes for Fp {
    /// Left-pads short input and keeps the leading 96 bytes of long input.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::from_repr(BigInteger768::from_bytes_be(bytes)))
    }
}

impl Distribution<Fp> for Standard {
    /// Rejection sampling on the shaved top limb.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp {
        loop {
            let mut repr: BigInteger768 = rng.gen();
            repr.0[11] &= u64::MAX >> Fp::REPR_SHAVE_BITS;

            let fe = Fp(repr);
            if fe.is_valid() {
                return fe;
            }
        }
    }
}

impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}
