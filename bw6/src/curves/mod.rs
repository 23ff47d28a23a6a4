use crate::{
    biginteger::{BigInteger384, BigInteger768},
    bytes::{check_length, FromBytes, ToBytes},
    error::Error,
    fields::{BitIteratorBE, Field, Fp},
    Vec,
};
use core::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::Hash,
    marker::PhantomData,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

pub mod g1;
pub use self::g1::G1Projective;

pub mod g2;
pub use self::g2::G2Projective;


/// Order `r` of G1, G2 and GT.
pub const GROUP_ORDER: BigInteger384 = BigInteger384([
    0x8508c00000000001,
    0x170b5d4430000000,
    0x1ef3622fba094800,
    0x1a22d9f300f5138f,
    0xc63b05c06ca1493b,
    0x01ae3a4617c510ea,
]);

pub const GROUP_ORDER_BITS: u32 = 377;

/// Samples a scalar uniformly below `GROUP_ORDER`.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> BigInteger384 {
    loop {
        let mut s: BigInteger384 = rng.gen();
        s.0[5] &= u64::MAX >> (384 - GROUP_ORDER_BITS);
        if s < GROUP_ORDER {
            return s;
        }
    }
}

/// A short Weierstrass curve `y^2 = x^3 + b` over `Fp`.
pub trait SWParameters:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync
{
    /// COEFF_B
    const COEFF_B: Fp;

    /// Multiplier mapping the whole curve group onto the order-`r` subgroup.
    const COFACTOR: &'static [u64];

    /// AFFINE_GENERATOR_COEFFS = (GENERATOR_X, GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Fp, Fp);

    #[inline(always)]
    fn mul_by_b(elem: &Fp) -> Fp {
        *elem * &Self::COEFF_B
    }
}

/// A point in Jacobian coordinates, the affine point `(x / z^2, y / z^3)`.
/// `z == 0` is the point at infinity.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: SWParameters"),
    Clone(bound = "P: SWParameters"),
    Eq(bound = "P: SWParameters"),
    Debug(bound = "P: SWParameters")
)]
pub struct Projective<P: SWParameters> {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: SWParameters> Projective<P> {
    pub const fn new(x: Fp, y: Fp, z: Fp) -> Self {
        Self {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    /// An affine point with `z = 1`. The coordinates are not checked.
    pub fn from_affine(x: Fp, y: Fp) -> Self {
        Self::new(x, y, Fp::one())
    }

    pub fn prime_subgroup_generator() -> Self {
        Self::from_affine(P::AFFINE_GENERATOR_COEFFS.0, P::AFFINE_GENERATOR_COEFFS.1)
    }

    #[inline]
    pub fn is_affine(&self) -> bool {
        self.z.is_one()
    }

    /// The same point with `z = 1`, or the canonical `(0, 1, 0)` for infinity.
    pub fn into_affine(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        if self.is_affine() {
            return *self;
        }

        let zinv = self.z.inverse();
        let zinv_squared = zinv.square();
        Self::from_affine(
            self.x * &zinv_squared,
            self.y * &(zinv_squared * &zinv),
        )
    }

    /// Affine `(x, y)`, or `None` for infinity.
    pub fn xy(&self) -> Option<(Fp, Fp)> {
        if self.is_zero() {
            None
        } else {
            let p = self.into_affine();
            Some((p.x, p.y))
        }
    }

    /// Normalizes a batch of points to `z = 1` with a single inversion.
    pub fn batch_normalization(v: &mut [Self]) {
        let mut prod = Vec::with_capacity(v.len());
        let mut tmp = Fp::one();
        for g in v.iter().filter(|g| !g.is_affine() && !g.is_zero()) {
            tmp *= &g.z;
            prod.push(tmp);
        }

        tmp = tmp.inverse();

        for (g, s) in v
            .iter_mut()
            .rev()
            .filter(|g| !g.is_affine() && !g.is_zero())
            .zip(
                prod.into_iter()
                    .rev()
                    .skip(1)
                    .chain(Some(Fp::one())),
            )
        {
            // g.z becomes 1/z
            let newtmp = tmp * &g.z;
            g.z = tmp * &s;
            tmp = newtmp;
        }

        for g in v.iter_mut().filter(|g| !g.is_affine() && !g.is_zero()) {
            let z2 = g.z.square();
            g.x *= &z2;
            g.y *= &(z2 * &g.z);
            g.z = Fp::one();
        }
    }

    /// Checks `y^2 = x^3 + b` for affine points and `y^2 = x^3 + b z^6`
    /// otherwise. Infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_zero() {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * &self.x;
        if self.is_affine() {
            y2 == x3 + &P::COEFF_B
        } else {
            let z2 = self.z.square();
            let z6 = z2.square() * &z2;
            y2 == x3 + &P::mul_by_b(&z6)
        }
    }

    /// Whether `r * self` is infinity.
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.mul_scalar(GROUP_ORDER).is_zero()
    }

    /// dbl-2009-l
    pub fn double_in_place(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }

        // A = X1^2
        let a = self.x.square();
        // B = Y1^2
        let b = self.y.square();
        // C = B^2
        let mut c = b.square();
        // D = 2*((X1+B)^2-A-C)
        let d = ((self.x + &b).square() - &a - &c).double();
        // E = 3*A
        let e = a + &a.double();
        // F = E^2
        let f = e.square();

        // Z3 = 2*Y1*Z1
        self.z = self.y.lazy_double() * &self.z;
        // X3 = F-2*D
        self.x = f - &d.double();
        // Y3 = E*(D-X3)-8*C
        c.double_in_place().double_in_place().double_in_place();
        self.y = e * &(d - &self.x) - &c;
        self
    }

    pub fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    /// madd-2007-bl, for `other` with `z = 1` or infinity.
    pub fn add_assign_mixed(&mut self, other: &Self) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = *other;
            return;
        }

        // Z1Z1 = Z1^2
        let z1z1 = self.z.square();
        // U2 = X2*Z1Z1
        let u2 = other.x * &z1z1;
        // S2 = Y2*Z1*Z1Z1
        let s2 = (other.y * &self.z) * &z1z1;

        if self.x == u2 {
            if self.y == s2 {
                self.double_in_place();
            } else {
                *self = Self::zero();
            }
            return;
        }

        // H = U2-X1
        let h = u2 - &self.x;
        // HH = H^2
        let hh = h.square();
        // I = 4*HH
        let i = hh.double().double();
        // J = H*I
        let j = h * &i;
        // r = 2*(S2-Y1)
        let r = (s2 - &self.y).double();
        // V = X1*I
        let v = self.x * &i;

        // X3 = r^2 - J - 2*V
        self.x = r.square() - &j - &v.double();
        // Y3 = r*(V-X3) - 2*Y1*J
        self.y = r * &(v - &self.x) - &(self.y * &j).double();
        // Z3 = (Z1+H)^2 - Z1Z1 - HH
        self.z = (self.z + &h).square() - &z1z1 - &hh;
    }

    /// Double-and-add from the most significant bit of a little-endian
    /// limb slice.
    pub fn mul_scalar<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let base = self.into_affine();
        let mut res = Self::zero();
        for bit in BitIteratorBE::without_leading_zeros(scalar) {
            res.double_in_place();
            if bit {
                res.add_assign_mixed(&base);
            }
        }
        res
    }

    /// Maps a curve point into the order-`r` subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_scalar(P::COFACTOR)
    }
}

impl<P: SWParameters> Zero for Projective<P> {
    #[inline]
    fn zero() -> Self {
        Self::new(Fp::zero(), Fp::one(), Fp::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
}

impl<P: SWParameters> Default for Projective<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: SWParameters> PartialEq for Projective<P> {
    /// Compares the affine points: `X1 Z2^2 == X2 Z1^2` and `Y1 Z2^3 == Y2 Z1^3`.
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        if other.is_zero() {
            return false;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        if self.x * &z2z2 != other.x * &z1z1 {
            false
        } else {
            self.y * &(z2z2 * &other.z) == other.y * &(z1z1 * &self.z)
        }
    }
}

impl<'a, P: SWParameters> AddAssign<&'a Self> for Projective<P> {
    /// add-2007-bl, or the mixed formula when `other` is affine.
    fn add_assign(&mut self, other: &'a Self) {
        if self.is_zero() {
            *self = *other;
            return;
        }
        if other.is_zero() {
            return;
        }
        if other.is_affine() {
            self.add_assign_mixed(other);
            return;
        }

        // Z1Z1 = Z1^2
        let z1z1 = self.z.square();
        // Z2Z2 = Z2^2
        let z2z2 = other.z.square();
        // U1 = X1*Z2Z2
        let u1 = self.x * &z2z2;
        // U2 = X2*Z1Z1
        let u2 = other.x * &z1z1;
        // S1 = Y1*Z2*Z2Z2
        let s1 = self.y * &other.z * &z2z2;
        // S2 = Y2*Z1*Z1Z1
        let s2 = other.y * &self.z * &z1z1;

        if u1 == u2 {
            if s1 == s2 {
                self.double_in_place();
            } else {
                *self = Self::zero();
            }
            return;
        }

        // H = U2-U1
        let h = u2 - &u1;
        // I = (2*H)^2
        let i = h.double().square();
        // J = H*I
        let j = h * &i;
        // r = 2*(S2-S1)
        let r = (s2 - &s1).double();
        // V = U1*I
        let v = u1 * &i;

        // X3 = r^2 - J - 2*V
        self.x = r.square() - &j - &v.double();
        // Y3 = r*(V - X3) - 2*S1*J
        self.y = r * &(v - &self.x) - &(s1 * &j).double();
        // Z3 = ((Z1+Z2)^2 - Z1Z1 - Z2Z2)*H
        self.z = (self.z.lazy_add(&other.z).square() - &z1z1 - &z2z2) * &h;
    }
}

impl<P: SWParameters> AddAssign<Self> for Projective<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<'a, P: SWParameters> Add<&'a Self> for Projective<P> {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy += other;
        copy
    }
}

impl<P: SWParameters> Add<Self> for Projective<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<'a, P: SWParameters> SubAssign<&'a Self> for Projective<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<P: SWParameters> SubAssign<Self> for Projective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<'a, P: SWParameters> Sub<&'a Self> for Projective<P> {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy -= other;
        copy
    }
}

impl<P: SWParameters> Sub<Self> for Projective<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self - &other
    }
}

impl<P: SWParameters> Neg for Projective<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self::new(self.x, -self.y, self.z)
        }
    }
}

impl<P: SWParameters> core::iter::Sum<Self> for Projective<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + &p)
    }
}

impl<'a, P: SWParameters> core::iter::Sum<&'a Self> for Projective<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<P: SWParameters> ToBytes for Projective<P> {
    /// Affine `x || y`, 96 bytes each. Infinity is 192 zero bytes.
    fn to_bytes(&self) -> Vec<u8> {
        match self.xy() {
            Some((x, y)) => [x, y][..].to_bytes(),
            None => vec![0u8; 2 * Fp::BYTES],
        }
    }
}

impl<P: SWParameters> FromBytes for Projective<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        check_length(bytes, 2 * Fp::BYTES)?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Self::zero());
        }

        let x = canonical_coordinate(&bytes[..Fp::BYTES])?;
        let y = canonical_coordinate(&bytes[Fp::BYTES..])?;

        let p = Self::from_affine(x, y);
        if !p.is_on_curve() {
            return Err(Error::NotOnCurve);
        }
        Ok(p)
    }
}

/// A coordinate outside `[0, p)` names no point on either curve.
fn canonical_coordinate(bytes: &[u8]) -> Result<Fp, Error> {
    let repr = BigInteger768::from_bytes_be(bytes);
    if repr >= Fp::MODULUS {
        return Err(Error::NotOnCurve);
    }
    Ok(Fp::from_repr(repr))
}

impl<P: SWParameters> Distribution<Projective<P>> for Standard {
    /// The generator times a uniform scalar.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Projective<P> {
        Projective::<P>::prime_subgroup_generator().mul_scalar(random_scalar(rng))
    }
}

impl<P: SWParameters> Display for Projective<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.xy() {
            Some((x, y)) => write!(f, "({}, {})", x, y),
            None => write!(f, "Infinity"),
        }
    }
}
