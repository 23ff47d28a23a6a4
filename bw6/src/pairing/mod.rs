use ark_std::{end_timer, start_timer};
use num_bigint::BigUint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    curves::{
        g2::{self, G2Projective},
        G1Projective, SWParameters, GROUP_ORDER,
    },
    fields::{BitIteratorBE, Field, Fp, Fp6},
    vec, Vec,
};
use num_traits::{One, Zero};


/// Elements of the order-`r` subgroup of `Fp6*`.
pub type Gt = Fp6;

/// Which sextic twist G2 lives on. It fixes the order of the line
/// coefficients and the sparse multiplication that consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwistType {
    M,
    D,
}

/// Line coefficients `(c0, c1, c2)` of one doubling or addition step.
pub type EllCoeff = (Fp, Fp, Fp);

/// The optimal ate pairing on BW6-761.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub struct BW6_761;

impl BW6_761 {
    /// The curve seed `u`.
    pub const X: [u64; 1] = [0x8508c00000000001];
    pub const X_IS_NEGATIVE: bool = false;

    /// `u + 1`
    pub const ATE_LOOP_COUNT_1: &'static [u64] = &[0x8508c00000000002];
    pub const ATE_LOOP_COUNT_1_IS_NEGATIVE: bool = false;

    /// NAF of `u^3 - u^2 - u`, least significant digit first.
    pub const ATE_LOOP_COUNT_2: &'static [i8] = &[
        -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
        1, 0, 0, -1, 0, 1, 0, -1, 0, 0, 0, 0, -1, 0, 1, 0,
        0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -1, 0, 0, 0,
        0, -1, 0, 0, 1, 0, 0, 0, -1, 0, 0, -1, 0, 1, 0, -1,
        0, 0, 0, 1, 0, 0, 1, 0, -1, 0, 1, 0, 1, 0, 0, 0,
        1, 0, -1, 0, -1, 0, 0, 0, 0, 0, 1, 0, 0, 1,
    ];
    pub const ATE_LOOP_COUNT_2_IS_NEGATIVE: bool = false;

    pub const TWIST_TYPE: TwistType = TwistType::M;

    /// Evaluates the line with coefficients `coeffs` at the affine point
    /// `p` and multiplies it into `f`.
    fn ell(f: &mut Fp6, coeffs: &EllCoeff, p: &(Fp, Fp)) {
        let mut c0 = coeffs.0;
        let mut c1 = coeffs.1;
        let mut c2 = coeffs.2;

        match Self::TWIST_TYPE {
            TwistType::M => {
                c2 *= &p.1;
                c1 *= &p.0;
                f.mul_by_014(&c0, &c1, &c2);
            }
            TwistType::D => {
                c0 *= &p.1;
                c1 *= &p.0;
                f.mul_by_034(&c0, &c1, &c2);
            }
        }
    }

    /// `f^u`, valid for `f` in the cyclotomic subgroup.
    fn exp_by_x(f: &Fp6) -> Fp6 {
        let f = f.cyclotomic_exp(Self::X);
        if Self::X_IS_NEGATIVE {
            f.unitary_inverse()
        } else {
            f
        }
    }

    /// Runs both loops over every pair and multiplies the two halves.
    /// Pairs with infinity on either side contribute one and are skipped.
    pub fn miller_loop<'a, I>(i: I) -> Fp6
    where
        I: IntoIterator<Item = &'a (G1Projective, G2Prepared)>,
    {
        let miller_time = start_timer!(|| "Miller loop");

        let pairs: Vec<((Fp, Fp), &[EllCoeff])> = i
            .into_iter()
            .filter(|(_, q)| !q.is_zero())
            .filter_map(|(p, q)| p.xy().map(|xy| (xy, &q.ell_coeffs[..])))
            .collect();

        // coefficients are consumed in the order G2Prepared produced them
        let mut idx = 0;

        let mut f1 = Fp6::one();
        for bit in BitIteratorBE::without_leading_zeros(Self::ATE_LOOP_COUNT_1).skip(1) {
            f1.square_in_place();

            for (p, coeffs) in &pairs {
                Self::ell(&mut f1, &coeffs[idx], p);
            }
            idx += 1;

            if bit {
                for (p, coeffs) in &pairs {
                    Self::ell(&mut f1, &coeffs[idx], p);
                }
                idx += 1;
            }
        }

        if Self::ATE_LOOP_COUNT_1_IS_NEGATIVE {
            f1.conjugate();
        }

        let mut f2 = Fp6::one();
        for i in (1..Self::ATE_LOOP_COUNT_2.len()).rev() {
            if i != Self::ATE_LOOP_COUNT_2.len() - 1 {
                f2.square_in_place();
            }

            for (p, coeffs) in &pairs {
                Self::ell(&mut f2, &coeffs[idx], p);
            }
            idx += 1;

            if Self::ATE_LOOP_COUNT_2[i - 1] != 0 {
                for (p, coeffs) in &pairs {
                    Self::ell(&mut f2, &coeffs[idx], p);
                }
                idx += 1;
            }
        }

        if Self::ATE_LOOP_COUNT_2_IS_NEGATIVE {
            f2.conjugate();
        }

        f2.frobenius_map(1);

        end_timer!(miller_time);
        f1 * &f2
    }

    /// Raises a Miller loop output to `(p^6 - 1) / r`.
    pub fn final_exponentiation(f: &Fp6) -> Gt {
        let final_exp_time = start_timer!(|| "Final exponentiation");

        let f_inv = f.inverse();
        let f = Self::final_exponentiation_first_chunk(f, &f_inv);
        let result = Self::final_exponentiation_last_chunk(&f);

        end_timer!(final_exp_time);
        result
    }

    fn final_exponentiation_first_chunk(elt: &Fp6, elt_inv: &Fp6) -> Fp6 {
        // (p^3 - 1)(p + 1)

        // elt^(p^3)
        let mut elt_q3 = *elt;
        elt_q3.conjugate();
        // elt^(p^3 - 1)
        let elt_q3_over_elt = elt_q3 * elt_inv;
        // elt^((p^3 - 1) p)
        let mut alpha = elt_q3_over_elt;
        alpha.frobenius_map(1);
        alpha * &elt_q3_over_elt
    }

    /// `f^((p^2 - p + 1) / r)` as `f^R0(u) * (f^p)^R1(u)` with
    ///
    /// R0(u) = -103u^7 + 70u^6 + 269u^5 - 197u^4 - 314u^3 - 73u^2 - 263u - 220
    /// R1(u) = 103u^9 - 276u^8 + 77u^7 + 492u^6 - 445u^5 - 65u^4 + 452u^3 - 181u^2 + 34u + 229
    ///
    /// evaluated by a shared 2-NAF chain.
    #[allow(clippy::let_and_return)]
    fn final_exponentiation_last_chunk(f: &Fp6) -> Fp6 {
        let hard_part_time = start_timer!(|| "Final exponentiation hard part");

        let f0 = *f;
        let mut f0p = f0;
        f0p.frobenius_map(1);
        let f1 = Self::exp_by_x(&f0);
        let mut f1p = f1;
        f1p.frobenius_map(1);
        let f2 = Self::exp_by_x(&f1);
        let mut f2p = f2;
        f2p.frobenius_map(1);
        let f3 = Self::exp_by_x(&f2);
        let mut f3p = f3;
        f3p.frobenius_map(1);
        let f4 = Self::exp_by_x(&f3);
        let mut f4p = f4;
        f4p.frobenius_map(1);
        let f5 = Self::exp_by_x(&f4);
        let mut f5p = f5;
        f5p.frobenius_map(1);
        let f6 = Self::exp_by_x(&f5);
        let mut f6p = f6;
        f6p.frobenius_map(1);
        let f7 = Self::exp_by_x(&f6);
        let mut f7p = f7;
        f7p.frobenius_map(1);

        let f8p = Self::exp_by_x(&f7p);
        let f9p = Self::exp_by_x(&f8p);

        let result1 = f3p * &f6p * &f5p.unitary_inverse();

        let result2 = result1.cyclotomic_square();
        let f4_2p = f4 * &f2p;
        let tmp1_p3 = (f0 * &f1 * &f3 * &f4_2p * &f8p).unitary_inverse();
        let result3 = result2 * &f5 * &f0p * &tmp1_p3;

        let result4 = result3.cyclotomic_square();
        let result5 = result4 * &f9p * &f7.unitary_inverse();

        let result6 = result5.cyclotomic_square();
        let f2_4p = f2 * &f4p;
        let f4_2p_5p = f4_2p * &f5p;
        let tmp2_p3 = (f2_4p * &f3 * &f3p).unitary_inverse();
        let result7 = result6 * &f4_2p_5p * &f6 * &f7p * &tmp2_p3;

        let result8 = result7.cyclotomic_square();
        let tmp3_p3 = (f0p * &f9p).unitary_inverse();
        let result9 = result8 * &f0 * &f7 * &f1p * &tmp3_p3;

        let result10 = result9.cyclotomic_square();
        let f6p_8p = f6p * &f8p;
        let f5_7p = f5 * &f7p;
        let result11 = result10 * &f5_7p * &f2p * &f6p_8p.unitary_inverse();

        let result12 = result11.cyclotomic_square();
        let f3_6 = f3 * &f6;
        let f1_7 = f1 * &f7;
        let tmp5_p3 = (f1_7 * &f2).unitary_inverse();
        let result13 = result12 * &f3_6 * &f9p * &tmp5_p3;

        let result14 = result13.cyclotomic_square();
        let tmp6_p3 = (f4_2p * &f5_7p * &f6p_8p).unitary_inverse();
        let result15 = result14 * &f0 * &f0p * &f3p * &f5p * &tmp6_p3;

        let result16 = result15.cyclotomic_square();
        let result17 = result16 * &f1p * &f3_6.unitary_inverse();

        let result18 = result17.cyclotomic_square();
        let tmp8_p3 = (f2_4p * &f4_2p_5p * &f9p).unitary_inverse();
        let result19 = result18 * &f1_7 * &f5_7p * &f0p * &tmp8_p3;

        end_timer!(hard_part_time);
        result19
    }

    /// `e(p, q)`
    pub fn pairing(p: &G1Projective, q: &G2Projective) -> Gt {
        Self::product_of_pairings(&[(*p, *q)])
    }

    /// `prod e(p_i, q_i)` with a single final exponentiation.
    pub fn product_of_pairings(pairs: &[(G1Projective, G2Projective)]) -> Gt {
        let prepared: Vec<(G1Projective, G2Prepared)> = cfg_iter!(pairs)
            .map(|(p, q)| (p.into_affine(), G2Prepared::from(*q)))
            .collect();

        Self::final_exponentiation(&Self::miller_loop(&prepared))
    }
}

/// Line coefficients of every doubling and addition step for a fixed G2
/// point, in the order the Miller loop consumes them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct G2Prepared {
    pub ell_coeffs: Vec<EllCoeff>,
    pub infinity: bool,
}

/// A G2 point in homogeneous projective coordinates `(x / z, y / z)`.
struct G2HomProjective {
    x: Fp,
    y: Fp,
    z: Fp,
}

impl G2Prepared {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

impl From<G2Projective> for G2Prepared {
    fn from(q: G2Projective) -> Self {
        let (qx, qy) = match q.xy() {
            Some(xy) => xy,
            None => {
                return G2Prepared {
                    ell_coeffs: vec![],
                    infinity: true,
                }
            }
        };

        let prepare_time = start_timer!(|| "Precompute G2 line coefficients");

        let q = (qx, qy);
        let neg_q = (qx, -qy);
        let mut ell_coeffs = Vec::new();

        let mut r = G2HomProjective {
            x: qx,
            y: qy,
            z: Fp::one(),
        };
        for bit in BitIteratorBE::without_leading_zeros(BW6_761::ATE_LOOP_COUNT_1).skip(1) {
            ell_coeffs.push(doubling_step(&mut r));
            if bit {
                ell_coeffs.push(addition_step(&mut r, &q));
            }
        }

        let mut r = G2HomProjective {
            x: qx,
            y: qy,
            z: Fp::one(),
        };
        for i in (1..BW6_761::ATE_LOOP_COUNT_2.len()).rev() {
            ell_coeffs.push(doubling_step(&mut r));
            match BW6_761::ATE_LOOP_COUNT_2[i - 1] {
                1 => ell_coeffs.push(addition_step(&mut r, &q)),
                -1 => ell_coeffs.push(addition_step(&mut r, &neg_q)),
                _ => {}
            }
        }

        end_timer!(prepare_time);
        G2Prepared {
            ell_coeffs,
            infinity: false,
        }
    }
}

impl<'a> From<&'a G2Projective> for G2Prepared {
    fn from(q: &'a G2Projective) -> Self {
        G2Prepared::from(*q)
    }
}

/// Doubles `r` and returns the tangent line. The coordinates come out
/// scaled by 4, which leaves the projective point unchanged.
fn doubling_step(r: &mut G2HomProjective) -> EllCoeff {
    // A = X*Y
    let a = r.x * &r.y;
    // B = Y^2
    let b = r.y.square();
    let b4 = b.double().double();
    // C = Z^2
    let c = r.z.square();
    // E = 3b'C
    let e = g2::Parameters::mul_by_b(&(c.double() + &c));
    // F = 3E
    let f = e.double() + &e;
    let g = b + &f;
    // H = (Y+Z)^2 - (B+C)
    let h = r.y.lazy_add(&r.z).square() - &(b + &c);
    let i = e - &b;
    let j = r.x.square();
    let e2_square = e.double().square();

    r.x = a.double() * &(b - &f);
    r.y = g.square() - &(e2_square.double() + &e2_square);
    r.z = b4 * &h;

    match BW6_761::TWIST_TYPE {
        TwistType::M => (i, j.double() + &j, -h),
        TwistType::D => (-h, j.double() + &j, i),
    }
}

/// Adds the affine point `q` to `r` and returns the chord.
fn addition_step(r: &mut G2HomProjective, q: &(Fp, Fp)) -> EllCoeff {
    let (qx, qy) = q;
    // theta = Y - y*Z
    let theta = r.y - &(*qy * &r.z);
    // lambda = X - x*Z
    let lambda = r.x - &(*qx * &r.z);
    let c = theta.square();
    let d = lambda.square();
    let e = lambda * &d;
    let f = r.z * &c;
    let g = r.x * &d;
    let h = e + &f - &g.double();

    r.x = lambda * &h;
    r.y = theta * &(g - &h) - &(e * &r.y);
    r.z *= &e;
    let j = theta * qx - &(lambda * qy);

    match BW6_761::TWIST_TYPE {
        TwistType::M => (j, -theta, lambda),
        TwistType::D => (-theta, lambda, j),
    }
}

/// Non-adjacent form of `k`, least significant digit first.
pub fn find_naf(k: &BigUint) -> Vec<i8> {
    let mut k = k.clone();
    let mut naf = Vec::new();

    while !k.is_zero() {
        let digit = match k.to_u64_digits().first().map(|d| d & 3) {
            Some(1) => 1,
            Some(3) => -1,
            _ => 0,
        };
        match digit {
            1 => k -= 1u32,
            -1 => k += 1u32,
            _ => {}
        }
        naf.push(digit);
        k >>= 1;
    }
    naf
}

/// Whether `f` lies in the order-`r` subgroup of `Fp6*`.
pub fn is_in_gt(f: &Fp6) -> bool {
    !f.is_zero() && f.pow(GROUP_ORDER).is_one()
}

/// Accumulates `(G1, G2)` pairs and evaluates their pairing product.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    pairs: Vec<(G1Projective, G2Projective)>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `e(p, q)`. Pairs with infinity on either side are dropped.
    pub fn add_pair(&mut self, p: &G1Projective, q: &G2Projective) -> &mut Self {
        if !p.is_zero() && !q.is_zero() {
            self.pairs.push((p.into_affine(), q.into_affine()));
        }
        self
    }

    /// Queues `e(-p, q)`, the inverse of `e(p, q)`.
    pub fn add_pair_inv(&mut self, p: &G1Projective, q: &G2Projective) -> &mut Self {
        self.add_pair(&-*p, q)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.pairs.clear();
        self
    }

    /// Number of queued pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The product of all queued pairings. The queue is emptied.
    pub fn result(&mut self) -> Gt {
        let pairs = core::mem::take(&mut self.pairs);
        BW6_761::product_of_pairings(&pairs)
    }

    /// Whether the queued pairing product is one. The queue is emptied.
    pub fn check(&mut self) -> bool {
        self.result().is_one()
    }
}
