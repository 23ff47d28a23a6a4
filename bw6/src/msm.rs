use ark_std::{end_timer, log2, start_timer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    curves::{Projective, SWParameters, GROUP_ORDER_BITS},
    error::Error,
    vec, Vec, Zero,
};

pub struct VariableBaseMSM;

impl VariableBaseMSM {
    /// `sum(scalars[i] * bases[i])` with Pippenger's bucket method.
    ///
    /// Scalars are little-endian limb slices and may be wider than the group
    /// order; the window range covers the widest scalar.
    pub fn multi_scalar_mul<P, S>(
        bases: &[Projective<P>],
        scalars: &[S],
    ) -> Result<Projective<P>, Error>
    where
        P: SWParameters,
        S: AsRef<[u64]> + Sync,
    {
        if bases.len() != scalars.len() {
            return Err(Error::LengthMismatch {
                points: bases.len(),
                scalars: scalars.len(),
            });
        }

        let msm_time = start_timer!(|| "Variable-base MSM");

        let size = bases.len();
        let c = if size < 32 { 3 } else { ln_without_floats(size) + 2 };

        let max_bits = scalars
            .iter()
            .map(|s| num_bits(s.as_ref()))
            .max()
            .unwrap_or(0)
            .max(GROUP_ORDER_BITS as usize);

        // buckets take the mixed addition path
        let mut bases = bases.to_vec();
        Projective::batch_normalization(&mut bases);

        let zero = Projective::<P>::zero();
        let window_starts: Vec<_> = (0..max_bits).step_by(c).collect();

        // Each window is `c` bits wide; its sum is computed independently.
        let window_sums: Vec<_> = cfg_into_iter!(window_starts)
            .map(|w_start| {
                let mut res = zero;
                // buckets[i] collects the bases whose digit is i + 1
                let mut buckets = vec![zero; (1 << c) - 1];
                for (scalar, base) in scalars.iter().zip(&bases) {
                    let digit = window_digit(scalar.as_ref(), w_start, c);
                    if digit != 0 {
                        buckets[digit - 1].add_assign_mixed(base);
                    }
                }

                // sum_i (i + 1) * buckets[i] via a running sum
                let mut running_sum = zero;
                for b in buckets.into_iter().rev() {
                    running_sum += &b;
                    res += &running_sum;
                }

                res
            })
            .collect();

        // Lowest window goes in last, without doublings.
        let lowest = window_sums.first().copied().unwrap_or(zero);

        let result = lowest
            + &window_sums[1..]
                .iter()
                .rev()
                .fold(zero, |mut total, sum_i| {
                    total += sum_i;
                    for _ in 0..c {
                        total.double_in_place();
                    }
                    total
                });

        end_timer!(msm_time);
        Ok(result)
    }
}

fn ln_without_floats(a: usize) -> usize {
    // log2(a) * ln(2)
    (log2(a) * 69 / 100) as usize
}

fn num_bits(limbs: &[u64]) -> usize {
    limbs
        .iter()
        .rposition(|&l| l != 0)
        .map(|i| 64 * i + 64 - limbs[i].leading_zeros() as usize)
        .unwrap_or(0)
}

/// The `c`-bit digit of `scalar` starting at bit `start`.
fn window_digit(scalar: &[u64], start: usize, c: usize) -> usize {
    let limb = start / 64;
    let offset = start % 64;
    if limb >= scalar.len() {
        return 0;
    }

    let mut digit = scalar[limb] >> offset;
    if offset + c > 64 && limb + 1 < scalar.len() {
        digit |= scalar[limb + 1] << (64 - offset);
    }
    (digit & ((1u64 << c) - 1)) as usize
}
