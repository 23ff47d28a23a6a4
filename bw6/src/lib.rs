//! The BW6-761 pairing-friendly curve.
//!
//! A 761-bit prime field in Montgomery form, the `Fp3`/`Fp6` extension tower,
//! the groups G1 and G2 in Jacobian coordinates and the optimal ate pairing
//! `G1 x G2 -> GT`, where GT is the order-`r` subgroup of `Fp6*`.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms)]
#![allow(clippy::op_ref, clippy::suspicious_op_assign_impl)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
#[macro_use]
#[doc(hidden)]
pub extern crate alloc;

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
#[doc(hidden)]
pub use alloc::{format, string::String, vec, vec::Vec};

#[cfg(feature = "std")]
#[allow(unused_imports)]
#[doc(hidden)]
pub use std::{format, string::String, vec, vec::Vec};

#[macro_use]
extern crate derivative;

/// Creates parallel iterator over refs if `parallel` feature is enabled.
#[macro_export]
macro_rules! cfg_iter {
    ($e: expr) => {{
        #[cfg(feature = "parallel")]
        let result = $e.par_iter();

        #[cfg(not(feature = "parallel"))]
        let result = $e.iter();

        result
    }};
}

/// Creates parallel iterator if `parallel` feature is enabled.
#[macro_export]
macro_rules! cfg_into_iter {
    ($e: expr) => {{
        #[cfg(feature = "parallel")]
        let result = $e.into_par_iter();

        #[cfg(not(feature = "parallel"))]
        let result = $e.into_iter();

        result
    }};
}

pub mod biginteger;
pub use self::biginteger::*;

pub mod bytes;
pub use self::bytes::*;

mod error;
pub use self::error::*;

pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod msm;
pub use self::msm::*;

pub mod pairing;
pub use self::pairing::*;

pub use num_traits::{One, Zero};

pub mod prelude {
    pub use crate::biginteger::{BigInteger384, BigInteger768};

    pub use crate::bytes::{FromBytes, ToBytes};

    pub use crate::fields::{Field, Fp, Fp3, Fp6};

    pub use crate::curves::{G1Projective, G2Projective, SWParameters};

    pub use crate::pairing::{Engine, Gt, BW6_761};

    pub use crate::error::*;

    pub use num_traits::{One, Zero};
}

#[cfg(test)]
mod tests;

