use crate::{
    bytes::{FromBytes, ToBytes},
    error::Error,
    Vec,
};
use byteorder::{BigEndian, ByteOrder};
use core::fmt::Display;
use num_bigint::BigUint;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

pub mod arithmetic;

#[macro_use]
mod macros;

bigint_impl!(BigInteger384, 6);
bigint_impl!(BigInteger768, 12);

#[cfg(test)]
mod tests;
