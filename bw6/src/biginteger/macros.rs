macro_rules! bigint_impl {
    ($name:ident, $num_limbs:expr) => {
        /// Fixed-width unsigned integer, little-endian by limb.
        #[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
        pub struct $name(pub [u64; $num_limbs]);

        impl $name {
            /// Number of 64-bit limbs.
            pub const LIMBS: usize = $num_limbs;

            /// Width of the big-endian byte encoding.
            pub const BYTES: usize = $num_limbs * 8;

            pub const fn new(value: [u64; $num_limbs]) -> Self {
                $name(value)
            }

            /// Adds `other` in place, returning the carry out of the top limb.
            #[inline]
            pub fn add_nocarry(&mut self, other: &Self) -> bool {
                let mut carry = 0;

                for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
                    *a = arithmetic::adc(*a, *b, &mut carry);
                }

                carry != 0
            }

            /// Subtracts `other` in place, returning the borrow out of the top limb.
            #[inline]
            pub fn sub_noborrow(&mut self, other: &Self) -> bool {
                let mut borrow = 0;

                for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
                    *a = arithmetic::sbb(*a, *b, &mut borrow);
                }

                borrow != 0
            }

            /// Shifts left by one bit, returning the bit shifted out.
            #[inline]
            pub fn mul2(&mut self) -> bool {
                let mut last = 0;
                for i in self.0.iter_mut() {
                    let tmp = *i >> 63;
                    *i <<= 1;
                    *i |= last;
                    last = tmp;
                }
                last != 0
            }

            #[inline]
            pub fn div2(&mut self) {
                let mut t = 0;
                for i in self.0.iter_mut().rev() {
                    let t2 = *i << 63;
                    *i >>= 1;
                    *i |= t;
                    t = t2;
                }
            }

            #[inline]
            pub fn is_odd(&self) -> bool {
                self.0[0] & 1 == 1
            }

            #[inline]
            pub fn is_even(&self) -> bool {
                !self.is_odd()
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&e| e == 0)
            }

            /// Position of the most significant set bit plus one.
            #[inline]
            pub fn num_bits(&self) -> u32 {
                let mut ret = $num_limbs * 64;
                for i in self.0.iter().rev() {
                    let leading = i.leading_zeros();
                    ret -= leading;
                    if leading != 64 {
                        break;
                    }
                }

                ret
            }

            #[inline]
            pub fn get_bit(&self, i: usize) -> bool {
                if i >= 64 * $num_limbs {
                    false
                } else {
                    let limb = i / 64;
                    let bit = i - (64 * limb);
                    (self.0[limb] & (1 << bit)) != 0
                }
            }

            /// Interprets `bytes` as a big-endian integer. Short inputs are
            /// left-padded with zeros, long inputs keep their leading
            /// `Self::BYTES` bytes.
            pub fn from_bytes_be(bytes: &[u8]) -> Self {
                let l = core::cmp::min(bytes.len(), Self::BYTES);
                let mut padded = [0u8; $num_limbs * 8];
                padded[Self::BYTES - l..].copy_from_slice(&bytes[..l]);

                let mut repr = [0u64; $num_limbs];
                for (i, limb) in repr.iter_mut().enumerate() {
                    let a = Self::BYTES - i * 8;
                    *limb = BigEndian::read_u64(&padded[a - 8..a]);
                }
                $name(repr)
            }

            /// Fixed-width big-endian encoding.
            pub fn to_bytes_be(&self) -> Vec<u8> {
                let mut out = vec![0u8; Self::BYTES];
                for (i, limb) in self.0.iter().enumerate() {
                    let a = Self::BYTES - i * 8;
                    BigEndian::write_u64(&mut out[a - 8..a], *limb);
                }
                out
            }

            pub fn from_biguint(value: &BigUint) -> Self {
                Self::from_bytes_be(&value.to_bytes_be())
            }

            pub fn to_biguint(&self) -> BigUint {
                BigUint::from_bytes_be(&self.to_bytes_be())
            }
        }

        impl ToBytes for $name {
            fn to_bytes(&self) -> Vec<u8> {
                self.to_bytes_be()
            }
        }

        impl FromBytes for $name {
            fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
                Ok(Self::from_bytes_be(bytes))
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
                    if a < b {
                        return core::cmp::Ordering::Less;
                    } else if a > b {
                        return core::cmp::Ordering::Greater;
                    }
                }
                core::cmp::Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "0x")?;
                for i in self.0.iter().rev() {
                    write!(f, "{:016x}", *i)?;
                }
                Ok(())
            }
        }

        impl Distribution<$name> for Standard {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $name {
                let mut repr = [0u64; $num_limbs];
                for limb in repr.iter_mut() {
                    *limb = rng.gen();
                }
                $name(repr)
            }
        }

        impl AsMut<[u64]> for $name {
            #[inline]
            fn as_mut(&mut self) -> &mut [u64] {
                &mut self.0
            }
        }

        impl AsRef<[u64]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u64] {
                &self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(val: u64) -> $name {
                let mut repr = Self::default();
                repr.0[0] = val;
                repr
            }
        }
    };
}
