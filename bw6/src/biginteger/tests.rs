use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{
    biginteger::{BigInteger384, BigInteger768},
    bytes::{FromBytes, ToBytes},
};

#[test]
fn test_add_sub() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..20 {
        let a: BigInteger768 = rng.gen();
        let b: BigInteger768 = rng.gen();

        let mut sum = a;
        let carry = sum.add_nocarry(&b);
        let expected = a.to_biguint() + b.to_biguint();
        assert_eq!(carry, expected.bits() > 768);
        if !carry {
            assert_eq!(sum.to_biguint(), expected);
        }

        let mut diff = sum;
        let borrow = diff.sub_noborrow(&b);
        assert_eq!(borrow, carry);
        assert_eq!(diff, a);
    }
}

#[test]
fn test_shifts() {
    let mut a = BigInteger384::from(1);
    for i in 0..383 {
        assert!(a.get_bit(i));
        assert!(!a.get_bit(i + 1));
        assert_eq!(a.num_bits(), i as u32 + 1);
        assert!(!a.mul2());
    }
    assert!(a.mul2());
    assert!(a.is_zero());

    let mut b = BigInteger384::from(6);
    b.div2();
    assert_eq!(b, BigInteger384::from(3));
    assert!(b.is_odd());
    b.div2();
    assert!(b.is_odd());
    b.div2();
    assert!(b.is_zero());
    assert!(b.is_even());
    assert_eq!(b.num_bits(), 0);
    assert!(!b.get_bit(10_000));
}

#[test]
fn test_ordering() {
    let small = BigInteger768::from(5);
    let mut big = BigInteger768::from(0);
    big.0[11] = 1;
    assert!(small < big);
    assert!(big > small);
    assert_eq!(small.cmp(&small), core::cmp::Ordering::Equal);
}

#[test]
fn test_byte_codecs() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..5 {
        let a: BigInteger768 = rng.gen();
        let bytes = a.to_bytes_be();
        assert_eq!(bytes.len(), BigInteger768::BYTES);
        assert_eq!(BigInteger768::from_bytes_be(&bytes), a);
        assert_eq!(BigInteger768::from_bytes(&bytes).unwrap(), a);
        assert_eq!(a.to_bytes(), bytes);
        assert_eq!(BigInteger768::from_biguint(&a.to_biguint()), a);
        assert_eq!(BigUint::from_bytes_be(&bytes), a.to_biguint());
    }

    assert_eq!(
        BigInteger384::from_bytes_be(&[0x01, 0x02]),
        BigInteger384::from(0x0102)
    );

    let mut long = vec![0u8; 47];
    long.push(0x09);
    long.extend_from_slice(&[0xff; 3]);
    assert_eq!(BigInteger384::from_bytes_be(&long), BigInteger384::from(9));
}

#[test]
fn test_display() {
    let a = BigInteger384::from(0xab);
    let s = format!("{}", a);
    assert!(s.starts_with("0x"));
    assert!(s.ends_with("00ab"));
    assert_eq!(s.len(), 2 + 96);
}
