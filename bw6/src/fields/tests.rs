use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{
    biginteger::BigInteger768,
    bytes::{FromBytes, ToBytes},
    error::Error,
    fields::{Field, Fp, Fp3, Fp6},
    tests::fields::{bytes_test, field_test, frobenius_test, sqrt_field_test, ITERATIONS},
    One, Zero,
};

fn modulus() -> BigUint {
    Fp::MODULUS.to_biguint()
}

#[test]
fn test_fp() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp = rng.gen();
        let b: Fp = rng.gen();
        field_test(a, b);
        sqrt_field_test(a);
    }
}

#[test]
fn test_fp_against_biguint() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let p = modulus();
    for _ in 0..100 {
        let a: Fp = rng.gen();
        let b: Fp = rng.gen();
        let (x, y) = (a.to_biguint(), b.to_biguint());
        assert!(x < p && y < p);

        assert_eq!((a + &b).to_biguint(), (&x + &y) % &p);
        assert_eq!((a - &b).to_biguint(), (&x + &p - &y) % &p);
        assert_eq!((a * &b).to_biguint(), (&x * &y) % &p);
        assert_eq!(a.square().to_biguint(), (&x * &x) % &p);
        assert_eq!(a.double().to_biguint(), (&x + &x) % &p);
        assert_eq!((-a).to_biguint(), (&p - &x) % &p);
        assert_eq!(a.inverse().to_biguint(), x.modpow(&(&p - 2u32), &p));
        assert_eq!(Fp::from_biguint(&x), a);
        assert_eq!(Fp::from_biguint(&(&x + &p)), a);

        assert!((a + &b).is_valid());
        assert!((a - &b).is_valid());
        assert!((a * &b).is_valid());
    }
}

#[test]
fn test_fp_montgomery_constants() {
    assert_eq!(Fp::one().into_repr(), BigInteger768::from(1));
    assert_eq!(Fp::from(1u64), Fp::one());
    assert_eq!(Fp::from(0u64), Fp::zero());
    assert_eq!(Fp::NONRESIDUE, -Fp::from(4u64));
    assert_eq!(Fp::from(4u64).mul_by_nonresidue(), -Fp::from(16u64));
    assert_eq!(Fp::INV.wrapping_mul(Fp::MODULUS.0[0]), u64::max_value());
    assert_eq!(Fp::MODULUS.num_bits(), Fp::MODULUS_BITS);

    let two = Fp::from(2u64);
    assert_eq!(two.into_repr(), BigInteger768::from(2));
    assert_eq!(Fp::from(3u64) * &two, Fp::from(6u64));
}

#[test]
fn test_fp_lazy_operations() {
    let mut two_p = Fp::MODULUS;
    two_p.mul2();

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS * 10 {
        let a: Fp = rng.gen();
        let b: Fp = rng.gen();
        let c: Fp = rng.gen();

        assert_eq!(a.lazy_add(&b) * &c, (a + &b) * &c);
        assert_eq!(a.lazy_double() * &c, a.double() * &c);
        assert_eq!(a.lazy_sub(&b) * &c, (a - &b) * &c);
        assert!(a.lazy_add(&b).0 < two_p);
        assert!(a.lazy_sub(&b).0 < two_p);
    }
}

#[test]
fn test_fp_exponentiation() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let one = Fp::one();
    let mut p_minus_one = Fp::MODULUS;
    p_minus_one.sub_noborrow(&BigInteger768::from(1));

    for _ in 0..ITERATIONS {
        let a: Fp = rng.gen();
        assert_eq!(a.pow(Fp::MODULUS), a);
        assert_eq!(a.pow(p_minus_one), one);
        assert_eq!(a.pow([0u64]), one);
        assert_eq!(a.pow([1u64]), a);
    }
    assert_eq!(Fp::zero().pow([5u64]), Fp::zero());
}

#[test]
fn test_fp_inversion() {
    assert_eq!(Fp::zero().inverse(), Fp::zero());
    assert_eq!(Fp::one().inverse(), Fp::one());
    assert_eq!((-Fp::one()).inverse(), -Fp::one());
    assert_eq!(Fp::from(2u64).inverse().double(), Fp::one());

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS * 10 {
        let a: Fp = rng.gen();
        assert_eq!(a * &a.inverse(), Fp::one());
        assert_eq!(a.inverse().inverse(), a);
    }
}

#[test]
fn test_fp_square_root() {
    let nonresidue = Fp::NONRESIDUE;
    assert!(nonresidue.sqrt().is_none());
    assert!(nonresidue.is_quadratic_non_residue());
    assert!(!Fp::zero().is_quadratic_non_residue());
    assert!(!Fp::one().is_quadratic_non_residue());
    assert!((-Fp::one()).is_quadratic_non_residue());

    let four = Fp::from(4u64);
    let root = four.sqrt().unwrap();
    assert!(root == Fp::from(2u64) || root == -Fp::from(2u64));
}

#[test]
fn test_fp_sign() {
    assert!(Fp::zero().sign_be());
    assert!(Fp::one().sign_be());
    assert!(!(-Fp::one()).sign_be());
    assert!(Fp::zero().sign());
    assert!(!Fp::one().sign());
    assert!(Fp::from(2u64).sign());

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS * 10 {
        let a: Fp = rng.gen();
        if !a.is_zero() {
            assert_ne!(a.sign_be(), (-a).sign_be());
        }
    }
}

#[test]
fn test_fp_validation() {
    let mut p_minus_one = Fp::MODULUS;
    p_minus_one.sub_noborrow(&BigInteger768::from(1));
    assert!(Fp::new(p_minus_one).is_valid());
    assert!(!Fp::new(Fp::MODULUS).is_valid());
    assert!(!Fp::new(BigInteger768([u64::max_value(); 12])).is_valid());
    assert!(Fp::zero().is_valid());
    assert!(Fp::one().is_valid());
}

#[test]
fn test_fp_serialization() {
    let mut p_minus_one = Fp::MODULUS;
    p_minus_one.sub_noborrow(&BigInteger768::from(1));
    let max = Fp::from_repr(p_minus_one);
    assert_eq!(max, -Fp::one());
    bytes_test(max);

    let bytes = max.to_bytes();
    assert_eq!(bytes, p_minus_one.to_bytes_be());
    assert_eq!(Fp::zero().to_bytes(), vec![0u8; 96]);

    // short input is left-padded
    assert_eq!(Fp::from_bytes(&[0x01]).unwrap(), Fp::one());
    assert_eq!(Fp::from_bytes(&[]).unwrap(), Fp::zero());
    assert_eq!(Fp::from_bytes(&[0x01, 0x00]).unwrap(), Fp::from(256u64));

    // long input keeps the leading 96 bytes
    let mut long = Fp::from(7u64).to_bytes();
    long.extend_from_slice(&[0xff; 8]);
    assert_eq!(Fp::from_bytes(&long).unwrap(), Fp::from(7u64));

    // the modulus itself decodes to zero
    assert_eq!(Fp::from_bytes(&Fp::MODULUS.to_bytes_be()).unwrap(), Fp::zero());

    assert_eq!(Fp::from_hex("0x01").unwrap(), Fp::one());
    assert_eq!(Fp::from_hex("0xzz"), Err(Error::InvalidHex));
    assert_eq!(Fp::from_hex("0x123"), Err(Error::InvalidHex));
    assert!(Fp::one().to_hex().ends_with("01"));
    assert_eq!(Fp::one().to_hex().len(), 2 + 192);
}

#[test]
fn test_fp3() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp3 = rng.gen();
        let b: Fp3 = rng.gen();
        field_test(a, b);
    }
    frobenius_test::<Fp3, _>(Fp::MODULUS, 13);
}

#[test]
fn test_fp3_sparse_multiplication() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp3 = rng.gen();
        let b0: Fp = rng.gen();
        let b1: Fp = rng.gen();

        let mut sparse = a;
        sparse.mul_by_01(&b0, &b1);
        assert_eq!(sparse, a * &Fp3::new(b0, b1, Fp::zero()));

        let mut sparse = a;
        sparse.mul_by_1(&b1);
        assert_eq!(sparse, a * &Fp3::new(Fp::zero(), b1, Fp::zero()));

        assert_eq!(a.mul_by_fp(&b0), a * &Fp3::from(b0));
        assert_eq!(a.mul_by_nonresidue(), a * &Fp3::new(Fp::zero(), Fp::one(), Fp::zero()));
        assert_eq!(Fp3::mul_base_field_by_nonresidue(&b0), b0 * &Fp3::NONRESIDUE);
    }

    // v^3 lands back in the base field
    let v = Fp3::new(Fp::zero(), Fp::one(), Fp::zero());
    assert_eq!(v.square() * &v, Fp3::from(Fp3::NONRESIDUE));
}

#[test]
fn test_fp3_inversion() {
    let zero = Fp3::zero();
    assert_eq!(zero.inverse(), zero);

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp3 = rng.gen();
        assert_eq!(a * &a.inverse(), Fp3::one());

        // elements of the base field invert like base field elements
        let b: Fp = rng.gen();
        assert_eq!(Fp3::from(b).inverse(), Fp3::from(b.inverse()));
    }
}

#[test]
fn test_fp3_serialization() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: Fp3 = rng.gen();
    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), 288);
    assert_eq!(&bytes[..96], &a.c0.to_bytes()[..]);
    assert_eq!(&bytes[192..], &a.c2.to_bytes()[..]);
    assert_eq!(
        Fp3::from_bytes(&bytes[1..]),
        Err(Error::InputLength {
            expected: 288,
            found: 287
        })
    );
}

#[test]
fn test_fp6() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp6 = rng.gen();
        let b: Fp6 = rng.gen();
        field_test(a, b);
    }
    frobenius_test::<Fp6, _>(Fp::MODULUS, 13);
}

#[test]
fn test_fp6_squaring() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp6 = rng.gen();
        assert_eq!(a.square(), a * &a);
        assert_eq!(a.square_karatsuba(), a * &a);

        // move into the cyclotomic subgroup with the easy part of the final
        // exponentiation
        let mut conj = a;
        conj.conjugate();
        let t = conj * &a.inverse();
        let mut u = t;
        u.frobenius_map(1);
        let u = u * &t;

        assert_eq!(u.cyclotomic_square(), u.square());
        assert_eq!(u.unitary_inverse(), u.inverse());
        let e = [0x8508c00000000001u64];
        assert_eq!(u.cyclotomic_exp(e), u.pow(e));
        assert_eq!(u.cyclotomic_exp([0u64]), Fp6::one());
    }
}

#[test]
fn test_fp6_sparse_multiplication() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp6 = rng.gen();
        let x0: Fp = rng.gen();
        let x1: Fp = rng.gen();
        let x4: Fp = rng.gen();

        let mut sparse = a;
        sparse.mul_by_014(&x0, &x1, &x4);
        let full = Fp6::new(
            Fp3::new(x0, x1, Fp::zero()),
            Fp3::new(Fp::zero(), x4, Fp::zero()),
        );
        assert_eq!(sparse, a * &full);

        let mut sparse = a;
        sparse.mul_by_034(&x0, &x1, &x4);
        let full = Fp6::new(
            Fp3::new(x0, Fp::zero(), Fp::zero()),
            Fp3::new(x1, x4, Fp::zero()),
        );
        assert_eq!(sparse, a * &full);
    }
}

#[test]
fn test_fp6_conjugate() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp6 = rng.gen();
        let mut conj = a;
        conj.conjugate();
        let mut frob = a;
        frob.frobenius_map(3);
        assert_eq!(conj, frob);

        // the norm down to Fp3 lands in the base of the extension
        let norm = a * &conj;
        assert!(norm.c1.is_zero());
    }
}

#[test]
fn test_fp6_inversion() {
    let zero = Fp6::zero();
    assert_eq!(zero.inverse(), zero);

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a: Fp6 = rng.gen();
        let mut b = a;
        b.inverse_in_place();
        assert_eq!(a * &b, Fp6::one());
    }
}

#[test]
fn test_fp6_serialization() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: Fp6 = rng.gen();
    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), 576);
    assert_eq!(&bytes[..96], &a.c0.c0.to_bytes()[..]);
    assert_eq!(&bytes[288..384], &a.c1.c0.to_bytes()[..]);
    assert_eq!(&bytes[480..], &a.c1.c2.to_bytes()[..]);

    assert_eq!(
        Fp6::from_bytes(&bytes[..575]),
        Err(Error::InputLength {
            expected: 576,
            found: 575
        })
    );
    let mut longer = bytes.clone();
    longer.push(0);
    assert!(Fp6::from_bytes(&longer).is_err());
}

#[test]
fn test_frob_coeffs() {
    let p = modulus();
    let nqr = Fp::NONRESIDUE;
    let pow = |e: &BigUint| nqr.pow(BigInteger768::from_biguint(e));

    assert_eq!(Fp3::FROBENIUS_COEFF_FP3_C1[0], Fp::one());
    assert_eq!(Fp3::FROBENIUS_COEFF_FP3_C2[0], Fp::one());
    assert_eq!(Fp6::FROBENIUS_COEFF_FP6_C1[0], Fp::one());
    assert_eq!(Fp6::FROBENIUS_COEFF_FP6_C1[3], -Fp::one());

    let p_minus_one = &p - 1u32;
    assert_eq!(Fp3::FROBENIUS_COEFF_FP3_C1[1], pow(&(&p_minus_one / 3u32)));
    assert_eq!(
        Fp3::FROBENIUS_COEFF_FP3_C2[1],
        pow(&((&p_minus_one * 2u32) / 3u32))
    );
    assert_eq!(Fp6::FROBENIUS_COEFF_FP6_C1[1], pow(&(&p_minus_one / 6u32)));

    // the cube roots of unity repeat every three powers
    assert_eq!(
        Fp3::FROBENIUS_COEFF_FP3_C1[1].square(),
        Fp3::FROBENIUS_COEFF_FP3_C1[2]
    );
    assert_eq!(Fp3::FROBENIUS_COEFF_FP3_C1[1].pow([3u64]), Fp::one());
    for i in 0..6 {
        assert_eq!(Fp6::FROBENIUS_COEFF_FP6_C1[i].pow([6u64]), Fp::one());
    }
}
