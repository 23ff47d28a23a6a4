use crate::{
    fields::{Field, Fp},
    One, Zero,
};
use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};
use rand_xorshift::XorShiftRng;

pub(crate) const ITERATIONS: usize = 5;

pub(crate) fn field_test<F: Field>(a: F, b: F) {
    let zero = F::zero();
    assert_eq!(zero, zero);
    assert!(zero.is_zero());
    assert!(!zero.is_one());

    let one = F::one();
    assert_eq!(one, one);
    assert!(!one.is_zero());
    assert!(one.is_one());
    assert_eq!(zero + &one, one);

    let two = one + &one;
    assert_eq!(two, two);
    assert_ne!(zero, two);
    assert_ne!(one, two);
    assert_eq!(one.double(), two);

    // a == a
    assert_eq!(a, a);
    // a + 0 = a
    assert_eq!(a + &zero, a);
    // a - 0 = a
    assert_eq!(a - &zero, a);
    // a - a = 0
    assert_eq!(a - &a, zero);
    // 0 - a = -a
    assert_eq!(zero - &a, -a);
    // a.double() = a + a
    assert_eq!(a.double(), a + &a);
    // b.double() = b + b
    assert_eq!(b.double(), b + &b);
    // a + b = b + a
    assert_eq!(a + &b, b + &a);
    // a - b = -(b - a)
    assert_eq!(a - &b, -(b - &a));
    // (a + b) + a = a + (b + a)
    assert_eq!((a + &b) + &a, a + &(b + &a));
    // (a + b).double() = (a + b) + (b + a)
    assert_eq!((a + &b).double(), (a + &b) + &(b + &a));
    // -(-a) = a
    assert_eq!(-(-a), a);
    // -0 = 0
    assert_eq!(-zero, zero);

    // a * 0 = 0
    assert_eq!(a * &zero, zero);
    // a * 1 = a
    assert_eq!(a * &one, a);
    // a * 2 = a.double()
    assert_eq!(a * &two, a.double());
    // a * a^-1 = 1
    assert_eq!(a * &a.inverse(), one);
    // a * a = a^2
    assert_eq!(a * &a, a.square());
    // a * a * a = a^3
    assert_eq!(a * &(a * &a), a.pow([0x3]));
    // a * b = b * a
    assert_eq!(a * &b, b * &a);
    // (a * b) * a = a * (b * a)
    assert_eq!((a * &b) * &a, a * &(b * &a));
    // (a + b)^2 = a^2 + 2ab + b^2
    assert_eq!(
        (a + &b).square(),
        a.square() + &((a * &b) + &(a * &b)) + &b.square()
    );
    // (a - b)^2 = (-(b - a))^2
    assert_eq!((a - &b).square(), (-(b - &a)).square());
    // a^2 - b^2 = (a - b)(a + b)
    assert_eq!(a.square() - &b.square(), (a - &b) * &(a + &b));
    // (a + b) + c = (a + c) + b
    let c = a * &b + &one;
    assert_eq!((a + &b) + &c, (a + &c) + &b);
    // (a / b) * b = a
    assert_eq!((a / &b) * &b, a);
    // ((a^2)^2)^2 = a^8
    assert_eq!(a.square().square().square(), a.pow([0x8]));
    // a^0 = 1
    assert_eq!(a.pow([0x0]), one);

    // 0^-1 = 0
    assert_eq!(zero.inverse(), zero);
    assert_eq!(one.inverse(), one);

    lazy_test(a, b, c);
    bytes_test(a);
    bytes_test(b);
    bytes_test(zero);
    bytes_test(one);
}

/// Lazily reduced results must multiply like the reduced ones.
pub(crate) fn lazy_test<F: Field>(a: F, b: F, c: F) {
    assert_eq!(a.lazy_add(&b) * &c, (a + &b) * &c);
    assert_eq!(c * &a.lazy_add(&b), c * &(a + &b));
    assert_eq!(a.lazy_double() * &c, a.double() * &c);
    assert_eq!(a.lazy_add(&a) * &b.lazy_add(&c), a.double() * &(b + &c));
}

pub(crate) fn bytes_test<F: Field>(a: F) {
    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), F::DEGREE * 96);
    assert_eq!(F::from_bytes(&bytes).unwrap(), a);

    let hex = a.to_hex();
    assert!(hex.starts_with("0x"));
    assert_eq!(F::from_hex(&hex).unwrap(), a);
    assert_eq!(F::from_hex(&hex[2..]).unwrap(), a);
    assert_eq!(F::from_hex(&hex.to_uppercase()[2..]).unwrap(), a);
}

pub(crate) fn sqrt_field_test(a: Fp) {
    let zero = Fp::zero();
    let one = Fp::one();
    assert_eq!(zero.sqrt().unwrap(), zero);
    assert_eq!(one.sqrt().unwrap().square(), one);

    let square = a.square();
    let root = square.sqrt().unwrap();
    assert!(root == a || root == -a);
    assert!(!square.is_quadratic_non_residue());

    if let Some(root) = a.sqrt() {
        assert_eq!(root.square(), a);
        assert!(!a.is_quadratic_non_residue());
    } else {
        assert!(a.is_quadratic_non_residue());
    }

    // p = 3 mod 4, so exactly one of a and -a is a square
    if !a.is_zero() {
        assert_ne!(a.sqrt().is_some(), (-a).sqrt().is_some());
    }
}

/// Checks `frobenius_map(i)` against raising to the `characteristic^i` power.
pub(crate) fn frobenius_test<F: Field, C: AsRef<[u64]>>(characteristic: C, maxpower: usize)
where
    Standard: Distribution<F>,
{
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a: F = rng.gen();

        let mut a_0 = a;
        a_0.frobenius_map(0);
        assert_eq!(a, a_0);

        let mut a_q = a.pow(&characteristic);
        for power in 1..maxpower {
            let mut a_qi = a;
            a_qi.frobenius_map(power);
            assert_eq!(a_qi, a_q);

            a_q = a_q.pow(&characteristic);
        }
    }
}
