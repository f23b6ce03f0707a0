use limbnum::boole::{
    boole, logand, logand_all, logandc1, logbitp, logeqv_all, logior, logior_all, lognot, logxor,
    logxor_all,
};
use limbnum::{ArithmeticShift, Bignum, BooleOp, Integer, Logical};

use rand::prelude::*;
use rand_xorshift::XorShiftRng;

fn oracle(op: BooleOp, x: i128, y: i128) -> i128 {
    let code = op.code();
    let mut r = 0;
    if code & 1 != 0 {
        r |= x & y;
    }
    if code & 2 != 0 {
        r |= x & !y;
    }
    if code & 4 != 0 {
        r |= !x & y;
    }
    if code & 8 != 0 {
        r |= !x & !y;
    }
    r
}

fn random_wide<R: Rng>(rng: &mut R) -> Integer {
    let len = rng.random_range(0..=5);
    let limbs: Vec<u64> = (0..len).map(|_| rng.random()).collect();
    Integer::from(Bignum::from_limbs(rng.random(), &limbs))
}

#[test]
fn test_all_ops_against_i128() {
    let mut rng = XorShiftRng::from_seed([21u8; 16]);
    for _ in 0..1000 {
        let shift = rng.random_range(0..127u32);
        let x = rng.random::<i128>() >> shift;
        let y = rng.random::<i128>() >> rng.random_range(0..127u32);
        let (a, b) = (Integer::from(x), Integer::from(y));
        for op in BooleOp::ALL {
            assert_eq!(
                boole(op, &a, &b),
                Integer::from(oracle(op, x, y)),
                "{:?} {} {}",
                op,
                x,
                y
            );
        }
    }
}

#[test]
fn test_operator_codes() {
    for (i, op) in BooleOp::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(op.code()), i);
        assert_eq!(BooleOp::from_code(i as i64), Ok(op));
    }
    assert!(BooleOp::from_code(16).is_err());
    assert!(BooleOp::try_from(-1i64).is_err());

    let x = Integer::from(12);
    let y = Integer::from(10);
    assert_eq!(boole(BooleOp::Clr, &x, &y), Integer::from(0));
    assert_eq!(boole(BooleOp::Set, &x, &y), Integer::from(-1));
    assert_eq!(boole(BooleOp::One, &x, &y), x);
    assert_eq!(boole(BooleOp::Two, &x, &y), y);
    assert_eq!(boole(BooleOp::C1, &x, &y), Integer::from(-13));
    assert_eq!(boole(BooleOp::C2, &x, &y), Integer::from(-11));
}

#[test]
fn test_wide_identities() {
    let mut rng = XorShiftRng::from_seed([22u8; 16]);
    let minus_one = Integer::from(-1);
    for _ in 0..300 {
        let x = random_wide(&mut rng);
        let y = random_wide(&mut rng);

        assert_eq!(lognot(&lognot(&x)), x);
        assert_eq!(lognot(&x), x.negate().one_minus());
        assert_eq!(logand(&x, &lognot(&x)), Integer::from(0));
        assert_eq!(logior(&x, &lognot(&x)), minus_one);
        assert_eq!(logxor(&x, &x), Integer::from(0));

        assert_eq!(&logand(&x, &y) + &logior(&x, &y), &x + &y);
        assert_eq!(lognot(&logand(&x, &y)), logior(&lognot(&x), &lognot(&y)));
        assert_eq!(logandc1(&x, &y), logand(&lognot(&x), &y));
        assert_eq!(logxor(&logxor(&x, &y), &y), x);
        assert_eq!(boole(BooleOp::Eqv, &x, &y), lognot(&logxor(&x, &y)));

        let r = logxor(&x, &y);
        assert_eq!(r.clone().canonicalize().is_fixnum(), r.is_fixnum());
    }
}

#[test]
fn test_bits_agree_with_shifts() {
    let mut rng = XorShiftRng::from_seed([23u8; 16]);
    for _ in 0..200 {
        let x = random_wide(&mut rng);
        let index = rng.random_range(0..400u64);
        let expected = x.ash(-(index as i64)).is_odd();
        assert_eq!(logbitp(index, &x), expected);
        assert_eq!(x.logbitp(index), expected);
    }
}

#[test]
fn test_variadic_folds() {
    let none: [Integer; 0] = [];
    assert_eq!(logand_all(&none), Integer::from(-1));
    assert_eq!(logior_all(&none), Integer::from(0));
    assert_eq!(logxor_all(&none), Integer::from(0));
    assert_eq!(logeqv_all(&none), Integer::from(-1));

    let values: Vec<Integer> = ["-340282366920938463463374607431768211457", "255", "-2"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let [a, b, c] = [&values[0], &values[1], &values[2]];

    assert_eq!(logand_all(&values), logand(&logand(a, b), c));
    assert_eq!(logior_all(&values), logior(&logior(a, b), c));
    assert_eq!(logxor_all(&values), a ^ b ^ c.clone());
    assert_eq!(
        logeqv_all(&values),
        boole(BooleOp::Eqv, &boole(BooleOp::Eqv, a, b), c)
    );
}

#[test]
fn test_method_forms() {
    let x: Integer = "-36893488147419103232".parse().unwrap();
    let y = Integer::from(7);
    assert_eq!(x.boole(BooleOp::Orc2, &y), logior(&x, &lognot(&y)));
    assert_eq!(Logical::lognot(&x), lognot(&x));
    assert_eq!(!&x, lognot(&x));
}
