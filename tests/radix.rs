use limbnum::{Bignum, Integer, ParseErrorKind};

use rand::prelude::*;
use rand_xorshift::XorShiftRng;

#[test]
fn test_round_trip_every_radix() {
    let mut rng = XorShiftRng::from_seed([31u8; 16]);
    for radix in 2..=36 {
        for _ in 0..20 {
            let len = rng.random_range(0..=6);
            let limbs: Vec<u64> = (0..len).map(|_| rng.random()).collect();
            let n = Integer::from(Bignum::from_limbs(rng.random(), &limbs));

            let s = n.to_str_radix(radix);
            assert!(!s.chars().any(|c| c.is_ascii_lowercase()));
            assert_eq!(Integer::from_str_radix(&s, radix), Ok(n.clone()));
            assert_eq!(
                Integer::from_str_radix(&s.to_ascii_lowercase(), radix),
                Ok(n)
            );
        }
    }
}

#[test]
fn test_known_renderings() {
    let n: Integer = "-18446744073709551616".parse().unwrap();
    assert_eq!(n.to_str_radix(16), "-10000000000000000");
    assert_eq!(n.to_str_radix(2).len(), 66);
    assert_eq!(Integer::from(0).to_str_radix(36), "0");
    assert_eq!(Integer::from(35).to_str_radix(36), "Z");
    assert_eq!(format!("{:x}", Integer::from(255)), "ff");
    assert_eq!(format!("{:#X}", Integer::from(255)), "0xFF");
    assert_eq!(format!("{:b}", Integer::from(-5)), "-101");
    assert_eq!(format!("{:>6}", Integer::from(-42)), "   -42");
}

#[test]
fn test_parse_normalizes() {
    assert_eq!(Integer::from_str_radix("-0", 10), Ok(Integer::from(0)));
    let n = Integer::from_str_radix("0000000000000000000000000000007", 10).unwrap();
    assert_eq!(n.as_fixnum(), Some(7));
    let n = Integer::from_str_radix("-zz", 36).unwrap();
    assert_eq!(n, Integer::from(-1295));
}

#[test]
fn test_parse_errors() {
    let kind = |s: &str, radix| *Integer::from_str_radix(s, radix).unwrap_err().kind();

    assert_eq!(kind("", 10), ParseErrorKind::Empty);
    assert_eq!(kind("-", 10), ParseErrorKind::Empty);
    assert_eq!(kind("12", 37), ParseErrorKind::InvalidRadix(37));
    assert_eq!(kind("12", 1), ParseErrorKind::InvalidRadix(1));
    assert_eq!(
        kind("12a", 10),
        ParseErrorKind::InvalidDigit {
            position: 2,
            digit: 'a'
        }
    );
    assert_eq!(
        kind("-102", 2),
        ParseErrorKind::InvalidDigit {
            position: 3,
            digit: '2'
        }
    );
    assert_eq!(
        kind("+5", 10),
        ParseErrorKind::InvalidDigit {
            position: 0,
            digit: '+'
        }
    );
    assert_eq!(
        kind("1é", 16),
        ParseErrorKind::InvalidDigit {
            position: 1,
            digit: 'é'
        }
    );
}
