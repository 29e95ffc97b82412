/// Integer power `x^n` by binary exponentiation.
///
/// `n = 0` yields `1.0` for every `x`, including `0.0` and `NaN`. A negative
/// exponent inverts the base first; `1 / 0.0` and friends are left to
/// propagate as `inf` or `NaN`.
///
/// Example:
/// ```text
/// pow(2.0, 10)  == 1024.0
/// pow(2.0, -2)  == 0.25
/// pow(2.0, i32::MIN) == 0.0   // 2^-2147483648 underflows
/// ```
pub fn pow(x: f64, n: i32) -> f64 {
    let (mut base, mut exponent) = if n < 0 {
        // i32::MIN negates to itself; its bit pattern read as u32 is 2^31,
        // the magnitude we want.
        (1.0 / x, n.wrapping_neg() as u32)
    } else {
        (x, n as u32)
    };

    let mut acc = 1.0f64;
    while exponent != 0 {
        if exponent & 1 == 1 {
            acc *= base;
        }
        base *= base;
        exponent >>= 1;
    }
    acc
}

#[cfg(test)]
mod power_tests {
    use super::*;

    #[test]
    fn zero_exponent_is_one() {
        for x in [0.0, -0.0, 1.0, -3.5, 1e300, f64::INFINITY, f64::NAN] {
            assert_eq!(pow(x, 0), 1.0, "pow({}, 0)", x);
        }
    }

    #[test]
    fn small_positive_exponents() {
        assert_eq!(pow(2.0, 10), 1024.0);
        assert_eq!(pow(-3.0, 3), -27.0);
        assert_eq!(pow(3.0, 20), 3_486_784_401.0);
        assert_eq!(pow(1.5, 1), 1.5);
    }

    #[test]
    fn negative_exponents_invert() {
        assert_eq!(pow(2.0, -2), 0.25);
        assert_eq!(pow(-2.0, -3), -0.125);
        assert_eq!(pow(0.5, -10), 1024.0);
    }

    #[test]
    fn zero_base_with_negative_exponent_overflows() {
        assert_eq!(pow(0.0, -1), f64::INFINITY);
        assert_eq!(pow(-0.0, -1), f64::NEG_INFINITY);
        assert_eq!(pow(-0.0, -2), f64::INFINITY);
    }

    #[test]
    fn extremal_exponents() {
        assert_eq!(pow(1.0, i32::MIN), 1.0);
        assert_eq!(pow(-1.0, i32::MIN), 1.0);
        assert_eq!(pow(-1.0, i32::MAX), -1.0);
        assert_eq!(pow(2.0, i32::MIN), 0.0);
        assert_eq!(pow(0.5, i32::MIN), f64::INFINITY);
        assert_eq!(pow(2.0, i32::MAX), f64::INFINITY);
        assert_eq!(pow(2.0, 1023), f64::from_bits(0x7FE0_0000_0000_0000));
        assert_eq!(pow(2.0, -1074), f64::from_bits(1));
    }

    #[test]
    fn nan_base_with_nonzero_exponent_is_nan() {
        assert!(pow(f64::NAN, 3).is_nan());
        assert!(pow(f64::NAN, -3).is_nan());
    }
}
