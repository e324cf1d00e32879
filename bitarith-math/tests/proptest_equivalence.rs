use bitarith_math::{add, divide, subtract, ArithmeticError};
use proptest::prelude::*;

// Property 1: Addition matches native wrapping addition
proptest! {
    #[test]
    fn prop_add_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), a.wrapping_add(b));
    }
}

// Property 2: Addition is commutative
proptest! {
    #[test]
    fn prop_add_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }
}

// Property 3: Subtraction matches native wrapping subtraction
proptest! {
    #[test]
    fn prop_subtract_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(a, b), a.wrapping_sub(b));
    }
}

// Property 4: Subtraction undoes addition, even across wraparound
proptest! {
    #[test]
    fn prop_subtract_inverse_of_add(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }
}

// Property 5: Division matches native truncating division for nonzero divisors
proptest! {
    #[test]
    fn prop_divide_matches_native(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("nonzero divisor", |b| *b != 0)
    ) {
        prop_assert_eq!(divide(a, b), Ok(a.wrapping_div(b)));
    }
}

// Property 6: Small operands hit the early-exit and short-loop paths more often
proptest! {
    #[test]
    fn prop_divide_small_operands(a in -1000i32..1000, b in -50i32..50) {
        if b == 0 {
            prop_assert_eq!(divide(a, b), Err(ArithmeticError::DivisionByZero));
        } else {
            prop_assert_eq!(divide(a, b), Ok(a / b));
        }
    }
}

// Property 7: Quotient and remainder reconstruct the dividend
proptest! {
    #[test]
    fn prop_divide_reconstructs(
        a in (i32::MIN + 1)..=i32::MAX,
        b in any::<i32>().prop_filter("nonzero divisor", |b| *b != 0)
    ) {
        let q = i64::from(divide(a, b).unwrap());
        let (a, b) = (i64::from(a), i64::from(b));
        let r = a - q * b;

        prop_assert!(r.abs() < b.abs(), "remainder {} not smaller than divisor {}", r, b);
        // Truncation toward zero: remainder is zero or shares the dividend's sign
        prop_assert!(r == 0 || (r < 0) == (a < 0), "remainder {} has wrong sign for {}", r, a);
    }
}

// Property 8: Zero divisor always fails
proptest! {
    #[test]
    fn prop_divide_by_zero_fails(a in any::<i32>()) {
        prop_assert_eq!(divide(a, 0), Err(ArithmeticError::DivisionByZero));
    }
}
