use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("div by zero")]
    DivisionByZero,
}

/// Divides two integers without the `/` operator, truncating toward zero.
///
/// Works on absolute values widened to `i64`, so `i32::MIN` has a
/// representable magnitude. Each round finds the largest `divisor << k` that
/// still fits in what is left of the dividend, subtracts it and records
/// `1 << k` in the quotient.
///
/// `i32::MIN / -1` wraps to `i32::MIN`, matching `i32::wrapping_div`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32, ArithmeticError> {
    if divisor == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    if dividend == 0 {
        return Ok(0);
    }
    if divisor == 1 {
        return Ok(dividend);
    }

    // Sign bit of the XOR is set iff the operand signs differ
    let is_negative = (dividend ^ divisor) < 0;

    let mut remaining = i64::from(dividend).abs();
    let abs_divisor = i64::from(divisor).abs();

    let mut quotient: i64 = 0;
    while remaining >= abs_divisor {
        let mut chunk = abs_divisor;
        let mut multiple: i64 = 1;
        // remaining <= 2^31, so chunk << 1 stays below 2^33
        while chunk << 1 <= remaining {
            chunk <<= 1;
            multiple <<= 1;
        }
        remaining -= chunk;
        // Multiples strictly decrease, so each one sets a fresh bit
        quotient |= multiple;
        trace!("divide({dividend}, {divisor}): took {chunk}, {remaining} left");
    }

    if is_negative {
        quotient = -quotient;
    }

    Ok(narrow(quotient))
}

/// Narrows a quotient back to `i32`, wrapping the single out-of-range value.
fn narrow(quotient: i64) -> i32 {
    match i32::try_from(quotient) {
        Ok(q) => q,
        Err(_) => {
            // Only 2^31 (i32::MIN / -1) lands here
            debug!("quotient {quotient} does not fit in i32, wrapping");
            quotient as i32
        }
    }
}
