/// Adds two integers without the `+` operator.
///
/// XOR sums each bit position ignoring carries, AND finds the positions that
/// carry, and the carry is shifted one place left and fed back in until none
/// remain. Overflow wraps exactly like `i32::wrapping_add`.
pub fn add(mut a: i32, mut b: i32) -> i32 {
    if b == 0 {
        return a;
    }
    if a == 0 {
        return b;
    }

    while b != 0 {
        let carry = a & b;
        a ^= b;
        // Shl by 1 drops the top bit instead of panicking
        b = carry << 1;
    }
    a
}

/// Subtracts `b` from `a` without the `-` operator.
///
/// Uses `a - b == a + (!b + 1)`. For `b == i32::MIN` the negation wraps back
/// to `i32::MIN`, so the result wraps like `i32::wrapping_sub`.
pub fn subtract(a: i32, b: i32) -> i32 {
    add(a, add(!b, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(-2, 7), 5);
        assert_eq!(add(-5, -3), -8);
        assert_eq!(add(100, 200), 300);
        assert_eq!(add(-100, 100), 0);
    }

    #[test]
    fn test_add_identity() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(42, 0), 42);
        assert_eq!(add(0, -42), -42);
        assert_eq!(add(i32::MIN, 0), i32::MIN);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
        assert_eq!(add(i32::MAX, i32::MAX), -2);
        assert_eq!(add(i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10, 3), 7);
        assert_eq!(subtract(5, 8), -3);
        assert_eq!(subtract(0, 0), 0);
        assert_eq!(subtract(-5, -3), -2);
        assert_eq!(subtract(100, 50), 50);
    }

    #[test]
    fn test_subtract_min_wraps() {
        // -i32::MIN is i32::MIN again, so these flip the sign bit
        assert_eq!(subtract(0, i32::MIN), i32::MIN);
        assert_eq!(subtract(1, i32::MIN), i32::MIN + 1);
        assert_eq!(subtract(-1, i32::MIN), i32::MAX);
        assert_eq!(subtract(i32::MIN, i32::MIN), 0);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
    }
}
