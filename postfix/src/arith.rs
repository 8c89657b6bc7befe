use crate::rpneval::EvalErr;

/// Applies a binary operator to two integers, `left` being the operand that
/// came first in the expression.
///
/// All operations are checked: results that don't fit an `i64` fail with
/// `EvalErr::Overflow`. Division truncates towards zero. `^` is exponentiation
/// truncated to an integer, so a negative exponent leaves `0` unless the base
/// is `1` or `-1`.
pub fn apply(left: i64, right: i64, op: char) -> Result<i64, EvalErr> {
    match op {
        '+' => left.checked_add(right).ok_or(EvalErr::Overflow),
        '-' => left.checked_sub(right).ok_or(EvalErr::Overflow),
        '*' => left.checked_mul(right).ok_or(EvalErr::Overflow),
        '/' if right == 0 => Err(EvalErr::DivisionByZero),
        '/' => left.checked_div(right).ok_or(EvalErr::Overflow),
        '^' => power(left, right),
        _ => Err(EvalErr::UnknownOperator(op)),
    }
}

fn power(base: i64, exp: i64) -> Result<i64, EvalErr> {
    let odd = exp % 2 != 0;
    if exp < 0 {
        return match base {
            0 => Err(EvalErr::DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Ok(0),
        };
    }
    match (base, u32::try_from(exp)) {
        (_, Ok(e)) => base.checked_pow(e).ok_or(EvalErr::Overflow),
        (0 | 1, Err(_)) => Ok(base),
        (-1, Err(_)) => Ok(if odd { -1 } else { 1 }),
        _ => Err(EvalErr::Overflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ops() {
        assert_eq!(apply(7, 3, '+'), Ok(10));
        assert_eq!(apply(7, 3, '-'), Ok(4));
        assert_eq!(apply(7, 3, '*'), Ok(21));
        assert_eq!(apply(7, 3, '/'), Ok(2));
        assert_eq!(apply(-7, 2, '/'), Ok(-3));
        assert_eq!(apply(6, -4, '/'), Ok(-1));
    }

    #[test]
    fn power_not_xor() {
        assert_eq!(apply(2, 3, '^'), Ok(8));
        assert_eq!(apply(5, 0, '^'), Ok(1));
        assert_eq!(apply(0, 0, '^'), Ok(1));
        assert_eq!(apply(-3, 3, '^'), Ok(-27));
        assert_eq!(apply(2, 62, '^'), Ok(1 << 62));
    }

    #[test]
    fn negative_exponent_truncates() {
        assert_eq!(apply(2, -1, '^'), Ok(0));
        assert_eq!(apply(1, -5, '^'), Ok(1));
        assert_eq!(apply(-1, -3, '^'), Ok(-1));
        assert_eq!(apply(-1, -4, '^'), Ok(1));
        assert_eq!(apply(0, -2, '^'), Err(EvalErr::DivisionByZero));
    }

    #[test]
    fn huge_exponents() {
        let big = i64::from(u32::MAX) + 1;
        assert_eq!(apply(1, big, '^'), Ok(1));
        assert_eq!(apply(0, big, '^'), Ok(0));
        assert_eq!(apply(-1, big + 1, '^'), Ok(-1));
        assert_eq!(apply(2, big, '^'), Err(EvalErr::Overflow));
        assert_eq!(apply(2, 63, '^'), Err(EvalErr::Overflow));
    }

    #[test]
    fn explicit_failures() {
        assert_eq!(apply(1, 0, '/'), Err(EvalErr::DivisionByZero));
        assert_eq!(apply(i64::MIN, -1, '/'), Err(EvalErr::Overflow));
        assert_eq!(apply(i64::MAX, 1, '+'), Err(EvalErr::Overflow));
        assert_eq!(apply(1, 2, '%'), Err(EvalErr::UnknownOperator('%')));
        assert_eq!(
            EvalErr::UnknownOperator('&').to_string(),
            "unknown operator '&'"
        );
    }
}
