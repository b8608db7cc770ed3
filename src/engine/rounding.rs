// ============================================================================
// Rounding / Boundary Engine
// Scale rounding, ceiling, and floor over the digit sequence
// ============================================================================

use crate::value::{ArithmeticError, ArithmeticResult, DecimalValue, DigitVec};

/// How digits beyond the target scale are disposed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Drop the extra digits without carry.
    Truncate,
    /// Add 5 at the first dropped digit and carry leftward; ties round
    /// away from zero.
    HalfUpAwayFromZero,
}

/// Round `value` to exactly `target_scale` fractional digits.
///
/// A target at or above the current scale pads zero fractional digits in
/// either mode. Below it, `Truncate` drops the tail outright while
/// `HalfUpAwayFromZero` lets the first dropped digit carry into the
/// retained ones — an overflow past the most significant digit grows the
/// integer part. A zero operand short-circuits to zero at the target scale.
///
/// # Errors
/// Returns `InvalidPrecision` when `target_scale` is negative.
pub fn round_to_scale(
    value: &DecimalValue,
    target_scale: i64,
    mode: RoundingMode,
) -> ArithmeticResult<DecimalValue> {
    if target_scale < 0 {
        return Err(ArithmeticError::InvalidPrecision);
    }
    let target = target_scale as usize;

    if value.is_zero() {
        return Ok(DecimalValue::zero_with_scale(target));
    }

    if target >= value.scale() {
        let mut digits = DigitVec::from_slice(value.digits());
        digits.extend(std::iter::repeat(0).take(target - value.scale()));
        return Ok(DecimalValue::from_raw_parts(digits, target, value.sign()));
    }

    let dropped = value.scale() - target;
    let keep = value.len() - dropped;
    let first_dropped = value.digits()[keep];
    let mut digits = DigitVec::from_slice(&value.digits()[..keep]);
    if mode == RoundingMode::HalfUpAwayFromZero && first_dropped >= 5 {
        increment_magnitude(&mut digits, keep);
    }

    let mut result = DecimalValue::from_raw_parts(digits, target, value.sign());
    result.normalize();
    Ok(result)
}

/// Convenience for `round_to_scale(value, target_scale, Truncate)`.
pub fn truncate_to_scale(value: &DecimalValue, target_scale: i64) -> ArithmeticResult<DecimalValue> {
    round_to_scale(value, target_scale, RoundingMode::Truncate)
}

/// Smallest integral value not less than `value`, at `value`'s scale.
pub fn ceiling(value: &DecimalValue) -> DecimalValue {
    to_boundary(value, Boundary::Ceiling)
}

/// Largest integral value not greater than `value`, at `value`'s scale.
pub fn floor(value: &DecimalValue) -> DecimalValue {
    to_boundary(value, Boundary::Floor)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Ceiling,
    Floor,
}

fn to_boundary(value: &DecimalValue, boundary: Boundary) -> DecimalValue {
    let has_fraction_remainder = value.fraction_digits().iter().any(|&d| d != 0);
    if !has_fraction_remainder {
        return value.clone();
    }

    let integer_len = value.integer_len();
    let mut digits = DigitVec::from_slice(value.digits());
    for digit in digits[integer_len..].iter_mut() {
        *digit = 0;
    }
    // truncation toward zero covers ceiling of negatives and floor of
    // positives; the remaining two cases step one whole unit outward
    let step_outward = match boundary {
        Boundary::Ceiling => value.is_positive(),
        Boundary::Floor => value.is_negative(),
    };
    if step_outward {
        increment_magnitude(&mut digits, integer_len);
    }

    let mut result = DecimalValue::from_raw_parts(digits, value.scale(), value.sign());
    result.normalize();
    result
}

/// Add one at position `upto - 1`, carrying leftward; an overflow past the
/// front prepends a new most-significant digit.
fn increment_magnitude(digits: &mut DigitVec, upto: usize) {
    let mut i = upto;
    loop {
        if i == 0 {
            digits.insert(0, 1);
            break;
        }
        i -= 1;
        if digits[i] == 9 {
            digits[i] = 0;
        } else {
            digits[i] += 1;
            break;
        }
    }
}
