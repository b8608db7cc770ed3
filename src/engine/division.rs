// ============================================================================
// Division Engine
// Restoring division over magnitude-aligned digit sequences
// ============================================================================

use super::{additive, compare, multiplicative, rounding};
use crate::value::{ArithmeticError, ArithmeticResult, DecimalValue};
use std::cmp::Ordering;

/// Quotient and integer-division remainder of one division pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionOutcome {
    /// The rounded quotient at the requested scale.
    pub quotient: DecimalValue,
    /// `dividend - trunc(quotient) * divisor`, carrying the dividend's sign.
    pub remainder: DecimalValue,
}

/// `dividend / divisor` to `max_scale` fractional digits, rounded half-up
/// away from zero.
///
/// # Errors
/// `DivisionByZero` for a zero divisor, `InvalidPrecision` for a negative
/// `max_scale`, `InternalInvariantViolation` if an operand's
/// representation is broken.
pub fn divide(
    dividend: &DecimalValue,
    divisor: &DecimalValue,
    max_scale: i64,
) -> ArithmeticResult<DecimalValue> {
    divide_with_remainder(dividend, divisor, max_scale).map(|outcome| outcome.quotient)
}

/// Division by a native integer divisor.
///
/// A convenience adapter: the divisor is lifted into a [`DecimalValue`]
/// and routed through the one restoring-division algorithm, so both entry
/// points can never disagree.
pub fn divide_by_int64(
    dividend: &DecimalValue,
    divisor: i64,
    max_scale: i64,
) -> ArithmeticResult<DecimalValue> {
    divide(dividend, &DecimalValue::from_i64(divisor), max_scale)
}

/// The restoring-division pass shared by every divide entry point.
///
/// Works on absolute values. The divisor is first scaled by a power of ten
/// to match the dividend's order of magnitude (or, for a dividend of
/// smaller order, the working dividend is scaled up and the tens-count
/// down). Each round then compares the scaled divisor `increment` against
/// the remaining dividend: equal consumes it exactly, smaller subtracts it
/// and credits the tens-count to the quotient, larger shifts both the
/// tens-count and the increment one decimal place down. Digits accumulate
/// through scale `max_scale + 1`; the quotient is then rounded half-up to
/// `max_scale`.
pub fn divide_with_remainder(
    dividend: &DecimalValue,
    divisor: &DecimalValue,
    max_scale: i64,
) -> ArithmeticResult<DivisionOutcome> {
    if max_scale < 0 {
        return Err(ArithmeticError::InvalidPrecision);
    }
    dividend.validate()?;
    divisor.validate()?;
    if divisor.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    let target_scale = max_scale as usize;
    if dividend.is_zero() {
        return Ok(DivisionOutcome {
            quotient: DecimalValue::zero_with_scale(target_scale),
            remainder: DecimalValue::zero(),
        });
    }

    tracing::debug!("dividing {} by {} at scale {}", dividend, divisor, max_scale);

    let quotient_sign = dividend.sign().product(divisor.sign());
    let mut remaining = dividend.abs();
    let mut increment = divisor.abs();
    let mut tens_count = DecimalValue::one();
    // power of ten the tens-count currently represents; shifting keeps the
    // digit sequence's scale bookkeeping, so the power is tracked directly
    let mut tens_power: i64 = 0;

    // align orders of magnitude so increment and remaining start comparable;
    // both operands are nonzero here, so both orders exist
    let order_delta = dividend.order_of_magnitude().unwrap_or(0)
        - divisor.order_of_magnitude().unwrap_or(0);
    if order_delta > 0 {
        increment.shift_up(order_delta as usize);
        tens_count.shift_up(order_delta as usize);
    } else if order_delta < 0 {
        remaining.shift_up((-order_delta) as usize);
        tens_count.shift_down((-order_delta) as usize);
    }
    tens_power += order_delta;

    // one extra fractional position feeds the final half-up rounding
    let deepest_power = -((target_scale + 1) as i64);
    let mut quotient = DecimalValue::zero();

    loop {
        match compare::cmp_magnitude(&increment, &remaining) {
            Ordering::Equal => {
                quotient = additive::add(&quotient, &tens_count);
                break;
            },
            Ordering::Less => {
                quotient = additive::add(&quotient, &tens_count);
                remaining = additive::subtract(&remaining, &increment);
            },
            Ordering::Greater => {
                if tens_power <= deepest_power {
                    break;
                }
                tens_power -= 1;
                tens_count.shift_down(1);
                increment.shift_down(1);
            },
        }
    }

    // the integer-division remainder comes from the unrounded quotient, so
    // half-up rounding can never skew it
    let integer_quotient = rounding::truncate_to_scale(&quotient, 0)?;
    let consumed = multiplicative::multiply(&integer_quotient, &divisor.abs());
    let mut remainder = additive::subtract(&dividend.abs(), &consumed);
    remainder.set_sign(dividend.sign());

    let mut quotient =
        rounding::round_to_scale(&quotient, max_scale, rounding::RoundingMode::HalfUpAwayFromZero)?;
    quotient.set_sign(quotient_sign);

    Ok(DivisionOutcome { quotient, remainder })
}
