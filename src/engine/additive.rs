// ============================================================================
// Additive Engine
// Add and subtract via one shared carry/borrow digit loop
// ============================================================================

use super::compare;
use crate::value::{DecimalValue, DigitVec, Sign};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Which primitive the digit loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DigitOp {
    Add,
    Subtract,
}

/// Resolved execution plan for one additive operation.
///
/// One row of the 12-entry decision table over
/// (operator, sign pair, magnitude comparison). `swap_operands` marks the
/// subtract cases where the smaller magnitude sits on the left and the
/// digit loop must run with the operands reversed.
#[derive(Debug, Clone, Copy)]
struct AdditivePlan {
    op: DigitOp,
    result_sign: Sign,
    swap_operands: bool,
    force_zero: bool,
}

impl AdditivePlan {
    const fn run(op: DigitOp, result_sign: Sign, swap_operands: bool) -> Self {
        Self { op, result_sign, swap_operands, force_zero: false }
    }

    const fn zero() -> Self {
        Self {
            op: DigitOp::Subtract,
            result_sign: Sign::Positive,
            swap_operands: false,
            force_zero: true,
        }
    }
}

/// `a + b`, honoring both signs.
pub fn add(a: &DecimalValue, b: &DecimalValue) -> DecimalValue {
    combine(a, b, b.sign())
}

/// `a - b`: the add table applied with the right operand's sign flipped.
pub fn subtract(a: &DecimalValue, b: &DecimalValue) -> DecimalValue {
    combine(a, b, b.sign().flipped())
}

fn combine(a: &DecimalValue, b: &DecimalValue, effective_b_sign: Sign) -> DecimalValue {
    let magnitude_cmp = compare::cmp_magnitude(a, b);
    let plan = resolve_plan(a.sign(), effective_b_sign, magnitude_cmp);

    if plan.force_zero {
        return DecimalValue::zero_with_scale(a.scale().max(b.scale()));
    }

    let mut left = a.clone();
    let mut right = b.clone();
    left.equalize_with(&mut right);
    if plan.swap_operands {
        std::mem::swap(&mut left, &mut right);
    }

    let digits = match plan.op {
        DigitOp::Add => add_magnitudes(left.digits(), right.digits()),
        // the plan guarantees the left magnitude is the larger one
        DigitOp::Subtract => subtract_magnitudes(left.digits(), right.digits()),
    };

    let mut result = DecimalValue::from_raw_parts(digits, left.scale(), plan.result_sign);
    result.normalize();
    result
}

/// The sign/compare decision table for operator `add`. Subtraction reuses
/// it by flipping the second operand's sign before lookup.
fn resolve_plan(sign_a: Sign, sign_b: Sign, magnitude_cmp: Ordering) -> AdditivePlan {
    match (sign_a, sign_b) {
        // matching signs always add magnitudes and keep the shared sign
        (Sign::Positive, Sign::Positive) => AdditivePlan::run(DigitOp::Add, Sign::Positive, false),
        (Sign::Negative, Sign::Negative) => AdditivePlan::run(DigitOp::Add, Sign::Negative, false),
        // mixed signs subtract the smaller magnitude from the larger
        (Sign::Negative, Sign::Positive) => match magnitude_cmp {
            Ordering::Greater => AdditivePlan::run(DigitOp::Subtract, Sign::Negative, false),
            Ordering::Less => AdditivePlan::run(DigitOp::Subtract, Sign::Positive, true),
            Ordering::Equal => AdditivePlan::zero(),
        },
        (Sign::Positive, Sign::Negative) => match magnitude_cmp {
            Ordering::Greater => AdditivePlan::run(DigitOp::Subtract, Sign::Positive, false),
            Ordering::Less => AdditivePlan::run(DigitOp::Subtract, Sign::Negative, true),
            Ordering::Equal => AdditivePlan::zero(),
        },
    }
}

/// Digit-wise addition of two aligned magnitudes, least significant first.
/// A trailing carry prepends a new most-significant digit.
fn add_magnitudes(hi: &[u8], lo: &[u8]) -> DigitVec {
    debug_assert_eq!(hi.len(), lo.len());
    let mut out: DigitVec = SmallVec::with_capacity(hi.len() + 1);
    let mut carry = 0u8;
    for i in (0..hi.len()).rev() {
        let sum = hi[i] + lo[i] + carry;
        out.push(sum % 10);
        carry = u8::from(sum >= 10);
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// Digit-wise subtraction `hi - lo` of two aligned magnitudes with
/// `|hi| >= |lo|`, borrowing leftward.
fn subtract_magnitudes(hi: &[u8], lo: &[u8]) -> DigitVec {
    debug_assert_eq!(hi.len(), lo.len());
    let mut out: DigitVec = SmallVec::with_capacity(hi.len());
    let mut borrow = 0i8;
    for i in (0..hi.len()).rev() {
        let mut diff = hi[i] as i8 - lo[i] as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(text: &str) -> DecimalValue {
        DecimalValue::parse(text).unwrap()
    }

    #[test]
    fn test_add_simple() {
        let result = add(&dv("457.3"), &dv("22.2"));
        assert_eq!(result.to_string(), "479.5");
        assert_eq!(result.scale(), 1);
        assert_eq!(result.sign(), Sign::Positive);
    }

    #[test]
    fn test_add_carry_grows_integer_part() {
        assert_eq!(add(&dv("999.9"), &dv("0.1")).to_string(), "1000.0");
        assert_eq!(add(&dv("95"), &dv("7")).to_string(), "102");
    }

    #[test]
    fn test_subtract_borrow_across_point() {
        let result = subtract(&dv("900.777"), &dv("901.000"));
        assert_eq!(result.to_string(), "-0.223");
        assert_eq!(result.scale(), 3);
        assert_eq!(result.sign(), Sign::Negative);
    }

    #[test]
    fn test_subtract_self_is_positive_zero() {
        let a = dv("-457.35");
        let result = subtract(&a, &a);
        assert!(result.is_zero());
        assert_eq!(result.sign(), Sign::Positive);
        assert_eq!(result.to_string(), "0.00");
    }

    #[test]
    fn test_add_commutes() {
        let (a, b) = (dv("-12.75"), dv("400.1"));
        assert_eq!(add(&a, &b), add(&b, &a));
    }

    #[test]
    fn test_sign_table_add() {
        // (+,+): add, +
        assert_eq!(add(&dv("5"), &dv("3")).to_string(), "8");
        // (-,+), |a|>|b|: subtract, -
        assert_eq!(add(&dv("-5"), &dv("3")).to_string(), "-2");
        // (-,+), |a|<|b|: subtract reversed, +
        assert_eq!(add(&dv("-3"), &dv("5")).to_string(), "2");
        // (-,+), |a|=|b|: zero
        assert_eq!(add(&dv("-5"), &dv("5")).to_string(), "0");
        // (-,-): add, -
        assert_eq!(add(&dv("-5"), &dv("-3")).to_string(), "-8");
        // (+,-), |a|>|b|: subtract, +
        assert_eq!(add(&dv("5"), &dv("-3")).to_string(), "2");
        // (+,-), |a|<|b|: subtract reversed, -
        assert_eq!(add(&dv("3"), &dv("-5")).to_string(), "-2");
        // (+,-), |a|=|b|: zero
        assert_eq!(add(&dv("5"), &dv("-5")).to_string(), "0");
    }

    #[test]
    fn test_sign_table_subtract() {
        // subtract flips the right operand's sign and reuses the add table
        assert_eq!(subtract(&dv("5"), &dv("3")).to_string(), "2");
        assert_eq!(subtract(&dv("3"), &dv("5")).to_string(), "-2");
        assert_eq!(subtract(&dv("-5"), &dv("3")).to_string(), "-8");
        assert_eq!(subtract(&dv("-5"), &dv("-3")).to_string(), "-2");
        assert_eq!(subtract(&dv("-3"), &dv("-5")).to_string(), "2");
        assert_eq!(subtract(&dv("5"), &dv("-3")).to_string(), "8");
    }

    #[test]
    fn test_mixed_scale_alignment() {
        assert_eq!(add(&dv("0.925"), &dv("99")).to_string(), "99.925");
        assert_eq!(subtract(&dv("100"), &dv("0.001")).to_string(), "99.999");
    }

    #[test]
    fn test_redundant_leading_zero_dropped() {
        // 95 - 90 shrinks the integer part from two digits to one
        assert_eq!(subtract(&dv("95"), &dv("90")).to_string(), "5");
        assert_eq!(subtract(&dv("100.5"), &dv("99.5")).to_string(), "1.0");
    }
}
