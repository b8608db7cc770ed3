// ============================================================================
// Multiplicative Engine
// Partial-product multiplication and raise-to-power
// ============================================================================

use crate::value::{DecimalValue, DigitVec};
use smallvec::SmallVec;

/// `a * b` via per-digit partial products.
///
/// Each digit of `b` (least significant first) produces one partial-product
/// row of `a` with in-row carry propagation; rows are folded into an
/// accumulator of width `len(a) + len(b) + 1` at their place shift. The
/// result carries `scale(a) + scale(b)` fractional digits and the sign
/// product; a zero operand short-circuits to zero at that same scale with
/// positive sign.
pub fn multiply(a: &DecimalValue, b: &DecimalValue) -> DecimalValue {
    let result_scale = a.scale() + b.scale();
    if a.is_zero() || b.is_zero() {
        return DecimalValue::zero_with_scale(result_scale);
    }

    // accumulator, least significant digit first
    let mut accumulator = vec![0u8; a.len() + b.len() + 1];

    for (shift, &digit_b) in b.digits().iter().rev().enumerate() {
        if digit_b == 0 {
            continue;
        }

        // one partial-product row: a × digit_b, least significant first
        let mut row: SmallVec<[u8; 32]> = SmallVec::new();
        let mut carry = 0u16;
        for &digit_a in a.digits().iter().rev() {
            let product = digit_a as u16 * digit_b as u16 + carry;
            row.push((product % 10) as u8);
            carry = product / 10;
        }
        while carry > 0 {
            row.push((carry % 10) as u8);
            carry /= 10;
        }

        // fold the row into the accumulator at its place shift
        let mut fold_carry = 0u16;
        let mut position = shift;
        for &row_digit in &row {
            let sum = accumulator[position] as u16 + row_digit as u16 + fold_carry;
            accumulator[position] = (sum % 10) as u8;
            fold_carry = sum / 10;
            position += 1;
        }
        while fold_carry > 0 {
            let sum = accumulator[position] as u16 + fold_carry;
            accumulator[position] = (sum % 10) as u8;
            fold_carry = sum / 10;
            position += 1;
        }
    }

    let digits: DigitVec = accumulator.iter().rev().copied().collect();
    let mut result =
        DecimalValue::from_raw_parts(digits, result_scale, a.sign().product(b.sign()));
    result.normalize();
    result
}

/// `base ^ exponent` for a non-negative integer exponent, by repeated
/// multiplication.
///
/// `exponent = 0` yields one at scale 0; `exponent = 1` a copy of `base`; a
/// zero base with positive exponent yields zero at `scale(base)`. Otherwise
/// the scale accumulates to `scale(base) * exponent`.
pub fn raise_to_power(base: &DecimalValue, exponent: u32) -> DecimalValue {
    if exponent == 0 {
        return DecimalValue::one();
    }
    if base.is_zero() {
        return DecimalValue::zero_with_scale(base.scale());
    }
    let mut result = base.clone();
    for _ in 1..exponent {
        result = multiply(&result, base);
    }
    result
}
