// ============================================================================
// Comparator
// Magnitude and signed comparison over digit sequences
// ============================================================================

use crate::value::{DecimalValue, Sign};
use std::cmp::Ordering;

/// Compare two magnitudes, ignoring both signs.
///
/// Operands are aligned virtually — neither is mutated. A longer integer
/// part (leading zeros discounted) wins outright; on a tie the integer
/// digits are compared positionally, then the fractional digits, treating
/// a missing fractional position as zero.
pub fn cmp_magnitude(a: &DecimalValue, b: &DecimalValue) -> Ordering {
    let int_a = trim_leading_zeros(a.integer_digits());
    let int_b = trim_leading_zeros(b.integer_digits());

    match int_a.len().cmp(&int_b.len()) {
        Ordering::Equal => {},
        unequal => return unequal,
    }
    match int_a.cmp(int_b) {
        Ordering::Equal => {},
        unequal => return unequal,
    }

    let frac_a = a.fraction_digits();
    let frac_b = b.fraction_digits();
    for i in 0..frac_a.len().max(frac_b.len()) {
        let da = frac_a.get(i).copied().unwrap_or(0);
        let db = frac_b.get(i).copied().unwrap_or(0);
        match da.cmp(&db) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Sign-aware numeric comparison.
///
/// Two zeros are equal regardless of scale; with differing signs the
/// positive operand wins; with equal signs the magnitudes decide, reversed
/// when both are negative.
pub fn cmp_value(a: &DecimalValue, b: &DecimalValue) -> Ordering {
    if a.is_zero() && b.is_zero() {
        return Ordering::Equal;
    }
    match (a.sign(), b.sign()) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => cmp_magnitude(a, b),
        (Sign::Negative, Sign::Negative) => cmp_magnitude(a, b).reverse(),
    }
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let start = digits.iter().take_while(|&&d| d == 0).count();
    &digits[start..]
}
