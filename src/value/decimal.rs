// ============================================================================
// Decimal Value
// Arbitrary-precision signed decimal stored as a base-10 digit sequence
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use crate::engine::{additive, compare, multiplicative};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Digit storage: base-10 digits, most significant first.
///
/// Sixteen inline digits cover typical money-sized values without touching
/// the heap; longer sequences spill automatically.
pub(crate) type DigitVec = SmallVec<[u8; 16]>;

/// Characters the parser skips wherever they appear in a numeric run:
/// thousands separators, plain spaces, and currency symbols.
const IGNORED_CHARS: [char; 6] = [',', ' ', '$', '€', '£', '¥'];

// ============================================================================
// Sign
// ============================================================================

/// Sign of a decimal value. Zero is canonically `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Build a sign from its +1/-1 integer encoding.
    ///
    /// # Errors
    /// Returns `InvalidSign` for any value outside {+1, -1}.
    pub fn from_i8(raw: i8) -> ArithmeticResult<Self> {
        match raw {
            1 => Ok(Sign::Positive),
            -1 => Ok(Sign::Negative),
            _ => Err(ArithmeticError::InvalidSign),
        }
    }

    /// The +1/-1 integer encoding of this sign.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// The opposite sign.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product of two values with these signs.
    #[inline]
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

// ============================================================================
// DecimalValue
// ============================================================================

/// Arbitrary-precision signed decimal number.
///
/// The value is a sequence of base-10 digits (most significant first), a
/// `scale` counting how many of those digits lie right of the decimal
/// point, and a `sign`. All arithmetic walks the digit sequence directly;
/// no native numeric type bounds the magnitude or precision.
///
/// Representation invariants, upheld by every public operation:
/// - `len() >= scale + 1` — at least one digit sits left of the point
///   (values like `0.925` carry an explicit leading zero)
/// - every digit is in `[0, 9]`
/// - a zero value always has positive sign
///
/// Equality is structural: `"1.5"` and `"1.50"` are distinct values that
/// compare numerically equal through [`DecimalValue::cmp_value`]. For that
/// reason the type deliberately does not implement `Ord`.
///
/// # Example
/// ```
/// use decimal_engine::value::DecimalValue;
///
/// let a = DecimalValue::parse("457.3").unwrap();
/// let b = DecimalValue::parse("22.2").unwrap();
/// assert_eq!((&a + &b).to_string(), "479.5");
/// assert_eq!((&a * &b).to_string(), "10152.06");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalValue {
    digits: DigitVec,
    scale: usize,
    sign: Sign,
}

// ============================================================================
// Construction
// ============================================================================

impl DecimalValue {
    /// Canonical zero: one digit, scale 0, positive.
    #[inline]
    pub fn zero() -> Self {
        Self { digits: smallvec![0], scale: 0, sign: Sign::Positive }
    }

    /// Zero with `scale` fractional digits (e.g. scale 2 formats as `0.00`).
    pub fn zero_with_scale(scale: usize) -> Self {
        Self { digits: smallvec![0; scale + 1], scale, sign: Sign::Positive }
    }

    /// The value one at scale 0.
    #[inline]
    pub fn one() -> Self {
        Self { digits: smallvec![1], scale: 0, sign: Sign::Positive }
    }

    /// Build a value from a native integer.
    pub fn from_i64(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut magnitude = value.unsigned_abs();
        let mut digits: DigitVec = SmallVec::new();
        while magnitude > 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        digits.reverse();
        let mut value = Self { digits, scale: 0, sign };
        value.normalize();
        value
    }

    /// Build a value directly from magnitude digits, scale, and sign.
    ///
    /// # Errors
    /// Returns `MalformedNumber` if any digit is outside `[0, 9]`.
    pub fn from_digits(digits: &[u8], scale: usize, sign: Sign) -> ArithmeticResult<Self> {
        if digits.iter().any(|&d| d > 9) {
            return Err(ArithmeticError::MalformedNumber);
        }
        let mut value = Self {
            digits: if digits.is_empty() { smallvec![0] } else { DigitVec::from_slice(digits) },
            scale,
            sign,
        };
        value.normalize();
        Ok(value)
    }

    /// Internal constructor for engine code that produces digits itself.
    /// The caller is responsible for calling `normalize` afterwards.
    #[inline]
    pub(crate) fn from_raw_parts(digits: DigitVec, scale: usize, sign: Sign) -> Self {
        Self { digits, scale, sign }
    }

    /// Parse a decimal value out of free-form text.
    ///
    /// The scanner is deliberately tolerant: thousands separators, currency
    /// symbols, and plain spaces are skipped wherever they occur — even
    /// between digits, so `"-123  45.9"` parses to `-12345.9`. (That
    /// embedded-whitespace tolerance looks accidental but is long-standing
    /// observed behavior that callers rely on; do not "fix" it.) A `-` is
    /// honored only when it immediately precedes the first digit or the
    /// decimal point. Once digits have started, the first disallowed
    /// character ends the scan and the tail is dropped silently.
    ///
    /// # Errors
    /// - `EmptyInput` when `text` has length zero
    /// - `MalformedNumber` when a disallowed character appears before any
    ///   digit has been seen
    ///
    /// Text containing no digits at all (only ignorable characters or an
    /// unhonored sign) parses as canonical zero, not an error.
    pub fn parse(text: &str) -> ArithmeticResult<Self> {
        if text.is_empty() {
            return Err(ArithmeticError::EmptyInput);
        }

        let chars: Vec<char> = text.chars().collect();
        let mut digits: DigitVec = SmallVec::new();
        let mut scale = 0usize;
        let mut sign = Sign::Positive;
        let mut sign_accepted = false;
        let mut seen_digit = false;
        let mut in_fraction = false;

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if let Some(d) = c.to_digit(10) {
                digits.push(d as u8);
                seen_digit = true;
                if in_fraction {
                    scale += 1;
                }
            } else if c == '.' {
                if in_fraction {
                    if seen_digit {
                        break; // second separator: drop the tail
                    }
                    return Err(ArithmeticError::MalformedNumber);
                }
                in_fraction = true;
            } else if IGNORED_CHARS.contains(&c) {
                // skipped wherever they appear, including between digits
            } else if c == '-' {
                if seen_digit {
                    break;
                }
                let next_is_numeric =
                    matches!(chars.get(i + 1), Some(n) if n.is_ascii_digit() || *n == '.');
                if !sign_accepted && !in_fraction && next_is_numeric {
                    sign = Sign::Negative;
                    sign_accepted = true;
                }
                // otherwise the dash is ignored
            } else {
                if seen_digit {
                    break; // trailing garbage after the number
                }
                return Err(ArithmeticError::MalformedNumber);
            }
            i += 1;
        }

        if !seen_digit {
            return Ok(Self::zero());
        }

        let mut value = Self { digits, scale, sign };
        value.normalize();
        Ok(value)
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl DecimalValue {
    /// Total digit count.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when the digit sequence is empty — never the case for a value
    /// that upholds the representation invariants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Count of digits right of the decimal point.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The digit sequence, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Count of digits left of the decimal point.
    #[inline]
    pub fn integer_len(&self) -> usize {
        self.digits.len() - self.scale
    }

    /// Digits left of the decimal point.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.digits[..self.integer_len()]
    }

    /// Digits right of the decimal point.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.digits[self.integer_len()..]
    }

    /// True when every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// True when the integer part is all zeros (the value lies in (-1, 1)).
    #[inline]
    pub fn is_integer_zero(&self) -> bool {
        self.integer_digits().iter().all(|&d| d == 0)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.sign.is_negative()
    }

    /// Index of the first significant position: the first nonzero digit, or
    /// the mandatory ones-place digit when the value has no earlier nonzero.
    pub fn first_significant_index(&self) -> usize {
        let ones_place = self.integer_len().saturating_sub(1);
        match self.digits.iter().position(|&d| d != 0) {
            Some(first_nonzero) => first_nonzero.min(ones_place),
            None => ones_place,
        }
    }

    /// Index of the last nonzero digit, `None` for zero.
    pub fn last_significant_index(&self) -> Option<usize> {
        self.digits.iter().rposition(|&d| d != 0)
    }

    /// Decimal order of magnitude: `floor(log10(|v|)) + 1`, so `24.48` has
    /// order 2 and `0.05` has order -1. `None` for zero.
    pub fn order_of_magnitude(&self) -> Option<i64> {
        let first_nonzero = self.digits.iter().position(|&d| d != 0)?;
        Some(self.integer_len() as i64 - first_nonzero as i64)
    }

    /// Magnitude of this value (positive sign, same digits).
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.sign = Sign::Positive;
        out
    }

    /// Canonical text form: `[-]IntegerDigits[.FractionalDigits]`, exactly
    /// `scale` fractional digits, no grouping separators.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Verify the representation invariants.
    ///
    /// # Errors
    /// Returns `InternalInvariantViolation` when a digit is out of range,
    /// the integer part is missing, or a zero value carries a negative
    /// sign. Engine entry points run this defensively instead of panicking.
    pub fn validate(&self) -> ArithmeticResult<()> {
        let well_formed = self.digits.len() > self.scale
            && self.digits.iter().all(|&d| d <= 9)
            && (!self.is_zero() || self.sign == Sign::Positive);
        if well_formed {
            Ok(())
        } else {
            Err(ArithmeticError::InternalInvariantViolation)
        }
    }
}

// ============================================================================
// Normalization and alignment
// ============================================================================

impl DecimalValue {
    /// Restore the representation invariants in place.
    ///
    /// Strips redundant leading integer zeros, left-pads with zeros until at
    /// least one digit sits left of the point, and forces positive sign on
    /// zero. Idempotent.
    pub fn normalize(&mut self) {
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        // strip integer-part zeros beyond the mandatory leading digit
        if self.digits.len() > self.scale + 1 {
            let strippable = self.digits.len() - (self.scale + 1);
            let leading_zeros = self.digits.iter().take_while(|&&d| d == 0).count();
            let strip = leading_zeros.min(strippable);
            if strip > 0 {
                self.digits.drain(..strip);
            }
        }
        // pad so the integer part is never empty
        while self.digits.len() < self.scale + 1 {
            self.digits.insert(0, 0);
        }
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Pad both operands so they share the same integer length and scale.
    ///
    /// The additive digit loop requires positionally aligned operands; this
    /// is its mandatory precondition. Idempotent, and a no-op when the
    /// shapes already match.
    pub fn equalize_with(&mut self, other: &mut Self) {
        let il_self = self.integer_len();
        let il_other = other.integer_len();
        match il_self.cmp(&il_other) {
            Ordering::Less => {
                for _ in 0..il_other - il_self {
                    self.digits.insert(0, 0);
                }
            },
            Ordering::Greater => {
                for _ in 0..il_self - il_other {
                    other.digits.insert(0, 0);
                }
            },
            Ordering::Equal => {},
        }
        match self.scale.cmp(&other.scale) {
            Ordering::Less => {
                let pad = other.scale - self.scale;
                self.digits.extend(std::iter::repeat(0).take(pad));
                self.scale = other.scale;
            },
            Ordering::Greater => {
                let pad = self.scale - other.scale;
                other.digits.extend(std::iter::repeat(0).take(pad));
                other.scale = self.scale;
            },
            Ordering::Equal => {},
        }
    }

    /// Set the sign, keeping zero canonical.
    pub(crate) fn set_sign(&mut self, sign: Sign) {
        self.sign = if self.is_zero() { Sign::Positive } else { sign };
    }

    /// Multiply by `10^places` in place by moving the decimal point right.
    pub(crate) fn shift_up(&mut self, places: usize) {
        for _ in 0..places {
            if self.scale > 0 {
                self.scale -= 1;
            } else {
                self.digits.push(0);
            }
        }
        self.normalize();
    }

    /// Divide by `10^places` in place by moving the decimal point left.
    pub(crate) fn shift_down(&mut self, places: usize) {
        self.scale += places;
        self.normalize();
    }
}

// ============================================================================
// Comparison operations
// ============================================================================

impl DecimalValue {
    /// Compare magnitudes only, ignoring both signs.
    #[inline]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        compare::cmp_magnitude(self, other)
    }

    /// Sign-aware numeric comparison. `"1.5"` and `"1.50"` compare equal
    /// here even though they are structurally distinct.
    #[inline]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        compare::cmp_value(self, other)
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// An independent checkpoint of a [`DecimalValue`], captured before a
/// mutating sequence and restored on demand. The snapshot owns its copy; a
/// value never embeds a copy of itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSnapshot(DecimalValue);

impl DecimalSnapshot {
    /// The checkpointed value.
    #[inline]
    pub fn value(&self) -> &DecimalValue {
        &self.0
    }
}

impl DecimalValue {
    /// Capture an independent copy of the current state.
    pub fn snapshot(&self) -> DecimalSnapshot {
        DecimalSnapshot(self.clone())
    }

    /// Replace the current state with a previously captured snapshot.
    pub fn restore(&mut self, snapshot: DecimalSnapshot) {
        *self = snapshot.0;
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        let flipped = self.sign.flipped();
        self.set_sign(flipped);
        self
    }
}

impl Add for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        additive::add(self, rhs)
    }
}

impl Sub for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        additive::subtract(self, rhs)
    }
}

impl Mul for &DecimalValue {
    type Output = DecimalValue;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        multiplicative::multiply(self, rhs)
    }
}

impl AddAssign<&DecimalValue> for DecimalValue {
    fn add_assign(&mut self, rhs: &DecimalValue) {
        *self = additive::add(self, rhs);
    }
}

impl SubAssign<&DecimalValue> for DecimalValue {
    fn sub_assign(&mut self, rhs: &DecimalValue) {
        *self = additive::subtract(self, rhs);
    }
}

impl MulAssign<&DecimalValue> for DecimalValue {
    fn mul_assign(&mut self, rhs: &DecimalValue) {
        *self = multiplicative::multiply(self, rhs);
    }
}

impl std::str::FromStr for DecimalValue {
    type Err = ArithmeticError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        for &d in self.integer_digits() {
            write!(f, "{}", d)?;
        }
        if self.scale > 0 {
            write!(f, ".")?;
            for &d in self.fraction_digits() {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue(\"{}\", scale={}, sign={:+})", self, self.scale, self.sign.as_i8())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalValue {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries (accepting caller-supplied numbers);
    /// internal arithmetic never routes through `rust_decimal`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        let sign = if mantissa < 0 { Sign::Negative } else { Sign::Positive };
        let mut magnitude = mantissa.unsigned_abs();
        let mut digits: DigitVec = SmallVec::new();
        while magnitude > 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        digits.reverse();
        let mut value = Self { digits, scale: d.scale() as usize, sign };
        value.normalize();
        value
    }

    /// Convert to `rust_decimal::Decimal`, or `None` when this value does
    /// not fit its 96-bit mantissa / 28-digit scale.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        let last = self.last_significant_index();
        // drop trailing fractional zeros that would only inflate the scale
        let used_scale = match last {
            Some(idx) if idx >= self.integer_len() => idx + 1 - self.integer_len(),
            _ => 0,
        };
        if used_scale > 28 {
            return None;
        }
        let end = self.integer_len() + used_scale;
        let mut mantissa: i128 = 0;
        for &d in &self.digits[..end] {
            mantissa = mantissa.checked_mul(10)?.checked_add(d as i128)?;
        }
        if self.sign.is_negative() {
            mantissa = -mantissa;
        }
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, used_scale as u32).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(text: &str) -> DecimalValue {
        DecimalValue::parse(text).unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let v = dv("457.3");
        assert_eq!(v.digits(), &[4, 5, 7, 3]);
        assert_eq!(v.scale(), 1);
        assert_eq!(v.sign(), Sign::Positive);
        assert_eq!(v.to_string(), "457.3");
    }

    #[test]
    fn test_parse_negative_fraction_only() {
        let v = dv("-.5");
        assert_eq!(v.to_string(), "-0.5");
        assert_eq!(v.scale(), 1);
        assert!(v.is_negative());
    }

    #[test]
    fn test_parse_skips_separators_and_currency() {
        assert_eq!(dv("1,234,567.89").to_string(), "1234567.89");
        assert_eq!(dv("$1,000").to_string(), "1000");
        assert_eq!(dv("€ 99.50").to_string(), "99.50");
    }

    #[test]
    fn test_parse_embedded_space_quirk() {
        // spaces are skipped even between digits
        let v = dv("-123  45.9");
        assert_eq!(v.to_string(), "-12345.9");
        assert_eq!(v.scale(), 1);
        assert!(v.is_negative());
    }

    #[test]
    fn test_parse_sign_rules() {
        // the dash is honored only immediately before a digit or the point
        assert_eq!(dv("- 123").to_string(), "123");
        assert_eq!(dv("-123").to_string(), "-123");
        assert_eq!(dv("-.25").to_string(), "-0.25");
        // after digit-start a dash ends the scan
        assert_eq!(dv("12-3").to_string(), "12");
    }

    #[test]
    fn test_parse_trailing_garbage_dropped() {
        assert_eq!(dv("123abc").to_string(), "123");
        assert_eq!(dv("12.3.4").to_string(), "12.3");
        assert_eq!(dv("0.925xyz").to_string(), "0.925");
    }

    #[test]
    fn test_parse_no_digits_is_zero() {
        assert_eq!(dv("$ ,").to_string(), "0");
        assert_eq!(dv("-").to_string(), "0");
        assert_eq!(dv(".").to_string(), "0");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(DecimalValue::parse(""), Err(ArithmeticError::EmptyInput));
        assert_eq!(DecimalValue::parse("abc"), Err(ArithmeticError::MalformedNumber));
        assert_eq!(DecimalValue::parse("..5"), Err(ArithmeticError::MalformedNumber));
    }

    #[test]
    fn test_parse_negative_zero_normalizes() {
        let v = dv("-0.00");
        assert_eq!(v.sign(), Sign::Positive);
        assert_eq!(v.to_string(), "0.00");
    }

    #[test]
    fn test_leading_zero_invariant() {
        let v = dv(".925");
        assert_eq!(v.digits(), &[0, 9, 2, 5]);
        assert_eq!(v.integer_len(), 1);
        assert_eq!(v.to_string(), "0.925");
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut v = DecimalValue::from_raw_parts(smallvec![0, 0, 1, 2, 5], 2, Sign::Negative);
        v.normalize();
        assert_eq!(v.to_string(), "-1.25");
        let before = v.clone();
        v.normalize();
        assert_eq!(v, before);
    }

    #[test]
    fn test_equalize_with() {
        let mut a = dv("7.5");
        let mut b = dv("123.456");
        a.equalize_with(&mut b);
        assert_eq!(a.digits(), &[0, 0, 7, 5, 0, 0]);
        assert_eq!(a.scale(), 3);
        assert_eq!(b.digits(), &[1, 2, 3, 4, 5, 6]);
        // already aligned: no further change
        let (sa, sb) = (a.clone(), b.clone());
        a.equalize_with(&mut b);
        assert_eq!(a, sa);
        assert_eq!(b, sb);
    }

    #[test]
    fn test_derived_indices() {
        let v = dv("0.925");
        assert_eq!(v.first_significant_index(), 0);
        assert_eq!(v.last_significant_index(), Some(3));
        assert!(v.is_integer_zero());
        assert!(!v.is_zero());

        let z = DecimalValue::zero_with_scale(2);
        assert_eq!(z.last_significant_index(), None);
        assert!(z.is_zero());
    }

    #[test]
    fn test_order_of_magnitude() {
        assert_eq!(dv("24.48").order_of_magnitude(), Some(2));
        assert_eq!(dv("9360").order_of_magnitude(), Some(4));
        assert_eq!(dv("0.5").order_of_magnitude(), Some(0));
        assert_eq!(dv("0.05").order_of_magnitude(), Some(-1));
        assert_eq!(DecimalValue::zero().order_of_magnitude(), None);
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(DecimalValue::from_i64(0).to_string(), "0");
        assert_eq!(DecimalValue::from_i64(-907).to_string(), "-907");
        assert_eq!(DecimalValue::from_i64(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_from_digits() {
        let v = DecimalValue::from_digits(&[9, 2, 5], 3, Sign::Positive).unwrap();
        assert_eq!(v.to_string(), "0.925");
        assert_eq!(
            DecimalValue::from_digits(&[1, 17], 0, Sign::Positive),
            Err(ArithmeticError::MalformedNumber)
        );
    }

    #[test]
    fn test_sign_from_i8() {
        assert_eq!(Sign::from_i8(1), Ok(Sign::Positive));
        assert_eq!(Sign::from_i8(-1), Ok(Sign::Negative));
        assert_eq!(Sign::from_i8(0), Err(ArithmeticError::InvalidSign));
        assert_eq!(Sign::from_i8(3), Err(ArithmeticError::InvalidSign));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut v = dv("900.777");
        let checkpoint = v.snapshot();
        v += &dv("1");
        assert_eq!(v.to_string(), "901.777");
        v.restore(checkpoint);
        assert_eq!(v.to_string(), "900.777");
    }

    #[test]
    fn test_neg() {
        assert_eq!((-dv("2.7")).to_string(), "-2.7");
        assert_eq!((-dv("-2.7")).to_string(), "2.7");
        // zero never goes negative
        assert_eq!((-DecimalValue::zero()).sign(), Sign::Positive);
    }

    #[test]
    fn test_shift_helpers() {
        let mut v = dv("0.5");
        v.shift_up(2);
        assert_eq!(v.to_string(), "50");
        v.shift_down(3);
        assert_eq!(v.to_string(), "0.050");
    }

    #[test]
    fn test_validate() {
        assert!(dv("12.5").validate().is_ok());
        let broken = DecimalValue::from_raw_parts(smallvec![1, 2], 5, Sign::Positive);
        assert_eq!(broken.validate(), Err(ArithmeticError::InternalInvariantViolation));
    }

    #[test]
    fn test_display_debug() {
        let v = dv("-0.223");
        assert_eq!(v.to_canonical_string(), "-0.223");
        assert_eq!(format!("{:?}", v), "DecimalValue(\"-0.223\", scale=3, sign=-1)");
    }

    #[test]
    fn test_decimal_interop_round_trip() {
        let d = rust_decimal::Decimal::new(-90078, 2); // -900.78
        let v = DecimalValue::from_decimal(d);
        assert_eq!(v.to_string(), "-900.78");
        assert_eq!(v.to_decimal(), Some(d));
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        // 40 significant digits exceed the 96-bit mantissa
        let wide = dv("1234567890123456789012345678901234567890");
        assert_eq!(wide.to_decimal(), None);
        // trailing fractional zeros are not counted against the scale cap
        let mut padded = dv("1.5");
        padded.digits.extend(std::iter::repeat(0).take(30));
        padded.scale += 30;
        assert_eq!(padded.to_decimal(), Some(rust_decimal::Decimal::new(15, 1)));
    }
}
