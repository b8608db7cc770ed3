// ============================================================================
// Calculator Façade
// Two-operand workflow plus the dividend/divisor/quotient/modulo quartet
// ============================================================================

use crate::engine::{additive, division, multiplicative};
use crate::value::{ArithmeticResult, DecimalValue};

/// Fractional digits `divide()` produces when no explicit scale is given.
pub const DEFAULT_DIVISION_SCALE: i64 = 29;

/// Tunables for the calculator façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Target scale for `divide()`.
    pub division_scale: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { division_scale: DEFAULT_DIVISION_SCALE }
    }
}

/// Orchestration over the arithmetic engine.
///
/// Holds two transient operand slots (`n1`, `n2`) whose operations write a
/// `result` slot, and an independent division quartet
/// (`dividend`/`divisor`/`quotient`/`modulo`). Every slot is a plain
/// [`DecimalValue`] with its own lifecycle; the façade adds no arithmetic
/// of its own.
///
/// # Example
/// ```
/// use decimal_engine::calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.parse_operands("457.3", "22.2").unwrap();
/// assert_eq!(calc.add().to_string(), "479.5");
/// assert_eq!(calc.multiply().to_string(), "10152.06");
///
/// calc.parse_division_operands("-9360", "24.48").unwrap();
/// calc.divide().unwrap();
/// assert_eq!(calc.quotient().to_string(), "-382.35294117647058823529411764706");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    n1: DecimalValue,
    n2: DecimalValue,
    result: DecimalValue,
    dividend: DecimalValue,
    divisor: DecimalValue,
    quotient: DecimalValue,
    modulo: DecimalValue,
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // ========================================================================
    // Operand slots
    // ========================================================================

    pub fn set_operands(&mut self, n1: DecimalValue, n2: DecimalValue) {
        self.n1 = n1;
        self.n2 = n2;
    }

    /// Parse both operands out of text.
    ///
    /// # Errors
    /// Propagates the first parse failure; neither slot changes on error.
    pub fn parse_operands(&mut self, n1: &str, n2: &str) -> ArithmeticResult<()> {
        let parsed_n1 = DecimalValue::parse(n1)?;
        let parsed_n2 = DecimalValue::parse(n2)?;
        self.n1 = parsed_n1;
        self.n2 = parsed_n2;
        Ok(())
    }

    #[inline]
    pub fn n1(&self) -> &DecimalValue {
        &self.n1
    }

    #[inline]
    pub fn n2(&self) -> &DecimalValue {
        &self.n2
    }

    #[inline]
    pub fn result(&self) -> &DecimalValue {
        &self.result
    }

    // ========================================================================
    // Two-operand operations
    // ========================================================================

    /// `n1 + n2`, written to the result slot.
    pub fn add(&mut self) -> &DecimalValue {
        self.result = additive::add(&self.n1, &self.n2);
        &self.result
    }

    /// `n1 - n2`, written to the result slot.
    pub fn subtract(&mut self) -> &DecimalValue {
        self.result = additive::subtract(&self.n1, &self.n2);
        &self.result
    }

    /// `n1 * n2`, written to the result slot.
    pub fn multiply(&mut self) -> &DecimalValue {
        self.result = multiplicative::multiply(&self.n1, &self.n2);
        &self.result
    }

    /// `n1 ^ power`, written to the result slot.
    pub fn raise_to_power(&mut self, power: u32) -> &DecimalValue {
        self.result = multiplicative::raise_to_power(&self.n1, power);
        &self.result
    }

    // ========================================================================
    // Division workflow
    // ========================================================================

    pub fn set_division_operands(&mut self, dividend: DecimalValue, divisor: DecimalValue) {
        self.dividend = dividend;
        self.divisor = divisor;
    }

    /// Parse dividend and divisor out of text.
    ///
    /// # Errors
    /// Propagates the first parse failure; neither slot changes on error.
    pub fn parse_division_operands(&mut self, dividend: &str, divisor: &str) -> ArithmeticResult<()> {
        let parsed_dividend = DecimalValue::parse(dividend)?;
        let parsed_divisor = DecimalValue::parse(divisor)?;
        self.dividend = parsed_dividend;
        self.divisor = parsed_divisor;
        Ok(())
    }

    /// `dividend / divisor` at the configured scale, filling the quotient
    /// and modulo slots.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor; `InvalidPrecision` when the
    /// configured scale is negative.
    pub fn divide(&mut self) -> ArithmeticResult<&DecimalValue> {
        self.divide_with_scale(self.config.division_scale)
    }

    /// `dividend / divisor` at an explicit scale, filling the quotient and
    /// modulo slots.
    pub fn divide_with_scale(&mut self, max_scale: i64) -> ArithmeticResult<&DecimalValue> {
        let outcome = division::divide_with_remainder(&self.dividend, &self.divisor, max_scale)?;
        tracing::debug!("quotient {} modulo {}", outcome.quotient, outcome.remainder);
        self.quotient = outcome.quotient;
        self.modulo = outcome.remainder;
        Ok(&self.quotient)
    }

    #[inline]
    pub fn dividend(&self) -> &DecimalValue {
        &self.dividend
    }

    #[inline]
    pub fn divisor(&self) -> &DecimalValue {
        &self.divisor
    }

    #[inline]
    pub fn quotient(&self) -> &DecimalValue {
        &self.quotient
    }

    #[inline]
    pub fn modulo(&self) -> &DecimalValue {
        &self.modulo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArithmeticError;

    #[test]
    fn test_two_operand_workflow() {
        let mut calc = Calculator::new();
        calc.parse_operands("457.3", "22.2").unwrap();
        assert_eq!(calc.add().to_string(), "479.5");
        assert_eq!(calc.subtract().to_string(), "435.1");
        assert_eq!(calc.multiply().to_string(), "10152.06");
        // slots are untouched by the operations
        assert_eq!(calc.n1().to_string(), "457.3");
        assert_eq!(calc.n2().to_string(), "22.2");
    }

    #[test]
    fn test_raise_to_power_uses_first_operand() {
        let mut calc = Calculator::new();
        calc.parse_operands("1.5", "999").unwrap();
        assert_eq!(calc.raise_to_power(3).to_string(), "3.375");
        assert_eq!(calc.raise_to_power(0).to_string(), "1");
    }

    #[test]
    fn test_division_quartet() {
        let mut calc = Calculator::new();
        calc.parse_division_operands("9360", "24.48").unwrap();
        calc.divide_with_scale(4).unwrap();
        assert_eq!(calc.quotient().to_string(), "382.3529");
        assert_eq!(calc.modulo().to_string(), "8.64");
        assert_eq!(calc.dividend().to_string(), "9360");
        assert_eq!(calc.divisor().to_string(), "24.48");
    }

    #[test]
    fn test_default_division_scale() {
        let mut calc = Calculator::new();
        calc.parse_division_operands("-9360", "24.48").unwrap();
        calc.divide().unwrap();
        assert_eq!(calc.quotient().to_string(), "-382.35294117647058823529411764706");
        assert_eq!(calc.quotient().scale(), 29);
    }

    #[test]
    fn test_custom_config() {
        let mut calc = Calculator::with_config(CalculatorConfig { division_scale: 2 });
        calc.parse_division_operands("10", "3").unwrap();
        calc.divide().unwrap();
        assert_eq!(calc.quotient().to_string(), "3.33");
    }

    #[test]
    fn test_division_errors_leave_slots_alone() {
        let mut calc = Calculator::new();
        calc.parse_division_operands("10", "0").unwrap();
        assert_eq!(calc.divide().unwrap_err(), ArithmeticError::DivisionByZero);
        assert!(calc.quotient().is_zero());

        assert_eq!(
            calc.parse_division_operands("", "3").unwrap_err(),
            ArithmeticError::EmptyInput
        );
        // the failed parse did not clobber the previous operands
        assert_eq!(calc.dividend().to_string(), "10");
    }
}
