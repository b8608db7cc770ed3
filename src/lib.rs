// ============================================================================
// Decimal Engine Library
// Arbitrary-precision signed decimal arithmetic on base-10 digit sequences
// ============================================================================

//! # Decimal Engine
//!
//! An arbitrary-precision signed decimal arithmetic engine. A value is a
//! sequence of base-10 digits plus an explicit scale (fractional digit
//! count) and sign, and every operation works directly on that digit
//! sequence — no native float or integer ever bounds magnitude or
//! precision.
//!
//! ## Features
//!
//! - **Tolerant parsing** of human-entered numbers (grouping separators,
//!   currency symbols, and stray spaces are skipped in place)
//! - **Sign-table additive engine** — one carry/borrow digit loop drives
//!   both add and subtract across every sign/magnitude combination
//! - **Partial-product multiplication** and raise-to-power
//! - **One restoring-division algorithm** behind both the decimal and the
//!   native-integer divisor entry points, with controllable quotient scale
//! - **Half-up rounding, ceiling, floor** at explicit scales
//! - **Calculator façade** over operand slots and the
//!   dividend/divisor/quotient/modulo workflow
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let a = DecimalValue::parse("457.3").unwrap();
//! let b = DecimalValue::parse("22.2").unwrap();
//! assert_eq!(add(&a, &b).to_string(), "479.5");
//! assert_eq!(multiply(&a, &b).to_string(), "10152.06");
//!
//! let mut calc = Calculator::new();
//! calc.parse_division_operands("-9360", "24.48").unwrap();
//! calc.divide().unwrap();
//! assert_eq!(
//!     calc.quotient().to_string(),
//!     "-382.35294117647058823529411764706",
//! );
//! ```

pub mod calculator;
pub mod engine;
pub mod value;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{Calculator, CalculatorConfig, DEFAULT_DIVISION_SCALE};
    pub use crate::engine::{
        add, ceiling, cmp_magnitude, cmp_value, divide, divide_by_int64, divide_with_remainder,
        floor, multiply, raise_to_power, round_to_scale, subtract, truncate_to_scale,
        DivisionOutcome, RoundingMode,
    };
    pub use crate::value::{ArithmeticError, ArithmeticResult, DecimalSnapshot, DecimalValue, Sign};
}
