// ============================================================================
// Value Module
// The decimal value type and its error surface
// ============================================================================
//
// This module provides:
// - DecimalValue: arbitrary-precision signed decimal as a digit sequence
// - Sign: +1/-1 with zero canonically positive
// - DecimalSnapshot: explicit checkpoint/restore copies
// - ArithmeticError: error types for parsing and arithmetic
//
// Design principles:
// - No native numeric type in the arithmetic path
// - All fallible operations return Result (no panics)
// - Pure operations return fresh values; in-place mutation is opt-in
// - Structural equality; numeric comparison is an explicit operation

mod decimal;
mod errors;

pub use decimal::{DecimalSnapshot, DecimalValue, Sign};
pub use errors::{ArithmeticError, ArithmeticResult};

pub(crate) use decimal::DigitVec;
