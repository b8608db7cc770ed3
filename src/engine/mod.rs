// ============================================================================
// Engine Module
// Digit-sequence arithmetic algorithms over DecimalValue operands
// ============================================================================

pub mod additive;
pub mod compare;
pub mod division;
pub mod multiplicative;
pub mod rounding;

pub use additive::{add, subtract};
pub use compare::{cmp_magnitude, cmp_value};
pub use division::{divide, divide_by_int64, divide_with_remainder, DivisionOutcome};
pub use multiplicative::{multiply, raise_to_power};
pub use rounding::{ceiling, floor, round_to_scale, truncate_to_scale, RoundingMode};
