// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;

fn main() {
    println!("=== Decimal Engine Example ===\n");

    // Tolerant parsing: separators, currency symbols, and spaces are skipped
    println!("Parsing messy input...");
    let price = DecimalValue::parse("$1,234,567.89").unwrap();
    let adjustment = DecimalValue::parse("-123  45.9").unwrap();
    println!("  \"$1,234,567.89\" -> {}", price);
    println!("  \"-123  45.9\"    -> {}", adjustment);

    // Direct engine operations
    println!("\n=== Engine Operations ===");
    let a = DecimalValue::parse("457.3").unwrap();
    let b = DecimalValue::parse("22.2").unwrap();
    println!("  {} + {} = {}", a, b, add(&a, &b));
    println!("  {} - {} = {}", a, b, subtract(&a, &b));
    println!("  {} * {} = {}", a, b, multiply(&a, &b));
    println!("  {} ^ 3 = {}", b, raise_to_power(&b, 3));

    // Rounding and boundaries
    println!("\n=== Rounding ===");
    let value = DecimalValue::parse("999.9952").unwrap();
    let rounded = round_to_scale(&value, 2, RoundingMode::HalfUpAwayFromZero).unwrap();
    println!("  {} rounded to 2 places = {}", value, rounded);
    let fraction = DecimalValue::parse("-99.925").unwrap();
    println!("  ceiling({}) = {}", fraction, ceiling(&fraction));
    println!("  floor({})   = {}", fraction, floor(&fraction));

    // Calculator façade with the division workflow
    println!("\n=== Division Workflow ===");
    let mut calc = Calculator::new();
    calc.parse_division_operands("-9360", "24.48").unwrap();
    calc.divide().unwrap();
    println!("  dividend: {}", calc.dividend());
    println!("  divisor:  {}", calc.divisor());
    println!("  quotient: {}", calc.quotient());
    println!("  modulo:   {}", calc.modulo());

    // Snapshots give explicit undo without values embedding their history
    println!("\n=== Snapshot / Restore ===");
    let mut running = DecimalValue::parse("100.00").unwrap();
    let checkpoint = running.snapshot();
    running += &DecimalValue::parse("-0.925").unwrap();
    println!("  after debit:   {}", running);
    running.restore(checkpoint);
    println!("  after restore: {}", running);
}
