//! Expression evaluation for the Equals key.
//!
//! Turns a display buffer into something the restricted parser accepts,
//! evaluates it and formats the result back into display text.

use crate::calculator::Operator;
use crate::calculator::parser::{EvalError, parse_and_eval};

/// Translate display glyphs to native symbols and drop one dangling
/// trailing operator or decimal point, so `"3+"` evaluates as `"3"`.
pub fn prepare_expression(display: &str) -> String {
    let mut expression: String = display
        .chars()
        .map(|c| Operator::from_glyph(c).map_or(c, Operator::native))
        .collect();

    if expression
        .chars()
        .last()
        .is_some_and(|c| c == '.' || Operator::from_native(c).is_some())
    {
        expression.pop();
    }

    expression
}

/// Evaluate a display buffer to a finite number.
pub fn evaluate_expression(display: &str) -> Result<f64, EvalError> {
    let expression = prepare_expression(display);
    let value = parse_and_eval(&expression)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}

/// Format a result for the display: shortest round-trip decimal form,
/// never exponent notation, and `-0` shown as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
