//! The input state machine behind the calculator display.
//!
//! The machine owns the display buffer and a cached "current number already
//! has a decimal point" flag. Every token produces a fresh buffer value; the
//! error state is simply the buffer being equal to the error marker.
//!
//! The flag is reset after Equals even when the result has a fraction, and
//! Backspace recomputes it from the whole buffer, so a result like `0.5`
//! still accepts another point.

use serde::Serialize;

use crate::calculator::evaluation::{evaluate_expression, format_number};
use crate::calculator::{Digit, Operator, Token};

/// Marker shown after a failed evaluation unless configured otherwise.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// What the display sink receives after each token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// The full display buffer.
    pub text: String,
    /// Whether `text` is the error marker.
    pub is_error: bool,
}

/// Next buffer and decimal flag, or `None` when the token is ignored.
type Step = Option<(String, bool)>;

/// Token-driven calculator state.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    decimal_added: bool,
    error_marker: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_error_marker(DEFAULT_ERROR_MARKER)
    }

    /// Create a calculator that shows `marker` after a failed evaluation.
    pub fn with_error_marker(marker: impl Into<String>) -> Self {
        Self {
            display: String::new(),
            decimal_added: false,
            error_marker: marker.into(),
        }
    }

    /// Current display buffer.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the display currently shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display == self.error_marker
    }

    /// Whether a Decimal token is currently refused because the number being
    /// typed already has a point.
    pub fn decimal_added(&self) -> bool {
        self.decimal_added
    }

    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Snapshot of what should be rendered.
    pub fn state(&self) -> DisplayState {
        DisplayState {
            text: self.display.clone(),
            is_error: self.is_error(),
        }
    }

    /// Apply one token and return the resulting display.
    pub fn handle(&mut self, token: Token) -> DisplayState {
        let step = match token {
            Token::Clear => Some((String::new(), false)),
            Token::Digit(digit) => self.push_digit(digit),
            Token::Decimal => self.push_decimal(),
            Token::Operator(op) => self.push_operator(op),
            Token::Backspace => self.backspace(),
            Token::Equals => self.equals(),
        };

        match step {
            Some((next, decimal_added)) => {
                tracing::trace!(?token, from = %self.display, to = %next, "transition");
                self.display = next;
                self.decimal_added = decimal_added;
            }
            None => tracing::trace!(?token, display = %self.display, "token ignored"),
        }

        self.state()
    }

    /// Apply a sequence of tokens, returning the final display.
    pub fn handle_all(&mut self, tokens: impl IntoIterator<Item = Token>) -> DisplayState {
        for token in tokens {
            self.handle(token);
        }
        self.state()
    }

    fn push_digit(&self, digit: Digit) -> Step {
        if self.is_error() {
            return Some((digit.as_char().to_string(), false));
        }

        let decimal_added = if ends_with_operator(&self.display) {
            false
        } else {
            self.decimal_added
        };

        Some((format!("{}{}", self.display, digit.as_char()), decimal_added))
    }

    fn push_decimal(&self) -> Step {
        // A point on the error marker only clears; it does not start "0." or ".".
        if self.is_error() {
            return Some((String::new(), false));
        }

        if !self.decimal_added && !self.display.is_empty() && !ends_with_operator(&self.display) {
            return Some((format!("{}.", self.display), true));
        }

        None
    }

    fn push_operator(&self, op: Operator) -> Step {
        if self.is_error() {
            let display = if op == Operator::Subtract {
                op.glyph().to_string()
            } else {
                String::new()
            };
            return Some((display, false));
        }

        if self.display.is_empty() {
            // Only a minus sign may start an expression.
            return (op == Operator::Subtract).then(|| (op.glyph().to_string(), false));
        }

        if !ends_with_operator(&self.display) {
            return Some((format!("{}{}", self.display, op.glyph()), false));
        }

        // Replace a mistyped trailing operator, but never a lone leading minus.
        if self.display.chars().count() > 1 {
            let mut display = self.display.clone();
            display.pop();
            display.push(op.glyph());
            return Some((display, self.decimal_added));
        }

        None
    }

    fn backspace(&self) -> Step {
        if self.display.is_empty() || self.is_error() {
            return None;
        }

        let mut display = self.display.clone();
        display.pop();
        let decimal_added = display.contains('.') && !ends_with_operator(&display);
        Some((display, decimal_added))
    }

    fn equals(&self) -> Step {
        if self.display.is_empty() || self.is_error() {
            return None;
        }

        match evaluate_expression(&self.display) {
            Ok(value) => Some((format_number(value), false)),
            Err(err) => {
                tracing::debug!(
                    expression = %self.display,
                    arithmetic = err.is_arithmetic(),
                    "evaluation failed: {}",
                    err
                );
                Some((self.error_marker.clone(), false))
            }
        }
    }
}

fn ends_with_operator(display: &str) -> bool {
    display.chars().last().is_some_and(Operator::is_glyph)
}
