//! Token vocabulary consumed by the calculator.

use std::fmt;

/// One of the four binary operators shown on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The glyph written into the display.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '÷',
        }
    }

    /// The plain arithmetic symbol understood by the evaluator.
    pub fn native(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its display glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.glyph() == c)
    }

    /// Look up an operator by its native symbol.
    pub fn from_native(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.native() == c)
    }

    /// Whether `c` is a display operator glyph.
    pub fn is_glyph(c: char) -> bool {
        Self::from_glyph(c).is_some()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Build a digit from its numeric value.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Build a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One discrete, normalized user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Clear,
    Backspace,
    Equals,
}

impl Token {
    /// Shorthand for a digit token. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(Operator::from_glyph('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_glyph('*'), None);
        assert_eq!(Operator::from_native('/'), Some(Operator::Divide));
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('a').is_none());
    }
}
