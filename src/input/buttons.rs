//! Keypad buttons.

use crate::calculator::{Digit, Operator, Token};

/// Labels of every button on the keypad, row by row.
pub const KEYPAD_LABELS: &[&str] = &[
    "C", "Backspace", "÷", "x", "7", "8", "9", "-", "4", "5", "6", "+", "1", "2", "3", "=", "0",
    ".",
];

/// Map a button's label to its token.
pub fn token_from_label(label: &str) -> Option<Token> {
    match label.trim() {
        "C" => Some(Token::Clear),
        "=" => Some(Token::Equals),
        "." => Some(Token::Decimal),
        "Backspace" => Some(Token::Backspace),
        other => single_char(other).and_then(|c| {
            Operator::from_glyph(c)
                .map(Token::Operator)
                .or_else(|| Digit::from_char(c).map(Token::Digit))
        }),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_maps() {
        for label in KEYPAD_LABELS {
            assert!(token_from_label(label).is_some(), "unmapped label {label}");
        }
    }

    #[test]
    fn test_operator_labels_use_display_glyphs() {
        assert_eq!(token_from_label("x"), Some(Token::Operator(Operator::Multiply)));
        assert_eq!(token_from_label("÷"), Some(Token::Operator(Operator::Divide)));
        assert_eq!(token_from_label("*"), None);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(token_from_label("12"), None);
        assert_eq!(token_from_label(""), None);
        assert_eq!(token_from_label("%"), None);
    }
}
