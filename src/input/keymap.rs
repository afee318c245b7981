//! Keyboard keys to tokens.
//!
//! Key names follow the browser `KeyboardEvent.key` convention: printable
//! keys are the character itself, others are names like `Enter`.

use crate::calculator::{Digit, Operator, Token};
use crate::config::KeyBindings;

/// Keyboard mapping for the calculator.
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    bindings: KeyBindings,
}

impl Keymap {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Token for a key press, or `None` if the calculator ignores the key.
    ///
    /// `*` and `/` are mapped onto the display glyphs `x` and `÷`.
    pub fn token_for_key(&self, key: &str) -> Option<Token> {
        // Configured bindings win so that e.g. `c` can mean clear.
        if is_bound(&self.bindings.clear, key) {
            return Some(Token::Clear);
        }
        if is_bound(&self.bindings.equals, key) {
            return Some(Token::Equals);
        }
        if is_bound(&self.bindings.backspace, key) {
            return Some(Token::Backspace);
        }

        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match c {
            '.' => Some(Token::Decimal),
            '+' | '-' | '*' | '/' => Operator::from_native(c).map(Token::Operator),
            _ => Digit::from_char(c).map(Token::Digit),
        }
    }

    /// Whether the host's default handling of `key` should be suppressed
    /// while the calculator has focus.
    pub fn is_handled(&self, key: &str) -> bool {
        self.token_for_key(key).is_some()
    }

    /// Whether `key` is a configured named key (e.g. `Enter`) rather than a
    /// single character.
    pub fn is_named_key(&self, key: &str) -> bool {
        key.chars().count() > 1 && self.is_handled(key)
    }
}

fn is_bound(keys: &[String], key: &str) -> bool {
    keys.iter().any(|k| k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.token_for_key("7"), Token::digit(7));
        assert_eq!(keymap.token_for_key("."), Some(Token::Decimal));
        assert_eq!(keymap.token_for_key("Enter"), Some(Token::Equals));
        assert_eq!(keymap.token_for_key("="), Some(Token::Equals));
        assert_eq!(keymap.token_for_key("Escape"), Some(Token::Clear));
        assert_eq!(keymap.token_for_key("c"), Some(Token::Clear));
        assert_eq!(keymap.token_for_key("C"), Some(Token::Clear));
        assert_eq!(keymap.token_for_key("Backspace"), Some(Token::Backspace));
    }

    #[test]
    fn test_keyboard_operators_map_to_glyphs() {
        let keymap = Keymap::default();
        assert_eq!(keymap.token_for_key("*"), Some(Token::Operator(Operator::Multiply)));
        assert_eq!(keymap.token_for_key("/"), Some(Token::Operator(Operator::Divide)));
        assert_eq!(keymap.token_for_key("-"), Some(Token::Operator(Operator::Subtract)));
        // The glyphs themselves are button labels, not keys.
        assert_eq!(keymap.token_for_key("x"), None);
    }

    #[test]
    fn test_unhandled_keys() {
        let keymap = Keymap::default();
        assert!(!keymap.is_handled("a"));
        assert!(!keymap.is_handled("Tab"));
        assert!(!keymap.is_handled("F5"));
        assert!(keymap.is_handled("Enter"));
        assert!(keymap.is_named_key("Enter"));
        assert!(!keymap.is_named_key("5"));
    }

    #[test]
    fn test_custom_bindings() {
        let keymap = Keymap::new(KeyBindings {
            clear: vec!["Delete".into()],
            equals: vec!["Enter".into()],
            backspace: vec!["Backspace".into()],
        });
        assert_eq!(keymap.token_for_key("Delete"), Some(Token::Clear));
        assert_eq!(keymap.token_for_key("c"), None);
        assert_eq!(keymap.token_for_key("="), None);
    }
}
