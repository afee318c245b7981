//! Wiring between input sources, the calculator and a display sink.

use std::io;

use crate::calculator::{Calculator, DisplayState, Token};
use crate::config::Config;
use crate::display::{DisplaySink, Screen};
use crate::input::{Keymap, token_from_label};

/// One calculator widget: state machine, keyboard mapping and render target.
pub struct Session<S: DisplaySink> {
    calculator: Calculator,
    keymap: Keymap,
    sink: S,
}

impl<S: DisplaySink> Session<S> {
    pub fn new(config: &Config, sink: S) -> Self {
        Self {
            calculator: Calculator::with_error_marker(config.error_marker.clone()),
            keymap: Keymap::new(config.keys.clone()),
            sink,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handle a keyboard key. Unhandled keys return `Ok(None)` and render nothing.
    pub fn press_key(&mut self, key: &str) -> io::Result<Option<DisplayState>> {
        match self.keymap.token_for_key(key) {
            Some(token) => self.dispatch(token).map(Some),
            None => {
                tracing::trace!(key, "ignoring key");
                Ok(None)
            }
        }
    }

    /// Handle a click on the keypad button with the given label.
    pub fn press_button(&mut self, label: &str) -> io::Result<Option<DisplayState>> {
        match token_from_label(label) {
            Some(token) => self.dispatch(token).map(Some),
            None => {
                tracing::warn!(label, "unknown keypad label");
                Ok(None)
            }
        }
    }

    /// Feed a line of typed keys and render once at the end.
    ///
    /// Whitespace separates words; a word that is a named key (such as
    /// `Enter`) is one key press, any other word is one press per character.
    /// Unlike [`Session::press_key`], the sink sees only the state after the
    /// last key of the line, not one render per token.
    pub fn feed_line(&mut self, line: &str) -> io::Result<DisplayState> {
        for key in split_keys(line, &self.keymap) {
            if let Some(token) = self.keymap.token_for_key(&key) {
                self.calculator.handle(token);
            } else {
                tracing::trace!(key = %key, "ignoring key");
            }
        }

        let state = self.calculator.state();
        self.sink.render(&Screen::from_state(&state))?;
        Ok(state)
    }

    fn dispatch(&mut self, token: Token) -> io::Result<DisplayState> {
        let state = self.calculator.handle(token);
        self.sink.render(&Screen::from_state(&state))?;
        Ok(state)
    }
}

/// Break a typed line into individual key names.
pub fn split_keys(line: &str, keymap: &Keymap) -> Vec<String> {
    line.split_whitespace()
        .flat_map(|word| {
            if keymap.is_named_key(word) {
                vec![word.to_string()]
            } else {
                word.chars().map(String::from).collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<Vec<Screen>> {
        Session::new(&Config::default(), Vec::new())
    }

    #[test]
    fn test_keys_render_each_press() {
        let mut session = session();
        for key in ["5", "+", "3", "Enter"] {
            session.press_key(key).unwrap();
        }
        let texts: Vec<&str> = session.sink().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["5", "5+", "5+3", "8"]);
    }

    #[test]
    fn test_unhandled_key_renders_nothing() {
        let mut session = session();
        assert_eq!(session.press_key("Tab").unwrap(), None);
        assert!(session.sink().is_empty());
    }

    #[test]
    fn test_buttons() {
        let mut session = session();
        for label in ["7", "÷", "0", "="] {
            session.press_button(label).unwrap();
        }
        let last = session.sink().last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.border_color, "red");
        assert_eq!(session.press_button("?").unwrap(), None);
    }

    #[test]
    fn test_split_keys() {
        let keymap = Keymap::default();
        assert_eq!(split_keys("12*3 Enter", &keymap), ["1", "2", "*", "3", "Enter"]);
        assert_eq!(split_keys("Escape 4", &keymap), ["Escape", "4"]);
        assert_eq!(split_keys("Tab", &keymap), ["T", "a", "b"]);
    }

    #[test]
    fn test_feed_line_renders_once() {
        let mut session = session();
        let state = session.feed_line("1.5 * 4 Enter").unwrap();
        assert_eq!(state.text, "6");
        assert_eq!(session.sink().len(), 1);
    }
}
