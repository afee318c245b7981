//! Shape checks for the display buffer.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// An in-progress expression: optional leading minus, numbers with at most
    /// one point, display operator glyphs between them, possibly a dangling operator.
    static ref DISPLAY_EXPRESSION: Regex = Regex::new(
        r"^-?(?:\d+(?:\.\d*)?[+\-x÷])*(?:\d+(?:\.\d*)?)?$"
    ).unwrap();
}

/// Check that `text` is empty, the error marker, or an in-progress
/// expression as it can be typed on the keypad.
pub fn is_valid_display(text: &str, error_marker: &str) -> bool {
    text.is_empty() || text == error_marker || DISPLAY_EXPRESSION.is_match(text)
}
