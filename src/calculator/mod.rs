//! Calculator core: token vocabulary, display state machine and evaluator.
//!
//! This module provides functionality to:
//! - Turn a stream of keypad tokens into a display buffer
//! - Evaluate the buffer with a restricted arithmetic parser
//! - Copy results to the clipboard

mod clipboard;
mod evaluation;
mod machine;
mod parser;
mod token;
mod validation;

pub use clipboard::{ClipboardError, clipboard_text, copy_to_clipboard};
pub use evaluation::{evaluate_expression, format_number, prepare_expression};
pub use machine::{Calculator, DEFAULT_ERROR_MARKER, DisplayState};
pub use parser::{EvalError, parse_and_eval};
pub use token::{Digit, Operator, Token};
pub use validation::is_valid_display;
