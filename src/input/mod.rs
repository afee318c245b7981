//! Input sources: keypad button labels and keyboard keys, normalized into
//! calculator tokens.

mod buttons;
mod keymap;

pub use buttons::{KEYPAD_LABELS, token_from_label};
pub use keymap::Keymap;
