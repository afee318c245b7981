//! Clipboard export for calculator results.

use arboard::Clipboard;
use thiserror::Error;

use crate::calculator::DisplayState;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The display holds nothing worth copying.
    #[error("nothing to copy: display is empty or shows an error")]
    NothingToCopy,

    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Text that would be exported for `state`, if any.
pub fn clipboard_text(state: &DisplayState) -> Option<&str> {
    (!state.is_error && !state.text.is_empty()).then_some(state.text.as_str())
}

/// Copy the display to the system clipboard.
///
/// Errors and an empty display are refused rather than copied.
pub fn copy_to_clipboard(state: &DisplayState) -> Result<(), ClipboardError> {
    let text = clipboard_text(state).ok_or(ClipboardError::NothingToCopy)?;

    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Write)?;

    tracing::debug!(text, "copied result to clipboard");
    Ok(())
}
