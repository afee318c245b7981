//! Render-ready view of the calculator display.

use serde::Serialize;

use crate::calculator::DisplayState;

/// Border colour used while the display shows an error.
pub const ERROR_BORDER: &str = "red";
/// Border colour otherwise.
pub const NORMAL_BORDER: &str = "#000";

/// What a renderer needs to draw the display region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// The display text.
    pub text: String,
    /// Whether this is an error result.
    pub is_error: bool,
    /// Border colour cue for the error state.
    pub border_color: &'static str,
    /// Live-region politeness so assistive technology announces changes.
    pub aria_live: &'static str,
}

impl Screen {
    /// Build the view for a calculator state.
    pub fn from_state(state: &DisplayState) -> Self {
        Self {
            text: state.text.clone(),
            is_error: state.is_error,
            border_color: if state.is_error {
                ERROR_BORDER
            } else {
                NORMAL_BORDER
            },
            aria_live: "polite",
        }
    }
}

impl From<DisplayState> for Screen {
    fn from(state: DisplayState) -> Self {
        Self::from_state(&state)
    }
}
