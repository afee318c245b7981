//! # calcpad
//!
//! The core of a keypad calculator widget. Button clicks and key presses are
//! normalized into [`Token`]s; a [`Calculator`] turns each token into a new
//! display string, and [`Session`] pushes the result to a [`DisplaySink`].
//!
//! Evaluation uses a small recursive-descent parser that only understands
//! digits, decimal points and `+ - * /`, so nothing typed into the display
//! can ever be executed as code.
//!
//! ```
//! use calcpad::{Calculator, Operator, Token};
//!
//! let mut calc = Calculator::new();
//! calc.handle_all([
//!     Token::digit(5).unwrap(),
//!     Token::Operator(Operator::Add),
//!     Token::digit(3).unwrap(),
//! ]);
//! assert_eq!(calc.handle(Token::Equals).text, "8");
//! ```

pub mod calculator;
pub mod config;
pub mod display;
pub mod input;
pub mod session;

pub use calculator::{Calculator, DisplayState, EvalError, Operator, Token};
pub use config::{Config, ConfigError};
pub use display::{DisplaySink, Screen};
pub use input::Keymap;
pub use session::Session;
