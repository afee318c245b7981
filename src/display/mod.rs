//! Display sinks: where the calculator's state ends up after each token.

mod screen;
mod sink;

pub use screen::{ERROR_BORDER, NORMAL_BORDER, Screen};
pub use sink::{DisplaySink, WriterSink};
