//! Display sink trait and a line-oriented writer implementation.

use std::io::{self, Write};

use crate::display::Screen;

/// Receives the display after every handled token.
pub trait DisplaySink {
    fn render(&mut self, screen: &Screen) -> io::Result<()>;
}

/// Collects every rendered screen, newest last.
impl DisplaySink for Vec<Screen> {
    fn render(&mut self, screen: &Screen) -> io::Result<()> {
        self.push(screen.clone());
        Ok(())
    }
}

/// Writes one line per render, either plain text or a JSON object.
pub struct WriterSink<W: Write> {
    writer: W,
    json: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            json: false,
        }
    }

    /// Emit `serde_json` objects instead of plain text.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn render(&mut self, screen: &Screen) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.writer, screen)?;
            writeln!(self.writer)?;
        } else if screen.is_error {
            writeln!(self.writer, "[{}]", screen.text)?;
        } else {
            writeln!(self.writer, "{}", screen.text)?;
        }
        self.writer.flush()
    }
}
