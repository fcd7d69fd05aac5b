//! Output sinks.
//!
//! The printing surface renders to a string first, then hands the finished
//! text to an [`Output`]. Console output is the default; writer-backed and
//! in-memory sinks cover redirection and test capture.

use std::io::{self, Write};

/// Destination for rendered text.
///
/// One call per print: the text is a complete rendered group (label plus
/// values), written with a trailing newline.
pub trait Output {
    /// Write one rendered group followed by a newline.
    fn write_rendered(&mut self, text: &str) -> io::Result<()>;
}

/// Standard-output sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn write_rendered(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{text}")
    }
}

/// In-memory sink, primarily for capture in tests.
#[derive(Debug, Clone, Default)]
pub struct StringOutput {
    buffer: String,
}

impl StringOutput {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured text so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the sink and return the captured text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Output for StringOutput {
    fn write_rendered(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        Ok(())
    }
}

/// Sink over any [`io::Write`]; buffering is left to the caller.
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriterOutput<W> {
    fn write_rendered(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, StringOutput, WriterOutput};

    #[test]
    fn string_output_appends_with_newlines() {
        let mut out = StringOutput::new();
        assert!(out.write_rendered("first").is_ok());
        assert!(out.write_rendered("second").is_ok());
        assert_eq!(out.as_str(), "first\nsecond\n");
        assert_eq!(out.into_string(), "first\nsecond\n");
    }

    #[test]
    fn writer_output_round_trips_bytes() {
        let mut out = WriterOutput::new(Vec::new());
        assert!(out.write_rendered("hello").is_ok());
        assert_eq!(out.into_inner(), b"hello\n");
    }
}
