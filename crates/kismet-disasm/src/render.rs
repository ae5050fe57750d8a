//! Render sinks: where the disassembler sends its lines.
//!
//! The decoder emits one event per rendered line, tagged with the nesting
//! depth. Emission order is exactly pre-order traversal of the instruction
//! tree; sinks must preserve it.

use std::io;

/// Receiver for rendered output.
pub trait RenderSink {
    /// Emit one line at the given nesting depth.
    fn line(&mut self, depth: usize, text: &str);
}

/// Collects rendered lines into a string, indenting two spaces per depth
/// level.
#[derive(Debug, Default)]
pub struct StringSink {
    out: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl RenderSink for StringSink {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

/// Streams rendered lines to an `io::Write`.
///
/// Write errors cannot propagate through the sink interface; the first one
/// is kept and later lines are dropped. Callers check [`WriteSink::error`]
/// after the pass.
#[derive(Debug)]
pub struct WriteSink<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// The first write error, if any line failed to flush.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> RenderSink for WriteSink<W> {
    fn line(&mut self, depth: usize, text: &str) {
        if self.error.is_some() {
            return;
        }
        let indent = depth * 2;
        if let Err(e) = writeln!(self.writer, "{:indent$}{text}", "") {
            self.error = Some(e);
        }
    }
}

/// Discards all output; used when only the instruction tree is wanted.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn line(&mut self, _depth: usize, _text: &str) {}
}
