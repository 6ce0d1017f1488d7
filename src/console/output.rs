//! Output lines and the output buffer.

use serde::Serialize;

/// Visual classification of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Command results and listings.
    Normal,
    /// Echo of submitted input.
    Meta,
    /// Usage, parse and unknown-command errors.
    Error,
}

/// A rendered line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Normal,
        }
    }

    pub fn meta(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Meta,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Error,
        }
    }
}

/// A change the surface has to render, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputUpdate {
    /// Append a line.
    Line(OutputLine),
    /// Discard every rendered line.
    Clear,
}

/// Append-only line buffer, cleared only in bulk.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Vec<OutputLine>,
    /// Updates not yet taken by the surface.
    pending: Vec<OutputUpdate>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&mut self, line: OutputLine) {
        self.pending.push(OutputUpdate::Line(line.clone()));
        self.lines.push(line);
    }

    /// Discards all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending.push(OutputUpdate::Clear);
    }

    /// Returns the lines currently in the buffer.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Takes the updates emitted since the last call.
    pub fn drain_updates(&mut self) -> Vec<OutputUpdate> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear_emit_updates_in_order() {
        let mut buffer = OutputBuffer::new();
        buffer.push(OutputLine::meta("Paicheco: clear"));
        buffer.clear();
        buffer.push(OutputLine::normal("after"));

        assert_eq!(buffer.lines(), [OutputLine::normal("after")]);
        assert_eq!(
            buffer.drain_updates(),
            vec![
                OutputUpdate::Line(OutputLine::meta("Paicheco: clear")),
                OutputUpdate::Clear,
                OutputUpdate::Line(OutputLine::normal("after")),
            ]
        );
        assert!(buffer.drain_updates().is_empty());
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&OutputLine::error("boom")).unwrap();
        assert_eq!(json, r#"{"text":"boom","style":"error"}"#);
    }
}
