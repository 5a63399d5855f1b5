//! Append-only terminal log shown in the bottom panel.
//!
//! Every component that wants to report something receives a [`LogSink`]
//! instead of reaching for shared state; [`TerminalLog`] is the production sink.

use crate::core::constants::TERMINAL_PROMPT;
use tracing::trace;

/// Capability for reporting a message to the user-visible log.
pub trait LogSink {
    fn log(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A message that has been written and will never change again.
    Output,
    /// The trailing prompt line that carries the live cursor.
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub kind: LineKind,
}

impl TerminalLine {
    fn output(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: LineKind::Output,
        }
    }

    fn live() -> Self {
        Self {
            text: TERMINAL_PROMPT.to_string(),
            kind: LineKind::Live,
        }
    }

    pub fn has_cursor(&self) -> bool {
        self.kind == LineKind::Live
    }
}

#[derive(Debug, Clone)]
pub struct TerminalLog {
    lines: Vec<TerminalLine>,
    /// Lines scrolled up from the bottom; 0 keeps the view pinned to the end.
    scroll_from_bottom: usize,
}

impl Default for TerminalLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalLog {
    pub fn new() -> Self {
        Self {
            lines: vec![TerminalLine::live()],
            scroll_from_bottom: 0,
        }
    }

    /// Finalize `text` as a new line and move the live prompt after it.
    pub fn append(&mut self, text: &str) {
        trace!(message = text, "terminal append");
        if matches!(self.lines.last(), Some(line) if line.has_cursor()) {
            self.lines.pop();
        }
        self.lines.push(TerminalLine::output(text));
        self.lines.push(TerminalLine::live());
        self.scroll_from_bottom = 0;
    }

    /// All lines in append order, the live prompt last.
    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn finalized(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter().filter(|line| line.kind == LineKind::Output)
    }

    pub fn finalized_count(&self) -> usize {
        self.finalized().count()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.finalized().last().map(|line| line.text.as_str())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.finalized().any(|line| line.text.contains(needle))
    }

    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_from_bottom = (self.scroll_from_bottom + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    /// First line index to draw for a viewport of `height` rows.
    pub fn viewport_start(&self, height: usize) -> usize {
        let max_start = self.lines.len().saturating_sub(height);
        max_start.saturating_sub(self.scroll_from_bottom)
    }
}

impl LogSink for TerminalLog {
    fn log(&mut self, message: &str) {
        self.append(message);
    }
}

/// Sink that only records messages; handy where no panel exists yet.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl LogSink for RecordingSink {
    fn log(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
