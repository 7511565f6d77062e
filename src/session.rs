//! Per-session typed buffer.

use tracing::trace;

/// What a single keystroke did to the session.
#[derive(Debug, PartialEq, Eq)]
pub enum Keystroke<'a> {
    /// A regular character was appended; holds the whole buffer so far.
    Typed(&'a str),
    /// The terminator ended the session; holds the phrase to commit. The
    /// buffer is empty again.
    Committed(String),
}

/// In-progress phrase of one session.
///
/// Owned by exactly one session; two sessions never share a buffer.
#[derive(Debug, Clone)]
pub struct SessionBuffer {
    buffer: String,
    terminator: char,
}

impl SessionBuffer {
    pub fn new(terminator: char) -> Self {
        Self {
            buffer: String::new(),
            terminator,
        }
    }

    pub fn feed(&mut self, c: char) -> Keystroke<'_> {
        if c == self.terminator {
            return Keystroke::Committed(std::mem::take(&mut self.buffer));
        }
        self.buffer.push(c);
        trace!(len = self.buffer.len(), "keystroke");
        Keystroke::Typed(&self.buffer)
    }

    /// The uncommitted text typed so far.
    #[inline]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn terminator(&self) -> char {
        self.terminator
    }
}
