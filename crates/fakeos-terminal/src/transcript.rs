//! Terminal transcript buffer

use serde::{Deserialize, Serialize};

/// Ordered history of terminal output lines.
///
/// Append-only: lines are pushed in execution order and never reordered or
/// deduplicated. The only way to remove anything is [`Transcript::clear`],
/// which drops the whole history (the `clear` command).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a transcript seeded with a greeting line
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            lines: vec![greeting.into()],
        }
    }

    /// Append a line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Drop all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines in execution order
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most recent line, if any
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the transcript is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut t = Transcript::new();
        t.push("first");
        t.push("second");
        t.push("first");

        assert_eq!(t.lines(), ["first", "second", "first"]);
        assert_eq!(t.last(), Some("first"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut t = Transcript::with_greeting("hello");
        t.push("more");

        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.last(), None);
    }

    #[test]
    fn test_transcript_serializes_as_array() {
        let mut t = Transcript::new();
        t.push("a");
        t.push("b");

        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
