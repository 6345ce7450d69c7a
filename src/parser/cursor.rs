use std::collections::VecDeque;

use crate::error::{GenError, Result};

const LINE_COMMENT: &str = "//";
const CONTINUATION: char = '\\';

/// Trim a physical line and cut everything from the first `//` onward.
///
/// Purely textual: a `//` inside a string literal also starts a comment.
pub fn strip_line_comment(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.find(LINE_COMMENT) {
        Some(idx) => trimmed[..idx].trim(),
        None => trimmed,
    }
}

/// Front-consuming sequence of the lines left in the section.
#[derive(Debug, Clone, Default)]
pub struct LineCursor {
    lines: VecDeque<String>,
}

impl LineCursor {
    pub fn new(physical: &[&str]) -> Self {
        Self {
            lines: physical.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Pop the next line, trimmed and comment-stripped.
    pub fn next_line(&mut self) -> Option<String> {
        self.lines
            .pop_front()
            .map(|raw| strip_line_comment(&raw).to_string())
    }

    /// Keep appending lines while `text` ends with a trailing `\`.
    ///
    /// The marker is dropped and the next line is glued on with no
    /// separator. Running out of lines mid-statement is fatal.
    pub fn join_continued(&mut self, text: String) -> Result<String> {
        let mut buf = text;

        while buf.ends_with(CONTINUATION) {
            buf.pop();
            match self.next_line() {
                Some(next) => buf.push_str(&next),
                None => return Err(GenError::UnexpectedEof { pending: buf }),
            }
        }

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_stripping() {
        assert_eq!(strip_line_comment("  #define A B   // old name  "), "#define A B");
        assert_eq!(strip_line_comment("// whole line"), "");
        assert_eq!(strip_line_comment("\t\t"), "");
        assert_eq!(strip_line_comment("x(\"http://a\")"), "x(\"http:");
    }

    #[test]
    fn test_next_line_consumes_front() {
        let mut cursor = LineCursor::new(&["  one ", "two // c"]);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.next_line().as_deref(), Some("one"));
        assert_eq!(cursor.next_line().as_deref(), Some("two"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_join_without_separator() {
        let mut cursor = LineCursor::new(&["  b, \\", "c) // tail", "next"]);
        let joined = cursor.join_continued("f(a, \\".to_string()).unwrap();
        assert_eq!(joined, "f(a, b, c)");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_join_stops_on_empty_line() {
        let mut cursor = LineCursor::new(&["// nothing here", "after"]);
        let joined = cursor.join_continued("f(a)\\".to_string()).unwrap();
        assert_eq!(joined, "f(a)");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_join_untouched_without_marker() {
        let mut cursor = LineCursor::new(&["x"]);
        let joined = cursor.join_continued("f(a)".to_string()).unwrap();
        assert_eq!(joined, "f(a)");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_join_past_end_is_fatal() {
        let mut cursor = LineCursor::new(&[]);
        let err = cursor.join_continued("f(a, \\".to_string()).unwrap_err();
        assert!(matches!(err, GenError::UnexpectedEof { .. }));
    }
}
