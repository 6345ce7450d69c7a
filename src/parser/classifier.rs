use regex::Regex;
use std::sync::LazyLock;

use super::cursor::LineCursor;
use super::types::MacroDef;
use crate::error::Result;

/// `#define NAME (PARAMS) BODY`
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define\s+([a-zA-Z0-9_]*)\s*(\([^)]*\))\s*(.*)").unwrap()
});

/// `#define NAME TOKEN`, nothing else on the line
static ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define\s+([a-zA-Z0-9_]*)\s*([a-zA-Z0-9_/*.]*)\s*$").unwrap()
});

/// Classify one cleaned line, pulling continuation lines from `cursor` for
/// function-like bodies. `Ok(None)` means the line is silently skipped.
pub fn classify(line: &str, cursor: &mut LineCursor) -> Result<Option<MacroDef>> {
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(caps) = FUNCTION_RE.captures(line) {
        let body = cursor.join_continued(caps[3].to_string())?;
        return Ok(Some(MacroDef::function(&caps[1], &caps[2], body)));
    }

    if let Some(caps) = ALIAS_RE.captures(line) {
        return Ok(Some(MacroDef::alias(&caps[1], &caps[2])));
    }

    Ok(None)
}
