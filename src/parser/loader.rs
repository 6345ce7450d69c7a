use std::fs;
use std::path::Path;

use super::cursor::LineCursor;
use crate::error::{GenError, Result};

/// True when `line`, with every space removed, contains `marker`.
fn is_marker_line(line: &str, marker: &str) -> bool {
    line.replace(' ', "").contains(marker)
}

/// Drop every line before the first one carrying the section marker.
///
/// The marker line itself stays at the front of the returned cursor.
pub fn locate_section(contents: &str, marker: &str) -> Result<LineCursor> {
    let physical: Vec<&str> = contents.lines().collect();

    let start = physical
        .iter()
        .position(|line| is_marker_line(line, marker))
        .ok_or_else(|| GenError::MissingMarker {
            marker: marker.to_string(),
        })?;

    let cursor = LineCursor::new(&physical[start..]);
    tracing::debug!(
        line = start + 1,
        remaining = cursor.remaining(),
        "found section marker"
    );
    Ok(cursor)
}

/// Read `path` and position a cursor at its compatibility section.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_section(path: &Path, marker: &str) -> Result<LineCursor> {
    let bytes = fs::read(path).map_err(|e| GenError::io(path, e))?;
    locate_section(&String::from_utf8_lossy(&bytes), marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ignores_spaces() {
        assert!(is_marker_line("// C O M P A T I B I L I T Y  MACROS", "COMPATIBILITYMACROS"));
        assert!(is_marker_line("//-- COMPATIBILITY MACROS --", "COMPATIBILITYMACROS"));
        assert!(!is_marker_line("// compatibility macros", "COMPATIBILITYMACROS"));
    }

    #[test]
    fn test_marker_tabs_are_not_removed() {
        assert!(!is_marker_line("COMPATIBILITY\tMACROS", "COMPATIBILITYMACROS"));
    }

    #[test]
    fn test_locate_keeps_marker_line() {
        let src = "#define SKIPPED 1\n// COMPATIBILITY MACROS\n#define A B\n";
        let mut cursor = locate_section(src, "COMPATIBILITYMACROS").unwrap();
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.next_line().as_deref(), Some(""));
        assert_eq!(cursor.next_line().as_deref(), Some("#define A B"));
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_missing_marker_is_fatal() {
        let err = locate_section("#define A B\n", "COMPATIBILITYMACROS").unwrap_err();
        assert!(matches!(err, GenError::MissingMarker { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_section(Path::new("/nonexistent/idc.idc"), "X").unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}
