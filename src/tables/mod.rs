use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};

use crate::error::{GenError, Result};

const BUILTIN: &str = include_str!("builtin.json");

/// One row of the symbol-to-module table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolEntry {
    pub symbol: String,
    pub module: String,
}

#[derive(Debug, Deserialize)]
struct RawTables {
    section_marker: String,
    legacy_module: String,
    denylist: Vec<String>,
    symbols: Vec<SymbolEntry>,
}

/// Immutable lookup tables driving a generation run.
///
/// `symbols` keeps its declared order: qualification walks it front to back.
#[derive(Debug, Clone)]
pub struct ShimTables {
    section_marker: String,
    legacy_module: String,
    denylist: HashSet<String>,
    symbols: Vec<SymbolEntry>,
}

impl ShimTables {
    /// Load the tables embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawTables =
            serde_json::from_str(text).map_err(|e| GenError::Tables(e.to_string()))?;

        if raw.section_marker.is_empty() {
            return Err(GenError::Tables("empty section marker".into()));
        }

        let mut seen = HashSet::new();
        for entry in &raw.symbols {
            if !seen.insert(entry.symbol.as_str()) {
                return Err(GenError::Tables(format!(
                    "symbol {} listed more than once",
                    entry.symbol
                )));
            }
        }

        Ok(Self {
            section_marker: raw.section_marker,
            legacy_module: raw.legacy_module,
            denylist: raw.denylist.into_iter().collect(),
            symbols: raw.symbols,
        })
    }

    pub fn section_marker(&self) -> &str {
        &self.section_marker
    }

    /// Module whose symbols the shim re-exports via wildcard import.
    pub fn legacy_module(&self) -> &str {
        &self.legacy_module
    }

    pub fn is_denied(&self, name: &str) -> bool {
        self.denylist.contains(name)
    }

    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Distinct owning modules, sorted by name.
    pub fn modules(&self) -> Vec<&str> {
        self.symbols
            .iter()
            .map(|e| e.module.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let tables = ShimTables::builtin().unwrap();
        assert_eq!(tables.section_marker(), "COMPATIBILITYMACROS");
        assert_eq!(tables.legacy_module(), "idc");
        assert!(tables.is_denied("eval"));
        assert!(tables.is_denied("FindBinary"));
        assert!(!tables.is_denied("ask_str"));
        assert!(!tables.is_denied("GetLocalTypeName"));
    }

    #[test]
    fn test_modules_sorted_and_distinct() {
        let tables = ShimTables::builtin().unwrap();
        let modules = tables.modules();
        let mut sorted = modules.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(modules, sorted);
        assert_eq!(modules.first(), Some(&"ida_bytes"));
        assert!(modules.contains(&"ida_kernwin"));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let json = r#"{
            "section_marker": "M",
            "legacy_module": "old",
            "denylist": [],
            "symbols": [
                {"symbol": "A", "module": "m1"},
                {"symbol": "A", "module": "m2"}
            ]
        }"#;
        assert!(matches!(ShimTables::from_json(json), Err(GenError::Tables(_))));
    }

    #[test]
    fn test_symbol_order_preserved() {
        let json = r#"{
            "section_marker": "M",
            "legacy_module": "old",
            "denylist": ["x"],
            "symbols": [
                {"symbol": "Z", "module": "m1"},
                {"symbol": "A", "module": "m0"}
            ]
        }"#;
        let tables = ShimTables::from_json(json).unwrap();
        let names: Vec<_> = tables.symbols().iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(names, ["Z", "A"]);
        assert_eq!(tables.modules(), ["m0", "m1"]);
    }
}
