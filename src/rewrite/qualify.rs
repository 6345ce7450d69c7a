use crate::tables::SymbolEntry;

/// Rewrite bare table symbols in `text` as `module.symbol`.
///
/// Entries are visited in table order. An entry is applied only when its
/// first occurrence sits past the cursor left by the previous replacement
/// (`idx + 1 + module.len()`); applying it replaces every occurrence. This
/// is plain substring matching, so symbols embedded in longer identifiers
/// are qualified too.
pub fn qualify(text: &str, symbols: &[SymbolEntry]) -> String {
    let mut out = text.to_string();
    let mut last_idx: Option<usize> = None;

    for entry in symbols {
        let Some(idx) = out.find(&entry.symbol) else {
            continue;
        };
        if last_idx.map_or(true, |last| idx > last) {
            let qualified = format!("{}.{}", entry.module, entry.symbol);
            out = out.replace(&entry.symbol, &qualified);
            last_idx = Some(idx + 1 + entry.module.len());
        }
    }

    out
}
