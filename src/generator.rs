use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::emitter::{EmitMode, Emitter};
use crate::error::{GenError, Result};
use crate::parser::{classify, load_section, LineCursor, MacroKind};
use crate::rewrite::{qualify, rewrite_body};
use crate::tables::ShimTables;

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Names written to the output, in source order.
    pub emitted: Vec<String>,
    /// Macros dropped because their name is denylisted.
    pub denied: usize,
    /// Non-empty lines that matched neither macro shape.
    pub skipped: usize,
}

/// Local time in `strftime` `%c` form, for the header comment.
pub fn timestamp() -> String {
    chrono::Local::now().format("%c").to_string()
}

/// Drive the section held by `cursor` through classification, rewriting
/// and emission into `out`.
pub fn generate<W: Write>(
    mut cursor: LineCursor,
    tables: &ShimTables,
    mode: EmitMode,
    timestamp: &str,
    out: W,
) -> Result<GenerationReport> {
    let mut emitter = Emitter::new(out, tables, mode);
    let mut report = GenerationReport::default();

    emitter.header(timestamp)?;

    while let Some(line) = cursor.next_line() {
        if line.is_empty() {
            continue;
        }

        let Some(mut def) = classify(&line, &mut cursor)? else {
            tracing::debug!(%line, "not a compatibility macro, skipping");
            report.skipped += 1;
            continue;
        };

        if tables.is_denied(&def.name) {
            tracing::debug!(name = %def.name, "denylisted, not emitted");
            report.denied += 1;
            continue;
        }

        def.body = match def.kind {
            MacroKind::Function => rewrite_body(&def.body, tables.symbols()),
            MacroKind::Alias => qualify(&def.body, tables.symbols()),
        };

        emitter.emit(&def)?;
        report.emitted.push(def.name);
    }

    emitter.finish()?;
    Ok(report)
}

/// Read `input`, then create `output` and write the shim into it.
///
/// The output is not touched if the input cannot be read or has no
/// compatibility section.
pub fn generate_file(
    input: &Path,
    output: &Path,
    tables: &ShimTables,
    mode: EmitMode,
) -> Result<GenerationReport> {
    let cursor = load_section(input, tables.section_marker())?;

    let file = File::create(output).map_err(|e| GenError::io(output, e))?;
    let report = generate(cursor, tables, mode, &timestamp(), BufWriter::new(file))?;

    tracing::info!(
        output = %output.display(),
        ?mode,
        emitted = report.emitted.len(),
        denied = report.denied,
        skipped = report.skipped,
        "shim generated"
    );
    Ok(report)
}
