use std::io::{self, Write};

use crate::parser::{MacroDef, MacroKind};
use crate::tables::ShimTables;

/// Timestamp comment, one import per owning module, wildcard legacy import.
pub fn write_header<W: Write>(out: &mut W, tables: &ShimTables, timestamp: &str) -> io::Result<()> {
    writeln!(out, "# Autogenerated on: {}\n", timestamp)?;
    for module in tables.modules() {
        writeln!(out, "import {}", module)?;
    }
    writeln!(out, "from {} import *\n", tables.legacy_module())
}

/// `def NAME(PARAMS): return BODY` or `NAME=TARGET`.
pub fn write_definition<W: Write>(out: &mut W, def: &MacroDef) -> io::Result<()> {
    match def.kind {
        MacroKind::Function => writeln!(out, "def {}{}: return {}", def.name, def.params, def.body),
        MacroKind::Alias => writeln!(out, "{}={}", def.name, def.body),
    }
}
