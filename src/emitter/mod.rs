mod probe;
mod shim;

pub use probe::write_probe;
pub use shim::{write_definition, write_header};

use std::io::{self, Write};

use crate::parser::MacroDef;
use crate::tables::ShimTables;

/// What gets written for each surviving macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// Real definitions and aliases.
    #[default]
    Definitions,
    /// Runtime probes only; nothing is overridden.
    Probes,
}

/// Append-only writer for the generated shim module.
pub struct Emitter<'a, W: Write> {
    out: W,
    tables: &'a ShimTables,
    mode: EmitMode,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(out: W, tables: &'a ShimTables, mode: EmitMode) -> Self {
        Self { out, tables, mode }
    }

    pub fn header(&mut self, timestamp: &str) -> io::Result<()> {
        write_header(&mut self.out, self.tables, timestamp)
    }

    /// Write `def`, whose body must already be rewritten.
    pub fn emit(&mut self, def: &MacroDef) -> io::Result<()> {
        match self.mode {
            EmitMode::Definitions => write_definition(&mut self.out, def),
            EmitMode::Probes => write_probe(&mut self.out, self.tables.legacy_module(), &def.name),
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
