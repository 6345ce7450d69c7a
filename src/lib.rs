//! Generates a compatibility shim module from the `COMPATIBILITY MACROS`
//! section of a legacy `idc.idc` macro file.

pub mod emitter;
pub mod error;
pub mod generator;
pub mod parser;
pub mod rewrite;
pub mod tables;

pub use emitter::EmitMode;
pub use error::{GenError, Result};
pub use generator::{generate, generate_file, GenerationReport};
pub use tables::ShimTables;
