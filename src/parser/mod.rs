mod classifier;
mod cursor;
mod loader;
mod types;

pub use classifier::classify;
pub use cursor::{strip_line_comment, LineCursor};
pub use loader::{load_section, locate_section};
pub use types::{MacroDef, MacroKind};
