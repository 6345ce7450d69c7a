mod qualify;
mod ternary;

pub use qualify::qualify;
pub use ternary::fix_ternary;

use crate::tables::SymbolEntry;

/// Full rewrite of a function-like macro body: ternaries first, then
/// symbol qualification.
pub fn rewrite_body(body: &str, symbols: &[SymbolEntry]) -> String {
    qualify(&fix_ternary(body), symbols)
}
