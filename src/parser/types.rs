/// Which of the two recognized `#define` shapes a macro was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroKind {
    /// `#define NAME (PARAMS) BODY`
    Function,
    /// `#define NAME TOKEN`
    Alias,
}

/// A single parsed compatibility macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDef {
    pub name: String,
    /// Parenthesized parameter list, verbatim. Empty for aliases.
    pub params: String,
    /// Function body with continuations joined, or the alias target token.
    pub body: String,
    pub kind: MacroKind,
}

impl MacroDef {
    pub fn function(name: &str, params: &str, body: String) -> Self {
        Self {
            name: name.to_string(),
            params: params.to_string(),
            body,
            kind: MacroKind::Function,
        }
    }

    pub fn alias(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            params: String::new(),
            body: target.to_string(),
            kind: MacroKind::Alias,
        }
    }
}
