use regex::Regex;
use std::sync::LazyLock;

/// `FUNC(ARGS)`; the call closes at the last `)` in the body.
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^(]+)\((.*)\)").unwrap());

/// `COND ? THEN : ELSE`; the last `:` separates the branches.
static TERNARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^?]+)\?(.*):(.*)").unwrap());

static PARENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\((.*)\)\s*$").unwrap());

/// Strip one enclosing pair of parentheses, then trim.
fn remove_parens(arg: &str) -> &str {
    match PARENS_RE.captures(arg) {
        Some(caps) => caps.get(1).map_or(arg, |m| m.as_str()).trim(),
        None => arg.trim(),
    }
}

/// Rewrite a single call argument, or `None` if it is not a ternary.
fn rewrite_arg(arg: &str) -> Option<String> {
    let caps = TERNARY_RE.captures(arg)?;
    let cond = remove_parens(&caps[1]);
    let then = remove_parens(&caps[2]);
    let otherwise = remove_parens(&caps[3]);
    Some(format!("{then} if {cond} else {otherwise}"))
}

/// Turn `c ? a : b` arguments of the outer call into `a if c else b`.
///
/// Arguments are split on every comma, nested calls included. The body is
/// returned untouched unless at least one argument was rewritten, in which
/// case all arguments are trimmed and re-joined with `", "`.
pub fn fix_ternary(body: &str) -> String {
    let Some(caps) = CALL_RE.captures(body) else {
        return body.to_string();
    };
    let func = &caps[1];
    let args = &caps[2];

    let mut changed = false;
    let out: Vec<String> = args
        .split(',')
        .map(|arg| match rewrite_arg(arg) {
            Some(rewritten) => {
                changed = true;
                rewritten.trim().to_string()
            }
            None => arg.trim().to_string(),
        })
        .collect();

    if changed {
        format!("{}({})", func, out.join(", "))
    } else {
        body.to_string()
    }
}
