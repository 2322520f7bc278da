//! Display-name normalization for map entries.
//!
//! Metadata display strings carry CLR decoration that has no place in a
//! human-readable label: parenthesized parameter lists, `<T>` generic
//! decoration, backtick arity markers and the `#ctor` constructor
//! marker. [`normalize`] strips them in a fixed order — truncation
//! first, so the later rewrites only ever see the part of the string
//! that survives.

/// Rewrite a display name into a plain human-readable label.
///
/// Truncates at the first `(` or `<`, replaces backticks with `_`, and
/// rewrites the literal `#ctor` marker to `ctor`. Pure and idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let truncated = match text.find(['(', '<']) {
        Some(idx) => &text[..idx],
        None => text,
    };
    let mut out = truncated.replace('`', "_");
    // Rewrite to a fixed point so stacked `#` prefixes cannot leave a
    // fresh `#ctor` behind and break idempotence.
    while out.contains("#ctor") {
        out = out.replace("#ctor", "ctor");
    }
    out
}
