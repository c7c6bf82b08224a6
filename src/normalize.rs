//! Line-ending normalization applied once at construction.

use std::borrow::Cow;

/// How `\r\n` and lone `\r` are rewritten to `\n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewlineMode {
    /// Rewrite every occurrence in a single pass.
    #[default]
    All,
    /// Rewrite only the first `\r\n`, then the first remaining `\r`.
    ///
    /// Kept for compatibility with buffers produced by older tooling that
    /// normalized this way.
    FirstOnly,
}

/// Normalize line endings in `text`.
///
/// Borrows when `text` has no carriage returns.
pub fn normalize_newlines(text: &str, mode: NewlineMode) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    match mode {
        NewlineMode::All => Cow::Owned(replace_all(text)),
        NewlineMode::FirstOnly => {
            Cow::Owned(text.replacen("\r\n", "\n", 1).replacen('\r', "\n", 1))
        }
    }
}

fn replace_all(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            chars.next_if_eq(&'\n');
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}
