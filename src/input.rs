//! Line sanitation and whitespace normalization.
//!
//! Raw input may contain arbitrary control bytes; everything outside the
//! printable ASCII range is rewritten to the canonical delimiter before any
//! later stage sees the line. After normalization the delimiter is the only
//! separator the tokenizer has to know about.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// The canonical token separator all whitespace collapses into.
pub const DELIMITER: char = '\t';

/// Suffix appended to every acquired line and restored to every command
/// group, so that a group always tokenizes to a stream ending in `;`.
pub const GROUP_TERMINATOR: &str = "\t;";

/// Prepare a freshly acquired line for interpretation.
///
/// Every character outside the printable ASCII range is replaced by the
/// delimiter, and the fixed `<delimiter>;` suffix is appended. The returned
/// line is never partially sanitized.
pub fn sanitize(raw: &str) -> String {
    let mut line: String = raw
        .chars()
        .map(|ch| if matches!(ch, ' '..='~') { ch } else { DELIMITER })
        .collect();
    line.push_str(GROUP_TERMINATOR);
    line
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s").expect("literal character class"))
}

/// Replace every whitespace character with the delimiter.
///
/// Idempotent; an empty input is returned unchanged without allocating.
pub fn normalize(line: &str) -> Cow<'_, str> {
    whitespace().replace_all(line, "\t")
}
