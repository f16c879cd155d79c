//! Command-group splitting and tokenization.

use crate::input::{DELIMITER, GROUP_TERMINATOR};

/// A token of the command language.
///
/// Operators are recognized by exact spelling only. There is no quoting, so
/// an argument spelled `;`, `&&` or `||` is indistinguishable from the
/// operator and cannot be passed to a command; this mirrors the behavior of
/// the language being interpreted and is a documented limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A plain argument word.
    Word(String),
    /// The sequencing operator `;`.
    Semicolon,
    /// The conditional operator `&&`.
    AndThen,
    /// The conditional operator `||`.
    OrElse,
}

impl Token {
    fn classify(word: &str) -> Self {
        match word {
            ";" => Token::Semicolon,
            "&&" => Token::AndThen,
            "||" => Token::OrElse,
            _ => Token::Word(word.to_string()),
        }
    }
}

/// Split a normalized line on `;` into command groups.
///
/// The split consumes the separator, so every non-empty group is re-suffixed
/// with the delimiter and a `;`; a group therefore always tokenizes to a
/// stream ending in an explicit [`Token::Semicolon`], letting the interpreter
/// treat "end of group" and "semicolon within a group" identically.
pub fn split_groups(line: &str) -> Vec<String> {
    line.split(';')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("{segment}{GROUP_TERMINATOR}"))
        .collect()
}

/// Split one command group on the delimiter into tokens.
///
/// Consecutive delimiters collapse; no empty token is ever produced.
pub fn tokenize(group: &str) -> Vec<Token> {
    group
        .split(DELIMITER)
        .filter(|word| !word.is_empty())
        .map(Token::classify)
        .collect()
}
