//! A small interactive command interpreter.
//!
//! This crate reads one line of input at a time, rewrites its whitespace into
//! a single canonical delimiter, splits it into `;`-delimited command groups,
//! resolves bare command names against the working directory and the `PATH`
//! search path, and launches child processes, honoring the `;`, `&&` and `||`
//! sequencing operators with strict left-to-right, short-circuit semantics.
//!
//! The main entry point is [`interpret_line`], which drives the whole
//! pipeline for a single line. The public modules [`command`] and [`env`]
//! expose the exit-status model and the per-line environment snapshot used
//! by both the library and the `seqsh` binary.

pub mod command;
pub mod env;
mod external;
mod input;
mod interpreter;
mod lexer;

/// Just a convenient re-export of the line-interpretation entry point.
pub use interpreter::interpret_line;
