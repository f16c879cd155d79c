//! The control-flow interpreter driving `;`, `&&` and `||` sequencing.
//!
//! The operators have no precedence beyond strict left-to-right evaluation
//! and there is no parenthesization, so no expression tree is built: a
//! single pass over the token stream with one piece of cross-operator state
//! (the skip flag) implements the full semantics.

use crate::command::{Argv, ExitStatus, FailureKind};
use crate::env::Environment;
use crate::external::{self, ExternalCommand};
use crate::input;
use crate::lexer::{self, Token};
use anyhow::{Result, bail};
use std::io::Write;

/// Whether the rest of the input line should still be interpreted.
enum GroupOutcome {
    Continue,
    /// A `&&` saw a failing left-hand side; the rest of the line is
    /// abandoned, later `;`-groups included.
    Halt,
}

/// Interpret one line of input.
///
/// The line is sanitized, normalized, split into `;`-delimited command
/// groups, and each group is run through a fresh state machine. Diagnostics
/// for unresolved commands go to `out`; the environment snapshot supplies
/// the working directory and search path for the whole line.
///
/// Returns the last recorded [`ExitStatus`]. An `Err` is returned only for
/// faults that are fatal to the interpreter itself: a process-creation
/// failure, or an I/O failure writing a diagnostic.
pub fn interpret_line(raw: &str, env: &Environment, out: &mut dyn Write) -> Result<ExitStatus> {
    let line = input::sanitize(raw);
    let line = input::normalize(&line);
    let mut last = ExitStatus::Success;
    for group in lexer::split_groups(&line) {
        let tokens = lexer::tokenize(&group);
        let mut run = GroupInterpreter::new(env, &mut *out);
        let outcome = run.run(tokens)?;
        last = run.status;
        if matches!(outcome, GroupOutcome::Halt) {
            break;
        }
    }
    Ok(last)
}

/// State machine interpreting one command group.
///
/// Constructed fresh per group; no argv, status or skip state survives a
/// group boundary, let alone an input line.
struct GroupInterpreter<'a> {
    env: &'a Environment,
    out: &'a mut dyn Write,
    argv: Argv,
    status: ExitStatus,
    skip_next: bool,
}

impl<'a> GroupInterpreter<'a> {
    fn new(env: &'a Environment, out: &'a mut dyn Write) -> Self {
        Self {
            env,
            out,
            argv: Argv::default(),
            status: ExitStatus::Success,
            skip_next: false,
        }
    }

    fn run(&mut self, tokens: Vec<Token>) -> Result<GroupOutcome> {
        for token in tokens {
            match token {
                Token::Word(word) => self.argv.push(word),
                Token::Semicolon => self.sequence_point()?,
                Token::AndThen => {
                    self.and_then()?;
                    if !self.status.is_success() {
                        return Ok(GroupOutcome::Halt);
                    }
                }
                Token::OrElse => self.or_else()?,
            }
        }
        Ok(GroupOutcome::Continue)
    }

    /// Handles `;`: dispatch whatever was assembled, unconditionally move on.
    fn sequence_point(&mut self) -> Result<()> {
        self.status = if self.argv.is_empty() {
            ExitStatus::Failure(FailureKind::EmptyCommand)
        } else {
            self.dispatch()?
        };
        self.skip_next = false;
        self.argv.clear();
        Ok(())
    }

    /// Handles `&&`: dispatch, then let the caller halt the line on failure.
    ///
    /// An empty left-hand side counts as a failure, so `&&` with nothing to
    /// evaluate short-circuits just like a failing command would.
    fn and_then(&mut self) -> Result<()> {
        self.status = if self.argv.is_empty() {
            ExitStatus::Failure(FailureKind::EmptyCommand)
        } else {
            self.dispatch()?
        };
        self.argv.clear();
        Ok(())
    }

    /// Handles `||`: dispatch unless an earlier `||` success armed the skip
    /// flag; a successful dispatch arms it for exactly one later dispatch.
    fn or_else(&mut self) -> Result<()> {
        if self.skip_next {
            // Consume the pending skip without resolving anything; the
            // elided dispatch reads as a success continuation.
            self.skip_next = false;
            self.status = ExitStatus::Success;
        } else {
            self.status = if self.argv.is_empty() {
                ExitStatus::Failure(FailureKind::EmptyCommand)
            } else {
                self.dispatch()?
            };
            if self.status.is_success() {
                self.skip_next = true;
            }
        }
        self.argv.clear();
        Ok(())
    }

    /// Resolve and launch the assembled argv, honoring the skip flag.
    ///
    /// Resolution happens before the skip flag is consulted, so a command
    /// about to be skipped still gets its not-found diagnostic. An elided
    /// dispatch consumes the flag and reads as a forced success whatever
    /// resolution said, which keeps a following `&&` from short-circuiting
    /// on a command that never ran.
    fn dispatch(&mut self) -> Result<ExitStatus> {
        let Some(name) = self.argv.command() else {
            return Ok(ExitStatus::Failure(FailureKind::EmptyCommand));
        };
        let resolved = external::find_executable(name, self.env);
        if resolved.is_none() {
            writeln!(self.out, "{name} :COMMAND NOT FOUND")?;
            self.out.flush()?;
        }
        if self.skip_next {
            self.skip_next = false;
            return Ok(ExitStatus::Success);
        }
        match resolved {
            Some(path) => {
                let status = ExternalCommand::new(path, &self.argv).execute(self.env);
                if matches!(status, ExitStatus::Failure(FailureKind::LaunchFailed)) {
                    bail!("unable to create child processes; giving up");
                }
                Ok(status)
            }
            None => Ok(ExitStatus::Failure(FailureKind::NotFound)),
        }
    }
}
