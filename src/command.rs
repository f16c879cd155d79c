//! The argument vector being assembled and the exit-status model.

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Outcome of one command dispatch.
///
/// Only the success/failure distinction drives `&&`/`||` control flow; the
/// [`FailureKind`] records *why* a dispatch failed instead of overloading a
/// single integer with sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure(FailureKind),
}

/// The distinct ways a dispatch can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// An operator arrived with no command assembled on its left-hand side.
    EmptyCommand,
    /// The command name did not resolve to any existing path.
    NotFound,
    /// The child process could not be created.
    LaunchFailed,
    /// The child ran to completion and exited with a non-zero code.
    NonZeroExit(ExitCode),
    /// The child was signaled or its exit status could not be determined.
    AbnormalTermination,
}

impl ExitStatus {
    /// Fold a child's exit code into the zero/non-zero dichotomy.
    pub fn from_code(code: ExitCode) -> Self {
        if code == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure(FailureKind::NonZeroExit(code))
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitStatus::Success)
    }

    /// Map the status back to a conventional process exit code.
    pub fn code(self) -> ExitCode {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure(FailureKind::NonZeroExit(code)) => code,
            ExitStatus::Failure(_) => 1,
        }
    }
}

/// The argument vector for the next command to run.
///
/// Owned by exactly one command group at a time; grown one word per token and
/// cleared whenever a command is dispatched or abandoned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
    words: Vec<String>,
}

impl Argv {
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The command name a dispatch will resolve, if any word was assembled.
    pub fn command(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[String] {
        self.words.get(1..).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}
