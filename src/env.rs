use std::env as stdenv;
use std::path::PathBuf;

/// Ordered list of directories searched for executables.
///
/// Rebuilt from `PATH` every input line; an absent or empty `PATH` yields an
/// empty list, which is not an error (only the working-directory check
/// applies then).
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    /// Directory prefixes in declared left-to-right order.
    pub dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Parse a `PATH`-style colon-separated value, dropping empty segments.
    pub fn from_value(path: Option<&str>) -> Self {
        let dirs = match path {
            Some(path) => stdenv::split_paths(path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        Self { dirs }
    }
}

/// Per-line snapshot of the process environment.
///
/// Captured fresh for every input line; nothing is cached across lines, so a
/// `PATH` or `PWD` change made by a child of a previous line is picked up on
/// the next prompt.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The working directory, taken from `PWD`.
    pub working_dir: PathBuf,
    /// Executable search directories, taken from `PATH`.
    pub search_path: SearchPath,
}

impl Environment {
    /// Capture `PWD` and `PATH` from the process environment.
    ///
    /// When `PWD` is unset or empty, the process working directory is used
    /// instead, falling back to `.` if even that is unavailable.
    pub fn capture() -> Self {
        let working_dir = stdenv::var("PWD")
            .ok()
            .filter(|pwd| !pwd.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| stdenv::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let path = stdenv::var("PATH").ok();
        Self {
            working_dir,
            search_path: SearchPath::from_value(path.as_deref()),
        }
    }

    /// The prompt printed before each read.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.working_dir.display())
    }
}
