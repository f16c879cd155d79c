use crate::command::{Argv, ExitStatus, FailureKind};
use crate::env::Environment;
use std::path::PathBuf;
use std::process::Command;

/// Resolve a bare command name to an executable path.
///
/// The working directory is tested first, then each search-path prefix in
/// declared order; the first existing path wins. The test is existence only,
/// with no check for execute permission or file type, so a directory with a
/// matching name is reported as found and the real failure surfaces at
/// launch time.
pub fn find_executable(name: &str, env: &Environment) -> Option<PathBuf> {
    let local = env.working_dir.join(name);
    if local.exists() {
        return Some(local);
    }
    env.search_path
        .dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}

/// A resolved external command ready to launch.
pub struct ExternalCommand {
    path: PathBuf,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(path: PathBuf, argv: &Argv) -> Self {
        Self {
            path,
            args: argv.args().to_vec(),
        }
    }

    /// Launch the resolved executable and wait for it to terminate.
    ///
    /// The child inherits the interpreter's stdio and its environment
    /// unchanged. Every outcome is folded into an [`ExitStatus`]; in
    /// particular a spawn failure is reported on stderr here and returned as
    /// [`FailureKind::LaunchFailed`], leaving the decision to abandon the
    /// whole interpreter to the caller.
    pub fn execute(&self, env: &Environment) -> ExitStatus {
        let spawned = Command::new(&self.path)
            .args(&self.args)
            .current_dir(&env.working_dir)
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(err) => {
                eprintln!("seqsh: cannot launch {}: {err}", self.path.display());
                return ExitStatus::Failure(FailureKind::LaunchFailed);
            }
        };
        match child.wait() {
            Ok(status) => match status.code() {
                Some(code) => ExitStatus::from_code(code),
                None => {
                    eprintln!("seqsh: {} {}", self.path.display(), describe_abnormal(status));
                    ExitStatus::Failure(FailureKind::AbnormalTermination)
                }
            },
            Err(err) => {
                eprintln!(
                    "seqsh: could not obtain the status of {}: {err}",
                    self.path.display()
                );
                ExitStatus::Failure(FailureKind::AbnormalTermination)
            }
        }
    }
}

#[cfg(unix)]
fn describe_abnormal(status: std::process::ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => format!("terminated by signal {signal}"),
        None => "terminated abnormally".to_string(),
    }
}

#[cfg(not(unix))]
fn describe_abnormal(_status: std::process::ExitStatus) -> String {
    "terminated abnormally".to_string()
}
