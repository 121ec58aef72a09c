//! The run step: launch the produced binary.
//!
//! Failures here are reported and swallowed. The outcome is returned as a
//! value so the caller can log it, but it never aborts the driver.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::process::{Invocation, ProcessRunner, ProcessStatus};
use crate::report::Reporter;

pub const PROGRAM_SECTION: &str = "Program Output";

/// How the produced binary fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  Succeeded,
  /// The binary ran and exited unsuccessfully.
  Failed { status: ProcessStatus },
  /// The binary could not be started.
  LaunchFailed { message: String },
}

impl RunOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, RunOutcome::Succeeded)
  }
}

impl fmt::Display for RunOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RunOutcome::Succeeded => write!(f, "succeeded"),
      RunOutcome::Failed { status } => write!(f, "Binary execution failed with {}", status),
      RunOutcome::LaunchFailed { message } => {
        write!(f, "An error occurred while running the binary: {}", message)
      }
    }
  }
}

/// `<binary> [target_argument]`, started from `project_dir` so the binary
/// sees the same working directory the compiler did.
pub fn run_invocation(binary: &Path, target_argument: Option<&str>, project_dir: &Path) -> Invocation {
  let invocation = Invocation::new(binary.as_os_str()).current_dir(project_dir);
  match target_argument {
    Some(arg) => invocation.arg(arg),
    None => invocation,
  }
}

/// Run the binary, relaying its output between section markers.
pub fn run<R, P>(
  binary: &Path,
  target_argument: Option<&str>,
  project_dir: &Path,
  runner: &R,
  reporter: &P,
) -> RunOutcome
where
  R: ProcessRunner + ?Sized,
  P: Reporter + ?Sized,
{
  let invocation = run_invocation(binary, target_argument, project_dir);
  info!(cmd = %invocation, "running binary");

  reporter.section_begin(PROGRAM_SECTION);
  let outcome = match runner.run(&invocation) {
    Ok(status) if status.success() => RunOutcome::Succeeded,
    Ok(status) => RunOutcome::Failed { status },
    Err(err) => RunOutcome::LaunchFailed {
      message: err.to_string(),
    },
  };

  if !outcome.is_success() {
    warn!(binary = %binary.display(), outcome = %outcome, "binary did not succeed");
    reporter.error(&outcome.to_string());
  }
  reporter.section_end(PROGRAM_SECTION);

  outcome
}
