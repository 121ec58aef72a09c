//! Types produced by the build step.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::process::ProcessStatus;

/// Errors that stop the driver before anything is run.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The output directory could not be created.
  #[error("failed to create output directory {}: {source}", path.display())]
  CreateOutDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The compiler executable could not be started.
  #[error("failed to launch compiler `{program}`: {source}")]
  Launch {
    program: String,
    #[source]
    source: io::Error,
  },

  /// The compiler ran and reported failure.
  #[error("build failed with {status}")]
  CompilerFailed { status: ProcessStatus },
}

impl BuildError {
  /// Exit code of the compiler, when it ran and exited normally.
  pub fn compiler_code(&self) -> Option<i32> {
    match self {
      BuildError::CompilerFailed { status } => status.code,
      _ => None,
    }
  }
}

/// Result of a successful compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
  /// The `-out:` path given to the compiler.
  pub output_path: PathBuf,

  /// The produced binary resolved against the project directory.
  pub binary_path: PathBuf,

  pub exit_status: ProcessStatus,

  /// Wall-clock time spent in the compiler.
  pub elapsed: Duration,
}
