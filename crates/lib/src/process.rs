//! Subprocess execution.
//!
//! Both the compiler and the produced binary run through [`ProcessRunner`],
//! with stdio inherited so their output reaches the terminal unmodified.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// A fully described subprocess launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: OsString,
  pub args: Vec<OsString>,
  /// Working directory; `None` inherits the driver's.
  pub cwd: Option<PathBuf>,
}

impl Invocation {
  pub fn new(program: impl Into<OsString>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
    }
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
    self.cwd = Some(dir.as_ref().to_path_buf());
    self
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.to_string_lossy())?;
    for arg in &self.args {
      write!(f, " {}", arg.to_string_lossy())?;
    }
    Ok(())
  }
}

/// How a subprocess finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
  /// `None` when the process was terminated by a signal.
  pub code: Option<i32>,
}

impl ProcessStatus {
  pub fn from_code(code: i32) -> Self {
    Self { code: Some(code) }
  }

  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

impl From<std::process::ExitStatus> for ProcessStatus {
  fn from(status: std::process::ExitStatus) -> Self {
    Self { code: status.code() }
  }
}

impl fmt::Display for ProcessStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.code {
      Some(code) => write!(f, "exit code {}", code),
      None => write!(f, "termination by signal"),
    }
  }
}

/// Runs an [`Invocation`] to completion.
///
/// An `Err` means the process could not be launched at all; a launched process
/// that fails is an `Ok` with a non-success [`ProcessStatus`].
pub trait ProcessRunner {
  fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
  fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus> {
    (**self).run(invocation)
  }
}

/// Blocking runner backed by [`std::process::Command`] with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
  fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus> {
    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    if let Some(cwd) = &invocation.cwd {
      command.current_dir(cwd);
    }

    debug!(cmd = %invocation, cwd = ?invocation.cwd, "spawning process");

    let status = ProcessStatus::from(command.status()?);

    debug!(program = %invocation.program.to_string_lossy(), %status, "process exited");

    Ok(status)
  }
}
