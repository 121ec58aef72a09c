//! Where the project lives and how the toolchain is named.
//!
//! Values come from `BUILDRUN_*` environment variables with built-in
//! defaults; callers layer command-line overrides on top of [`Settings::from_env`].

use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{
  DEFAULT_BINARY_NAME, DEFAULT_COMPILER, DEFAULT_COMPILER_COMMAND, DEFAULT_OUT_DIR,
  DEFAULT_SOURCE_DIR, ENV_BINARY_NAME, ENV_COMPILER, ENV_COMPILER_COMMAND, ENV_OUT_DIR,
  ENV_PROJECT_DIR, ENV_SOURCE_DIR,
};
use crate::platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// Working directory for the compiler and base for relative paths.
  pub project_dir: PathBuf,
  pub compiler: String,
  /// Subcommand placed before the source directory. Empty means none.
  pub compiler_command: String,
  pub source_dir: PathBuf,
  pub out_dir: PathBuf,
  /// Base name of the produced binary, without the executable suffix.
  pub binary_name: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      project_dir: PathBuf::from("."),
      compiler: DEFAULT_COMPILER.to_string(),
      compiler_command: DEFAULT_COMPILER_COMMAND.to_string(),
      source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
      out_dir: PathBuf::from(DEFAULT_OUT_DIR),
      binary_name: DEFAULT_BINARY_NAME.to_string(),
    }
  }
}

impl Settings {
  /// Read settings from the environment, falling back to defaults for unset
  /// or empty variables.
  pub fn from_env() -> Self {
    let defaults = Self::default();
    Self {
      project_dir: env_var(ENV_PROJECT_DIR).map(PathBuf::from).unwrap_or(defaults.project_dir),
      compiler: env_var(ENV_COMPILER).unwrap_or(defaults.compiler),
      compiler_command: std::env::var(ENV_COMPILER_COMMAND).unwrap_or(defaults.compiler_command),
      source_dir: env_var(ENV_SOURCE_DIR).map(PathBuf::from).unwrap_or(defaults.source_dir),
      out_dir: env_var(ENV_OUT_DIR).map(PathBuf::from).unwrap_or(defaults.out_dir),
      binary_name: env_var(ENV_BINARY_NAME).unwrap_or(defaults.binary_name),
    }
  }

  /// Path handed to the compiler as `-out:`, relative to the project
  /// directory unless `out_dir` is absolute.
  pub fn output_path(&self) -> PathBuf {
    platform::executable_path(&self.out_dir, &self.binary_name)
  }

  /// Output directory resolved against the project directory.
  pub fn resolved_out_dir(&self) -> PathBuf {
    self.resolve(&self.out_dir)
  }

  /// Location of the produced binary as seen from the driver process.
  pub fn resolved_output_path(&self) -> PathBuf {
    self.resolve(&self.output_path())
  }

  fn resolve(&self, path: &Path) -> PathBuf {
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.project_dir.join(path)
    }
  }

  /// Canonicalize the project directory so child processes and log lines
  /// see an absolute path. Fails if the directory does not exist.
  pub fn canonicalize_project_dir(&mut self) -> io::Result<()> {
    self.project_dir = dunce::canonicalize(&self.project_dir)?;
    Ok(())
  }
}

/// Non-empty value of `key`. The compiler command skips this so it can be set to empty.
fn env_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|value| !value.is_empty())
}
