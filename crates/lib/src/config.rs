//! Build configuration parsed from command-line tokens.
//!
//! Tokens are processed strictly in order: `--debug` and `--release` are
//! unconditional assignments, so whichever appears last decides the mode,
//! and every token that does not start with `--` replaces the target argument.

use std::fmt;

use tracing::warn;

pub const DEBUG_FLAG: &str = "--debug";
pub const RELEASE_FLAG: &str = "--release";

const FLAG_PREFIX: &str = "--";

/// Compilation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
  /// Debug symbols retained.
  #[default]
  Debug,
  /// Optimized for speed with bounds checks and asserts disabled.
  Release,
}

impl Mode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Mode::Debug => "debug",
      Mode::Release => "release",
    }
  }

  /// Compiler flags selected by this mode.
  pub fn compiler_flags(&self) -> &'static [&'static str] {
    match self {
      Mode::Debug => &["-debug"],
      Mode::Release => &["-o:speed", "-no-bounds-check", "-disable-assert"],
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// The resolved mode and optional target argument for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
  pub mode: Mode,
  /// Forwarded as a single argument to the produced binary.
  pub target_argument: Option<String>,
}

impl BuildConfig {
  /// Parse the ordered token list.
  ///
  /// Unrecognized `--` tokens are neither a mode nor a target argument; they
  /// are skipped with a warning.
  pub fn from_args<I, S>(tokens: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut config = BuildConfig::default();

    for token in tokens {
      let token = token.as_ref();
      match token {
        DEBUG_FLAG => config.mode = Mode::Debug,
        RELEASE_FLAG => config.mode = Mode::Release,
        _ if token.starts_with(FLAG_PREFIX) => {
          warn!(token = %token, "ignoring unrecognized flag");
        }
        _ => config.target_argument = Some(token.to_string()),
      }
    }

    config
  }
}
