//! The build step: invoke the external compiler and check its status.
//!
//! The compiler is called as
//! `<compiler> <command> <source_dir> -out:<output_path> [mode flags] -show-timings`
//! from the project directory. Any failure here is fatal to the driver.

mod types;

use std::time::Instant;

use tracing::{debug, info};

pub use types::*;

use crate::config::Mode;
use crate::process::{Invocation, ProcessRunner};
use crate::report::Reporter;
use crate::settings::Settings;

/// Always passed last so the compiler prints its own timing breakdown.
pub const SHOW_TIMINGS_FLAG: &str = "-show-timings";

pub const TIMINGS_SECTION: &str = "Build Timings";

/// Build the compiler invocation for `mode`.
pub fn compiler_invocation(settings: &Settings, mode: Mode) -> Invocation {
  let mut invocation = Invocation::new(&settings.compiler);

  if !settings.compiler_command.is_empty() {
    invocation = invocation.arg(&settings.compiler_command);
  }

  let mut out_arg = std::ffi::OsString::from("-out:");
  out_arg.push(settings.output_path());

  invocation
    .arg(settings.source_dir.as_os_str())
    .arg(out_arg)
    .args(mode.compiler_flags().iter().copied())
    .arg(SHOW_TIMINGS_FLAG)
    .current_dir(&settings.project_dir)
}

/// Create the output directory if it is missing. Succeeds when it already exists.
pub fn ensure_out_dir(settings: &Settings) -> Result<(), BuildError> {
  let path = settings.resolved_out_dir();
  std::fs::create_dir_all(&path).map_err(|source| BuildError::CreateOutDir {
    path: path.clone(),
    source,
  })?;
  debug!(path = %path.display(), "output directory ready");
  Ok(())
}

/// Run the compiler, relaying its output between section markers.
pub fn build<R, P>(
  settings: &Settings,
  mode: Mode,
  runner: &R,
  reporter: &P,
) -> Result<BuildResult, BuildError>
where
  R: ProcessRunner + ?Sized,
  P: Reporter + ?Sized,
{
  ensure_out_dir(settings)?;

  let invocation = compiler_invocation(settings, mode);
  info!(mode = %mode, cmd = %invocation, "invoking compiler");

  reporter.section_begin(TIMINGS_SECTION);
  let started = Instant::now();
  let result = runner.run(&invocation);
  let elapsed = started.elapsed();
  reporter.section_end(TIMINGS_SECTION);

  let status = result.map_err(|source| BuildError::Launch {
    program: settings.compiler.clone(),
    source,
  })?;

  if !status.success() {
    return Err(BuildError::CompilerFailed { status });
  }

  Ok(BuildResult {
    output_path: settings.output_path(),
    binary_path: settings.resolved_output_path(),
    exit_status: status,
    elapsed,
  })
}
