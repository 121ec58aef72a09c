//! Implementation of the default `buildrun` command.
//!
//! Builds the project with the external compiler, then runs the produced
//! binary. Exits with status 1 when the build fails; a failing binary is only
//! reported.

use anyhow::{Context, Result};
use tracing::{debug, info};

use buildrun_lib::{BuildConfig, Driver, Settings, SystemRunner};

use crate::output::{TerminalReporter, print_error};

/// Execute the build-and-run command.
///
/// `tokens` are the build tokens left after driver options: `--debug`,
/// `--release` and the argument forwarded to the binary.
pub fn cmd_build_run(mut settings: Settings, tokens: &[String]) -> Result<()> {
  if !settings.project_dir.is_dir() {
    print_error(&format!(
      "Project directory not found: {}",
      settings.project_dir.display()
    ));
    std::process::exit(1);
  }

  settings.canonicalize_project_dir().with_context(|| {
    format!(
      "Failed to resolve project directory {}",
      settings.project_dir.display()
    )
  })?;

  let config = BuildConfig::from_args(tokens);
  info!(mode = %config.mode, target = ?config.target_argument, "resolved build configuration");

  let driver = Driver::new(settings, SystemRunner, TerminalReporter);
  match driver.execute(&config) {
    Ok(report) => {
      debug!(binary = %report.build.binary_path.display(), run = %report.run, "driver finished");
      Ok(())
    }
    Err(err) => {
      debug!(error = %err, code = ?err.compiler_code(), "build failed, skipping run");
      std::process::exit(1);
    }
  }
}
