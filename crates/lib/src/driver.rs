//! Sequences parse → build → run.
//!
//! The build step is fail-fast: a [`BuildError`] is returned and the binary is
//! never launched. The run step's outcome is carried in [`DriverReport`] and
//! never turns into an error.

use tracing::debug;

use crate::build::{self, BuildError, BuildResult};
use crate::config::BuildConfig;
use crate::process::ProcessRunner;
use crate::report::Reporter;
use crate::run::{self, RunOutcome};
use crate::settings::Settings;
use crate::util::format_duration;

/// What happened during one successful driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverReport {
  pub build: BuildResult,
  pub run: RunOutcome,
}

pub struct Driver<R, P> {
  settings: Settings,
  runner: R,
  reporter: P,
}

impl<R: ProcessRunner, P: Reporter> Driver<R, P> {
  pub fn new(settings: Settings, runner: R, reporter: P) -> Self {
    Self {
      settings,
      runner,
      reporter,
    }
  }

  /// Build, then run the produced binary.
  ///
  /// Returns `Err` only for build failures, after reporting them.
  pub fn execute(&self, config: &BuildConfig) -> Result<DriverReport, BuildError> {
    debug!(?config, settings = ?self.settings, "driver starting");
    self.reporter.status("Build process started");

    let build = self.build(config)?;
    let run = self.run(&build, config);

    self.reporter.status("Build process and execution completed");
    Ok(DriverReport { build, run })
  }

  fn build(&self, config: &BuildConfig) -> Result<BuildResult, BuildError> {
    self
      .reporter
      .status(&format!("Building project in {} mode...", config.mode));

    match build::build(&self.settings, config.mode, &self.runner, &self.reporter) {
      Ok(result) => {
        self.reporter.status(&format!(
          "Build completed successfully in {}. Binary saved as {}",
          format_duration(result.elapsed),
          result.output_path.display()
        ));
        Ok(result)
      }
      Err(err) => {
        self.reporter.error(&capitalize(&err.to_string()));
        Err(err)
      }
    }
  }

  fn run(&self, build: &BuildResult, config: &BuildConfig) -> RunOutcome {
    self
      .reporter
      .status(&format!("Running {}...", build.output_path.display()));
    run::run(
      &build.binary_path,
      config.target_argument.as_deref(),
      &self.settings.project_dir,
      &self.runner,
      &self.reporter,
    )
  }
}

fn capitalize(message: &str) -> String {
  let mut chars = message.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
