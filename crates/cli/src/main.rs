use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use buildrun_lib::Settings;
use buildrun_lib::consts::{APP_NAME, ENV_LOG};

mod cmd;
mod output;

use output::ColorChoice;

/// Build a project with an external compiler, then run the produced binary
///
/// Driver options are long-only so that every single-dash token is
/// forwarded to the binary.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
  /// Print help
  #[allow(dead_code)]
  #[arg(long, action = ArgAction::Help)]
  help: Option<bool>,

  /// Print version
  #[allow(dead_code)]
  #[arg(long, action = ArgAction::Version)]
  version: Option<bool>,

  /// Project root; the compiler and the binary run here
  #[arg(long, value_name = "DIR")]
  project_dir: Option<PathBuf>,

  /// Compiler executable (default: odin)
  #[arg(long, value_name = "PROGRAM")]
  compiler: Option<String>,

  /// Source directory passed to the compiler (default: src)
  #[arg(long, value_name = "DIR")]
  source_dir: Option<PathBuf>,

  /// Output directory for the binary (default: bin)
  #[arg(long, value_name = "DIR")]
  out_dir: Option<PathBuf>,

  /// Binary name without executable suffix (default: rl)
  #[arg(long, value_name = "NAME")]
  name: Option<String>,

  /// When to color output
  #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
  color: ColorChoice,

  /// Enable debug logging
  #[arg(long)]
  verbose: bool,

  /// `--debug` | `--release` and an optional argument forwarded to the binary
  #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
  tokens: Vec<String>,
}

impl Cli {
  /// Environment settings with command-line overrides applied. Empty values
  /// are ignored, matching how empty environment variables are treated.
  fn settings(&self) -> Settings {
    let mut settings = Settings::from_env();
    if let Some(dir) = non_empty(&self.project_dir) {
      settings.project_dir = dir.clone();
    }
    if let Some(compiler) = non_empty(&self.compiler) {
      settings.compiler = compiler.clone();
    }
    if let Some(dir) = non_empty(&self.source_dir) {
      settings.source_dir = dir.clone();
    }
    if let Some(dir) = non_empty(&self.out_dir) {
      settings.out_dir = dir.clone();
    }
    if let Some(name) = non_empty(&self.name) {
      settings.binary_name = name.clone();
    }
    settings
  }
}

fn non_empty<T: AsRef<std::ffi::OsStr>>(value: &Option<T>) -> Option<&T> {
  value
    .as_ref()
    .filter(|value| !AsRef::<std::ffi::OsStr>::as_ref(*value).is_empty())
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  cli.color.apply();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  cmd::cmd_build_run(cli.settings(), &cli.tokens)
}
