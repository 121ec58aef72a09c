//! CLI output formatting utilities.
//!
//! Driver status lines, errors and the markers that bracket relayed
//! subprocess output. Colors are applied only when the stream supports them.

use buildrun_lib::Reporter;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream, Style};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
  /// Color when writing to a terminal
  #[default]
  Auto,
  Always,
  Never,
}

impl ColorChoice {
  /// One-time terminal color setup for the whole process.
  pub fn apply(self) {
    match self {
      ColorChoice::Auto => owo_colors::unset_override(),
      ColorChoice::Always => owo_colors::set_override(true),
      ColorChoice::Never => owo_colors::set_override(false),
    }
  }
}

pub mod prefixes {
  pub const SCRIPT: &str = "[SCRIPT]";
  pub const ERROR: &str = "[ERROR]";
}

pub fn section_begin_marker(title: &str) -> String {
  format!("--- {} ---", title)
}

pub fn section_end_marker(title: &str) -> String {
  format!("--- {} End ---", title)
}

pub fn print_script(message: &str) {
  let line = format!("{} {}", prefixes::SCRIPT, message);
  println!(
    "{}",
    line.if_supports_color(Stream::Stdout, |s| s.style(Style::new().bright_cyan().bold()))
  );
}

pub fn print_error(message: &str) {
  let line = format!("{} {}", prefixes::ERROR, message);
  eprintln!(
    "{}",
    line.if_supports_color(Stream::Stderr, |s| s.style(Style::new().bright_red().bold()))
  );
}

pub fn print_marker(marker: &str) {
  println!(
    "{}",
    marker.if_supports_color(Stream::Stdout, |s| s.style(Style::new().bright_green().bold()))
  );
}

/// Renders driver progress on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
  fn status(&self, message: &str) {
    print_script(message);
  }

  fn error(&self, message: &str) {
    print_error(message);
  }

  fn section_begin(&self, title: &str) {
    print_marker(&section_begin_marker(title));
  }

  fn section_end(&self, title: &str) {
    print_marker(&section_end_marker(title));
  }
}
