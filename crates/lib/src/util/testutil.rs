//! Test utilities for buildrun-lib.
//!
//! Cross-platform shell helpers for tests that spawn real processes, and
//! recording doubles for [`ProcessRunner`] and [`Reporter`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::process::{Invocation, ProcessRunner, ProcessStatus};
use crate::report::Reporter;

/// Returns the shell command and args to exit with `code`.
#[cfg(unix)]
pub fn shell_exit(code: i32) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), format!("exit {}", code)])
}

#[cfg(windows)]
pub fn shell_exit(code: i32) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), format!("exit {}", code)])
}

/// Returns the command and args to create a marker file in the current directory.
#[cfg(unix)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  ("/usr/bin/touch", vec![filename.to_string()])
}

#[cfg(windows)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  (
    "powershell.exe",
    vec![
      "-NoProfile".to_string(),
      "-Command".to_string(),
      format!("New-Item -ItemType File -Path '{}' -Force | Out-Null", filename),
    ],
  )
}

/// A [`ProcessRunner`] that records every invocation and answers with
/// scripted exit codes, one per call.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  codes: RefCell<VecDeque<i32>>,
  launchable: bool,
  invocations: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
  pub fn with_codes(codes: impl IntoIterator<Item = i32>) -> Self {
    Self {
      codes: RefCell::new(codes.into_iter().collect()),
      launchable: true,
      invocations: RefCell::default(),
    }
  }

  /// Every launch fails as if the program did not exist.
  pub fn unlaunchable() -> Self {
    Self::default()
  }

  pub fn invocations(&self) -> Vec<Invocation> {
    self.invocations.borrow().clone()
  }
}

impl ProcessRunner for RecordingRunner {
  fn run(&self, invocation: &Invocation) -> io::Result<ProcessStatus> {
    self.invocations.borrow_mut().push(invocation.clone());
    if !self.launchable {
      return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
    }
    let code = self
      .codes
      .borrow_mut()
      .pop_front()
      .expect("RecordingRunner ran out of scripted exit codes");
    Ok(ProcessStatus::from_code(code))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
  Status(String),
  Error(String),
  SectionBegin(String),
  SectionEnd(String),
}

/// A [`Reporter`] that keeps every message in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
  events: RefCell<Vec<ReportEvent>>,
}

impl RecordingReporter {
  pub fn events(&self) -> Vec<ReportEvent> {
    self.events.borrow().clone()
  }

  pub fn statuses(&self) -> Vec<String> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        ReportEvent::Status(message) => Some(message),
        _ => None,
      })
      .collect()
  }

  pub fn errors(&self) -> Vec<String> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        ReportEvent::Error(message) => Some(message),
        _ => None,
      })
      .collect()
  }
}

impl Reporter for RecordingReporter {
  fn status(&self, message: &str) {
    self.events.borrow_mut().push(ReportEvent::Status(message.to_string()));
  }

  fn error(&self, message: &str) {
    self.events.borrow_mut().push(ReportEvent::Error(message.to_string()));
  }

  fn section_begin(&self, title: &str) {
    self.events.borrow_mut().push(ReportEvent::SectionBegin(title.to_string()));
  }

  fn section_end(&self, title: &str) {
    self.events.borrow_mut().push(ReportEvent::SectionEnd(title.to_string()));
  }
}
