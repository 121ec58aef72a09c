//! User-facing progress reporting.
//!
//! The driver never writes to the terminal itself; it describes what is
//! happening through a [`Reporter`], which the CLI renders with colors.

/// Receives progress messages from the driver.
pub trait Reporter {
  /// A driver status line, e.g. "Build process started".
  fn status(&self, message: &str);

  /// A failure. Whether it is fatal is decided by the caller, not the reporter.
  fn error(&self, message: &str);

  /// Printed before a subprocess whose output is relayed.
  fn section_begin(&self, title: &str);

  /// Printed after that subprocess finishes.
  fn section_end(&self, title: &str);
}

impl<P: Reporter + ?Sized> Reporter for &P {
  fn status(&self, message: &str) {
    (**self).status(message)
  }

  fn error(&self, message: &str) {
    (**self).error(message)
  }

  fn section_begin(&self, title: &str) {
    (**self).section_begin(title)
  }

  fn section_end(&self, title: &str) {
    (**self).section_end(title)
  }
}
