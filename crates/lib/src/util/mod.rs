//! Shared utilities.
//!
//! Duration formatting for status lines, plus test helpers.

use std::time::Duration;

#[cfg(test)]
pub mod testutil;

/// Human-friendly duration: `50ms`, `1.50s`, `1m 5s`.
pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}
