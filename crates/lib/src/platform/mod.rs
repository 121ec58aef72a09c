pub mod os;

use std::path::{Path, PathBuf};

pub use os::Os;

/// Executable suffix for the platform this binary was compiled for.
///
/// Falls back to the compile-time constant for operating systems that [`Os`]
/// does not enumerate, so exotic unix targets still get an empty suffix.
pub fn exe_suffix() -> &'static str {
  match Os::current() {
    Some(os) => os.exe_suffix(),
    None => std::env::consts::EXE_SUFFIX,
  }
}

/// Joins `dir` and `name` into the path of an executable, adding the
/// platform suffix (`bin/rl` on unix, `bin\rl.exe` on Windows).
pub fn executable_path(dir: &Path, name: &str) -> PathBuf {
  dir.join(format!("{}{}", name, exe_suffix()))
}
