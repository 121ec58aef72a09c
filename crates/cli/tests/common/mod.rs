//! Helpers shared by the buildrun CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in for the compiler. Records its arguments, one per line, in
/// `compiler-args.log` and writes a shell-script "binary" to the `-out:` path.
///
/// - `FAKE_COMPILE_EXIT`: exit code of the compiler itself
/// - `FAKE_SKIP_OUTPUT`: succeed without producing a binary
/// - `FAKE_RUN_EXIT`: exit code of the produced binary
pub const FAKE_COMPILER: &str = r##"#!/bin/sh
out=""
for arg in "$@"; do
  printf '%s\n' "$arg" >> compiler-args.log
  case "$arg" in
    -out:*) out="${arg#-out:}" ;;
  esac
done
echo "fake compiler timings"
code="${FAKE_COMPILE_EXIT:-0}"
if [ "$code" != "0" ]; then
  exit "$code"
fi
if [ -n "$FAKE_SKIP_OUTPUT" ]; then
  exit 0
fi
cat > "$out" <<'BINARY'
#!/bin/sh
echo "binary ran with: $*"
echo "binary cwd: $(pwd)"
exit "${FAKE_RUN_EXIT:-0}"
BINARY
chmod +x "$out"
"##;

/// Get a Command for the buildrun binary with colors disabled.
pub fn buildrun_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("buildrun");
  cmd
    .env_remove("BUILDRUN_PROJECT_DIR")
    .env_remove("BUILDRUN_COMPILER")
    .env_remove("BUILDRUN_COMPILER_COMMAND")
    .env_remove("BUILDRUN_SOURCE_DIR")
    .env_remove("BUILDRUN_OUT_DIR")
    .env_remove("BUILDRUN_BINARY_NAME")
    .env_remove("BUILDRUN_LOG")
    .arg("--color")
    .arg("never");
  cmd
}

/// A temp directory holding `project/` and the fake compiler next to it.
pub struct Fixture {
  pub temp: TempDir,
}

impl Fixture {
  #[cfg(unix)]
  pub fn new() -> Self {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("project").join("src")).unwrap();

    let compiler = temp.path().join("fake-compiler");
    std::fs::write(&compiler, FAKE_COMPILER).unwrap();
    std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755)).unwrap();

    Self { temp }
  }

  pub fn project_dir(&self) -> PathBuf {
    self.temp.path().join("project")
  }

  pub fn compiler(&self) -> PathBuf {
    self.temp.path().join("fake-compiler")
  }

  /// `buildrun --project-dir <project> --compiler <fake>`
  pub fn cmd(&self) -> Command {
    let mut cmd = buildrun_cmd();
    cmd
      .arg("--project-dir")
      .arg(self.project_dir())
      .arg("--compiler")
      .arg(self.compiler());
    cmd
  }

  pub fn binary(&self) -> PathBuf {
    self.project_dir().join("bin").join("rl")
  }

  /// Arguments the fake compiler received, across every invocation.
  pub fn compiler_args(&self) -> Vec<String> {
    read_lines(&self.project_dir().join("compiler-args.log"))
  }
}

fn read_lines(path: &Path) -> Vec<String> {
  std::fs::read_to_string(path)
    .unwrap_or_default()
    .lines()
    .map(str::to_string)
    .collect()
}
