pub const APP_NAME: &str = "buildrun";

/// Compiler program invoked when nothing else is configured
pub const DEFAULT_COMPILER: &str = "odin";
/// Subcommand passed to the compiler ahead of the source directory
pub const DEFAULT_COMPILER_COMMAND: &str = "build";
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_OUT_DIR: &str = "bin";
pub const DEFAULT_BINARY_NAME: &str = "rl";

pub const ENV_PROJECT_DIR: &str = "BUILDRUN_PROJECT_DIR";
pub const ENV_COMPILER: &str = "BUILDRUN_COMPILER";
pub const ENV_COMPILER_COMMAND: &str = "BUILDRUN_COMPILER_COMMAND";
pub const ENV_SOURCE_DIR: &str = "BUILDRUN_SOURCE_DIR";
pub const ENV_OUT_DIR: &str = "BUILDRUN_OUT_DIR";
pub const ENV_BINARY_NAME: &str = "BUILDRUN_BINARY_NAME";
pub const ENV_LOG: &str = "BUILDRUN_LOG";
