//! buildrun-lib: build an external-compiler project, then run the result.
//!
//! - `BuildConfig`: mode and target argument parsed from command-line tokens
//! - `Settings`: project location and toolchain naming
//! - `build`: compiler invocation, fail-fast
//! - `run`: produced-binary invocation, failures reported but swallowed
//! - `Driver`: sequences the two steps against a `ProcessRunner` and a `Reporter`

pub mod build;
pub mod config;
pub mod consts;
pub mod driver;
pub mod platform;
pub mod process;
pub mod report;
pub mod run;
pub mod settings;
pub mod util;

pub use build::{BuildError, BuildResult};
pub use config::{BuildConfig, Mode};
pub use driver::{Driver, DriverReport};
pub use process::{Invocation, ProcessRunner, ProcessStatus, SystemRunner};
pub use report::Reporter;
pub use run::RunOutcome;
pub use settings::Settings;
