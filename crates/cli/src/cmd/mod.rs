mod build_run;

pub use build_run::cmd_build_run;
