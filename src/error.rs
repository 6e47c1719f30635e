//! Failures the driver makes decisions about.
//!
//! Plain I/O failures travel as `anyhow::Error` with context attached; the
//! variants here are the ones callers (and tests) need to tell apart.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stdout of `{0}` was not captured")]
    MissingStdout(String),

    #[error("{step} step failed ({status})")]
    StepFailed { step: &'static str, status: ExitStatus },
}
