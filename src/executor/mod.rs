//! Runs a command and forwards its stdout line by line while it runs.
//!
//! stderr is inherited, so cmake's diagnostics reach the terminal directly.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{info, warn};

use crate::error::DriverError;
use crate::model::FailurePolicy;
use crate::plan::CommandLine;

/// Spawn `cmd` in `cwd`, copy each stdout line to `sink` as soon as it is
/// read, and return the exit status once the stream is drained.
pub fn stream<W: Write>(cmd: &CommandLine, cwd: &Path, sink: &mut W) -> Result<ExitStatus> {
    let mut child = Command::new(cmd.program())
        .args(cmd.args())
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| DriverError::Spawn {
            program: cmd.program().to_string(),
            source,
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| DriverError::MissingStdout(cmd.program().to_string()))?;
    let reader = BufReader::new(stdout);

    if let Err(e) = forward(reader, sink, cmd.program()) {
        // nobody is reading any more; don't leave the child behind
        let _ = child.kill();
        let _ = child.wait();
        return Err(e);
    }

    child
        .wait()
        .with_context(|| format!("Waiting for `{}`", cmd.program()))
}

fn forward<R: BufRead, W: Write>(mut reader: R, sink: &mut W, program: &str) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Reading output of `{program}`"))?;
        if n == 0 {
            return Ok(());
        }
        // tools occasionally emit non-UTF-8 (compiler locales); never fail on it
        let line = String::from_utf8_lossy(&buf);
        writeln!(sink, "{}", line.trim_end_matches(['\n', '\r']))?;
        sink.flush()?;
    }
}

/// Run one named step, streaming to stdout, and apply `policy` to a
/// non-zero exit.
pub fn run_step(
    step: &'static str,
    cmd: &CommandLine,
    cwd: &Path,
    policy: FailurePolicy,
) -> Result<ExitStatus> {
    info!("running {step} step in {}", cwd.display());
    let stdout = std::io::stdout();
    let status = stream(cmd, cwd, &mut stdout.lock())?;

    if status.success() {
        return Ok(status);
    }
    match policy {
        FailurePolicy::Halt => Err(DriverError::StepFailed { step, status }.into()),
        FailurePolicy::KeepGoing => {
            warn!("{step} step failed ({status}), continuing");
            Ok(status)
        }
    }
}
