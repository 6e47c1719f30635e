//! Output directory bookkeeping.
//!
//! Two levels are managed: `<anchor>/build` and `<anchor>/build/handmade`.
//! Both are created on demand; only the inner one is ever wiped.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::DriverError;
use crate::model::{BUILD_DIR, PROJECT_NAME};

/// The three directories one run touches. Paths are kept as UTF-8 strings
/// because the source path is handed to cmake as a command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Project sources, handed to the generator.
    source_dir: String,
    /// Root of all build output.
    build_dir: String,
    /// Where cmake runs and everything for this project lands.
    project_dir: String,
}

impl Layout {
    /// Fails on an anchor that is not valid UTF-8; such a path could not be
    /// passed to cmake unchanged.
    pub fn new(anchor: &Path) -> Result<Self> {
        let anchor = anchor
            .to_str()
            .ok_or_else(|| DriverError::NonUtf8Path(anchor.to_path_buf()))?;
        let anchor = Path::new(anchor);
        let build_dir = anchor.join(BUILD_DIR);
        Ok(Self {
            source_dir: utf8(anchor.join(PROJECT_NAME)),
            project_dir: utf8(build_dir.join(PROJECT_NAME)),
            build_dir: utf8(build_dir),
        })
    }

    pub fn source_dir(&self) -> &Path {
        Path::new(&self.source_dir)
    }

    pub fn build_dir(&self) -> &Path {
        Path::new(&self.build_dir)
    }

    pub fn project_dir(&self) -> &Path {
        Path::new(&self.project_dir)
    }

    pub fn source_dir_str(&self) -> &str {
        &self.source_dir
    }

    pub fn project_dir_str(&self) -> &str {
        &self.project_dir
    }
}

// joining UTF-8 components onto a UTF-8 base stays UTF-8
fn utf8(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

/// Optionally wipe the project directory, then make sure both output
/// directories exist, outer first.
pub fn prepare(layout: &Layout, clean: bool) -> Result<()> {
    if clean {
        remove_project_dir(layout.project_dir())?;
    }

    for dir in [layout.build_dir(), layout.project_dir()] {
        ensure_dir(dir)?;
    }
    Ok(())
}

fn remove_project_dir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {
            debug!("removed {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("nothing to clean at {}", dir.display());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Removing {}", dir.display())),
    }
}

/// Create `dir` and its parents. An existing directory is fine; an existing
/// file in its place is not.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => {
            debug!("using {}", dir.display());
            Ok(())
        }
        Err(_) if dir.is_dir() => Ok(()),
        Err(_) if dir.exists() => Err(DriverError::NotADirectory(dir.to_path_buf()).into()),
        Err(e) => Err(e).with_context(|| format!("Creating {}", dir.display())),
    }
}
