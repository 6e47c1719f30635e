//! Turns a `BuildConfig` into the two cmake command lines.
//!
//! Pure: no filesystem access, no environment lookups, cannot fail.

use serde::Serialize;
use std::fmt;

use crate::layout::Layout;
use crate::model::{BuildConfig, Platform, Switch, WIN32_GENERATOR};

/// One program invocation as an ordered token list, program first.
/// Never empty: the program is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    pub fn arg(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    fn define(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.arg(format!("-D{name}={value}"))
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if token.is_empty() || token.contains([' ', '"', '\\']) {
                f.write_str("\"")?;
                for c in token.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")?;
            } else {
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

/// Generate step, then build step. Serialised as-is for `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub config: BuildConfig,
    pub working_dir: String,
    pub generate: CommandLine,
    pub build: CommandLine,
}

pub fn plan(config: &BuildConfig, layout: &Layout, tool: &str) -> BuildPlan {
    BuildPlan {
        config: config.clone(),
        working_dir: layout.project_dir_str().to_string(),
        generate: generate_command(config, layout, tool),
        build: build_command(config, tool),
    }
}

pub fn generate_command(config: &BuildConfig, layout: &Layout, tool: &str) -> CommandLine {
    let mut cmd = CommandLine::new(tool);
    cmd.arg(layout.source_dir_str());

    match config.platform {
        Platform::Win32 => {
            for token in WIN32_GENERATOR {
                cmd.arg(token);
            }
        }
        Platform::Linux => {
            cmd.define("CMAKE_BUILD_TYPE", config.build_type);
        }
    }

    cmd.define("use_sdl", Switch(config.use_sdl))
        .define("diagnostic", Switch(config.diagnostic))
        .define("internal_build", Switch(config.internal_build));
    cmd
}

pub fn build_command(config: &BuildConfig, tool: &str) -> CommandLine {
    let mut cmd = CommandLine::new(tool);
    cmd.arg("--build").arg(".");

    // single-config generators already got the build type at generate time
    if config.platform == Platform::Win32 {
        cmd.arg("--config").arg(config.build_type.as_str());
    }
    cmd
}
