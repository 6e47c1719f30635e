// fixed names that describe where the project lives relative to the anchor
pub const DEFAULT_ANCHOR: &str = "../..";
pub const BUILD_DIR: &str = "build";
pub const PROJECT_NAME: &str = "handmade";

pub const DEFAULT_TOOL: &str = "cmake";

// win32 always generates for the same Visual Studio toolchain
pub const WIN32_GENERATOR: [&str; 2] = ["-G", "Visual Studio 14 2015 Win64"];

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Target platform, spelled exactly as it is accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Platform {
    #[value(name = "win32")]
    #[serde(rename = "win32")]
    Win32,
    #[value(name = "linux")]
    #[serde(rename = "linux")]
    Linux,
}

/// CMake build type. The rendered name is passed through to cmake verbatim,
/// so it keeps cmake's own capitalisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum BuildType {
    #[value(name = "Release")]
    Release,
    #[default]
    #[value(name = "Debug")]
    Debug,
    #[value(name = "RelWithDebInfo")]
    RelWithDebInfo,
    #[value(name = "MinSizeRel")]
    MinSizeRel,
}

impl BuildType {
    pub const ALL: [BuildType; 4] = [
        BuildType::Release,
        BuildType::Debug,
        BuildType::RelWithDebInfo,
        BuildType::MinSizeRel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Release => "Release",
            BuildType::Debug => "Debug",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boolean as cmake wants to see it: `on` / `off`, never `true` / `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch(pub bool);

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "on" } else { "off" })
    }
}

/// Everything one invocation needs, validated once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub platform: Platform,
    pub build_type: BuildType,
    pub clean: bool,
    pub use_sdl: bool,
    pub diagnostic: bool,
    pub internal_build: bool,
}

impl BuildConfig {
    /// Config for `platform` with every other field at its default.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            build_type: BuildType::default(),
            clean: false,
            use_sdl: false,
            diagnostic: false,
            internal_build: false,
        }
    }
}

/// What to do when a spawned step exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop before the next step and report the failure.
    Halt,
    /// Log the failure and carry on.
    KeepGoing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_renders_on_off() {
        assert_eq!(Switch(true).to_string(), "on");
        assert_eq!(Switch(false).to_string(), "off");
    }

    #[test]
    fn build_type_keeps_cmake_spelling() {
        let names: Vec<_> = BuildType::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["Release", "Debug", "RelWithDebInfo", "MinSizeRel"]);
        assert_eq!(BuildType::default(), BuildType::Debug);
    }

    #[test]
    fn new_config_defaults_everything_off() {
        let cfg = BuildConfig::new(Platform::Linux);
        assert_eq!(cfg.build_type, BuildType::Debug);
        assert!(!cfg.clean && !cfg.use_sdl && !cfg.diagnostic && !cfg.internal_build);
    }
}
