use clap::Parser;
use std::path::PathBuf;

use crate::model::{BuildConfig, BuildType, DEFAULT_ANCHOR, DEFAULT_TOOL, FailurePolicy, Platform};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and build the handmade project with cmake")]
pub struct Cli {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: Platform,
    /// CMake build type
    #[arg(short, long = "build", value_enum, default_value_t = BuildType::Debug)]
    pub build_type: BuildType,
    /// Remove the project build directory before generating
    #[arg(short, long)]
    pub clean: bool,
    /// Build against SDL
    #[arg(short, long)]
    pub sdl: bool,
    /// Enable diagnostic output in the game
    #[arg(short, long)]
    pub diagnostic: bool,
    /// Internal (developer) build
    #[arg(short, long = "internal_build")]
    pub internal_build: bool,

    /// Directory the build and source trees hang off
    #[arg(long, env = "CMAKE_DRIVER_ROOT", default_value = DEFAULT_ANCHOR)]
    pub root: PathBuf,
    /// cmake executable used for both steps
    #[arg(long, env = "CMAKE", default_value = DEFAULT_TOOL)]
    pub cmake: String,
    /// Print the plan as JSON and exit without touching anything
    #[arg(long)]
    pub dry_run: bool,
    /// Run the build step even if generation failed
    #[arg(long)]
    pub keep_going: bool,
    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            platform: self.platform,
            build_type: self.build_type,
            clean: self.clean,
            use_sdl: self.sdl,
            diagnostic: self.diagnostic,
            internal_build: self.internal_build,
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::Halt
        }
    }
}
