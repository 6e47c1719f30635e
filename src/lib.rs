pub mod cli;
pub mod error;
pub mod executor;
pub mod layout;
pub mod logging;
pub mod model;
pub mod plan;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::layout::Layout;
use crate::model::{BuildConfig, FailurePolicy};

pub fn run() -> Result<()> {
    run_with(cli::Cli::parse())
}

/// `run` on already-parsed arguments.
pub fn run_with(args: cli::Cli) -> Result<()> {
    logging::init(args.verbose);

    let config = args.config();
    let layout = Layout::new(&args.root).with_context(|| "Resolving --root")?;

    if args.dry_run {
        let plan = plan::plan(&config, &layout, &args.cmake);
        let json = serde_json::to_string_pretty(&plan).with_context(|| "Serialising plan")?;
        println!("{json}");
        return Ok(());
    }

    drive(&config, &layout, &args.cmake, args.failure_policy())
}

/// Everything after argument parsing: prepare directories, generate, build.
pub fn drive(
    config: &BuildConfig,
    layout: &Layout,
    tool: &str,
    policy: FailurePolicy,
) -> Result<()> {
    // 1. ── Plan ───────────────────────────────────────────────────────
    let plan = plan::plan(config, layout, tool);
    info!("generate command: {}", plan.generate);
    info!("build command: {}", plan.build);

    // 2. ── Directories ────────────────────────────────────────────────
    layout::prepare(layout, config.clean).with_context(|| "Preparing build directories")?;

    // 3. ── Generate, then build ───────────────────────────────────────
    executor::run_step("generate", &plan.generate, layout.project_dir(), policy)?;
    executor::run_step("build", &plan.build, layout.project_dir(), policy)?;

    Ok(())
}
