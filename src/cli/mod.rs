//! Command line interface for the pack planner.
//!
//! Parses arguments, merges them over the config file, builds the pack
//! options once and hands them to [`Packer`] for a dry run.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use crate::metadata::{DEFAULT_CONFIG_FILE, PackConfigFile, load_config};
use crate::options::{NugetPackCommand, PackOptions, PackSettings};
use crate::pack::{PackPlan, Packer};
use anyhow::Context;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);

    match execute(args, &config).await {
        Ok(()) => Ok(0),
        Err(e) => {
            config.output().error(&e.to_string())?;
            for suggestion in e.recovery_suggestions() {
                config.output().indent(&suggestion)?;
            }
            Ok(1)
        }
    }
}

async fn execute(args: Args, config: &RuntimeConfig) -> Result<()> {
    let file = load_config_file(&args)?;
    let settings = args.into_builder(file)?.build()?;

    let plan = Packer::new(&settings).dry_run().await?;

    if config.json() {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&settings, &plan, config)?;
    }
    Ok(())
}

/// Explicit `--config`, else `pack.toml` in the working directory, else nothing.
fn load_config_file(args: &Args) -> Result<PackConfigFile> {
    if let Some(path) = &args.config {
        return load_config(path);
    }

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let default = cwd.join(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        log::info!("Using {}", default.display());
        load_config(&default)
    } else {
        Ok(PackConfigFile::default())
    }
}

fn print_plan(
    settings: &PackSettings,
    plan: &PackPlan,
    config: &RuntimeConfig,
) -> Result<()> {
    let out = config.output();

    for warning in &plan.warnings {
        out.warn(warning)?;
    }

    out.section(&format!(
        "{} {} ({}) - channel '{}'",
        settings.pack_title(),
        plan.version,
        plan.runtime,
        plan.channel
    ))?;
    out.indent(&format!(
        "Payload: {} files, {} bytes ({} excluded)",
        plan.payload_files, plan.payload_bytes, plan.excluded_files
    ))?;
    let source = if plan.entry.is_inferred() {
        "inferred"
    } else {
        "explicit"
    };
    out.indent(&format!("Entry: {} ({source})", plan.entry.path()))?;
    out.indent(&format!("Delta mode: {}", settings.delta_mode()))?;

    out.section("Artifacts")?;
    for artifact in &plan.artifacts {
        let detail = match (&artifact.delta_mode, &artifact.base_version) {
            (Some(mode), Some(base)) => format!(" [{mode} from {base}]"),
            _ => String::new(),
        };
        out.progress(&format!(
            "{:<9} {}{}",
            format!("{:?}", artifact.kind),
            artifact.path.display(),
            detail
        ))?;
    }
    out.indent(&format!("Feed: {}", plan.releases_feed.display()))?;

    if plan.is_payload_only() {
        out.verbose("Portable and installer disabled: release package only")?;
    }
    out.success("Pack plan ready")?;
    Ok(())
}
