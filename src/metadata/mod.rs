//! Pack configuration file (`pack.toml`) loading.
//!
//! ```toml
//! [pack]
//! id = "MyApp"
//! version = "1.2.0"
//! directory = "publish"
//! output = "Releases"
//!
//! [platform]
//! runtime = "win-x64"
//!
//! [release]
//! channel = "beta"
//! delta = "best-size"
//! main_exe = "MyApp.exe"
//! icon = "assets/app.ico"
//! exclude = "*.pdb;*.log"
//! no_portable = true
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use crate::error::{BundlerError, CliError, Result};
use crate::options::{DeltaMode, RuntimeIdentifier};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pack.toml";

/// `[pack]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackSection {
    /// Package id
    pub id: Option<String>,
    /// Package version
    pub version: Option<String>,
    /// Payload directory
    pub directory: Option<PathBuf>,
    /// Authors
    pub authors: Option<String>,
    /// Product title
    pub title: Option<String>,
    /// Release notes file
    pub release_notes: Option<PathBuf>,
    /// Release output directory
    pub output: Option<PathBuf>,
}

/// `[platform]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSection {
    /// Runtime identifier, e.g. `win-x64`
    pub runtime: Option<String>,
}

/// `[release]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseSection {
    /// Release channel
    pub channel: Option<String>,
    /// Delta strategy
    pub delta: Option<DeltaMode>,
    /// Entry executable name
    pub main_exe: Option<String>,
    /// Icon path
    pub icon: Option<PathBuf>,
    /// Exclude globs
    pub exclude: Option<String>,
    /// Skip the portable archive
    pub no_portable: Option<bool>,
    /// Skip the installer
    pub no_inst: Option<bool>,
}

/// Parsed `pack.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackConfigFile {
    /// `[pack]`
    #[serde(default)]
    pub pack: PackSection,
    /// `[platform]`
    #[serde(default)]
    pub platform: PlatformSection,
    /// `[release]`
    #[serde(default)]
    pub release: ReleaseSection,
}

impl PackConfigFile {
    /// Parsed runtime identifier, if configured.
    pub fn runtime(&self) -> Result<Option<RuntimeIdentifier>> {
        self.platform
            .runtime
            .as_deref()
            .map(|rid| rid.parse::<RuntimeIdentifier>().map_err(BundlerError::from))
            .transpose()
    }
}

/// Loads a config file and resolves its relative paths.
pub fn load_config(path: &Path) -> Result<PackConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let mut config = parse_config(&content)?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    log::debug!("Loaded pack config from {}", path.display());
    Ok(config)
}

/// Parses config file contents without touching the filesystem.
pub fn parse_config(content: &str) -> Result<PackConfigFile> {
    Ok(toml::from_str(content)?)
}

impl PackConfigFile {
    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut Option<PathBuf>| {
            if let Some(path) = p
                && path.is_relative()
            {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.pack.directory);
        resolve(&mut self.pack.release_notes);
        resolve(&mut self.pack.output);
        resolve(&mut self.release.icon);
    }
}
