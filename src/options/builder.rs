//! Builder for constructing PackSettings.

use super::{
    DeltaMode, NugetPackSettings, PackSettings, PlatformSettings, ReleaseSettings,
    RuntimeIdentifier,
};
use crate::pack::{Error, Result, error::Context};
use std::path::{Path, PathBuf};

/// Default output directory for release artifacts.
pub const DEFAULT_RELEASE_DIR: &str = "Releases";

/// Builder for constructing [`PackSettings`].
///
/// Every field is set here and nowhere else: the built settings expose
/// accessors only.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_pack::options::{DeltaMode, PackSettingsBuilder};
///
/// # fn example() -> kodegen_bundler_pack::pack::Result<()> {
/// let settings = PackSettingsBuilder::new()
///     .pack_id("MyApp")
///     .pack_version("2.0.0-beta.1")
///     .pack_directory("publish")
///     .runtime("win-x64".parse()?)
///     .channel("beta")
///     .delta_mode(DeltaMode::BestSize)
///     .no_portable(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PackSettingsBuilder {
    pack_id: Option<String>,
    pack_version: Option<String>,
    pack_directory: Option<PathBuf>,
    pack_authors: Option<String>,
    pack_title: Option<String>,
    release_notes: Option<PathBuf>,
    release_dir: Option<PathBuf>,
    runtime: Option<RuntimeIdentifier>,
    release: ReleaseSettings,
}

impl PackSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package id.
    ///
    /// # Required
    pub fn pack_id(mut self, id: impl Into<String>) -> Self {
        self.pack_id = Some(id.into());
        self
    }

    /// Sets the package version. Parsed as semver in [`build`](Self::build).
    ///
    /// # Required
    pub fn pack_version(mut self, version: impl Into<String>) -> Self {
        self.pack_version = Some(version.into());
        self
    }

    /// Sets the directory holding the application files.
    ///
    /// # Required
    pub fn pack_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.pack_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the package authors.
    pub fn pack_authors(mut self, authors: impl Into<String>) -> Self {
        self.pack_authors = Some(authors.into());
        self
    }

    /// Sets the product title.
    pub fn pack_title(mut self, title: impl Into<String>) -> Self {
        self.pack_title = Some(title.into());
        self
    }

    /// Sets the release notes file.
    pub fn release_notes<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.release_notes = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `Releases`
    pub fn release_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.release_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the target runtime.
    ///
    /// Default: the host runtime
    pub fn runtime(mut self, runtime: RuntimeIdentifier) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Sets the release channel.
    ///
    /// Default: `stable`
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.release.channel = channel.into();
        self
    }

    /// Sets the delta generation strategy.
    ///
    /// Default: [`DeltaMode::BestSpeed`]
    pub fn delta_mode(mut self, mode: DeltaMode) -> Self {
        self.release.delta_mode = mode;
        self
    }

    /// Sets the entry executable name. Empty means infer.
    pub fn entry_executable_name(mut self, name: impl Into<String>) -> Self {
        self.release.entry_executable_name = name.into();
        self
    }

    /// Sets the icon path.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.release.icon = icon.into();
        self
    }

    /// Sets the exclude pattern list.
    pub fn exclude(mut self, exclude: impl Into<String>) -> Self {
        self.release.exclude = exclude.into();
        self
    }

    /// Skips the portable archive.
    pub fn no_portable(mut self, no_portable: bool) -> Self {
        self.release.no_portable = no_portable;
        self
    }

    /// Skips the installer.
    pub fn no_inst(mut self, no_inst: bool) -> Self {
        self.release.no_inst = no_inst;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `pack_id`, `pack_version` or `pack_directory` is
    /// missing, or if the version is not valid semver.
    pub fn build(self) -> Result<PackSettings> {
        let pack_id = self.pack_id.context("pack_id is required")?;
        let version = self.pack_version.context("pack_version is required")?;
        let pack_version =
            semver::Version::parse(version.trim()).map_err(|source| Error::InvalidVersion {
                version: version.clone(),
                source,
            })?;
        let pack_directory = self.pack_directory.context("pack_directory is required")?;

        let nuget = NugetPackSettings {
            pack_id,
            pack_version,
            pack_directory,
            pack_authors: self.pack_authors.filter(|s| !s.is_empty()),
            pack_title: self.pack_title.filter(|s| !s.is_empty()),
            release_notes: self.release_notes,
            release_dir: self
                .release_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASE_DIR)),
        };
        let platform = PlatformSettings::new(self.runtime.unwrap_or_default());

        Ok(PackSettings::new(nuget, platform, self.release))
    }
}
