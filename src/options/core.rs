//! The pack options contract and its concrete settings type.

use super::{
    DeltaMode, NugetPackCommand, NugetPackSettings, PlatformOptions, PlatformSettings,
    ReleaseSettings, RuntimeIdentifier,
};
use std::path::Path;

/// Everything a pack pipeline reads to produce a release.
///
/// Combines [`NugetPackCommand`] (package identity and directories) and
/// [`PlatformOptions`] (target runtime) with the release-specific switches.
/// Consumers only read; no accessor mutates.
pub trait PackOptions: NugetPackCommand + PlatformOptions {
    /// Release channel, e.g. `stable` or `beta`.
    fn channel(&self) -> &str;

    /// Delta generation strategy.
    fn delta_mode(&self) -> DeltaMode;

    /// Main executable name. Empty means "infer from the payload".
    fn entry_executable_name(&self) -> &str;

    /// Icon path. Empty means no icon.
    fn icon(&self) -> &str;

    /// Semicolon separated exclude globs. Empty means nothing is excluded.
    fn exclude(&self) -> &str;

    /// Skip the portable archive.
    fn no_portable(&self) -> bool;

    /// Skip the installer.
    fn no_inst(&self) -> bool;
}

/// Concrete, immutable pack options.
///
/// Built with [`PackSettingsBuilder`](super::PackSettingsBuilder); holds the
/// three option sets by value.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_pack::options::{DeltaMode, PackOptions, PackSettingsBuilder};
///
/// # fn example() -> kodegen_bundler_pack::pack::Result<()> {
/// let options = PackSettingsBuilder::new()
///     .pack_id("MyApp")
///     .pack_version("1.2.0")
///     .pack_directory("publish")
///     .channel("beta")
///     .delta_mode(DeltaMode::None)
///     .build()?;
///
/// assert_eq!(options.channel(), "beta");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PackSettings {
    nuget: NugetPackSettings,
    platform: PlatformSettings,
    release: ReleaseSettings,
}

impl PackSettings {
    pub(super) fn new(
        nuget: NugetPackSettings,
        platform: PlatformSettings,
        release: ReleaseSettings,
    ) -> Self {
        Self {
            nuget,
            platform,
            release,
        }
    }

    /// Package identity options.
    pub fn nuget(&self) -> &NugetPackSettings {
        &self.nuget
    }

    /// Platform options.
    pub fn platform(&self) -> &PlatformSettings {
        &self.platform
    }
}

impl NugetPackCommand for PackSettings {
    fn pack_id(&self) -> &str {
        self.nuget.pack_id()
    }

    fn pack_version(&self) -> &semver::Version {
        self.nuget.pack_version()
    }

    fn pack_directory(&self) -> &Path {
        self.nuget.pack_directory()
    }

    fn pack_authors(&self) -> &str {
        self.nuget.pack_authors()
    }

    fn pack_title(&self) -> &str {
        self.nuget.pack_title()
    }

    fn release_notes(&self) -> Option<&Path> {
        self.nuget.release_notes()
    }

    fn release_dir(&self) -> &Path {
        self.nuget.release_dir()
    }
}

impl PlatformOptions for PackSettings {
    fn target_runtime(&self) -> RuntimeIdentifier {
        self.platform.target_runtime()
    }
}

impl PackOptions for PackSettings {
    fn channel(&self) -> &str {
        &self.release.channel
    }

    fn delta_mode(&self) -> DeltaMode {
        self.release.delta_mode
    }

    fn entry_executable_name(&self) -> &str {
        &self.release.entry_executable_name
    }

    fn icon(&self) -> &str {
        &self.release.icon
    }

    fn exclude(&self) -> &str {
        &self.release.exclude
    }

    fn no_portable(&self) -> bool {
        self.release.no_portable
    }

    fn no_inst(&self) -> bool {
        self.release.no_inst
    }
}
