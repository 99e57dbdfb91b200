//! Package identity and layout options.

use std::path::{Path, PathBuf};

/// Package identity and directories for a pack.
///
/// Maps to the NuGet-style package metadata written into the release
/// package: id, version, authors and title, plus the directory the payload is
/// read from and the directory releases are written to.
#[derive(Debug, Clone)]
pub struct NugetPackSettings {
    /// Package id. Used in every artifact file name.
    pub(super) pack_id: String,

    /// Package version.
    pub(super) pack_version: semver::Version,

    /// Directory containing the application files to package.
    pub(super) pack_directory: PathBuf,

    /// Comma separated author list.
    ///
    /// Default: the package id
    pub(super) pack_authors: Option<String>,

    /// Human-readable product title.
    ///
    /// Default: the package id
    pub(super) pack_title: Option<String>,

    /// Markdown release notes file.
    ///
    /// Default: None
    pub(super) release_notes: Option<PathBuf>,

    /// Output directory for release artifacts.
    pub(super) release_dir: PathBuf,
}

/// Read access to package identity options.
pub trait NugetPackCommand {
    /// Package id.
    fn pack_id(&self) -> &str;

    /// Package version.
    fn pack_version(&self) -> &semver::Version;

    /// Directory containing the application files.
    fn pack_directory(&self) -> &Path;

    /// Authors, falling back to the package id.
    fn pack_authors(&self) -> &str;

    /// Product title, falling back to the package id.
    fn pack_title(&self) -> &str;

    /// Release notes file, if any.
    fn release_notes(&self) -> Option<&Path>;

    /// Output directory for release artifacts.
    fn release_dir(&self) -> &Path;
}

impl NugetPackCommand for NugetPackSettings {
    fn pack_id(&self) -> &str {
        &self.pack_id
    }

    fn pack_version(&self) -> &semver::Version {
        &self.pack_version
    }

    fn pack_directory(&self) -> &Path {
        &self.pack_directory
    }

    fn pack_authors(&self) -> &str {
        self.pack_authors.as_deref().unwrap_or(&self.pack_id)
    }

    fn pack_title(&self) -> &str {
        self.pack_title.as_deref().unwrap_or(&self.pack_id)
    }

    fn release_notes(&self) -> Option<&Path> {
        self.release_notes.as_deref()
    }

    fn release_dir(&self) -> &Path {
        &self.release_dir
    }
}
