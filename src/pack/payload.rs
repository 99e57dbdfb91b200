//! Payload discovery: walking the pack directory and applying exclusions.

use super::checksum::calculate_file_sha256;
use crate::pack::{Error, Result, error::ErrorExt};
use std::path::{Path, PathBuf};

/// Compiled form of the `exclude` option.
///
/// The option is a semicolon separated list of glob patterns. Each pattern is
/// tested against the `/`-separated path relative to the payload root and
/// against the bare file name, so `*.pdb` drops debug symbols at any depth
/// and `logs/**` drops a whole directory.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<glob::Pattern>,
}

impl ExcludeFilter {
    /// Parses an exclude option. An empty or blank string excludes nothing.
    pub fn parse(value: &str) -> Result<Self> {
        let patterns = value
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                glob::Pattern::new(p).map_err(|source| Error::Pattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// True when no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a payload-relative path is excluded.
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let slashed = to_slash(relative_path);
        let file_name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.patterns
            .iter()
            .any(|p| p.matches(&slashed) || p.matches(&file_name))
    }
}

/// A file kept in the payload.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PayloadFile {
    /// Path relative to the payload root
    pub relative_path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Lowercase hex SHA-256
    pub sha256: String,
    /// Has an executable permission bit (always false on non-Unix hosts)
    pub executable: bool,
}

impl PayloadFile {
    /// Relative path with `/` separators.
    pub fn slash_path(&self) -> String {
        to_slash(&self.relative_path)
    }

    /// True for files directly in the payload root.
    pub fn is_top_level(&self) -> bool {
        self.relative_path.components().count() == 1
    }
}

/// Files that will go into a package.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Payload {
    /// Payload root directory
    pub root: PathBuf,
    /// Kept files, sorted by relative path
    pub files: Vec<PayloadFile>,
    /// Files dropped by the exclude filter
    pub excluded: Vec<PathBuf>,
}

impl Payload {
    /// Total size of kept files.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Looks up a kept file by its `/`-separated relative path.
    pub fn find(&self, slash_path: &str) -> Option<&PayloadFile> {
        self.files.iter().find(|f| f.slash_path() == slash_path)
    }
}

/// Walks `root`, drops excluded files, and hashes the rest.
///
/// Exclusion runs before hashing, so excluded files are never read.
pub async fn scan_payload(root: &Path, filter: &ExcludeFilter) -> Result<Payload> {
    let mut files = Vec::new();
    let mut excluded = Vec::new();

    for entry in walkdir::WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::GenericError(format!("payload path outside root: {e}")))?
            .to_path_buf();

        if filter.is_excluded(&relative_path) {
            log::debug!("Excluding {}", relative_path.display());
            excluded.push(relative_path);
            continue;
        }

        let metadata = tokio::fs::metadata(entry.path())
            .await
            .fs_context("reading metadata of", entry.path())?;
        let sha256 = calculate_file_sha256(entry.path()).await?;

        files.push(PayloadFile {
            relative_path,
            size: metadata.len(),
            sha256,
            executable: is_executable(&metadata),
        });
    }

    log::info!(
        "Payload: {} files kept, {} excluded",
        files.len(),
        excluded.len()
    );

    Ok(Payload {
        root: root.to_path_buf(),
        files,
        excluded,
    })
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    false
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
