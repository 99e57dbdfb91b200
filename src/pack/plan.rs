//! Artifact planning.
//!
//! Turns options, payload and entry point into the list of files a pack
//! would write to the release directory. Nothing is built here.

use super::{entry::EntryPoint, payload::Payload, validate::is_safe_segment};
use crate::bail;
use crate::options::{DeltaMode, PackOptions, TargetOs};
use crate::pack::error::{Context, ErrorExt};
use crate::pack::Result;
use std::path::{Path, PathBuf};

/// Kind of release artifact.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Full release package containing the whole payload. Always produced.
    Full,
    /// Binary-diff package against the previous release.
    Delta,
    /// Self-contained archive that runs without installation.
    Portable,
    /// Installer for the target OS.
    Installer,
}

/// One artifact a pack would produce.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlannedArtifact {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Output path inside the release directory
    pub path: PathBuf,
    /// Delta strategy, for delta artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_mode: Option<DeltaMode>,
    /// Version the delta is computed against, for delta artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_version: Option<String>,
}

/// Result of a dry run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PackPlan {
    /// Package id
    pub pack_id: String,
    /// Package version
    pub version: String,
    /// Release channel
    pub channel: String,
    /// Target runtime identifier
    pub runtime: String,
    /// Resolved entry executable
    pub entry: EntryPoint,
    /// Number of payload files kept
    pub payload_files: usize,
    /// Total payload size in bytes
    pub payload_bytes: u64,
    /// Number of files removed by the exclude filter
    pub excluded_files: usize,
    /// Artifacts in production order
    pub artifacts: Vec<PlannedArtifact>,
    /// Release feed file updated by the pack
    pub releases_feed: PathBuf,
    /// Non-fatal notes collected while planning
    pub warnings: Vec<String>,
}

impl PackPlan {
    /// Plans the artifacts for `options`.
    ///
    /// # Errors
    ///
    /// Fails if the full package this pack would write is already present in
    /// the release directory or listed in the channel's release feed.
    pub fn build<O: PackOptions + ?Sized>(
        options: &O,
        payload: &Payload,
        entry: EntryPoint,
        mut warnings: Vec<String>,
    ) -> Result<Self> {
        let id = options.pack_id();
        let version = options.pack_version();
        let channel = options.channel();
        let release_dir = options.release_dir();

        let full_path = release_dir.join(full_package_name(id, &version.to_string(), channel));
        if full_path.exists() {
            bail!(
                "release {} {} cannot be packed for channel '{}': {} already exists",
                id,
                version,
                channel,
                full_path.display()
            );
        }

        let previous = previous_releases(release_dir, id, channel, &mut warnings)?;
        if previous.contains(version) {
            bail!(
                "release {} {} is already listed in {}",
                id,
                version,
                release_dir.join(feed_name(channel)).display()
            );
        }
        if let Some(newer) = previous.iter().filter(|v| *v > version).max() {
            let note = format!(
                "release {newer} of {id} in channel '{channel}' is newer than {version}"
            );
            log::warn!("{note}");
            warnings.push(note);
        }

        let mut artifacts = vec![PlannedArtifact {
            kind: ArtifactKind::Full,
            path: full_path,
            delta_mode: None,
            base_version: None,
        }];

        let mode = options.delta_mode();
        if mode.is_enabled() {
            match previous.iter().filter(|v| *v < version).max() {
                Some(base) => artifacts.push(PlannedArtifact {
                    kind: ArtifactKind::Delta,
                    path: release_dir.join(format!("{id}-{version}-{channel}-delta.nupkg")),
                    delta_mode: Some(mode),
                    base_version: Some(base.to_string()),
                }),
                None => {
                    let note = format!(
                        "no earlier release of {id} in channel '{channel}', delta package skipped"
                    );
                    log::info!("{note}");
                    warnings.push(note);
                }
            }
        }

        if !options.no_portable() {
            artifacts.push(PlannedArtifact {
                kind: ArtifactKind::Portable,
                path: release_dir.join(format!("{id}-{channel}-Portable.zip")),
                delta_mode: None,
                base_version: None,
            });
        }

        if !options.no_inst() {
            let os = options.target_runtime().os;
            artifacts.push(PlannedArtifact {
                kind: ArtifactKind::Installer,
                path: release_dir.join(installer_name(id, channel, os)),
                delta_mode: None,
                base_version: None,
            });
        }

        Ok(Self {
            pack_id: id.to_string(),
            version: version.to_string(),
            channel: channel.to_string(),
            runtime: options.target_runtime().to_string(),
            entry,
            payload_files: payload.files.len(),
            payload_bytes: payload.total_size(),
            excluded_files: payload.excluded.len(),
            artifacts,
            releases_feed: release_dir.join(feed_name(channel)),
            warnings,
        })
    }

    /// Whether an artifact of `kind` is planned.
    pub fn has(&self, kind: ArtifactKind) -> bool {
        self.artifacts.iter().any(|a| a.kind == kind)
    }

    /// True when neither a portable archive nor an installer is planned.
    pub fn is_payload_only(&self) -> bool {
        !self.has(ArtifactKind::Portable) && !self.has(ArtifactKind::Installer)
    }
}

/// File name of the full release package.
pub fn full_package_name(id: &str, version: &str, channel: &str) -> String {
    format!("{id}-{version}-{channel}-full.nupkg")
}

fn installer_name(id: &str, channel: &str, os: TargetOs) -> String {
    match os {
        TargetOs::Windows => format!("{id}-{channel}-Setup.exe"),
        TargetOs::MacOs => format!("{id}-{channel}-Setup.pkg"),
        TargetOs::Linux => format!("{id}-{channel}.AppImage"),
    }
}

/// File name of a channel's release feed.
pub fn feed_name(channel: &str) -> String {
    format!("releases.{channel}.json")
}

/// `releases.{channel}.json`
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ReleaseFeed {
    #[serde(default)]
    assets: Vec<FeedAsset>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FeedAsset {
    package_id: String,
    version: semver::Version,
    #[serde(rename = "Type")]
    kind: String,
}

/// Versions of full packages already released for `id` on `channel`.
///
/// The channel's release feed is authoritative when present. Without one the
/// release directory is scanned for full package file names.
fn previous_releases(
    release_dir: &Path,
    id: &str,
    channel: &str,
    warnings: &mut Vec<String>,
) -> Result<Vec<semver::Version>> {
    let feed_path = release_dir.join(feed_name(channel));
    if !feed_path.is_file() {
        return Ok(scan_full_packages(release_dir, id, channel, warnings));
    }

    let content =
        std::fs::read_to_string(&feed_path).fs_context("reading release feed", &feed_path)?;
    let feed: ReleaseFeed = serde_json::from_str(&content)
        .context(format!("invalid release feed {}", feed_path.display()))?;
    log::debug!(
        "Loaded {} assets from {}",
        feed.assets.len(),
        feed_path.display()
    );

    Ok(feed
        .assets
        .into_iter()
        .filter(|a| a.package_id == id && a.kind.eq_ignore_ascii_case("full"))
        .map(|a| a.version)
        .collect())
}

/// Versions parsed from `{id}-{version}-{channel}-full.nupkg` file names.
///
/// Versions and channels may both contain `-`, so a name such as
/// `MyApp-1.0.0-pre-stable-full.nupkg` reads as `1.0.0` on `pre-stable` or
/// `1.0.0-pre` on `stable`. Names with more than one reading are skipped with
/// a warning.
fn scan_full_packages(
    release_dir: &Path,
    id: &str,
    channel: &str,
    warnings: &mut Vec<String>,
) -> Vec<semver::Version> {
    let prefix = format!("{id}-");
    let suffix = format!("-{channel}-full.nupkg");
    let pattern = Path::new(&glob::Pattern::escape(&release_dir.to_string_lossy())).join(format!(
        "{}*{}",
        glob::Pattern::escape(&prefix),
        glob::Pattern::escape(&suffix)
    ));

    let Ok(paths) = glob::glob(&pattern.to_string_lossy()) else {
        return Vec::new();
    };

    let mut versions = Vec::new();
    for path in paths.filter_map(|p| p.ok()) {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let Some(rest) = name
            .strip_prefix(&prefix)
            .and_then(|n| n.strip_suffix("-full.nupkg"))
        else {
            continue;
        };

        match split_version_channel(rest).as_slice() {
            [(version, found)] if *found == channel => versions.push(version.clone()),
            [_] => {}
            [] => log::debug!("Ignoring {name}: no version in file name"),
            _ => {
                let note = format!(
                    "ignoring {name}: cannot tell version from channel in the file name, list it in {}",
                    feed_name(channel)
                );
                log::warn!("{note}");
                warnings.push(note);
            }
        }
    }
    versions
}

/// Every way `rest` splits into a semver version and a channel name.
fn split_version_channel(rest: &str) -> Vec<(semver::Version, &str)> {
    rest.match_indices('-')
        .filter_map(|(at, _)| {
            let (version, channel) = (&rest[..at], &rest[at + 1..]);
            if !is_safe_segment(channel) {
                return None;
            }
            semver::Version::parse(version)
                .ok()
                .map(|version| (version, channel))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_and_channel_readings() {
        let readings = split_version_channel("1.2.0-beta");
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].0, semver::Version::new(1, 2, 0));
        assert_eq!(readings[0].1, "beta");

        let readings: Vec<_> = split_version_channel("1.0.0-pre-stable")
            .into_iter()
            .map(|(v, c)| (v.to_string(), c))
            .collect();
        assert_eq!(
            readings,
            vec![
                ("1.0.0".to_string(), "pre-stable"),
                ("1.0.0-pre".to_string(), "stable"),
            ]
        );

        assert!(split_version_channel("latest-stable").is_empty());
    }
}
