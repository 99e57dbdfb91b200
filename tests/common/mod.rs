//! Shared fixtures for integration tests.

#![allow(dead_code)]

use kodegen_bundler_pack::options::PackSettingsBuilder;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace with a `publish/` payload and a `Releases/` output.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("publish")).unwrap();
        std::fs::create_dir_all(dir.path().join("Releases")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn payload(&self) -> PathBuf {
        self.dir.path().join("publish")
    }

    pub fn releases(&self) -> PathBuf {
        self.dir.path().join("Releases")
    }

    /// Writes a payload file, creating parent directories.
    pub fn file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.payload().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Writes a 16x16 PNG and returns its path.
    pub fn png_icon(&self) -> PathBuf {
        let path = self.root().join("icon.png");
        image::RgbaImage::new(16, 16).save(&path).unwrap();
        path
    }

    /// Pretends an earlier full release exists.
    pub fn previous_release(&self, id: &str, version: &str, channel: &str) {
        let name = format!("{id}-{version}-{channel}-full.nupkg");
        std::fs::write(self.releases().join(name), b"nupkg").unwrap();
    }

    /// Writes `releases.{channel}.json` listing full releases of `id`.
    pub fn release_feed(&self, id: &str, channel: &str, versions: &[&str]) {
        let assets: Vec<_> = versions
            .iter()
            .map(|version| {
                serde_json::json!({
                    "PackageId": id,
                    "Version": version,
                    "Type": "Full",
                    "FileName": format!("{id}-{version}-{channel}-full.nupkg"),
                })
            })
            .collect();
        let feed = serde_json::json!({ "Assets": assets });
        std::fs::write(
            self.releases().join(format!("releases.{channel}.json")),
            serde_json::to_vec_pretty(&feed).unwrap(),
        )
        .unwrap();
    }

    /// Builder targeting Windows x64 with this workspace's directories.
    pub fn builder(&self) -> PackSettingsBuilder {
        PackSettingsBuilder::new()
            .pack_id("MyApp")
            .pack_version("1.0.0")
            .pack_directory(self.payload())
            .release_dir(self.releases())
            .runtime("win-x64".parse().unwrap())
    }
}
