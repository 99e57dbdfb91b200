//! Pre-flight validation of pack options.
//!
//! Runs before any payload is read so that configuration mistakes surface at
//! start-up instead of halfway through a build. All problems are collected,
//! not just the first one.

use crate::options::PackOptions;
use crate::pack::{Error, Result};
use std::path::Path;

/// Problems found in a set of pack options.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ValidationReport {
    /// Fatal problems
    pub errors: Vec<String>,
    /// Non-fatal problems
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the report into `Ok(warnings)` or [`Error::Validation`].
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(Error::Validation(self.errors))
        }
    }
}

/// Whether `value` can be used verbatim as a file name and URL path segment.
pub fn is_safe_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Checks options for problems that would break a pack.
pub fn validate<O: PackOptions + ?Sized>(options: &O) -> ValidationReport {
    let mut report = ValidationReport::default();

    let channel = options.channel();
    if channel.is_empty() {
        report.errors.push("channel must not be empty".to_string());
    } else if !is_safe_segment(channel) {
        report.errors.push(format!(
            "channel '{channel}' may only contain letters, digits, '.', '_' and '-'"
        ));
    }

    let pack_id = options.pack_id();
    if !is_safe_segment(pack_id) {
        report.errors.push(format!(
            "package id '{pack_id}' must be non-empty and may only contain letters, digits, '.', '_' and '-'"
        ));
    }

    let pack_dir = options.pack_directory();
    if !pack_dir.is_dir() {
        report.errors.push(format!(
            "pack directory {} does not exist or is not a directory",
            pack_dir.display()
        ));
    }

    if let Some(notes) = options.release_notes()
        && !notes.is_file()
    {
        report
            .errors
            .push(format!("release notes file {} not found", notes.display()));
    }

    if !options.icon().is_empty()
        && let Err(problem) = probe_icon(Path::new(options.icon()))
    {
        if options.no_inst() {
            // Only the installer consumes the icon.
            report.warnings.push(format!("{problem} (ignored, installer disabled)"));
        } else {
            report.errors.push(problem);
        }
    }

    if options.no_portable() && options.no_inst() {
        report.warnings.push(
            "both portable and installer are disabled; only the release package will be produced"
                .to_string(),
        );
    }

    for warning in &report.warnings {
        log::warn!("{warning}");
    }
    for error in &report.errors {
        log::error!("{error}");
    }

    report
}

fn probe_icon(path: &Path) -> std::result::Result<(), String> {
    if !path.is_file() {
        return Err(format!("icon {} not found", path.display()));
    }
    match image::image_dimensions(path) {
        Ok((width, height)) => {
            log::debug!("Icon {} is {}x{}", path.display(), width, height);
            Ok(())
        }
        Err(e) => Err(format!(
            "icon {} is not a readable image: {e}",
            path.display()
        )),
    }
}
