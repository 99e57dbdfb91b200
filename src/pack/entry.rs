//! Entry executable resolution.

use super::payload::{Payload, PayloadFile};
use crate::options::{PackOptions, TargetOs};
use crate::pack::{Error, Result};
use std::path::Path;

/// The executable launched when the installed application starts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "source", content = "path", rename_all = "lowercase")]
pub enum EntryPoint {
    /// Named by the `entry_executable_name` option.
    Explicit(String),
    /// Picked from the payload because no name was configured.
    Inferred(String),
}

impl EntryPoint {
    /// `/`-separated payload path of the executable.
    pub fn path(&self) -> &str {
        match self {
            EntryPoint::Explicit(p) | EntryPoint::Inferred(p) => p,
        }
    }

    /// True when the entry point was inferred.
    pub fn is_inferred(&self) -> bool {
        matches!(self, EntryPoint::Inferred(_))
    }
}

/// Resolves the entry executable against the (already filtered) payload.
///
/// A configured name must exist in the payload. On Windows targets `.exe` is
/// appended when the name has no extension. An empty name triggers
/// inference over the executables in the payload root: the one named after
/// the package id wins, otherwise there must be exactly one.
pub fn resolve_entry<O: PackOptions + ?Sized>(options: &O, payload: &Payload) -> Result<EntryPoint> {
    let os = options.target_runtime().os;
    let name = options.entry_executable_name().trim();

    if !name.is_empty() {
        return resolve_explicit(name, os, payload).map(EntryPoint::Explicit);
    }

    infer_entry(options.pack_id(), os, payload).map(EntryPoint::Inferred)
}

fn resolve_explicit(name: &str, os: TargetOs, payload: &Payload) -> Result<String> {
    let normalized = name.replace('\\', "/");
    let mut wanted = vec![normalized.clone()];
    if let Some(ext) = os.exe_extension()
        && Path::new(&normalized).extension().is_none()
    {
        wanted.push(format!("{normalized}.{ext}"));
    }

    // Exact relative path first, then bare file name anywhere in the payload.
    for candidate in &wanted {
        if let Some(file) = payload.find(candidate) {
            return Ok(file.slash_path());
        }
    }
    for candidate in &wanted {
        if let Some(file) = payload.files.iter().find(|f| file_name(f) == *candidate) {
            return Ok(file.slash_path());
        }
    }

    Err(Error::EntryNotFound(name.to_string()))
}

fn infer_entry(pack_id: &str, os: TargetOs, payload: &Payload) -> Result<String> {
    let candidates: Vec<&PayloadFile> = payload
        .files
        .iter()
        .filter(|f| f.is_top_level() && looks_executable(f, os))
        .collect();

    if let Some(by_id) = candidates
        .iter()
        .find(|f| file_stem(f).eq_ignore_ascii_case(pack_id))
    {
        log::info!("Inferred entry executable {} from package id", by_id.slash_path());
        return Ok(by_id.slash_path());
    }

    match candidates.as_slice() {
        [] => Err(Error::EntryNotFound(
            "no executable in the payload root".to_string(),
        )),
        [only] => {
            log::info!("Inferred entry executable {}", only.slash_path());
            Ok(only.slash_path())
        }
        many => Err(Error::EntryAmbiguous(
            many.iter().map(|f| f.slash_path()).collect(),
        )),
    }
}

/// Extensions of files that carry an exec bit in publish output but are never
/// launched directly.
const NON_ENTRY_EXTENSIONS: &[&str] = &["so", "dylib", "a", "dll", "sh", "json", "pdb"];

fn looks_executable(file: &PayloadFile, os: TargetOs) -> bool {
    let extension = file
        .relative_path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match os.exe_extension() {
        Some(exe) => extension.as_deref() == Some(exe),
        // Permission bits are unavailable on non-Unix hosts.
        None if cfg!(unix) => file.executable && !is_library_or_script(file, extension.as_deref()),
        None => extension.is_none(),
    }
}

fn is_library_or_script(file: &PayloadFile, extension: Option<&str>) -> bool {
    if extension.is_some_and(|ext| NON_ENTRY_EXTENSIONS.contains(&ext)) {
        return true;
    }
    // Versioned shared objects: libfoo.so.1, libfoo.so.1.2
    file_name(file).contains(".so.")
}

fn file_name(file: &PayloadFile) -> String {
    file.relative_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(file: &PayloadFile) -> String {
    file.relative_path
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
