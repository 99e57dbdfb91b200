//! CPU architecture and operating system types for runtime identifiers.

use crate::pack::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// CPU architecture of the packaged application.
///
/// Parsed from the architecture half of a runtime identifier (`x64`, `x86`,
/// `arm64`). Rust target-triple spellings are accepted as aliases.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_pack::options::Arch;
///
/// let arch: Arch = "arm64".parse().unwrap();
/// assert_eq!(arch, Arch::AArch64);
/// assert_eq!(arch.to_string(), "arm64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, Windows on ARM
    AArch64,
}

impl Arch {
    /// Detects the architecture from a Rust target triple or `std::env::consts::ARCH`.
    ///
    /// Unknown architectures fall back to [`Arch::X86_64`].
    pub fn from_target_triple(target: &str) -> Self {
        if target.starts_with("x86_64") {
            Arch::X86_64
        } else if target.starts_with('i') || target.starts_with("x86") {
            Arch::X86
        } else if target.starts_with("aarch64") {
            Arch::AArch64
        } else {
            Arch::X86_64 // fallback
        }
    }

    /// Returns the runtime identifier spelling (`x64`, `x86`, `arm64`).
    pub fn rid_name(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x64",
            Arch::X86 => "x86",
            Arch::AArch64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rid_name())
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Arch::X86_64),
            "x86" | "i686" | "i386" => Ok(Arch::X86),
            "arm64" | "aarch64" => Ok(Arch::AArch64),
            _ => Err(Error::InvalidRuntime(s.to_string())),
        }
    }
}

/// Operating system the package targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    /// Windows
    Windows,
    /// macOS
    MacOs,
    /// Linux
    Linux,
}

impl TargetOs {
    /// Operating system the current process runs on.
    ///
    /// Unknown Unix flavours are treated as Linux.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => TargetOs::Windows,
            "macos" => TargetOs::MacOs,
            _ => TargetOs::Linux,
        }
    }

    /// Returns the runtime identifier spelling (`win`, `osx`, `linux`).
    pub fn rid_name(&self) -> &'static str {
        match self {
            TargetOs::Windows => "win",
            TargetOs::MacOs => "osx",
            TargetOs::Linux => "linux",
        }
    }

    /// Executable file extension on this OS, without the dot.
    pub fn exe_extension(&self) -> Option<&'static str> {
        match self {
            TargetOs::Windows => Some("exe"),
            TargetOs::MacOs | TargetOs::Linux => None,
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rid_name())
    }
}

impl FromStr for TargetOs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "win" | "windows" => Ok(TargetOs::Windows),
            "osx" | "macos" | "mac" => Ok(TargetOs::MacOs),
            "linux" => Ok(TargetOs::Linux),
            _ => Err(Error::InvalidRuntime(s.to_string())),
        }
    }
}
