//! Platform options: which OS and architecture a pack targets.

use super::{Arch, TargetOs};
use crate::pack::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A runtime identifier such as `win-x64` or `osx-arm64`.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_pack::options::{Arch, RuntimeIdentifier, TargetOs};
///
/// let rid: RuntimeIdentifier = "win-x64".parse().unwrap();
/// assert_eq!(rid.os, TargetOs::Windows);
/// assert_eq!(rid.arch, Arch::X86_64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub struct RuntimeIdentifier {
    /// Target operating system
    pub os: TargetOs,
    /// Target CPU architecture
    pub arch: Arch,
}

impl RuntimeIdentifier {
    /// Creates a runtime identifier from its parts.
    pub fn new(os: TargetOs, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Runtime identifier of the machine running the pack.
    pub fn host() -> Self {
        Self {
            os: TargetOs::host(),
            arch: Arch::from_target_triple(std::env::consts::ARCH),
        }
    }
}

impl Default for RuntimeIdentifier {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for RuntimeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl FromStr for RuntimeIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (os, arch) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| Error::InvalidRuntime(s.to_string()))?;
        let os = os
            .parse()
            .map_err(|_| Error::InvalidRuntime(s.to_string()))?;
        let arch = arch
            .parse()
            .map_err(|_| Error::InvalidRuntime(s.to_string()))?;
        Ok(Self { os, arch })
    }
}

/// Platform option set.
#[derive(Clone, Debug, Default)]
pub struct PlatformSettings {
    pub(super) target_runtime: RuntimeIdentifier,
}

impl PlatformSettings {
    /// Creates platform settings for the given runtime.
    pub fn new(target_runtime: RuntimeIdentifier) -> Self {
        Self { target_runtime }
    }
}

/// Read access to platform options.
pub trait PlatformOptions {
    /// Runtime the package is built for.
    fn target_runtime(&self) -> RuntimeIdentifier;
}

impl PlatformOptions for PlatformSettings {
    fn target_runtime(&self) -> RuntimeIdentifier {
        self.target_runtime
    }
}
