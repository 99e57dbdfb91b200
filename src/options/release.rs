//! Release-specific options: channel, delta strategy, entry point and artifact switches.

use crate::pack::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Default release channel when none is configured.
pub const DEFAULT_CHANNEL: &str = "stable";

/// Strategy for generating binary-diff updates against the previous release.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_pack::options::DeltaMode;
///
/// assert_eq!("best-size".parse::<DeltaMode>().unwrap(), DeltaMode::BestSize);
/// assert!("fastest".parse::<DeltaMode>().is_err());
/// ```
///
/// Text parsing ignores case and surrounding whitespace. The command line
/// and `pack.toml` share the same rule.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum DeltaMode {
    /// No delta package is generated.
    None,
    /// Fast diffing, larger deltas.
    #[default]
    BestSpeed,
    /// Slow diffing, smallest deltas.
    BestSize,
}

impl DeltaMode {
    /// All accepted modes, in CLI order.
    pub const ALL: [DeltaMode; 3] = [DeltaMode::None, DeltaMode::BestSpeed, DeltaMode::BestSize];

    /// Whether a delta package will be generated.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, DeltaMode::None)
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaMode::None => "none",
            DeltaMode::BestSpeed => "best-speed",
            DeltaMode::BestSize => "best-size",
        }
    }
}

impl fmt::Display for DeltaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeltaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidDeltaMode(s.to_string()))
    }
}

impl TryFrom<String> for DeltaMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Release option set.
#[derive(Clone, Debug)]
pub struct ReleaseSettings {
    pub(super) channel: String,
    pub(super) delta_mode: DeltaMode,
    pub(super) entry_executable_name: String,
    pub(super) icon: String,
    pub(super) exclude: String,
    pub(super) no_portable: bool,
    pub(super) no_inst: bool,
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            delta_mode: DeltaMode::default(),
            entry_executable_name: String::new(),
            icon: String::new(),
            exclude: String::new(),
            no_portable: false,
            no_inst: false,
        }
    }
}
