//! Option contracts for pack operations.
//!
//! Three independent option sets are composed into one:
//!
//! - [`NugetPackCommand`] - package id, version, payload and output directories
//! - [`PlatformOptions`] - target runtime (OS + architecture)
//! - [`PackOptions`] - release channel, delta mode, entry executable, icon,
//!   exclusions and artifact switches, on top of the two above
//!
//! [`PackSettings`] is the concrete type, built once with
//! [`PackSettingsBuilder`] and read-only afterwards.

mod arch;
mod builder;
mod core;
mod nuget;
mod platform;
mod release;

pub use arch::{Arch, TargetOs};
pub use builder::{DEFAULT_RELEASE_DIR, PackSettingsBuilder};
pub use self::core::{PackOptions, PackSettings};
pub use nuget::{NugetPackCommand, NugetPackSettings};
pub use platform::{PlatformOptions, PlatformSettings, RuntimeIdentifier};
pub use release::{DEFAULT_CHANNEL, DeltaMode, ReleaseSettings};
