//! Release pack options and dry-run planning for desktop application updates.
//!
//! This library provides:
//! - the [`PackOptions`](options::PackOptions) contract and its concrete
//!   [`PackSettings`](options::PackSettings)
//! - a [`Packer`](pack::Packer) that validates options, scans the payload and
//!   plans full, delta, portable and installer artifacts
//! - `pack.toml` loading and the command line front end
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod options;
pub mod pack;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
pub use options::{DeltaMode, PackOptions, PackSettings, PackSettingsBuilder};
pub use pack::{PackPlan, Packer};
