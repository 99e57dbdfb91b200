//! Pack pipeline, dry-run edition.
//!
//! Consumes [`PackOptions`](crate::options::PackOptions) and works out what a
//! pack would produce without producing it:
//!
//! - [`validate`] - pre-flight checks on the options
//! - [`payload`] - payload scan with exclusions and hashing
//! - [`entry`] - explicit or inferred entry executable
//! - [`plan`] - artifact list for the release directory
//!
//! [`Packer`] runs the phases in order.

mod checksum;
pub mod entry;
pub mod error;
mod orchestrator;
pub mod payload;
pub mod plan;
pub mod validate;

pub use entry::EntryPoint;
pub use error::{Error, Result};
pub use orchestrator::Packer;
pub use payload::{ExcludeFilter, Payload, PayloadFile};
pub use plan::{ArtifactKind, PackPlan, PlannedArtifact};
pub use validate::ValidationReport;
