//! Dry-run pack orchestration.

use super::{
    entry::resolve_entry,
    payload::{ExcludeFilter, scan_payload},
    plan::PackPlan,
    validate::{ValidationReport, validate},
};
use crate::options::PackOptions;
use crate::pack::Result;

/// Runs the pack phases against borrowed options.
///
/// Phases run in order and stop at the first failure:
///
/// 1. validate the options
/// 2. scan the payload, applying `exclude` before hashing
/// 3. resolve the entry executable
/// 4. plan the artifacts
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_pack::options::PackSettingsBuilder;
/// use kodegen_bundler_pack::pack::Packer;
///
/// # async fn example() -> kodegen_bundler_pack::pack::Result<()> {
/// let options = PackSettingsBuilder::new()
///     .pack_id("MyApp")
///     .pack_version("1.0.0")
///     .pack_directory("publish")
///     .build()?;
///
/// let plan = Packer::new(&options).dry_run().await?;
/// for artifact in &plan.artifacts {
///     println!("{:?}: {}", artifact.kind, artifact.path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packer<'a, O: PackOptions + ?Sized> {
    options: &'a O,
}

impl<'a, O: PackOptions + ?Sized> Packer<'a, O> {
    /// Creates a packer reading `options`.
    pub fn new(options: &'a O) -> Self {
        Self { options }
    }

    /// Options this packer reads.
    pub fn options(&self) -> &'a O {
        self.options
    }

    /// Runs pre-flight validation only.
    pub fn validate(&self) -> ValidationReport {
        validate(self.options)
    }

    /// Runs every phase and returns the plan.
    pub async fn dry_run(&self) -> Result<PackPlan> {
        let options = self.options;
        log::info!(
            "Planning {} {} ({}) on channel '{}'",
            options.pack_id(),
            options.pack_version(),
            options.target_runtime(),
            options.channel()
        );

        let warnings = self.validate().into_result()?;

        let filter = ExcludeFilter::parse(options.exclude())?;
        let payload = scan_payload(options.pack_directory(), &filter).await?;

        let entry = resolve_entry(options, &payload)?;
        log::info!("Entry executable: {}", entry.path());

        let plan = PackPlan::build(options, &payload, entry, warnings)?;
        log::info!("Planned {} artifacts", plan.artifacts.len());
        Ok(plan)
    }
}
