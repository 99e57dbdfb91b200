//! Command line argument parsing and validation.
//!
//! Arguments override values from the config file; the merged result is fed
//! to [`PackSettingsBuilder`].

use crate::error::{CliError, Result};
use crate::metadata::PackConfigFile;
use crate::options::{DeltaMode, PackSettingsBuilder, RuntimeIdentifier};
use clap::Parser;
use std::path::PathBuf;

/// Release pack planner for desktop applications
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_pack",
    version,
    about = "Plans release packages for desktop application update feeds",
    long_about = "Validates pack options, scans the payload directory and prints the release artifacts a pack would produce (full package, delta, portable archive, installer).

Options can come from a pack.toml file (see --config); command line flags win.

Usage:
  kodegen_bundler_pack -u MyApp -v 1.0.0 -p ./publish -r win-x64
  kodegen_bundler_pack -u MyApp -v 1.1.0 -p ./publish -c beta --delta best-size --no-portable
  kodegen_bundler_pack --config pack.toml --json

Exit code 0 = options are valid and the plan was produced."
)]
pub struct Args {
    /// Package id
    #[arg(short = 'u', long, value_name = "ID")]
    pub pack_id: Option<String>,

    /// Package version (semver)
    #[arg(short = 'v', long, value_name = "VERSION")]
    pub pack_version: Option<String>,

    /// Directory containing the application files
    #[arg(short = 'p', long = "pack-dir", value_name = "DIR")]
    pub pack_directory: Option<PathBuf>,

    /// Package authors
    #[arg(long, value_name = "AUTHORS")]
    pub pack_authors: Option<String>,

    /// Product title
    #[arg(long, value_name = "TITLE")]
    pub pack_title: Option<String>,

    /// Markdown release notes file
    #[arg(long, value_name = "PATH")]
    pub release_notes: Option<PathBuf>,

    /// Output directory for release artifacts [default: Releases]
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub release_dir: Option<PathBuf>,

    /// Target runtime identifier, e.g. win-x64, osx-arm64, linux-x64 [default: host]
    #[arg(short = 'r', long = "runtime", value_name = "RID")]
    pub runtime: Option<RuntimeIdentifier>,

    /// Release channel [default: stable]
    #[arg(short = 'c', long, env = "PACK_CHANNEL", value_name = "NAME")]
    pub channel: Option<String>,

    /// Delta generation mode: none, best-speed, best-size [default: best-speed]
    #[arg(long = "delta", value_name = "MODE")]
    pub delta_mode: Option<DeltaMode>,

    /// Entry executable name (inferred from the payload when omitted)
    #[arg(short = 'e', long = "main-exe", value_name = "NAME")]
    pub entry_executable_name: Option<String>,

    /// Icon file for the installer and shortcuts
    #[arg(short = 'i', long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Semicolon separated glob patterns of files to leave out of the package
    #[arg(long, value_name = "GLOBS")]
    pub exclude: Option<String>,

    /// Skip the portable archive
    #[arg(long, overrides_with = "portable")]
    pub no_portable: bool,

    /// Build the portable archive even if the config file sets no_portable
    #[arg(long, overrides_with = "no_portable")]
    pub portable: bool,

    /// Skip the installer
    #[arg(long, overrides_with = "inst")]
    pub no_inst: bool,

    /// Build the installer even if the config file sets no_inst
    #[arg(long, overrides_with = "no_inst")]
    pub inst: bool,

    /// Config file [default: pack.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(id) = &self.pack_id
            && id.trim().is_empty()
        {
            return Err("Package id cannot be empty".to_string());
        }
        if let Some(channel) = &self.channel
            && channel.trim().is_empty()
        {
            return Err("Channel cannot be empty".to_string());
        }
        Ok(())
    }

    /// Merges arguments over `file` into a settings builder.
    pub fn into_builder(self, file: PackConfigFile) -> Result<PackSettingsBuilder> {
        self.validate()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        let runtime = match self.runtime {
            Some(rid) => Some(rid),
            None => file.runtime()?,
        };
        let PackConfigFile { pack, release, .. } = file;

        let pack_id = self.pack_id.or(pack.id).ok_or_else(|| missing("pack-id"))?;
        let pack_version = self
            .pack_version
            .or(pack.version)
            .ok_or_else(|| missing("pack-version"))?;
        let pack_directory = self
            .pack_directory
            .or(pack.directory)
            .ok_or_else(|| missing("pack-dir"))?;

        let mut builder = PackSettingsBuilder::new()
            .pack_id(pack_id)
            .pack_version(pack_version)
            .pack_directory(pack_directory)
            .no_portable(switch(self.no_portable, self.portable, release.no_portable))
            .no_inst(switch(self.no_inst, self.inst, release.no_inst));

        if let Some(authors) = self.pack_authors.or(pack.authors) {
            builder = builder.pack_authors(authors);
        }
        if let Some(title) = self.pack_title.or(pack.title) {
            builder = builder.pack_title(title);
        }
        if let Some(notes) = self.release_notes.or(pack.release_notes) {
            builder = builder.release_notes(notes);
        }
        if let Some(dir) = self.release_dir.or(pack.output) {
            builder = builder.release_dir(dir);
        }
        if let Some(rid) = runtime {
            builder = builder.runtime(rid);
        }
        if let Some(channel) = self.channel.or(release.channel) {
            builder = builder.channel(channel.trim());
        }
        if let Some(mode) = self.delta_mode.or(release.delta) {
            builder = builder.delta_mode(mode);
        }
        if let Some(name) = self.entry_executable_name.or(release.main_exe) {
            builder = builder.entry_executable_name(name);
        }
        if let Some(icon) = self.icon.or(release.icon) {
            builder = builder.icon(icon.to_string_lossy());
        }
        if let Some(exclude) = self.exclude.or(release.exclude) {
            builder = builder.exclude(exclude);
        }

        Ok(builder)
    }
}

/// Resolves a `--no-x` / `--x` pair over the config file value.
fn switch(off: bool, on: bool, file: Option<bool>) -> bool {
    match (off, on) {
        (true, _) => true,
        (_, true) => false,
        _ => file.unwrap_or(false),
    }
}

fn missing(argument: &str) -> crate::error::BundlerError {
    CliError::MissingArgument {
        argument: argument.to_string(),
    }
    .into()
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Emit JSON instead of human-readable text
    json: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        // JSON output must stay machine-readable.
        let output = super::OutputManager::new(log::log_enabled!(log::Level::Debug), args.json);

        Self {
            output,
            json: args.json,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether the plan is printed as JSON
    pub fn json(&self) -> bool {
        self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{NugetPackCommand, PackOptions, PlatformOptions, TargetOs};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kodegen_bundler_pack").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn parses_release_flags() {
        let args = parse(&[
            "-u", "MyApp", "-v", "1.0.0", "-p", "publish", "-r", "win-arm64", "-c", "beta",
            "--delta", "none", "--no-portable",
        ]);
        assert_eq!(args.delta_mode, Some(DeltaMode::None));
        assert!(args.no_portable);
        assert!(!args.no_inst);

        let settings = args.into_builder(PackConfigFile::default()).unwrap().build().unwrap();
        assert_eq!(settings.channel(), "beta");
        assert_eq!(settings.target_runtime().os, TargetOs::Windows);
    }

    #[test]
    fn rejects_unknown_delta_mode() {
        let result = Args::try_parse_from([
            "kodegen_bundler_pack",
            "--delta",
            "fastest",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_overrides_config_file() {
        let file = crate::metadata::parse_config(
            "[pack]\nid = \"FromFile\"\nversion = \"0.1.0\"\ndirectory = \"d\"\n[release]\nchannel = \"stable\"\nno_inst = true\n",
        )
        .unwrap();
        let args = parse(&["-u", "FromCli", "-c", "beta"]);

        let settings = args.into_builder(file).unwrap().build().unwrap();
        assert_eq!(settings.pack_id(), "FromCli");
        assert_eq!(settings.channel(), "beta");
        assert!(settings.no_inst());
    }

    #[test]
    fn command_line_switches_override_config_file() {
        let file = || {
            crate::metadata::parse_config(
                "[pack]\nid = \"MyApp\"\nversion = \"1.0.0\"\ndirectory = \"d\"\n[release]\nno_portable = true\nno_inst = true\n",
            )
            .unwrap()
        };

        let settings = parse(&[]).into_builder(file()).unwrap().build().unwrap();
        assert!(settings.no_portable());
        assert!(settings.no_inst());

        let settings = parse(&["--portable", "--inst"])
            .into_builder(file())
            .unwrap()
            .build()
            .unwrap();
        assert!(!settings.no_portable());
        assert!(!settings.no_inst());

        // Last flag of a pair wins.
        let args = parse(&["--portable", "--no-portable", "--no-inst", "--inst"]);
        assert!(args.no_portable && !args.portable);
        assert!(args.inst && !args.no_inst);
    }

    #[test]
    fn delta_flag_uses_config_file_spellings() {
        assert_eq!(parse(&["--delta", "Best-Size"]).delta_mode, Some(DeltaMode::BestSize));
        for bad in ["best_size", "fastest"] {
            assert!(
                Args::try_parse_from(["kodegen_bundler_pack", "--delta", bad]).is_err(),
                "{bad}"
            );
        }
    }

    #[test]
    fn reports_missing_id() {
        let args = parse(&["-v", "1.0.0", "-p", "publish"]);
        let err = args.into_builder(PackConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("pack-id"));
    }
}
