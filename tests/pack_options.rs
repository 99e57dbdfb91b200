//! Shape and immutability of the pack options contract.

use kodegen_bundler_pack::options::{
    Arch, DEFAULT_CHANNEL, DEFAULT_RELEASE_DIR, DeltaMode, NugetPackCommand, PackOptions,
    PackSettings, PackSettingsBuilder, PlatformOptions, RuntimeIdentifier, TargetOs,
};
use kodegen_bundler_pack::pack::Error;
use std::path::Path;
use std::sync::Arc;

fn base() -> PackSettingsBuilder {
    PackSettingsBuilder::new()
        .pack_id("MyApp")
        .pack_version("1.2.3")
        .pack_directory("publish")
}

/// Reads every field through one trait object.
fn describe(options: &dyn PackOptions) -> String {
    format!(
        "{} {} {} {} {} {} {} {} {} {} {} {}",
        options.pack_id(),
        options.pack_version(),
        options.pack_directory().display(),
        options.pack_authors(),
        options.pack_title(),
        options.release_dir().display(),
        options.target_runtime(),
        options.channel(),
        options.delta_mode(),
        options.entry_executable_name().is_empty(),
        options.no_portable(),
        options.no_inst(),
    )
}

#[test]
fn parent_contract_fields_are_readable_through_pack_options() {
    let settings = base()
        .pack_authors("Jane Doe")
        .pack_title("My App")
        .release_dir("out")
        .runtime(RuntimeIdentifier::new(TargetOs::MacOs, Arch::AArch64))
        .channel("beta")
        .build()
        .unwrap();

    assert_eq!(
        describe(&settings),
        "MyApp 1.2.3 publish Jane Doe My App out osx-arm64 beta best-speed true false false"
    );
}

#[test]
fn values_read_back_exactly_as_built() {
    let settings = base()
        .channel("beta")
        .delta_mode(DeltaMode::None)
        .no_portable(true)
        .no_inst(false)
        .entry_executable_name("MyApp.exe")
        .icon("assets/app.ico")
        .exclude("*.pdb")
        .build()
        .unwrap();

    for _ in 0..2 {
        assert_eq!(settings.channel(), "beta");
        assert_eq!(settings.delta_mode(), DeltaMode::None);
        assert!(settings.no_portable());
        assert!(!settings.no_inst());
        assert_eq!(settings.entry_executable_name(), "MyApp.exe");
        assert_eq!(settings.icon(), "assets/app.ico");
        assert_eq!(settings.exclude(), "*.pdb");
    }

    let cloned = settings.clone();
    assert_eq!(cloned.channel(), settings.channel());
}

#[test]
fn defaults() {
    let settings = base().build().unwrap();

    assert_eq!(settings.channel(), DEFAULT_CHANNEL);
    assert_eq!(settings.delta_mode(), DeltaMode::BestSpeed);
    assert_eq!(settings.release_dir(), Path::new(DEFAULT_RELEASE_DIR));
    assert_eq!(settings.pack_authors(), "MyApp");
    assert_eq!(settings.pack_title(), "MyApp");
    assert_eq!(settings.release_notes(), None);
    assert_eq!(settings.target_runtime(), RuntimeIdentifier::host());
    assert!(settings.entry_executable_name().is_empty());
    assert!(settings.exclude().is_empty());
    assert!(!settings.no_portable());
    assert!(!settings.no_inst());
}

#[test]
fn delta_mode_is_a_closed_set() {
    assert_eq!("none".parse::<DeltaMode>().unwrap(), DeltaMode::None);
    assert!("BestSpeed".parse::<DeltaMode>().is_err());
    assert_eq!(" best-speed ".parse::<DeltaMode>().unwrap(), DeltaMode::BestSpeed);
    assert_eq!("Best-Size".parse::<DeltaMode>().unwrap(), DeltaMode::BestSize);

    for bad in ["", "fast", "disabled", "2", "best_speed", "bestsize"] {
        let err = bad.parse::<DeltaMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidDeltaMode(_)), "{bad}");
    }

    for mode in DeltaMode::ALL {
        assert_eq!(mode.to_string().parse::<DeltaMode>().unwrap(), mode);
    }
    assert!(!DeltaMode::None.is_enabled());
    assert!(DeltaMode::BestSize.is_enabled());
}

#[test]
fn artifact_switches_are_independent() {
    for (no_portable, no_inst) in [(false, false), (true, false), (false, true), (true, true)] {
        let settings = base()
            .no_portable(no_portable)
            .no_inst(no_inst)
            .build()
            .unwrap();
        assert_eq!(settings.no_portable(), no_portable);
        assert_eq!(settings.no_inst(), no_inst);
    }
}

#[test]
fn rejects_invalid_version() {
    let err = base().pack_version("1.0").build().unwrap_err();
    assert!(matches!(err, Error::InvalidVersion { .. }));
}

#[test]
fn requires_identity_fields() {
    let err = PackSettingsBuilder::new()
        .pack_version("1.0.0")
        .pack_directory("publish")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("pack_id"));

    let err = PackSettingsBuilder::new()
        .pack_id("MyApp")
        .pack_version("1.0.0")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("pack_directory"));
}

#[test]
fn runtime_identifiers() {
    let rid: RuntimeIdentifier = "linux-x86_64".parse().unwrap();
    assert_eq!(rid, RuntimeIdentifier::new(TargetOs::Linux, Arch::X86_64));
    assert_eq!(rid.to_string(), "linux-x64");

    assert_eq!(
        "win-x86".parse::<RuntimeIdentifier>().unwrap().to_string(),
        "win-x86"
    );
    for bad in ["win", "beos-x64", "win-sparc", ""] {
        assert!(bad.parse::<RuntimeIdentifier>().is_err(), "{bad}");
    }
}

#[test]
fn settings_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PackSettings>();

    let settings = Arc::new(base().channel("beta").build().unwrap());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let settings = Arc::clone(&settings);
            scope.spawn(move || assert_eq!(settings.channel(), "beta"));
        }
    });
}
