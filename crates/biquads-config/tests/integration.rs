//! Integration tests for biquads-config.
//!
//! These tests exercise file I/O and the path from TOML to running filters.

use biquads_config::{
    ConfigError, FilterDefinition, FilterSnapshot, factory_definition, factory_definitions,
};
use biquads_core::{Filter, FilterShape};
use tempfile::TempDir;

#[test]
fn test_definition_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("presence.toml");

    let def = FilterDefinition::new(FilterShape::PeakingEq, 3000.0)
        .with_name("Presence")
        .with_q(1.2)
        .with_gain(2.5);
    def.save(&path).unwrap();

    let loaded = FilterDefinition::load(&path).unwrap();
    assert_eq!(loaded, def);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eq").join("vocals").join("air.toml");

    factory_definition("air").unwrap().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = FilterDefinition::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_invalid_definition_loads_but_does_not_build() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "shape = \"lowpass\"\ncutoff = 1000.0\nsample_rate = 0\n").unwrap();

    let def = FilterDefinition::load(&path).unwrap();
    assert!(matches!(def.build(), Err(ConfigError::Filter(_))));
}

#[test]
fn test_loaded_definition_matches_direct_construction() {
    let def = FilterDefinition::from_toml(
        r#"
shape = "highshelf"
cutoff = 5000.0
sample_rate = 96000
gain = 3.0
"#,
    )
    .unwrap();

    let from_file = def.build().unwrap();
    let direct = Filter::high_shelf(5000.0, 96_000, core::f64::consts::FRAC_1_SQRT_2, 3.0).unwrap();
    assert_eq!(from_file.coefficients(), direct.coefficients());
}

#[test]
fn test_factory_definitions_process_audio() {
    for def in factory_definitions() {
        let mut filter = def.build().unwrap();
        let output: Vec<f64> = (0..1024)
            .map(|i| filter.process_sample((f64::from(i) * 0.05).sin() * 0.5))
            .collect();

        assert!(
            output.iter().all(|s| s.is_finite()),
            "{:?} produced non-finite output",
            def.name
        );
        assert!(output.iter().any(|&s| s != 0.0));
    }
}

#[test]
fn test_snapshot_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshot.toml");

    let mut filter = Filter::notch(1000.0, 48_000, 4.0).unwrap();
    for i in 0..300 {
        filter.process_sample((f64::from(i) * 0.3).sin());
    }

    FilterSnapshot::capture(&filter).save(&path).unwrap();
    let mut restored = FilterSnapshot::load(&path).unwrap().restore().unwrap();

    assert_eq!(restored.state(), filter.state());
    for i in 0..32 {
        let x = f64::from(i) * 0.01;
        assert_eq!(restored.process_sample(x), filter.process_sample(x));
    }
}
