//! Integration tests for biquads-cli.
//!
//! Each test runs the `biquads` binary built by cargo and checks its output.

use std::io::Write;
use std::process::{Command, Stdio};

fn biquads_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_biquads"))
}

fn run_ok(args: &[&str]) -> String {
    let output = biquads_bin()
        .args(args)
        .output()
        .expect("failed to run biquads");
    assert!(
        output.status.success(),
        "biquads {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn cli_shapes_lists_all_shapes() {
    let stdout = run_ok(&["shapes"]);
    for shape in [
        "lowpass",
        "highpass",
        "bandpass",
        "allpass",
        "notch",
        "peaking",
        "lowshelf",
        "highshelf",
    ] {
        assert!(stdout.contains(shape), "missing '{shape}' in:\n{stdout}");
    }
}

#[test]
fn cli_shapes_json_is_valid() {
    let stdout = run_ok(&["shapes", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn cli_presets_list_and_show() {
    let stdout = run_ok(&["presets", "list"]);
    assert!(stdout.contains("Hum 60"));

    let stdout = run_ok(&["presets", "show", "hum_60"]);
    assert!(stdout.contains("shape = \"notch\""), "got:\n{stdout}");
}

#[test]
fn cli_presets_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("air.toml");
    run_ok(&["presets", "export", "air", path.to_str().unwrap()]);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("highshelf"));
}

// ---------------------------------------------------------------------------
// Coefficients
// ---------------------------------------------------------------------------

#[test]
fn cli_coeffs_json_matches_known_values() {
    let stdout = run_ok(&[
        "coeffs", "--shape", "lowpass", "--cutoff", "5000", "--q", "1.414", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let normalized = &value["normalized"];

    assert_eq!(normalized["a0"].as_f64().unwrap(), 1.0);
    assert!((normalized["b0"].as_f64().unwrap() - 0.085_021_43).abs() < 1e-6);
    assert!((normalized["a1"].as_f64().unwrap() + 1.305_649_69).abs() < 1e-6);
    assert_eq!(value["shape"], "lowpass");
}

#[test]
fn cli_coeffs_rejects_cutoff_above_nyquist() {
    let output = biquads_bin()
        .args(["coeffs", "--shape", "lowpass", "--cutoff", "30000"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cutoff"), "got: {stderr}");
}

#[test]
fn cli_coeffs_requires_a_source() {
    let output = biquads_bin().args(["coeffs"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn cli_coeffs_save_then_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.toml");
    let path_str = path.to_str().unwrap();

    let direct = run_ok(&[
        "coeffs", "--shape", "lowshelf", "--cutoff", "80", "--gain", "-3", "--save", path_str,
    ]);
    let from_file = run_ok(&["coeffs", "--config", path_str]);
    assert_eq!(direct, from_file);
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn cli_response_peaking_center_gain() {
    let stdout = run_ok(&[
        "response", "--shape", "peaking", "--cutoff", "1000", "--gain", "6", "--freqs", "1000",
        "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let db = value[0]["magnitude_db"].as_f64().unwrap();
    assert!((db - 6.0).abs() < 1e-9, "got {db}");
}

#[test]
fn cli_response_sweep_point_count() {
    let stdout = run_ok(&[
        "response", "--preset", "air", "--points", "10", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 10);
}

#[test]
fn cli_impulse_zero_gain_shelf_is_unit_impulse() {
    let stdout = run_ok(&[
        "impulse", "--shape", "highshelf", "--cutoff", "2000", "--gain", "0", "-n", "8", "--json",
    ]);
    let value: Vec<f64> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.len(), 8);
    assert!((value[0] - 1.0).abs() < 1e-12);
    assert!(value[1..].iter().all(|h| h.abs() < 1e-12));
}

#[test]
fn cli_process_filters_stdin() {
    let mut child = biquads_bin()
        .args(["process", "--shape", "lowpass", "--cutoff", "1000"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, "# impulse").unwrap();
        for x in [1.0, 0.0, 0.0, 0.0] {
            writeln!(stdin, "{x}").unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let samples: Vec<f64> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(samples.len(), 4);
    assert!(samples[0] > 0.0 && samples[0] < 1.0);
}

#[test]
fn cli_process_bypass_is_identity() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "0.5\n-0.25\n0.125\n").unwrap();

    let stdout = run_ok(&[
        "process",
        "--preset",
        "presence",
        "--bypass",
        "--input",
        input.to_str().unwrap(),
    ]);
    let samples: Vec<f64> = stdout.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(samples, vec![0.5, -0.25, 0.125]);
}
