use assert_cmd::Command;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("paracetamol-risk").expect("binary exists");
    cmd.env_remove("LEVEL_UNIT").env("RUST_LOG", "off");
    cmd
}

#[test]
fn cli_help_runs() {
    bin().arg("--help").assert().success();
}

#[test]
fn evaluate_prints_verdict() {
    let output = bin()
        .args(["evaluate", "--type", "chronic", "--sampling", "12:00", "--level", "150"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let verdict: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdict["risk"], "High");
    assert_eq!(verdict["unit"], "umol/L");
}

#[test]
fn evaluate_reports_faults() {
    bin()
        .args(["evaluate", "--latest", "25:00", "--sampling", "12:00", "--level", "1"])
        .assert()
        .failure();
}

#[test]
fn curve_prints_halving_line() {
    let output = bin()
        .args(["curve", "--from", "4", "--to", "8", "--step", "4", "--unit", "mcg"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("4.0\t150.0"));
    assert!(stdout.contains("8.0\t75.0"));
}

#[test]
fn curve_rejects_unbounded_range() {
    let output = bin()
        .args(["curve", "--from", "4", "--to", "inf", "--step", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("must be finite"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn evaluate_keeps_patient_values_out_of_info_logs() {
    let output = bin()
        .env("RUST_LOG", "info")
        .args(["evaluate", "--latest", "08:17", "--sampling", "13:43", "--level", "987.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("evaluate"), "stderr: {stderr}");
    assert!(!stderr.contains("987.5"), "stderr: {stderr}");
    assert!(!stderr.contains("\"08:17\""), "stderr: {stderr}");
}
