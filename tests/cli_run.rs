use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("kira-poolcalc").unwrap()
}

#[test]
fn run_builtin_prints_summary() {
    let out = bin().args(["run"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Final pool: 400.00 µl, 361 samples, 43.5208 nM per sample"));
    assert!(stdout.contains("Flags: none"));
}

#[test]
fn run_zero_final_volume_uses_default() {
    let out = bin().args(["run", "--final-volume", "0"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Final pool: 400.00 µl, 361 samples, 43.5208 nM per sample"));
}

#[test]
fn run_writes_json_and_tsv() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("pools.tsv");
    fs::write(
        &input,
        "id\tmolarity\tvolume\tsamples\n1\t300\t393.3\t126\n2\t100\t488.6\t196\n3\t50\t149.7\t39\n",
    )
    .unwrap();
    let out_dir = tmp.path().join("out");

    bin()
        .args(["run", "--json", "--tsv", "--final-volume", "200"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .success();

    let v: Value =
        serde_json::from_slice(&fs::read(out_dir.join("poolcalc.json")).unwrap()).unwrap();
    assert_eq!(v["options"]["desired_final_volume"], 200.0);
    let total: f64 = v["pools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["final_volume"].as_f64().unwrap())
        .sum();
    assert!((total - 200.0).abs() < 1e-9);

    let tsv = fs::read_to_string(out_dir.join("poolcalc.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("pool_id\tmolarity\tvolume\tsamples"));
    assert!(lines[3].starts_with("3\t"));
    assert!(lines[3].ends_with("\ttrue"));
}

#[test]
fn exclude_removes_pool() {
    let tmp = TempDir::new().unwrap();
    bin()
        .args(["run", "--json", "--exclude", "2"])
        .arg("--out")
        .arg(tmp.path())
        .assert()
        .success();
    let v: Value =
        serde_json::from_slice(&fs::read(tmp.path().join("poolcalc.json")).unwrap()).unwrap();
    assert_eq!(v["input_meta"]["n_pools"], 2);
    assert_eq!(v["input_meta"]["excluded"][0], 2);
}

#[test]
fn exclude_unknown_pool_fails() {
    bin().args(["run", "--exclude", "9"]).assert().failure();
}

#[test]
fn strict_rejects_zero_samples() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("pools.csv");
    fs::write(&input, "1,10,50,0\n2,10,50,12\n").unwrap();

    bin()
        .args(["run", "--strict"])
        .arg("--input")
        .arg(&input)
        .assert()
        .failure();

    let out = bin().args(["run"]).arg("--input").arg(&input).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("non_finite (pools=1,2)"));
    assert!(stdout.contains("pool 1: sample count is zero"));
}

#[test]
fn validate_and_pools_show() {
    let out = bin().args(["validate"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("kira-poolcalc validate ok"));
    assert!(stdout.contains("samples: 361"));

    let out = bin().args(["pools", "show"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("3\t50\t149.7\t39\t13.03"));
}
