//! Runs the built binary: exit status, stdout table and `--out` report.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use domxml_membench::corpus;
use tempfile::tempdir;

fn membench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_domxml-membench"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn path_arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

fn data_rows(stdout: &[u8]) -> usize {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.split(" | ").next().is_some_and(|name| name.trim_start().ends_with(".xml")))
        .count()
}

#[test]
fn measures_directory_and_writes_json_report() {
    let dir = tempdir().unwrap();
    let vms = dir.path().join("vms");
    let written = corpus::write_corpus(&vms, &corpus::GenerateConfig { count: 2, seed: 5 }).unwrap();
    let report = dir.path().join("report.json");

    let out = membench(&["--dir", path_arg(&vms), "--out", path_arg(&report)]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(data_rows(&out.stdout), written.len());
    assert!(String::from_utf8_lossy(&out.stdout).contains("In average, libvirtxml is "));

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&report).unwrap()).unwrap();
    assert_eq!(json["run"]["profile"], "quick");
    assert_eq!(json["files"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["summary"]["files"], 2);
}

#[test]
fn malformed_file_exits_non_zero_without_rows() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.xml");
    fs::write(&broken, "<domain type='kvm'><name>x</domain>").unwrap();
    let report = dir.path().join("report.json");

    let out = membench(&["--xml", path_arg(&broken), "--out", path_arg(&report)]);

    assert!(!out.status.success());
    assert_eq!(data_rows(&out.stdout), 0);
    assert!(!report.exists());
}

#[test]
fn unknown_flag_exits_non_zero() {
    let out = membench(&["--directory", "."]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn no_inputs_succeeds_with_empty_table() {
    let out = membench(&[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).ends_with("no input files measured\n"));
}
