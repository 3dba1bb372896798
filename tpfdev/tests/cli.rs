use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn tpfdev(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tpfdev"))
        .args(args)
        .current_dir(dir)
        .env_remove("TPF_LOG")
        .output()
        .expect("run tpfdev")
}

/// version 1, desc + configure script.
fn small_form() -> Vec<u8> {
    let desc = b"<package/>";
    let script = b"#!/bin/sh\n";
    let mut v = vec![1u8, 2];
    let mut start = 2 + 2 * 9u32;
    for (code, len) in [(0x00u8, desc.len()), (0x21, script.len())] {
        v.push(code);
        v.extend_from_slice(&start.to_le_bytes());
        v.extend_from_slice(&(len as u32).to_le_bytes());
        start += len as u32;
    }
    v.extend_from_slice(desc);
    v.extend_from_slice(script);
    v
}

#[test]
fn missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = tpfdev(dir.path(), &["info"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No transport form found"));
}

#[test]
fn unsupported_version_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pkg.tpm2"), [2u8, 0]).unwrap();
    let out = tpfdev(dir.path(), &["info"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unsupported version: 2."));
}

#[test]
fn info_prints_report_for_discovered_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.tpm2"), small_form()).unwrap();
    fs::write(dir.path().join("c.tpm2"), [9u8]).unwrap();
    let out = tpfdev(dir.path(), &["info"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<package/>\nHave script `configure'.\n"
    );
}

#[test]
fn unpack_writes_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pkg.tpm2"), small_form()).unwrap();
    let out = tpfdev(dir.path(), &["unpack", "pkg.tpm2", "--out-dir", "out"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("out/desc.xml")).unwrap(), b"<package/>");
    assert_eq!(fs::read(dir.path().join("out/configure")).unwrap(), b"#!/bin/sh\n");
}

#[test]
fn toc_json_lists_sections() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pkg.tpm2"), small_form()).unwrap();
    let out = tpfdev(dir.path(), &["toc", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["header"]["section_count"], 2);
    assert_eq!(v["sections"][0]["kind"], "Metadata");
    assert_eq!(v["sections"][1]["start"], 30);
    assert_eq!(v["compression"], "None");
}

#[test]
fn bare_invocation_without_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = tpfdev(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No transport form found"));
}

#[test]
fn bare_invocation_reports_discovered_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pkg.tpm2"), small_form()).unwrap();
    let out = tpfdev(dir.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<package/>\nHave script `configure'.\n"
    );
}

#[test]
fn file_argument_alone_runs_informational_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pkg.tpm2"), small_form()).unwrap();
    let out = tpfdev(dir.path(), &["pkg.tpm2"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<package/>\nHave script `configure'.\n"
    );
    assert!(!dir.path().join("desc.xml").exists());
    assert!(!dir.path().join("configure").exists());
}
