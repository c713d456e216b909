// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use python_versions_check::package::Package;
use python_versions_check::report::{write_to_artifact, Report, BUG_URL};

/// Build a real RPM archive on disk and return its path.
fn build_rpm(dir: &Path, filename: &str) -> PathBuf {
    let script_source = dir.join("sample");
    std::fs::write(&script_source, "#!/usr/bin/python3\n").unwrap();

    let package = rpm::PackageBuilder::new(
        "python3-sample",
        "2.0.1",
        "MIT",
        "noarch",
        "Sample package for gate inspection",
    )
    .release("2")
    .requires(rpm::Dependency::any("python3-setuptools"))
    .requires(rpm::Dependency::greater_eq("python(abi)", "3.11"))
    .with_file(&script_source, rpm::FileOptions::new("/usr/bin/sample"))
    .unwrap()
    .build()
    .unwrap();

    let path = dir.join(filename);
    let mut out = File::create(&path).unwrap();
    package.write(&mut out).unwrap();
    path
}

#[test]
fn test_package_inspection_and_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = build_rpm(dir.path(), "python3-sample-2.0.1-2.noarch.rpm");

    let mut package = Package::new(path).expect("Should parse package header");

    assert_eq!(package.name(), "python3-sample");
    assert_eq!(package.nvr(), "python3-sample-2.0.1-2");
    assert!(!package.is_source_package());
    assert_eq!(package.require_names().len(), package.require_nevrs().len());
    assert!(package.files().contains(&"/usr/bin/sample".to_string()));

    // The versions slot starts unset and holds whatever the first scan stores.
    assert!(package.py_versions().is_none());
    let versions: BTreeSet<String> = [String::from("3.11")].into_iter().collect();
    package.set_py_versions(versions.clone());
    assert_eq!(package.py_versions(), Some(&versions));

    // JSON report round-trips through serde_json with the expected fields.
    let report = Report::new(&package);
    let json_str = serde_json::to_string(&report).expect("Should serialize report to JSON");
    let json: serde_json::Value = serde_json::from_str(&json_str).expect("Should parse JSON");

    assert_eq!(json["name"], "python3-sample");
    assert_eq!(json["nvr"], "python3-sample-2.0.1-2");
    assert_eq!(json["source_package"], false);
    let requires = json["requires"]
        .as_array()
        .expect("'requires' should be an array");
    assert!(requires
        .iter()
        .any(|entry| entry["name"] == "python3-setuptools"));
    assert!(requires
        .iter()
        .any(|entry| entry["nevr"] == "python(abi) >= 3.11"));
    assert!(json["files"]
        .as_array()
        .expect("'files' should be an array")
        .iter()
        .any(|file| file == "/usr/bin/sample"));
}

#[test]
fn test_source_package_detection() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = build_rpm(dir.path(), "python3-sample-2.0.1-2.src.rpm");

    let package = Package::new(path).expect("Should parse package header");
    assert!(package.is_source_package());
}

#[test]
fn test_failed_gate_writes_artifact_blocks() {
    let dir = tempfile::TempDir::new().unwrap();
    let artifact = dir.path().join("task_artifact");

    // Two checks failing in sequence append two blocks.
    write_to_artifact(&artifact, "Bad version", "http://example.org/doc").unwrap();
    write_to_artifact(
        &artifact,
        "These RPMs require both Python 2 and Python 3",
        "http://example.org/two_three",
    )
    .unwrap();

    let content = std::fs::read_to_string(&artifact).unwrap();
    assert_eq!(content.matches("Bad version").count(), 1);
    assert_eq!(content.matches("http://example.org/doc").count(), 1);
    assert_eq!(
        content
            .matches("These RPMs require both Python 2 and Python 3")
            .count(),
        1
    );
    assert_eq!(content.matches(BUG_URL).count(), 2);
    assert_eq!(content.matches("-----------\n").count(), 2);
    // Both blocks reference the IRC channel hint verbatim.
    assert_eq!(
        content
            .matches("Or ask at #fedora-python IRC channel for help.")
            .count(),
        2
    );
}
