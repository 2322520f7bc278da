//! CLI-level tests for the generate command in offline mode.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const OBJECT_YML: &str = "\
### YamlMime:ManagedReference
items:
- uid: UnityEngine.Object
  commentId: T:UnityEngine.Object
  name: Object
  fullName: UnityEngine.Object
  nameWithType: Object
- uid: UnityEngine.Transform.position
  commentId: P:UnityEngine.Transform.position
  name: position
  fullName: UnityEngine.Transform.position
  nameWithType: Transform.position
";

fn scriptref() -> Command {
    Command::cargo_bin("scriptref").unwrap()
}

#[test]
fn generate_offline_writes_map_per_version() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata").join("2021.3");
    fs::create_dir_all(&metadata).unwrap();
    fs::write(metadata.join("UnityEngine.Object.yml"), OBJECT_YML).unwrap();
    let output = dir.path().join("site");

    scriptref()
        .arg("generate")
        .arg("2021.3")
        .arg("--offline")
        .arg("--metadata-root")
        .arg(dir.path().join("metadata"))
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2021.3: 2 references"));

    let written = fs::read_to_string(output.join("2021.3").join("xrefmap.yml")).unwrap();
    assert!(written.starts_with("### YamlMime:XRefMap"));
    assert!(written.contains("sorted: true"));
    // Offline mode emits the unverified primary spelling.
    assert!(written.contains(
        "https://docs.unity3d.com/2021.3/Documentation/ScriptReference/Transform.position.html"
    ));
}

#[test]
fn generate_skips_version_without_metadata() {
    let dir = tempfile::tempdir().unwrap();

    scriptref()
        .arg("generate")
        .arg("2022.1")
        .arg("--offline")
        .arg("--metadata-root")
        .arg(dir.path().join("metadata"))
        .arg("--output-dir")
        .arg(dir.path().join("site"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2022.1: skipped"));

    assert!(!dir.path().join("site").join("2022.1").exists());
}

#[test]
fn generate_requires_at_least_one_version() {
    scriptref().arg("generate").assert().failure();
}
