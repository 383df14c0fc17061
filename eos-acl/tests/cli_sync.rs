use std::path::PathBuf;
use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

#[test]
fn sync_summary_counts_changes() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"));
    cmd.arg("sync")
        .arg(fixture("fixtures/running-config.txt"))
        .arg("mgmt")
        .arg(fixture("fixtures/desired-mgmt.json"))
        .arg("--summary")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "acl=mgmt create=false unchanged=0 changed=1 removed=1 added=1",
        ));
}

#[test]
fn sync_writes_command_file() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("commands.txt");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"));
    cmd.arg("sync")
        .arg(fixture("fixtures/running-config.txt"))
        .arg("mgmt")
        .arg(fixture("fixtures/desired-mgmt.json"))
        .arg("--output")
        .arg(path_as_str(&out))
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("~ 20"))
        .stdout(predicate::str::contains("- 40 deny 0.0.0.0/32 log"))
        .stdout(predicate::str::contains("+ 50 deny 0.0.0.0/32 log"));

    let written = fs::read_to_string(&out).expect("read commands");
    assert_eq!(
        written,
        "ip access-list standard mgmt\n\
         no 40\n\
         exit\n\
         ip access-list standard mgmt\n\
         no 20\n\
         20 permit 10.20.0.0/16\n\
         exit\n\
         ip access-list standard mgmt\n\
         50 deny 0.0.0.0/32 log\n\
         exit\n"
    );
}

#[test]
fn sync_creates_missing_acl() {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"))
        .arg("sync")
        .arg(fixture("fixtures/running-config.txt"))
        .arg("fresh")
        .arg(fixture("fixtures/desired-mgmt.json"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("command output");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(plan["create"], true);
    assert_eq!(plan["commands"][0], "ip access-list standard fresh");
    assert_eq!(plan["changes"].as_array().expect("changes").len(), 4);
}

#[test]
fn sync_refuses_to_overwrite_running_config() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("running-config.txt");
    fs::copy(fixture("fixtures/running-config.txt"), &config).expect("copy fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"));
    cmd.arg("sync")
        .arg(path_as_str(&config))
        .arg("mgmt")
        .arg(fixture("fixtures/desired-mgmt.json"))
        .arg("--output")
        .arg(path_as_str(&config))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is the input"));
}

#[test]
fn sync_can_list_unchanged_entries() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"));
    cmd.arg("sync")
        .arg(fixture("fixtures/running-config.txt"))
        .arg("mgmt")
        .arg(fixture("fixtures/desired-mgmt.json"))
        .arg("--summary")
        .arg("--show-unchanged")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "acl=mgmt create=false unchanged=2 changed=1 removed=1 added=1",
        ));
}

#[test]
fn sync_rejects_desired_entry_with_bad_action() {
    let dir = tempdir().expect("tempdir");
    let desired = dir.path().join("desired.json");
    let entries = serde_json::json!([{
        "seqno": 10,
        "action": "permit 1.1.1.1/32\nno ip access-list standard mgmt",
        "srcaddr": "2.2.2.2",
        "srcprefixlen": 32
    }]);
    fs::write(&desired, entries.to_string()).expect("write desired");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eos-acl"));
    cmd.arg("sync")
        .arg(fixture("fixtures/running-config.txt"))
        .arg("mgmt")
        .arg(path_as_str(&desired))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("desired entry 10"));
}
