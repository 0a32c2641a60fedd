//! `postrun list` output checks.

use predicates::prelude::*;

fn postrun() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("postrun"))
}

#[test]
fn list_shows_the_builtin_roster_in_order() {
    postrun()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 registered trigger(s)"))
        .stdout(predicate::str::contains("tmpfiles"))
        .stdout(predicate::str::contains("ldconfig"))
        .stdout(predicate::str::contains("font-cache"))
        .stdout(predicate::str::contains("/usr/lib/tmpfiles.d"));
}

#[test]
fn list_json_carries_names_and_watched_paths() {
    let output = postrun().arg("list").arg("--json").output().expect("list --json");
    assert!(output.status.success());

    let triggers: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON document");
    let entries = triggers.as_array().expect("top-level array");
    assert_eq!(entries.len(), 10);

    let depmod = entries
        .iter()
        .find(|t| t["name"] == "depmod")
        .expect("depmod is registered");
    assert_eq!(depmod["watched_paths"][0], "/lib/modules/*");
    assert!(depmod["description"].as_str().unwrap().contains("kernel"));
}
