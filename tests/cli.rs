//! Drives the `passvault` binary end to end

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn passvault(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passvault").unwrap();
    cmd.env("PASSVAULT_DIR", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_settings_and_key() {
    let temp_dir = TempDir::new().unwrap();

    passvault(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("vault.key").exists());
}

#[test]
fn add_then_get_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    passvault(temp_dir.path()).arg("init").assert().success();

    passvault(temp_dir.path())
        .args(["add", "example.com", "--password", "p@ss1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password for example.com added."));

    passvault(temp_dir.path())
        .args(["get", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password for example.com is: p@ss1"));

    passvault(temp_dir.path())
        .args(["get", "unknown-site"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Password for unknown-site is: Password not found.",
        ));
}

#[test]
fn explicit_paths_are_remembered() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let k1 = temp_dir.path().join("k1.key");
    let s1 = temp_dir.path().join("s1.txt");

    passvault(&home)
        .args(["key", "new"])
        .arg(&k1)
        .assert()
        .success()
        .stdout(predicate::str::contains("Key created"));

    passvault(&home)
        .args(["store", "new"])
        .arg(&s1)
        .args(["--seed", "example.com=p@ss1", "--seed", "other.org=x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 initial entries."));

    assert_eq!(fs::read_to_string(&s1).unwrap().lines().count(), 2);

    passvault(&home)
        .args(["store", "load"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries decrypted."));

    passvault(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com").and(predicate::str::contains("other.org")));
}

#[test]
fn key_new_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let key = temp_dir.path().join("vault.key");

    passvault(temp_dir.path()).args(["key", "new"]).arg(&key).assert().success();
    let original = fs::read(&key).unwrap();

    passvault(temp_dir.path())
        .args(["key", "new"])
        .arg(&key)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read(&key).unwrap(), original);

    passvault(temp_dir.path())
        .args(["key", "new", "--force"])
        .arg(&key)
        .assert()
        .success();
    assert_ne!(fs::read(&key).unwrap(), original);
}

#[test]
fn missing_key_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    passvault(temp_dir.path())
        .args(["key", "load"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key file not found"));

    passvault(temp_dir.path())
        .args(["add", "example.com", "--password", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn missing_store_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    passvault(temp_dir.path()).arg("init").assert().success();

    passvault(temp_dir.path())
        .args(["get", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password file not found"));
}

#[test]
fn wrong_key_loads_nothing_without_error() {
    let temp_dir = TempDir::new().unwrap();
    let other_key = temp_dir.path().join("other.key");
    passvault(temp_dir.path()).arg("init").assert().success();

    passvault(temp_dir.path())
        .args(["add", "example.com", "-p", "p@ss1"])
        .assert()
        .success();

    passvault(temp_dir.path())
        .args(["key", "new"])
        .arg(&other_key)
        .assert()
        .success();

    passvault(temp_dir.path())
        .args(["store", "load"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries decrypted."));

    passvault(temp_dir.path())
        .args(["get", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password not found."));
}

#[test]
fn site_with_delimiter_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    passvault(temp_dir.path()).arg("init").assert().success();

    passvault(temp_dir.path())
        .args(["add", "host:8080", "-p", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot contain ':'"));
}

#[test]
fn config_reports_whether_settings_exist() {
    let temp_dir = TempDir::new().unwrap();

    passvault(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved: no"));

    passvault(temp_dir.path()).arg("init").assert().success();

    passvault(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved: yes"));
}
