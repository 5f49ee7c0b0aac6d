//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::annotext_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    annotext_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized annotext workspace"));

    assert!(temp.path().join(".annotext").exists());

    let config_path = temp.path().join(".annotext/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("tag_route = \"/explore?tag={tag}\""));
    assert!(content.contains("profile_route = \"/profile/{username}\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_route() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_route")
        .assert()
        .success()
        .stdout(predicate::str::contains("/explore?tag={tag}"));
}

#[test]
fn test_config_set_route() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("profile_route")
        .arg("/u/{username}")
        .assert()
        .success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("profile_route")
        .assert()
        .success()
        .stdout(predicate::str::contains("/u/{username}"));
}

#[test]
fn test_config_set_route_without_placeholder_fails() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_route")
        .arg("/explore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain {tag}"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_route"))
        .stdout(predicate::str::contains("extensions = md,txt"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_config_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();

    annotext_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not an annotext workspace"));
}

#[test]
fn test_config_uses_annotext_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    annotext_cmd().arg("init").arg(temp.path()).assert().success();

    annotext_cmd()
        .current_dir(elsewhere.path())
        .env("ANNOTEXT_ROOT", temp.path())
        .arg("config")
        .arg("tag_route")
        .assert()
        .success()
        .stdout(predicate::str::contains("/explore?tag={tag}"));
}
