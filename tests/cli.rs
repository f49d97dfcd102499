// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cmt binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmt() -> Command {
    Command::cargo_bin("cmt").expect("binary builds")
}

/// Initialize a repository with a throwaway identity.
fn init_repo(dir: &Path) -> git2::Repository {
    let repo = git2::Repository::init(dir).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "tester").unwrap();
        config.set_str("user.email", "tester@example.com").unwrap();
    }
    repo
}

fn stage(repo: &git2::Repository, path: &str, content: &str) {
    let full = repo.workdir().unwrap().join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, content).unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(path)).unwrap();
    index.write().unwrap();
}

#[test]
fn test_check_accepts_valid_message() {
    cmt()
        .args(["check", "feat(auth): add login flow"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "follows the conventional commit format",
        ));
}

#[test]
fn test_check_rejects_unknown_type() {
    cmt()
        .args(["check", "wip: try things"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not pass validation"));
}

#[test]
fn test_check_rejects_overlong_first_line() {
    let message = format!("feat: {}", "x".repeat(80));
    cmt()
        .args(["check", &message])
        .assert()
        .failure()
        .stdout(predicate::str::contains("72 characters or less"));
}

#[test]
fn test_check_json_reports_issues() {
    cmt()
        .args(["--format", "json", "check", "not a commit message"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\":false"));
}

#[test]
fn test_check_json_accepts_valid_message() {
    cmt()
        .args(["--format", "json", "check", "fix(api): resolve timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\":true"));
}

#[test]
fn test_types_lists_catalog() {
    cmt()
        .arg("types")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("feat")
                .and(predicate::str::contains("A new feature"))
                .and(predicate::str::contains("revert")),
        );
}

#[test]
fn test_types_json() {
    cmt()
        .args(["--format", "json", "types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"feat\""));
}

#[test]
fn test_scopes_default_suggestions() {
    cmt()
        .arg("scopes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("auth")
                .and(predicate::str::contains("config"))
                .and(predicate::str::contains("views").not()),
        );
}

#[test]
fn test_scopes_filtered() {
    cmt()
        .args(["scopes", "co"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("config")
                .and(predicate::str::contains("controllers"))
                .and(predicate::str::contains("auth").not()),
        );
}

#[test]
fn test_compose_non_interactive_defaults() {
    cmt()
        .args(["--non-interactive", "compose"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "chore: update component configuration",
        ));
}

#[test]
fn test_compose_non_interactive_full() {
    cmt()
        .args([
            "--non-interactive",
            "compose",
            "-t",
            "feat",
            "-s",
            "auth",
            "-m",
            "add login flow",
            "--breaking",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("feat(auth): add login flow")
                .and(predicate::str::contains("BREAKING CHANGE:")),
        );
}

#[test]
fn test_compose_json() {
    cmt()
        .args([
            "--non-interactive",
            "--format",
            "json",
            "compose",
            "-t",
            "fix",
            "-s",
            "api",
            "-m",
            "resolve timeout",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"type\":\"fix\"")
                .and(predicate::str::contains("\"scope\":\"api\"")),
        );
}

#[test]
fn test_compose_rejects_unknown_type() {
    cmt()
        .args(["--non-interactive", "compose", "-t", "wip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown commit type"));
}

#[test]
fn test_smart_empty_directory_predicts_nothing() {
    let dir = TempDir::new().unwrap();
    cmt()
        .current_dir(dir.path())
        .args(["--non-interactive", "--format", "json", "smart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\":null"));
}

#[test]
fn test_smart_falls_back_to_recent_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();

    cmt()
        .current_dir(dir.path())
        .args(["--non-interactive", "smart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("refactor(src):"));
}

#[test]
fn test_smart_staged_laravel_controller() {
    let dir = TempDir::new().unwrap();
    let repo = init_repo(dir.path());
    fs::write(
        dir.path().join("composer.json"),
        r#"{"require": {"laravel/framework": "^10.0"}}"#,
    )
    .unwrap();
    stage(
        &repo,
        "app/Http/Controllers/UserController.php",
        "<?php class UserController {}\n",
    );

    cmt()
        .current_dir(dir.path())
        .args(["--format", "json", "smart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"type\":\"feat\"")
                .and(predicate::str::contains("\"scope\":\"controllers\""))
                .and(predicate::str::contains("\"framework\":\"laravel\""))
                .and(predicate::str::contains("\"language\":\"php\""))
                .and(predicate::str::contains("\"confidence\":0.95")),
        );
}

#[test]
fn test_smart_default_command() {
    let dir = TempDir::new().unwrap();
    cmt()
        .current_dir(dir.path())
        .args(["--non-interactive", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\":null"));
}

#[test]
fn test_version_prints_version() {
    cmt()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cmt 1.0.0"));
}
