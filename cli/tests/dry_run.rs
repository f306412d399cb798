//! # dnproj Dry-Run Integration Tests
//!
//! File: cli/tests/dry_run.rs
//!
//! With `--dry-run`, every `dotnet` command line is printed as
//! `Would run: ...` and nothing is executed, so these tests run without a
//! .NET SDK installed.
//!
mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_solution_new_prints_command_line() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "solution", "new", "-n", "MyProduct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run:"))
        .stdout(predicate::str::contains("new sln -f sln -o"))
        .stdout(predicate::str::contains("-n MyProduct"));
}

#[test]
fn test_solution_new_takes_format_from_name() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "solution", "new", "-n", "MyProduct.slnx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new sln -f slnx"))
        .stdout(predicate::str::contains("-n MyProduct"));
}

#[test]
fn test_solution_add_without_folder_uses_root() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "solution", "add", "MyProduct.sln", "src/Core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-root"));
}

#[test]
fn test_project_new_uses_default_framework() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "project", "new", "classlib", "-o", "Core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new classlib -o"))
        .stdout(predicate::str::contains("-n Core -f net10.0"));
}

#[test]
fn test_project_package_prints_version_and_prerelease() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args([
            "--dry-run",
            "project",
            "package",
            "Api",
            "Serilog",
            "--version",
            "4.0.0",
            "--prerelease",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("package Serilog -v 4.0.0 --prerelease"));
}

#[test]
fn test_project_class_maps_namespace_to_directories() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "project", "class", "Core", "Models.Orders.Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new class --project"))
        .stdout(predicate::str::contains("-n Order --language C#"));
}

#[test]
fn test_class_with_empty_segment_fails() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "project", "class", "Core", "Models..Order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
