//! # dnproj Project Edit Integration Tests
//!
//! File: cli/tests/project_edit.rs
//!
//! Runs `dnproj project edit` against project files in temporary
//! directories. No `dotnet` installation is needed.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_edit_sets_property_and_friend() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), "Core", MINIMAL_PROJECT);

    dnproj_cmd()
        .current_dir(dir.path())
        .args([
            "project",
            "edit",
            "Core",
            "--property",
            "Nullable:enable",
            "--friend",
            "Core.Tests",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("<Nullable>enable</Nullable>"));
    assert!(content.contains("<TargetFramework>net8.0</TargetFramework>"));
    assert_eq!(
        content
            .matches("<InternalsVisibleTo>Core.Tests</InternalsVisibleTo>")
            .count(),
        1
    );
}

#[test]
fn test_edit_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), "Core", MINIMAL_PROJECT);
    let args = [
        "project",
        "edit",
        "Core",
        "--friend",
        "Core.Tests",
        "--suppress-category",
        "Microsoft.Design",
        "--suppress-check-id",
        "CA1062",
    ];

    dnproj_cmd().current_dir(dir.path()).args(args).assert().success();
    let first = fs::read_to_string(&path).unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
    assert_eq!(first.matches("<AssemblyAttribute").count(), 1);
}

#[test]
fn test_edit_without_changes_keeps_file_untouched() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), "Core", MINIMAL_PROJECT);

    dnproj_cmd()
        .current_dir(dir.path())
        .args([
            "project",
            "edit",
            "Core",
            "--property",
            "TargetFramework:net8.0",
            "--remove-friend",
            "Missing.Tests",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));

    assert_eq!(fs::read_to_string(&path).unwrap(), MINIMAL_PROJECT);
}

#[test]
fn test_edit_fails_without_property_group() {
    let dir = tempdir().unwrap();
    write_project(dir.path(), "Core", "<Project Sdk=\"Microsoft.NET.Sdk\"></Project>");

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["project", "edit", "Core", "--property", "Version:1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PropertyGroup"));
}

#[test]
fn test_edit_fails_when_no_project_found() {
    let dir = tempdir().unwrap();

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["project", "edit", "--property", "Version:1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .csproj file found"));
}

#[test]
fn test_edit_dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), "Core", MINIMAL_PROJECT);

    dnproj_cmd()
        .current_dir(dir.path())
        .args(["--dry-run", "project", "edit", "Core", "--property", "Version:2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update"));

    assert_eq!(fs::read_to_string(&path).unwrap(), MINIMAL_PROJECT);
}
