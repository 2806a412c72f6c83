//! Integration tests for the `archgen` binary.
//!
//! None of these require a `dotnet` SDK: they exercise the read-only
//! commands and the `--dry-run` path, which never touch the build tool.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn archgen() -> Command {
    Command::cargo_bin("archgen").unwrap()
}

#[test]
fn help_flag_lists_subcommands() {
    archgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nlayer"))
        .stdout(predicate::str::contains("onion"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn help_subcommand_works() {
    // The original exposed `help` as a command of its own; clap provides it.
    archgen()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("archgen"));
}

#[test]
fn version_flag_prints_version() {
    archgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help() {
    archgen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_fails() {
    archgen()
        .arg("hexagonal")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("hexagonal"));
}

#[test]
fn list_shows_both_styles() {
    archgen()
        .args(["--no-color", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N-Layer"))
        .stdout(predicate::str::contains("Onion"))
        .stdout(predicate::str::contains("DataAccess"))
        .stdout(predicate::str::contains("Persistence"));
}

#[test]
fn list_style_filter_narrows_output() {
    archgen()
        .args(["--no-color", "list", "--style", "onion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Onion"))
        .stdout(predicate::str::contains("N-Layer").not());
}

#[test]
fn dry_run_previews_without_writing() {
    let temp = TempDir::new().unwrap();

    archgen()
        .current_dir(temp.path())
        .args(["--no-color", "nlayer", "Acme", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Acme.Core"))
        .stdout(predicate::str::contains("Acme.API"))
        .stdout(predicate::str::contains("Interfaces/IRepository.cs"));

    // Nothing was created.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_defaults_to_placeholder_name() {
    let temp = TempDir::new().unwrap();

    archgen()
        .current_dir(temp.path())
        .args(["--no-color", "onion", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MyProject.Domain"))
        .stdout(predicate::str::contains("MyProject.Persistence"));
}

#[test]
fn dry_run_respects_output_flag() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("solutions");
    std::fs::create_dir(&out).unwrap();

    archgen()
        .args([
            "--no-color",
            "nlayer",
            "Acme",
            "--dry-run",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 projects"));

    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn invalid_solution_name_is_a_user_error() {
    archgen()
        .args(["nlayer", ".hidden", "--dry-run"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid solution name"));
}

#[test]
fn config_default_solution_name_is_used() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("archgen.toml");
    std::fs::write(&config, "[defaults]\nsolution_name = \"Configured\"\n").unwrap();

    archgen()
        .current_dir(temp.path())
        .args([
            "--no-color",
            "--config",
            config.to_str().unwrap(),
            "nlayer",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configured.Core"));
}

#[test]
fn quiet_dry_run_suppresses_stdout() {
    let temp = TempDir::new().unwrap();

    archgen()
        .current_dir(temp.path())
        .args(["--quiet", "nlayer", "Acme", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completions_emit_bash_script() {
    archgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("archgen"));
}
