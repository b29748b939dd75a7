// crates/export_script/tests/integration_cli.rs

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const SCRIPT_FILENAME: &str = "Script.cs";

/// Creates `<scripts>/<project>/Script.cs` with a marked wrapper body and
/// returns the scripts root and destination root tempdirs.
fn setup_roots(project: &str) -> (TempDir, TempDir) {
    let scripts = tempdir().unwrap();
    let destination = tempdir().unwrap();
    let project_dir = scripts.path().join(project);
    fs::create_dir(&project_dir).unwrap();
    let content = "\
using System;
public sealed class Program {
    // INGAME SCRIPT START
    public void Main() { Echo(\"hi\"); }
    // INGAME SCRIPT END
}
";
    fs::write(project_dir.join(SCRIPT_FILENAME), content).unwrap();
    (scripts, destination)
}

fn export_cmd() -> Command {
    let mut cmd = Command::cargo_bin("export_script").unwrap();
    cmd.env_remove("SCRIPTS_ROOT");
    cmd.env_remove("DESTINATION_ROOT");
    cmd
}

#[test]
fn no_argument_prints_an_explanation_and_succeeds() {
    export_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is no script project dir specified.",
        ));
}

#[test]
fn exports_a_project_end_to_end() {
    let (scripts, destination) = setup_roots("Doors");

    export_cmd()
        .env("SCRIPTS_ROOT", scripts.path())
        .env("DESTINATION_ROOT", destination.path())
        .arg("Doors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Doors"))
        .stdout(predicate::str::contains("Exported"));

    let exported = fs::read_to_string(destination.path().join("Doors").join(SCRIPT_FILENAME))
        .expect("destination Script.cs should exist");
    assert_eq!(exported, "    public void Main() { Echo(\"hi\"); }\n");
}

#[test]
fn project_argument_may_be_a_path() {
    let (scripts, destination) = setup_roots("Doors");

    export_cmd()
        .env("SCRIPTS_ROOT", scripts.path())
        .env("DESTINATION_ROOT", destination.path())
        .arg("work/solution/Doors/")
        .assert()
        .success();

    assert!(destination.path().join("Doors").join(SCRIPT_FILENAME).is_file());
}

#[test]
fn root_flags_override_the_environment() {
    let (scripts, destination) = setup_roots("Doors");
    let bogus = tempdir().unwrap();

    export_cmd()
        .env("SCRIPTS_ROOT", bogus.path())
        .env("DESTINATION_ROOT", bogus.path())
        .arg("--scripts-root")
        .arg(scripts.path())
        .arg("--destination-root")
        .arg(destination.path())
        .arg("Doors")
        .assert()
        .success();

    assert!(destination.path().join("Doors").join(SCRIPT_FILENAME).is_file());
}

#[test]
fn missing_roots_configuration_is_a_hard_error() {
    export_cmd()
        .arg("Doors")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SCRIPTS_ROOT"));
}

#[test]
fn missing_project_dir_is_reported_and_fails() {
    let scripts = tempdir().unwrap();
    let destination = tempdir().unwrap();

    export_cmd()
        .env("SCRIPTS_ROOT", scripts.path())
        .env("DESTINATION_ROOT", destination.path())
        .arg("Ghost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not found"));

    assert!(!destination.path().join("Ghost").exists());
}

#[test]
fn never_claims_success_when_markers_are_missing() {
    let scripts = tempdir().unwrap();
    let destination = tempdir().unwrap();
    let project_dir = scripts.path().join("Bare");
    fs::create_dir(&project_dir).unwrap();
    fs::write(project_dir.join(SCRIPT_FILENAME), "no markers here\n").unwrap();

    export_cmd()
        .env("SCRIPTS_ROOT", scripts.path())
        .env("DESTINATION_ROOT", destination.path())
        .arg("Bare")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Exported").not());
}
