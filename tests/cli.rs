use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shelter(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelter").unwrap();
    cmd.env("SHELTER_HOME", home)
        .env_remove("SHELTER_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn first_run_seeds_and_lists() {
    let temp = tempfile::tempdir().unwrap();

    shelter(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a new catalog"))
        .stdout(predicate::str::contains("Ash"))
        .stdout(predicate::str::contains("Cassie"));

    assert!(temp.path().join("pets.json").exists());
}

#[test]
fn bare_invocation_lists() {
    let temp = tempfile::tempdir().unwrap();
    shelter(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alexis"));
}

#[test]
fn list_filters_by_species_and_gender() {
    let temp = tempfile::tempdir().unwrap();
    shelter(temp.path()).arg("path").assert().success();

    shelter(temp.path())
        .args(["list", "--species", "cat", "--gender", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mimay"))
        .stdout(predicate::str::contains("Nene"))
        .stdout(predicate::str::contains("Ash").not())
        .stdout(predicate::str::contains("Alusha").not());
}

#[test]
fn add_then_view_by_name() {
    let temp = tempfile::tempdir().unwrap();

    shelter(temp.path())
        .args([
            "add", "--species", "dog", "--name", "Rex", "--years", "2", "--gender", "male",
            "--image", "/resources/dog_rex.png", "--breed", "Aspin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pet added (9): Rex the Dog"));

    shelter(temp.path())
        .args(["view", "rex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aspin"))
        .stdout(predicate::str::contains("2 years"));

    shelter(temp.path())
        .args(["list", "--species", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex"));
}

#[test]
fn add_requires_image() {
    let temp = tempfile::tempdir().unwrap();
    shelter(temp.path())
        .args(["add", "--species", "cat", "--name", "Tofu", "--gender", "m"])
        .assert()
        .failure();
}

#[test]
fn edit_and_remove_by_index() {
    let temp = tempfile::tempdir().unwrap();

    shelter(temp.path())
        .args(["edit", "1", "--name", "Ashy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pet updated: Ashy"));

    shelter(temp.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pet removed: Ashy the Cat"));

    shelter(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ashy").not());
}

#[test]
fn unknown_pet_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    shelter(temp.path())
        .args(["view", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn corrupt_catalog_is_reported_and_repaired() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("pets.json"), "{{{{").unwrap();

    shelter(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("has been reset"))
        .stdout(predicate::str::contains("Ash"));
}

#[test]
fn path_prints_catalog_location() {
    let temp = tempfile::tempdir().unwrap();
    shelter(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("pets.json"));
}

#[test]
fn config_changes_data_file() {
    let temp = tempfile::tempdir().unwrap();

    shelter(temp.path())
        .args(["config", "data-file", "animals.json"])
        .assert()
        .success();

    shelter(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("animals.json"));

    shelter(temp.path())
        .args(["config", "seed-on-missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn home_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    shelter(env_home.path())
        .arg("--home")
        .arg(flag_home.path())
        .arg("list")
        .assert()
        .success();

    assert!(flag_home.path().join("pets.json").exists());
    assert!(!env_home.path().join("pets.json").exists());
}
