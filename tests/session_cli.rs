use assert_cmd::Command;
use predicates::prelude::*;

fn plantbook(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("plantbook").unwrap();
    cmd.arg("--config-dir")
        .arg(config_dir)
        .env("NO_COLOR", "1")
        .env_remove("PLANTBOOK_LOG");
    cmd
}

#[test]
fn test_add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("add\nname Ficus\nsave\nadd\nname Aloe\nsave\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant added: Ficus"))
        .stdout(predicate::str::contains("1. Ficus"))
        .stdout(predicate::str::contains("2. Aloe"));
}

#[test]
fn test_blank_name_is_refused() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("add\nname\nnotes just notes\nsave\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant name is required"))
        .stdout(predicate::str::contains("Unsaved changes discarded."))
        .stdout(predicate::str::contains("No plants yet."))
        .stdout(predicate::str::contains("Plant added").not());
}

#[test]
fn test_edit_and_save() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin(
            "add\nname Ficus\nsave\nopen 1\nedit\nname Ficus Lyrata\nnotes repotted in spring\nsave\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Editing plant 1"))
        .stdout(predicate::str::contains("Plant updated (1): Ficus Lyrata"))
        .stdout(predicate::str::contains("repotted in spring"))
        .stdout(predicate::str::contains("Added: "));
}

#[test]
fn test_notes_keep_their_spacing() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("add\nname Ficus\nsave\nopen 1\nedit\nnotes water   twice a week\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("water   twice a week"));
}

#[test]
fn test_cancel_discards_edit() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("add\nname Ficus\nsave\nopen 1\nedit\nname Other\ncancel\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant updated").not())
        .stdout(predicate::str::contains("1. Ficus"));
}

#[test]
fn test_missing_plant_and_no_screen_errors() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("open 9\nedit\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant not found: 9"))
        .stdout(predicate::str::contains("No plant is open"));
}

#[test]
fn test_placeholder_shown_without_photo() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("config placeholder (none)\nadd\nname Ficus\nsave\nopen 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder set to (none)"))
        .stdout(predicate::str::contains("(none)"));

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn test_embedded_photo() {
    let temp_dir = tempfile::tempdir().unwrap();
    let photo = temp_dir.path().join("aloe.png");
    std::fs::write(&photo, [0x89, b'P', b'N', b'G']).unwrap();

    let script = format!(
        "config photo-mode embed\nadd\nname Aloe\nphoto {}\nsave\nopen 1\n",
        photo.display()
    );
    plantbook(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("embedded image/png"));
}

#[test]
fn test_missing_photo_keeps_draft() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.png");
    let script = format!("add\nname Aloe\nphoto {}\nsave\n", missing.display());

    plantbook(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No photo selected; keeping the current one.",
        ))
        .stdout(predicate::str::contains("Plant added: Aloe"));
}

#[test]
fn test_quit_stops_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("quit\nadd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New plant").not());
}

#[test]
fn test_store_does_not_outlive_process() {
    let temp_dir = tempfile::tempdir().unwrap();
    plantbook(temp_dir.path())
        .write_stdin("add\nname Ficus\nsave\n")
        .assert()
        .success();

    plantbook(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plants yet."));
}
