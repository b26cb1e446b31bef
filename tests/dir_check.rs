use std::fs;

use splitsink::{check_dir, Error};
use tempfile::tempdir;

#[test]
fn accessible_directory_passes() {
    let dir = tempdir().expect("tempdir");
    check_dir(dir.path()).expect("check dir");
}

#[test]
fn regular_file_is_not_a_directory() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("plain.log");
    fs::write(&file, b"contents").expect("write file");

    assert!(matches!(check_dir(&file), Err(Error::NotADirectory)));
}

#[test]
fn missing_path_is_not_a_directory() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent");

    assert!(matches!(check_dir(&missing), Err(Error::NotADirectory)));
}
