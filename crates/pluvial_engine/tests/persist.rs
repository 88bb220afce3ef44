use std::fs;

use pluvial_engine::{ensure_state_dir, StateDir};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let dir = StateDir::new(temp.path());

    let first = dir.write_atomic("preferences.ron", "(dark_mode: false)").unwrap();
    assert_eq!(first.file_name().unwrap(), "preferences.ron");

    let second = dir.write_atomic("preferences.ron", "(dark_mode: true)").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(dark_mode: true)");
    assert_eq!(
        dir.read("preferences.ron").unwrap().as_deref(),
        Some("(dark_mode: true)")
    );
}

#[cfg(unix)]
#[test]
fn overwrite_leaves_no_stray_files() {
    let temp = TempDir::new().unwrap();
    let dir = StateDir::new(temp.path());
    dir.write_atomic("share.txt", "first").unwrap();
    let mut reader = fs::File::open(dir.path_of("share.txt")).unwrap();

    dir.write_atomic("share.txt", "second").unwrap();

    let mut old = String::new();
    std::io::Read::read_to_string(&mut reader, &mut old).unwrap();
    assert_eq!(old, "first");
    assert_eq!(dir.read("share.txt").unwrap().as_deref(), Some("second"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn reading_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let dir = StateDir::new(temp.path().join("never_created"));
    assert!(dir.read("preferences.ron").unwrap().is_none());
}

#[test]
fn no_partial_file_when_root_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let dir = StateDir::new(file_path.clone());
    assert!(dir.write_atomic("share.txt", "data").is_err());
    assert!(!file_path.with_file_name("share.txt").exists());
}
