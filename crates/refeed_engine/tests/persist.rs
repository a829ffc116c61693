use std::fs;

use refeed_engine::AtomicFileWriter;
use tempfile::TempDir;

#[test]
fn writes_file_and_reports_length() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("feed.xml");

    let writer = AtomicFileWriter::new(target.clone());
    let written = writer.write("hello").unwrap();

    assert_eq!(written, 5);
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
}

#[test]
fn replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("feed.xml");
    fs::write(&target, "old contents").unwrap();

    let writer = AtomicFileWriter::new(target.clone());
    writer.write("new contents").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "new contents");
}

#[test]
fn fails_when_destination_directory_is_missing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("no_such_dir").join("feed.xml");

    let writer = AtomicFileWriter::new(target.clone());
    assert!(writer.write("data").is_err());
    assert!(!target.exists());
}

#[test]
fn no_partial_file_when_parent_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("feed.xml");
    let writer = AtomicFileWriter::new(target.clone());
    assert!(writer.write("data").is_err());
    assert!(!target.exists());
}
