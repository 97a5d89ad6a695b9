//! Tests for ZIP extraction.

use attribute_util::{Error, ZipExtractor};

use std::fs;
use std::io::Cursor;

mod common;
use common::helpers::*;

#[test]
fn test_extract_archive() {
    let dir = create_temp_dir();
    let archive = create_zip_file(dir.path(), "bundle.zip", &[("a/", None), ("a/b.txt", Some(b"hi"))]);
    let target = dir.path().join("t");

    let report = ZipExtractor::new(&target).extract_file(&archive).unwrap();

    assert!(target.join("a").is_dir());
    assert_eq!(fs::read(target.join("a").join("b.txt")).unwrap(), b"hi");
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.directories.len(), 1);
}

#[test]
fn test_target_is_a_file() {
    let (logs, _guard) = capture_logs();

    let dir = create_temp_dir();
    let target = create_temp_file(dir.path(), "t", b"keep me");
    // Not an archive: the target check must fail before this is read.
    let archive = create_temp_file(dir.path(), "bundle.zip", b"garbage");

    let err = ZipExtractor::new(&target).extract_file(&archive).unwrap_err();

    assert!(matches!(err, Error::NotADirectory(ref path) if path == &target));
    assert_eq!(fs::read(&target).unwrap(), b"keep me");
    assert_eq!(logs.lines_containing("[Zip / Unzip] ERROR:").len(), 1);
}

#[test]
fn test_directory_only_archive() {
    let dir = create_temp_dir();
    let target = dir.path().join("t");

    let report = ZipExtractor::new(&target)
        .extract_reader(Cursor::new(build_zip(&[("a/b/", None)])))
        .unwrap();

    assert!(target.join("a").join("b").is_dir());
    assert!(fs::read_dir(target.join("a").join("b")).unwrap().next().is_none());
    assert!(report.files.is_empty());
    assert_eq!(report.bytes_written, 0);
}

#[test]
fn test_large_entry_is_copied_whole() {
    let dir = create_temp_dir();
    let target = dir.path().join("t");
    let content = create_test_content(10_000);

    let report = ZipExtractor::new(&target)
        .chunk_size(333)
        .extract_reader(Cursor::new(build_zip(&[("nested/deep/data.bin", Some(&content))])))
        .unwrap();

    let written = target.join("nested").join("deep").join("data.bin");
    assert_eq!(fs::read(&written).unwrap(), content);
    assert_eq!(report.bytes_written, 10_000);
    assert_file_size(&written, 10_000);
}

#[test]
fn test_zip_slip_is_rejected() {
    let dir = create_temp_dir();
    let target = dir.path().join("t");
    let zip = build_zip(&[("ok.txt", Some(b"fine")), ("../evil.txt", Some(b"bad"))]);

    let err = ZipExtractor::new(&target).extract_reader(Cursor::new(zip)).unwrap_err();

    assert!(matches!(err, Error::ZipSlip { ref entry, .. } if entry == "../evil.txt"));
    // Entries before the offending one stay on disk.
    assert_eq!(fs::read(target.join("ok.txt")).unwrap(), b"fine");
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn test_existing_files_are_overwritten() {
    let dir = create_temp_dir();
    let target = dir.path().join("t");
    fs::create_dir_all(&target).unwrap();
    create_temp_file(&target, "b.txt", b"a much longer previous content");

    ZipExtractor::new(&target)
        .extract_reader(Cursor::new(build_zip(&[("b.txt", Some(b"new"))])))
        .unwrap();

    assert_eq!(fs::read(target.join("b.txt")).unwrap(), b"new");
}

#[test]
fn test_not_an_archive() {
    let dir = create_temp_dir();
    let archive = create_temp_file(dir.path(), "bundle.zip", b"garbage");

    let err = ZipExtractor::new(dir.path().join("t")).extract_file(&archive).unwrap_err();
    assert!(matches!(err, Error::Zip { .. }));
}
