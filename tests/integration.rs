//! Integration tests for the fman library
//!
//! These tests exercise the public API the way a caller would: through
//! `File`, the configured readers and writers, and the convenience module.

use fman::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::time::SystemTime;
use tempfile::TempDir;

fn round_trip(lines: &[&str]) -> Vec<String> {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::new(temp_dir.path().join("round_trip.txt"));
    file.write(lines).unwrap();
    file.read().unwrap().into_lines()
}

#[test]
fn test_hello_world_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hello.txt");
    let mut file = File::new(&path);

    let written = file.write(["Hello", "World!"]).unwrap();

    let expected_size = ("Hello\n".len() + "World!\n".len()) as u64;
    assert_eq!(fs::metadata(&path).unwrap().len(), expected_size);
    assert_eq!(written.bytes_written, expected_size);
    assert_eq!(fs::read(&path).unwrap(), b"Hello\nWorld!\n".to_vec());

    let read = file.read().unwrap();
    assert_eq!(read.lines, vec!["Hello", "World!"]);
}

#[test]
fn test_empty_sequence_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.txt");
    let mut file = File::new(&path);

    file.write(Vec::<&str>::new()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert!(file.read().unwrap().lines.is_empty());
}

#[test]
fn test_round_trips() {
    let cases: &[&[&str]] = &[
        &["one"],
        &["one", "two", "three"],
        &["", ""],
        &[""],
        &["leading", "", "gap", "", "trailing"],
        &["  spaced  ", "\ttabbed", "ünïcödé ✓"],
    ];

    for case in cases {
        let expected: Vec<String> = case.iter().map(|s| s.to_string()).collect();
        assert_eq!(round_trip(case), expected);
    }
}

#[test]
fn test_read_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::new(temp_dir.path().join("non_existent.file"));

    let err = file.read().unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.kind(), Some(std::io::ErrorKind::NotFound));
    assert_eq!(file.last_update(), None);
}

#[test]
fn test_read_sets_last_update_to_filesystem_mtime() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("for_test.txt");
    fs::write(&path, "Hello, cruel\nWorld!").unwrap();

    let mut file = File::new(&path);
    assert_eq!(file.last_update(), None);

    let read = file.read().unwrap();
    assert_eq!(read.lines, vec!["Hello, cruel", "World!"]);

    let mtime = fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(file.last_update(), Some(mtime));
}

#[test]
fn test_write_replaces_prior_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("replace.txt");
    fs::write(&path, "PRIOR-1\nPRIOR-2\nPRIOR-3 with a long tail\n").unwrap();

    let mut file = File::new(&path);
    let result = file.write(["new"]).unwrap();

    assert!(result.replaced);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("PRIOR"));
    assert_eq!(file.read().unwrap().lines, vec!["new"]);
}

#[test]
fn test_write_sets_last_update_after_call_start() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::new(temp_dir.path().join("timed.txt"));

    let issued = SystemTime::now();
    let result = file.write(["x"]).unwrap();

    assert!(result.written_at >= issued);
    assert_eq!(file.last_update(), Some(result.written_at));
}

#[test]
fn test_crlf_file_reads_as_logical_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("windows.txt");
    fs::write(&path, "first\r\nsecond\r\n").unwrap();

    let lines = convenience::read_lines(&path).unwrap();
    assert_eq!(lines, vec!["first", "second"]);

    let raw = LineReader::with_config(ReaderConfig {
        strip_carriage_return: false,
        ..Default::default()
    })
    .read_file(&path)
    .unwrap();
    assert_eq!(raw.lines, vec!["first\r", "second\r"]);
}

#[test]
fn test_default_line_limit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("long.txt");

    let at_limit = "a".repeat(fman::io::reader::DEFAULT_MAX_LINE_LENGTH);
    let mut file = File::new(&path);
    file.write([at_limit.as_str(), "tail"]).unwrap();
    assert_eq!(file.read().unwrap().lines[0].len(), at_limit.len());

    let over_limit = format!("{}b", at_limit);
    file.write(["head", over_limit.as_str()]).unwrap();
    let before = file.last_update();

    let err = file.read().unwrap_err();
    match err {
        FmanError::LineTooLong { line, limit, .. } => {
            assert_eq!(line, 2);
            assert_eq!(limit, fman::io::reader::DEFAULT_MAX_LINE_LENGTH);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(file.last_update(), before);
}

#[test]
fn test_configured_writer_and_reader() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::new(temp_dir.path().join("configured.txt"));

    let writer = LineWriter::with_config(WriterConfig { buffer_capacity: 4 });
    let reader = LineReader::with_config(ReaderConfig {
        buffer_capacity: 4,
        ..Default::default()
    });

    let lines: Vec<String> = (0..100).map(|i| format!("line number {i}")).collect();
    let written = file.write_with(&writer, &lines).unwrap();
    assert_eq!(written.lines_written, 100);

    let read = file.read_with(&reader).unwrap();
    assert_eq!(read.lines, lines);
}

#[cfg(unix)]
#[test]
fn test_write_replaces_dangling_symlink() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target.txt");
    let link = temp_dir.path().join("link.txt");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let mut file = File::new(&link);
    let result = file.write(["through"]).unwrap();

    assert!(result.replaced);
    assert!(!fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(!target.exists());
    assert_eq!(file.read().unwrap().lines, vec!["through"]);
}

#[cfg(unix)]
#[test]
fn test_indeterminate_existence_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    fs::write(&plain, "untouched\n").unwrap();

    let mut file = File::new(plain.join("nested.txt"));
    assert!(matches!(file.existence(), Existence::Indeterminate(_)));

    let err = file.write(["x"]).unwrap_err();
    assert!(matches!(err, FmanError::ExistenceUnknown { .. }));
    assert_eq!(file.last_update(), None);
    assert_eq!(fs::read_to_string(&plain).unwrap(), "untouched\n");
}

#[test]
fn test_latin1_file_reads_without_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\nna\xefve\n").unwrap();

    let mut file = File::new(&path);
    let raw = file.read_raw().unwrap();
    assert_eq!(raw.lines, vec![b"caf\xe9".to_vec(), b"na\xefve".to_vec()]);

    let lossy = file.read().unwrap();
    assert_eq!(lossy.lines, vec!["caf\u{FFFD}", "na\u{FFFD}ve"]);

    let strict = LineReader::with_config(ReaderConfig {
        utf8: Utf8Handling::Strict,
        ..Default::default()
    });
    let err = file.read_with(&strict).unwrap_err();
    assert!(matches!(err, FmanError::InvalidUtf8 { line: 1, .. }));
}
