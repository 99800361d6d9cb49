//! File ingestion against real temporary files.

use std::path::Path;

use strata_arena::Arena;
use strata_test_utils::{
    arenas, numbered_lines, text, texts, TextFile, SAMPLE_TEXT, TEST_CAPACITY,
};
use strata_text::{read_file, read_lines, IoOp, Str, TextError};

#[test]
fn read_file_holds_whole_content() {
    let file = TextFile::sample();
    let out = Arena::new(1024 * 1024);
    let content = read_file(&file, &out).unwrap();
    assert_eq!(content, SAMPLE_TEXT);
    assert!(content.is_terminated());
    assert_eq!(out.offset(), SAMPLE_TEXT.len() + 1);

    let pair = content.cut("Gutenberg", 1, &out).unwrap();
    assert_eq!(pair.first, "The Project ");
}

#[test]
fn read_file_of_non_utf8_content_displays_lossily() {
    let file = TextFile::new(b"caf\xe9 au lait\n");
    let out = Arena::new(64);
    let content = read_file(&file, &out).unwrap();
    assert_eq!(content.len(), 13);
    assert!(content.to_str().is_err());
    assert_eq!(text(content), "caf\u{FFFD} au lait\n");
}

#[test]
fn read_file_of_empty_file_is_empty() {
    let file = TextFile::new("");
    let out = Arena::new(16);
    let content = read_file(&file, &out).unwrap();
    assert!(content.is_empty());
    assert!(content.equals(Str::EMPTY));
}

#[test]
fn missing_file_fails_at_metadata() {
    let out = Arena::new(16);
    let err = read_file(Path::new("/nonexistent/strata/input.txt"), &out).unwrap_err();
    match err {
        TextError::Io { op, path, .. } => {
            assert_eq!(op, IoOp::Metadata);
            assert!(path.ends_with("input.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(out.offset(), 0);
}

#[test]
fn file_larger_than_arena_is_rejected() {
    let file = TextFile::new(numbered_lines(100));
    let out = Arena::new(64);
    let err = read_file(&file, &out).unwrap_err();
    assert!(matches!(err, TextError::Arena(_)));
}

#[test]
fn read_lines_counts_newline_terminated_lines() {
    let file = TextFile::new(numbered_lines(25));
    let (out, _) = arenas(TEST_CAPACITY);
    let lines = read_lines(&file, &out).unwrap();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines.first(), "line 0001");
    assert_eq!(lines[24], "line 0025");
    assert!(lines.iter().all(|line| line.is_terminated()));
}

#[test]
fn read_lines_keeps_unterminated_tail() {
    let file = TextFile::new("alpha\nbeta\ngamma");
    let out = Arena::new(64);
    let lines = read_lines(&file, &out).unwrap();
    assert_eq!(texts(&lines), ["alpha", "beta", "gamma"]);
}

#[test]
fn read_lines_views_one_buffer() {
    let file = TextFile::new("ab\ncd\n");
    let out = Arena::new(64);
    let lines = read_lines(&file, &out).unwrap();
    assert_eq!(out.offset(), 7);
    let base = lines.first().as_ptr();
    assert_eq!(lines[1].as_ptr(), base.wrapping_add(3));
}

#[test]
fn joined_lines_reconstruct_the_file() {
    let content = numbered_lines(40);
    let file = TextFile::new(&content);
    let (out, _) = arenas(TEST_CAPACITY);
    let lines = read_lines(&file, &out).unwrap();
    let joined = lines.join("\n", &out).unwrap();
    assert_eq!(joined, content.trim_end_matches('\n'));
}

#[test]
fn empty_file_reads_as_the_empty_list() {
    let file = TextFile::new("");
    let out = Arena::new(16);
    let lines = read_lines(&file, &out).unwrap();
    assert!(lines.is_empty());
}
