use linefile::file::{LineFile, LineFileError};
use std::fs;
use tempfile::TempDir;

/// Helper: a `LineFile` in a fresh temp dir holding `content`.
fn file_with(content: &str) -> Result<(TempDir, LineFile), LineFileError> {
    let tmpdir = TempDir::new()?;
    let file = LineFile::new(tmpdir.path().join("lines.txt"))?;
    file.write(content, false)?;
    Ok((tmpdir, file))
}

#[test]
fn new_creates_empty_file_when_missing() -> Result<(), LineFileError> {
    let tmpdir = TempDir::new()?;
    let path = tmpdir.path().join("fresh.txt");
    assert!(!path.exists());

    let file = LineFile::new(&path)?;
    assert!(path.is_file());
    assert_eq!(fs::metadata(&path)?.len(), 0);
    assert_eq!(file.path(), path.as_path());

    Ok(())
}

#[test]
fn new_keeps_existing_content() -> Result<(), LineFileError> {
    let tmpdir = TempDir::new()?;
    let path = tmpdir.path().join("existing.txt");
    fs::write(&path, "keep me")?;

    let file = LineFile::new(&path)?;
    let again = LineFile::new(&path)?;
    assert_eq!(file.read_all()?, "keep me");
    assert_eq!(again.read_all()?, "keep me");

    Ok(())
}

#[test]
fn new_fails_when_parent_directory_is_missing() {
    let tmpdir = TempDir::new().unwrap();
    let path = tmpdir.path().join("missing").join("file.txt");

    let result = LineFile::new(&path);
    assert!(matches!(result, Err(LineFileError::FileError(_))));
    assert!(!path.exists());
}

#[test]
fn new_fails_on_directory_path() {
    let tmpdir = TempDir::new().unwrap();

    let result = LineFile::new(tmpdir.path());
    assert!(matches!(result, Err(LineFileError::FileError(_))));
}

#[test]
fn read_all_is_verbatim_and_repeatable() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("one\r\ntwo\n\n  three  ")?;

    let first = file.read_all()?;
    let second = file.read_all()?;
    assert_eq!(first, "one\r\ntwo\n\n  three  ");
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn read_all_surfaces_external_deletion() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("gone soon")?;
    fs::remove_file(file.path())?;

    match file.read_all() {
        Err(LineFileError::FileError(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected a NotFound error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn empty_file_has_one_empty_line() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("")?;

    assert_eq!(file.read_lines()?, [""]);
    assert_eq!(file.line_count()?, 1);
    assert_eq!(file.find_line(0)?, "");

    Ok(())
}

#[test]
fn trailing_terminator_adds_empty_line() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\n")?;

    assert_eq!(file.read_lines()?, ["a", "b", ""]);

    Ok(())
}

#[test]
fn write_line_round_trips() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("old content")?;

    file.write_line("abc", false)?;
    assert_eq!(file.read_all()?, "abc\n");
    assert_eq!(file.read_lines()?[0], "abc");

    file.write_line("def", true)?;
    assert_eq!(file.read_lines()?, ["abc", "def", ""]);

    Ok(())
}

#[test]
fn write_appends_without_terminator() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("abc")?;

    file.write("def", true)?;
    assert_eq!(file.read_all()?, "abcdef");

    file.write("xyz", false)?;
    assert_eq!(file.read_all()?, "xyz");

    Ok(())
}

#[test]
fn find_line_returns_indexed_line() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\nc")?;

    assert_eq!(file.find_line(0)?, "a");
    assert_eq!(file.find_line(2)?, "c");

    Ok(())
}

#[test]
fn get_line_number_is_exact_and_first() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("Alpha\nbeta\nalpha\nbeta")?;

    assert_eq!(file.get_line_number("beta")?, Some(1));
    assert_eq!(file.get_line_number("alpha")?, Some(2));
    assert_eq!(file.get_line_number("ALPHA")?, None);
    assert_eq!(file.get_line_number("alp")?, None);

    Ok(())
}

#[test]
fn insert_line_replaces_in_place() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\nc")?;

    file.insert_line("X", 1)?;
    assert_eq!(file.read_lines()?, ["a", "X", "c"]);
    assert_eq!(file.read_all()?, "a\nX\nc");

    Ok(())
}

#[test]
fn insert_line_keeps_trailing_empty_line() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\n")?;

    file.insert_line("B", 1)?;
    assert_eq!(file.read_lines()?, ["a", "B", ""]);
    assert_eq!(file.read_all()?, "a\nB\n");

    Ok(())
}

#[test]
fn update_line_replaces_first_occurrence() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\na")?;

    file.update_line("Z", 2)?;
    assert_eq!(file.read_lines()?, ["Z", "b", "a"]);

    Ok(())
}

#[test]
fn update_line_matches_inside_earlier_lines() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("cat\nconcat\nat")?;

    file.update_line("og", 2)?;
    assert_eq!(file.read_lines()?, ["cog", "concat", "at"]);

    Ok(())
}

#[test]
fn update_line_can_span_lines() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb")?;

    file.update_line("b1\nb2", 1)?;
    assert_eq!(file.read_lines()?, ["a", "b1", "b2"]);

    Ok(())
}

#[test]
fn update_line_rejects_empty_target() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\n\nb")?;

    let result = file.update_line("x", 1);
    assert!(matches!(
        result,
        Err(LineFileError::EmptySubstitution { line: 1 })
    ));
    assert_eq!(file.read_all()?, "a\n\nb");

    Ok(())
}

#[test]
fn delete_line_removes_every_duplicate() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\na")?;

    file.delete_line(0)?;
    assert_eq!(file.read_lines()?, ["b"]);

    Ok(())
}

#[test]
fn delete_line_of_only_value_leaves_empty_file() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("x\nx")?;

    file.delete_line(1)?;
    assert_eq!(file.read_all()?, "");
    assert_eq!(file.read_lines()?, [""]);

    Ok(())
}

#[test]
fn remove_line_at_removes_one_line() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\na")?;

    file.remove_line_at(2)?;
    assert_eq!(file.read_lines()?, ["a", "b"]);

    file.remove_line_at(0)?;
    assert_eq!(file.read_lines()?, ["b"]);

    Ok(())
}

#[test]
fn out_of_range_lines_fail_and_leave_file_untouched() -> Result<(), LineFileError> {
    let (_tmp, file) = file_with("a\nb\nc")?;
    let n = file.line_count()?;
    assert_eq!(n, 3);

    let is_out_of_range = |r: Result<(), LineFileError>| {
        matches!(r, Err(LineFileError::LineOutOfRange { line: 3, len: 3 }))
    };

    assert!(matches!(
        file.find_line(n),
        Err(LineFileError::LineOutOfRange { line: 3, len: 3 })
    ));
    assert!(is_out_of_range(file.insert_line("X", n)));
    assert!(is_out_of_range(file.update_line("X", n)));
    assert!(is_out_of_range(file.delete_line(n)));
    assert!(is_out_of_range(file.remove_line_at(n)));

    assert_eq!(file.read_all()?, "a\nb\nc");

    Ok(())
}

#[test]
fn out_of_range_error_message_names_line_and_length() {
    let err = LineFileError::LineOutOfRange { line: 7, len: 2 };
    assert_eq!(
        err.to_string(),
        "line 7 is out of range for a file of 2 lines"
    );
}
