//! Integration tests for redline.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use redline::{BlockedWordConfig, Error, FilterStats, LineCensor, process};
use std::io::Cursor;

#[test]
fn test_error_types() {
    let err = Error::NoInput;
    assert!(format!("{err}").contains("no input"));

    let err = Error::OperationFailed {
        operation: "read_input".to_string(),
        cause: "broken pipe".to_string(),
    };
    let display = format!("{err}");
    assert!(display.contains("read_input"));
    assert!(display.contains("broken pipe"));

    let err = Error::HomeDirUnavailable;
    assert!(format!("{err}").contains("home directory"));
}

#[test]
fn test_parse_then_filter() {
    let list = "\
# words for the quarterly report
redaction: [REDACTED]

Project Nightingale
  acme corp
";
    let config = BlockedWordConfig::from_reader(list.as_bytes(), "list".as_ref()).unwrap();
    assert_eq!(config.len(), 2);
    assert_eq!(config.redaction(), b"[REDACTED]");

    let input = "\
Status for Project Nightingale:
# Project Nightingale owners only
acme corp signed; acme corporation pending
";
    let mut output = Vec::new();
    let stats = process(Cursor::new(input), &mut output, &LineCensor::new(&config)).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\
Status for [REDACTED]:
# Project Nightingale owners only
[REDACTED] signed; [REDACTED]oration pending
"
    );
    assert_eq!(
        stats,
        FilterStats {
            lines: 3,
            comments: 1,
            censored: 2,
        }
    );
}

#[test]
fn test_sequential_passes_across_lines() {
    let config = BlockedWordConfig::new(["ab", "ba"], "*").unwrap();
    let mut output = Vec::new();
    process(
        Cursor::new("abba\nbaab\nxyz\n"),
        &mut output,
        &LineCensor::new(&config),
    )
    .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "**\nb*b\nxyz\n");
}

#[cfg(unix)]
mod file_loading {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn word_list(dir: &TempDir, contents: &str, mode: u32) -> PathBuf {
        let path = dir.path().join(".blocked_words.txt");
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = word_list(&dir, "redaction: ***\nsecret\n", 0o700);

        let config = BlockedWordConfig::load_from_file(&path).unwrap();

        assert_eq!(config.redaction(), b"***");
        assert_eq!(
            LineCensor::new(&config).censor(b"top secret plan"),
            b"top *** plan".as_slice()
        );
    }

    #[test]
    fn test_permissions_checked_before_parsing() {
        let dir = TempDir::new().unwrap();
        // Would also be a duplicate-redaction error if it were parsed.
        let path = word_list(&dir, "redaction: a\nredaction: b\n", 0o644);

        let err = BlockedWordConfig::load_from_file(&path).unwrap_err();

        assert!(matches!(err, Error::InsecurePermissions { mode: 0o644, .. }));
    }

    #[test]
    fn test_duplicate_redaction_in_file() {
        let dir = TempDir::new().unwrap();
        let path = word_list(&dir, "redaction: a\nredaction: b\n", 0o700);

        let err = BlockedWordConfig::load_from_file(&path).unwrap_err();

        assert!(matches!(err, Error::DuplicateRedaction { path: ref p } if *p == path));
    }

    #[test]
    fn test_restated_default_token_in_file() {
        let dir = TempDir::new().unwrap();
        let path = word_list(&dir, "redaction: redacted\nredaction: [x]\nsecret\n", 0o700);

        let config = BlockedWordConfig::load_from_file(&path).unwrap();

        assert_eq!(config.redaction(), b"[x]");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err =
            BlockedWordConfig::load_from_file(&dir.path().join(".blocked_words.txt")).unwrap_err();
        assert!(matches!(err, Error::OperationFailed { .. }));
    }

    #[test]
    fn test_directory_with_owner_mode_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words");
        fs::create_dir(&path).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o700)).unwrap();

        let err = BlockedWordConfig::load_from_file(&path).unwrap_err();

        assert!(matches!(err, Error::OperationFailed { .. }));
    }
}
