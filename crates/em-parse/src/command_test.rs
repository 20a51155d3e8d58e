use super::*;

#[test]
fn test_parse_up_command() {
    let cmd = Command::from_line("-- +migrate Up", 1).unwrap().unwrap();
    assert_eq!(cmd.name, "Up");
    assert!(cmd.options.is_empty());
}

#[test]
fn test_parse_command_with_options() {
    let cmd = Command::from_line("-- +migrate Down  notransaction extra", 3)
        .unwrap()
        .unwrap();
    assert_eq!(cmd.name, "Down");
    assert_eq!(cmd.options, vec!["notransaction", "extra"]);
    assert!(cmd.has_option(OPTION_NO_TRANSACTION));
    assert!(!cmd.has_option("NoTransaction"));
}

#[test]
fn test_non_command_lines() {
    assert_eq!(Command::from_line("CREATE TABLE t (id INT);", 1).unwrap(), None);
    assert_eq!(Command::from_line("-- plain comment", 1).unwrap(), None);
    // Prefix requires the trailing space
    assert_eq!(Command::from_line("-- +migrate", 1).unwrap(), None);
}

#[test]
fn test_bare_prefix_is_incomplete() {
    let err = Command::from_line("-- +migrate   ", 7).unwrap_err();
    assert!(matches!(err, ParseError::IncompleteCommand { line: 7 }));
}

#[test]
fn test_ends_with_semicolon() {
    assert!(ends_with_semicolon("SELECT 1;"));
    assert!(ends_with_semicolon("  DROP TABLE t;   "));
    assert!(ends_with_semicolon("SELECT 1; -- trailing comment"));
    assert!(ends_with_semicolon("SELECT 1; --trailing"));
}

#[test]
fn test_does_not_end_with_semicolon() {
    assert!(!ends_with_semicolon("SELECT 1"));
    assert!(!ends_with_semicolon("SELECT 1 -- comment;"));
    assert!(!ends_with_semicolon("-- SELECT 1;"));
    assert!(!ends_with_semicolon(""));
    assert!(!ends_with_semicolon("SELECT ';' FROM t"));
}
