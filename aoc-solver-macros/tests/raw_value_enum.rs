//! Behaviour of `#[derive(RawValueEnum)]` for each literal kind

use aoc_solver::{Cursor, ParseErrorKind, Parseable, RawValue, RawValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
enum Grade {
    #[raw = 'A']
    Top,
    #[raw = 'B']
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
enum Color {
    #[raw = "amb"]
    Amber,
    #[raw = "blu"]
    Blue,
    #[raw = "gry"]
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
enum Level {
    #[raw = 0]
    Ground,
    #[raw = 1]
    First,
    #[raw = 3]
    Roof,
}

#[test]
fn test_char_cases() {
    assert_eq!(Grade::parse_str("A").unwrap(), Grade::Top);
    assert_eq!(Grade::Middle.raw_value(), 'B');
    assert_eq!(Grade::from_raw_value(&'B'), Some(Grade::Middle));
    assert_eq!(Grade::from_raw_value(&'Z'), None);
    assert_eq!(Grade::Top.render(), "A");
}

#[test]
fn test_unknown_char_is_domain_error() {
    let err = Grade::parse_str("C").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Domain);
}

#[test]
fn test_missing_char_is_shape_error() {
    let err = Grade::parse_str("").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::TokenShape);
}

#[test]
fn test_string_cases() {
    let mut cursor = Cursor::new("blu gry");
    assert_eq!(Color::parse_one(&mut cursor).unwrap(), Color::Blue);
    assert!(cursor.consume_literal(" "));
    assert_eq!(Color::parse_one(&mut cursor).unwrap(), Color::Gray);
    assert_eq!(Color::Amber.raw_value(), "amb");
}

#[test]
fn test_unknown_word_leaves_cursor() {
    let mut cursor = Cursor::new("wat");
    let err = Color::parse_one(&mut cursor).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Domain);
    assert_eq!(cursor.remaining(), "wat");
}

#[test]
fn test_integer_cases() {
    assert_eq!(Level::parse_str("1").unwrap(), Level::First);
    assert_eq!(Level::parse_str("3").unwrap(), Level::Roof);
    assert_eq!(Level::Ground.render(), "0");
    assert_eq!(Level::parse_str("2").unwrap_err().kind(), ParseErrorKind::Domain);
    assert_eq!(Level::parse_str("x").unwrap_err().kind(), ParseErrorKind::TokenShape);
}

#[test]
fn test_sequences_of_cases() {
    let grades = Vec::<Grade>::parse_str("ABBA").unwrap();
    assert_eq!(grades, vec![Grade::Top, Grade::Middle, Grade::Middle, Grade::Top]);
    assert_eq!(grades.render(), "ABBA");
}
