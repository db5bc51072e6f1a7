// crates/classguard-core/src/classpath/tests/version_tests.rs
#![cfg(test)]

use crate::classpath::version::{ParsedVersion, VersionError};
use std::str::FromStr;

#[test]
fn test_parse_semver() {
    let v = ParsedVersion::parse("3.1.2").unwrap();
    assert_eq!(v, ParsedVersion::new(3, 1, Some(2)));

    // Pre-release suffixes are accepted by the strict parser
    let v = ParsedVersion::parse("2.9.8-SNAPSHOT").unwrap();
    assert_eq!(v, ParsedVersion::new(2, 9, Some(8)));
}

#[test]
fn test_parse_lenient_forms() {
    // Maven qualifiers after a fourth component
    assert_eq!(ParsedVersion::parse("4.1.0.Final").unwrap(), ParsedVersion::new(4, 1, Some(0)));
    // Two components only
    assert_eq!(ParsedVersion::parse("2.9").unwrap(), ParsedVersion::new(2, 9, None));
    // Major only, minor counts as zero
    assert_eq!(ParsedVersion::parse("5").unwrap(), ParsedVersion::new(5, 0, None));
    // Qualifier glued to the minor
    assert_eq!(ParsedVersion::parse("1.2-beta").unwrap(), ParsedVersion::new(1, 2, None));
    // Non-numeric patch is dropped, not an error
    assert_eq!(ParsedVersion::parse("1.2.x").unwrap(), ParsedVersion::new(1, 2, None));
    // Surrounding whitespace is ignored
    assert_eq!(ParsedVersion::parse(" 3.5.3 ").unwrap(), ParsedVersion::new(3, 5, Some(3)));
}

#[test]
fn test_parse_errors() {
    assert_eq!(ParsedVersion::parse(""), Err(VersionError::Empty));
    assert_eq!(ParsedVersion::parse("   "), Err(VersionError::Empty));
    assert_eq!(ParsedVersion::parse("v1.2.3"), Err(VersionError::InvalidMajor("v1.2.3".to_string())));
    assert_eq!(ParsedVersion::parse("latest"), Err(VersionError::InvalidMajor("latest".to_string())));
    assert_eq!(ParsedVersion::parse("3.x"), Err(VersionError::InvalidMinor("3.x".to_string())));
    assert_eq!(ParsedVersion::parse(".1"), Err(VersionError::InvalidMajor(".1".to_string())));
}

#[test]
fn test_from_str_and_display() {
    let v = ParsedVersion::from_str("4.8.0").unwrap();
    assert_eq!(v.to_string(), "4.8.0");

    let v = ParsedVersion::from_str("4.8").unwrap();
    assert_eq!(v.to_string(), "4.8");
}

#[test]
fn test_same_major() {
    let a = ParsedVersion::parse("3.1.2").unwrap();
    let b = ParsedVersion::parse("3.5.3").unwrap();
    let c = ParsedVersion::parse("4.8.0").unwrap();
    assert!(a.same_major(&b));
    assert!(!a.same_major(&c));
}
