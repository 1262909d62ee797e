//! Unit tests for domain error types

use cqb_domain::Error;

#[test]
fn test_type_not_found_error() {
    let error = Error::type_not_found("cluster manager", "missing");
    match &error {
        Error::TypeNotFound { kind, name } => {
            assert_eq!(kind, "cluster manager");
            assert_eq!(name, "missing");
        }
        _ => panic!("Expected TypeNotFound error"),
    }
    assert!(error.to_string().contains("'missing'"));
}

#[test]
fn test_constructor_ambiguous_error() {
    let error = Error::constructor_ambiguous("twin", 2);
    match error {
        Error::ConstructorAmbiguous { type_name, count } => {
            assert_eq!(type_name, "twin");
            assert_eq!(count, 2);
        }
        _ => panic!("Expected ConstructorAmbiguous error"),
    }
}

#[test]
fn test_argument_unmatched_error() {
    let error = Error::argument_unmatched("list", "target", "TypeDescriptor");
    let display = error.to_string();
    assert!(display.contains("list"));
    assert!(display.contains("target"));
    assert!(display.contains("TypeDescriptor"));
}

#[test]
fn test_activation_with_source_keeps_source() {
    let io_error = std::io::Error::other("constructor exploded");
    let error = Error::activation_with_source("probe", io_error);
    match &error {
        Error::ActivationFailure {
            type_name,
            message,
            source,
        } => {
            assert_eq!(type_name, "probe");
            assert_eq!(message, "constructor exploded");
            assert!(source.is_some());
        }
        _ => panic!("Expected ActivationFailure error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_clone_preserves_display() {
    let error = Error::configuration_with_source(
        "bad bindings",
        std::io::Error::other("unreadable"),
    );
    let cloned = error.clone();
    assert_eq!(error.to_string(), cloned.to_string());
}

#[test]
fn test_construction_failure_classification() {
    assert!(Error::type_not_found("serializer", "x").is_construction_failure());
    assert!(Error::constructor_ambiguous("x", 0).is_construction_failure());
    assert!(Error::signature_ambiguous("x", "u8").is_construction_failure());
    assert!(Error::activation("x", "boom").is_construction_failure());
    assert!(!Error::configuration("x").is_construction_failure());
    assert!(!Error::serialization("x").is_construction_failure());
}

#[test]
fn test_error_from_io() {
    let error: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(error, Error::Io { source: Some(_), .. }));
}
