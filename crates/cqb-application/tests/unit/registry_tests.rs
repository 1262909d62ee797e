//! Name-based resolution over the registry slices

use cqb_application::ports::registry::{
    list_available_types, list_cluster_managers, resolve_cluster_manager, resolve_serializer,
};
use cqb_domain::error::Error;

#[test]
fn test_resolve_known_type() {
    let entry = resolve_cluster_manager("in-memory").unwrap();
    assert_eq!(entry.name, "in-memory");
    assert_eq!(entry.sole_constructor().unwrap().arity(), 0);
}

#[test]
fn test_resolve_unknown_type() {
    let err = resolve_cluster_manager("nonexistent").unwrap_err();
    match err {
        Error::TypeNotFound { kind, name } => {
            assert_eq!(kind, "cluster manager");
            assert_eq!(name, "nonexistent");
        }
        other => panic!("expected TypeNotFound, got {other:?}"),
    }
}

#[test]
fn test_collection_serializers_declare_three_slots() {
    let constructor = resolve_serializer("list").unwrap().sole_constructor().unwrap();
    let names: Vec<_> = constructor.params.iter().map(|slot| slot.name).collect();
    assert_eq!(names, ["target", "default_encoder", "default_decoder"]);
}

#[test]
fn test_list_cluster_managers() {
    let names: Vec<_> = list_cluster_managers().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"in-memory"));
}

#[test]
fn test_available_types_display() {
    let listing = list_available_types().to_string();
    assert!(listing.starts_with("Registered Types:"));
    assert!(listing.contains("serializer:"));
    assert!(listing.contains("  - property-bag:"));
}

#[test]
fn test_registered_catalogs_validate() {
    cqb_application::ports::registry::validate_registry().unwrap();
}
