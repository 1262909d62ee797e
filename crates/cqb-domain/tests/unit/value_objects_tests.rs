//! Unit tests for value objects

use cqb_domain::{Capability, Command, CommandKind, TypeDescriptor};
use serde_json::json;

#[test]
fn test_capability_identifiers_are_unique() {
    let mut names: Vec<&str> = Capability::ALL.iter().map(|c| c.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Capability::ALL.len());
}

#[test]
fn test_capability_default_bindings() {
    assert_eq!(Capability::ClusterManager.default_binding(), "in-memory");
    assert_eq!(Capability::Future.default_binding(), "condvar");
    assert_eq!(Capability::CommandFactory.default_binding(), "cql");
    assert_eq!(Capability::PocoDataMapperFactory.default_binding(), "poco");
    assert_eq!(
        Capability::PropertyBagDataMapperFactory.default_binding(),
        "property-bag"
    );
    assert_eq!(Capability::OrdinalDataMapperFactory.default_binding(), "ordinal");
}

#[test]
fn test_capability_serde_uses_snake_case() {
    let encoded = serde_json::to_string(&Capability::PropertyBagDataMapperFactory).unwrap();
    assert_eq!(encoded, "\"property_bag_data_mapper_factory\"");
    let decoded: Capability = serde_json::from_str("\"cluster_manager\"").unwrap();
    assert_eq!(decoded, Capability::ClusterManager);
}

#[test]
fn test_type_descriptor_display() {
    assert_eq!(TypeDescriptor::Int.to_string(), "int");
    assert_eq!(
        TypeDescriptor::list(TypeDescriptor::Text).to_string(),
        "list<text>"
    );
    assert_eq!(
        TypeDescriptor::map(TypeDescriptor::Text, TypeDescriptor::list(TypeDescriptor::BigInt))
            .to_string(),
        "map<text, list<bigint>>"
    );
}

#[test]
fn test_type_descriptor_serializer_name() {
    assert_eq!(TypeDescriptor::Blob.serializer_name(), "blob");
    assert_eq!(
        TypeDescriptor::list(TypeDescriptor::Int).serializer_name(),
        "list"
    );
    assert!(TypeDescriptor::map(TypeDescriptor::Int, TypeDescriptor::Int).is_collection());
    assert!(!TypeDescriptor::Double.is_collection());
}

#[test]
fn test_command_placeholders_skip_literals() {
    let command = Command::new(
        CommandKind::Query,
        "SELECT * FROM t WHERE a = ? AND b = 'why?' AND c = ?",
    )
    .with_parameter(json!(1))
    .with_parameter(json!("x"));

    assert_eq!(command.placeholder_count(), 2);
    assert_eq!(command.parameters.len(), 2);
}
