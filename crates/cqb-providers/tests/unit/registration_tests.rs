//! Every default type is visible in its registry slice

use cqb_application::ports::registry::{
    CLUSTER_MANAGERS, COMMAND_FACTORIES, DATA_MAPPER_FACTORIES, FUTURE_FACTORIES, SERIALIZERS,
    list_serializers, resolve_cluster_manager, resolve_command_factory,
    resolve_data_mapper_factory, resolve_future_factory, validate_catalog,
};
use cqb_domain::value_objects::Capability;

#[test]
fn test_default_bindings_resolve() {
    for capability in Capability::ALL {
        let name = capability.default_binding();
        let found = match capability {
            Capability::ClusterManager => resolve_cluster_manager(name).map(|e| e.name),
            Capability::Future => resolve_future_factory(name).map(|e| e.name),
            Capability::CommandFactory => resolve_command_factory(name).map(|e| e.name),
            _ => resolve_data_mapper_factory(name).map(|e| e.name),
        };
        assert_eq!(found.unwrap(), name, "{capability}");
    }
}

#[test]
fn test_all_serializers_registered() {
    let names: Vec<_> = list_serializers().into_iter().map(|(name, _)| name).collect();
    for expected in ["text", "int", "bigint", "boolean", "double", "blob", "list", "map"] {
        assert!(names.contains(&expected), "missing serializer {expected}");
    }
}

#[test]
fn test_catalogs_are_well_formed() {
    validate_catalog(CLUSTER_MANAGERS.static_slice(), "cluster manager").unwrap();
    validate_catalog(FUTURE_FACTORIES.static_slice(), "future factory").unwrap();
    validate_catalog(COMMAND_FACTORIES.static_slice(), "command factory").unwrap();
    validate_catalog(DATA_MAPPER_FACTORIES.static_slice(), "data mapper factory").unwrap();
    validate_catalog(SERIALIZERS.static_slice(), "serializer").unwrap();
}
