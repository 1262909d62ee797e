//! Domain constants
//!
//! Default name-to-type bindings and the registry kind labels used in
//! diagnostics.

// ============================================================================
// DEFAULT BINDINGS
// ============================================================================

/// Default concrete type bound to the cluster manager capability
pub const DEFAULT_CLUSTER_MANAGER: &str = "in-memory";

/// Default concrete type bound to the future capability
pub const DEFAULT_FUTURE: &str = "condvar";

/// Default concrete type bound to the command factory capability
pub const DEFAULT_COMMAND_FACTORY: &str = "cql";

/// Default concrete type bound to the POCO data mapper factory capability
pub const DEFAULT_POCO_DATA_MAPPER_FACTORY: &str = "poco";

/// Default concrete type bound to the property-bag data mapper factory capability
pub const DEFAULT_PROPERTY_BAG_DATA_MAPPER_FACTORY: &str = "property-bag";

/// Default concrete type bound to the ordinal data mapper factory capability
pub const DEFAULT_ORDINAL_DATA_MAPPER_FACTORY: &str = "ordinal";

// ============================================================================
// REGISTRY KINDS
// ============================================================================

/// Registry kind label for cluster managers
pub const KIND_CLUSTER_MANAGER: &str = "cluster manager";

/// Registry kind label for future factories
pub const KIND_FUTURE_FACTORY: &str = "future factory";

/// Registry kind label for command factories
pub const KIND_COMMAND_FACTORY: &str = "command factory";

/// Registry kind label for data mapper factories
pub const KIND_DATA_MAPPER_FACTORY: &str = "data mapper factory";

/// Registry kind label for serializers
pub const KIND_SERIALIZER: &str = "serializer";
