//! Capability markers
//!
//! The fixed, enumerable set of contracts for which exactly one concrete
//! implementation is bound and lazily instantiated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLUSTER_MANAGER, DEFAULT_COMMAND_FACTORY, DEFAULT_FUTURE,
    DEFAULT_ORDINAL_DATA_MAPPER_FACTORY, DEFAULT_POCO_DATA_MAPPER_FACTORY,
    DEFAULT_PROPERTY_BAG_DATA_MAPPER_FACTORY,
};

/// A capability served by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Cluster topology management
    ClusterManager,
    /// Promise/future abstraction
    Future,
    /// Command construction
    CommandFactory,
    /// Row mapping into typed objects
    PocoDataMapperFactory,
    /// Row mapping into name-keyed property bags
    PropertyBagDataMapperFactory,
    /// Row mapping into positional tuples
    OrdinalDataMapperFactory,
}

impl Capability {
    /// Every capability, in accessor order
    pub const ALL: [Capability; 6] = [
        Capability::ClusterManager,
        Capability::Future,
        Capability::CommandFactory,
        Capability::PocoDataMapperFactory,
        Capability::PropertyBagDataMapperFactory,
        Capability::OrdinalDataMapperFactory,
    ];

    /// Stable snake_case identifier, also used as the configuration key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClusterManager => "cluster_manager",
            Self::Future => "future",
            Self::CommandFactory => "command_factory",
            Self::PocoDataMapperFactory => "poco_data_mapper_factory",
            Self::PropertyBagDataMapperFactory => "property_bag_data_mapper_factory",
            Self::OrdinalDataMapperFactory => "ordinal_data_mapper_factory",
        }
    }

    /// Concrete type name bound to this capability when nothing overrides it
    pub fn default_binding(self) -> &'static str {
        match self {
            Self::ClusterManager => DEFAULT_CLUSTER_MANAGER,
            Self::Future => DEFAULT_FUTURE,
            Self::CommandFactory => DEFAULT_COMMAND_FACTORY,
            Self::PocoDataMapperFactory => DEFAULT_POCO_DATA_MAPPER_FACTORY,
            Self::PropertyBagDataMapperFactory => DEFAULT_PROPERTY_BAG_DATA_MAPPER_FACTORY,
            Self::OrdinalDataMapperFactory => DEFAULT_ORDINAL_DATA_MAPPER_FACTORY,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
