//! Configuration types

use std::path::PathBuf;

use cqb_domain::constants::{
    DEFAULT_CLUSTER_MANAGER, DEFAULT_COMMAND_FACTORY, DEFAULT_FUTURE,
    DEFAULT_ORDINAL_DATA_MAPPER_FACTORY, DEFAULT_POCO_DATA_MAPPER_FACTORY,
    DEFAULT_PROPERTY_BAG_DATA_MAPPER_FACTORY,
};
use cqb_domain::value_objects::Capability;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Concrete type bound to each capability
    pub bindings: BindingsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Name of the concrete type bound to each capability
///
/// Read once when a `ServiceContext` is built; never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    /// Cluster manager type
    pub cluster_manager: String,
    /// Future factory type
    pub future: String,
    /// Command factory type
    pub command_factory: String,
    /// POCO data mapper factory type
    pub poco_data_mapper_factory: String,
    /// Property-bag data mapper factory type
    pub property_bag_data_mapper_factory: String,
    /// Ordinal data mapper factory type
    pub ordinal_data_mapper_factory: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            cluster_manager: DEFAULT_CLUSTER_MANAGER.to_string(),
            future: DEFAULT_FUTURE.to_string(),
            command_factory: DEFAULT_COMMAND_FACTORY.to_string(),
            poco_data_mapper_factory: DEFAULT_POCO_DATA_MAPPER_FACTORY.to_string(),
            property_bag_data_mapper_factory: DEFAULT_PROPERTY_BAG_DATA_MAPPER_FACTORY.to_string(),
            ordinal_data_mapper_factory: DEFAULT_ORDINAL_DATA_MAPPER_FACTORY.to_string(),
        }
    }
}

impl BindingsConfig {
    /// Type name bound to `capability`
    pub fn binding(&self, capability: Capability) -> &str {
        match capability {
            Capability::ClusterManager => &self.cluster_manager,
            Capability::Future => &self.future,
            Capability::CommandFactory => &self.command_factory,
            Capability::PocoDataMapperFactory => &self.poco_data_mapper_factory,
            Capability::PropertyBagDataMapperFactory => &self.property_bag_data_mapper_factory,
            Capability::OrdinalDataMapperFactory => &self.ordinal_data_mapper_factory,
        }
    }

    /// Bind `capability` to the type registered as `type_name`
    pub fn set_binding<S: Into<String>>(&mut self, capability: Capability, type_name: S) {
        let slot = match capability {
            Capability::ClusterManager => &mut self.cluster_manager,
            Capability::Future => &mut self.future,
            Capability::CommandFactory => &mut self.command_factory,
            Capability::PocoDataMapperFactory => &mut self.poco_data_mapper_factory,
            Capability::PropertyBagDataMapperFactory => {
                &mut self.property_bag_data_mapper_factory
            }
            Capability::OrdinalDataMapperFactory => &mut self.ordinal_data_mapper_factory,
        };
        *slot = type_name.into();
    }
}
