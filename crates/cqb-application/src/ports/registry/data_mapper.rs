//! Data Mapper Factory Registry
//!
//! The POCO, property-bag and ordinal capabilities all resolve from this one
//! slice; each capability is bound to a different entry name.

use cqb_domain::constants::KIND_DATA_MAPPER_FACTORY;
use cqb_domain::error::Result;
use cqb_domain::ports::DataMapperFactory;

use super::{list_entries, resolve_entry};
use crate::ports::activation::TypeEntry;

/// Registered data mapper factory types
#[linkme::distributed_slice]
pub static DATA_MAPPER_FACTORIES: [TypeEntry<dyn DataMapperFactory>] = [..];

/// Resolve a data mapper factory type by name
pub fn resolve_data_mapper_factory(
    name: &str,
) -> Result<&'static TypeEntry<dyn DataMapperFactory>> {
    resolve_entry(DATA_MAPPER_FACTORIES.static_slice(), KIND_DATA_MAPPER_FACTORY, name)
}

/// List registered data mapper factory types
pub fn list_data_mapper_factories() -> Vec<(&'static str, &'static str)> {
    list_entries(DATA_MAPPER_FACTORIES.static_slice())
}
