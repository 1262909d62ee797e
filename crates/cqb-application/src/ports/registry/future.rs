//! Future Factory Registry

use cqb_domain::constants::KIND_FUTURE_FACTORY;
use cqb_domain::error::Result;
use cqb_domain::ports::FutureFactory;

use super::{list_entries, resolve_entry};
use crate::ports::activation::TypeEntry;

/// Registered future factory types
#[linkme::distributed_slice]
pub static FUTURE_FACTORIES: [TypeEntry<dyn FutureFactory>] = [..];

/// Resolve a future factory type by name
pub fn resolve_future_factory(name: &str) -> Result<&'static TypeEntry<dyn FutureFactory>> {
    resolve_entry(FUTURE_FACTORIES.static_slice(), KIND_FUTURE_FACTORY, name)
}

/// List registered future factory types
pub fn list_future_factories() -> Vec<(&'static str, &'static str)> {
    list_entries(FUTURE_FACTORIES.static_slice())
}
