//! Command Factory Registry

use cqb_domain::constants::KIND_COMMAND_FACTORY;
use cqb_domain::error::Result;
use cqb_domain::ports::CommandFactory;

use super::{list_entries, resolve_entry};
use crate::ports::activation::TypeEntry;

/// Registered command factory types
#[linkme::distributed_slice]
pub static COMMAND_FACTORIES: [TypeEntry<dyn CommandFactory>] = [..];

/// Resolve a command factory type by name
pub fn resolve_command_factory(name: &str) -> Result<&'static TypeEntry<dyn CommandFactory>> {
    resolve_entry(COMMAND_FACTORIES.static_slice(), KIND_COMMAND_FACTORY, name)
}

/// List registered command factory types
pub fn list_command_factories() -> Vec<(&'static str, &'static str)> {
    list_entries(COMMAND_FACTORIES.static_slice())
}
