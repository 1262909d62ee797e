//! Cluster Manager Registry

use cqb_domain::constants::KIND_CLUSTER_MANAGER;
use cqb_domain::error::Result;
use cqb_domain::ports::ClusterManager;

use super::{list_entries, resolve_entry};
use crate::ports::activation::TypeEntry;

/// Registered cluster manager types
#[linkme::distributed_slice]
pub static CLUSTER_MANAGERS: [TypeEntry<dyn ClusterManager>] = [..];

/// Resolve a cluster manager type by name
pub fn resolve_cluster_manager(name: &str) -> Result<&'static TypeEntry<dyn ClusterManager>> {
    resolve_entry(CLUSTER_MANAGERS.static_slice(), KIND_CLUSTER_MANAGER, name)
}

/// List registered cluster manager types
pub fn list_cluster_managers() -> Vec<(&'static str, &'static str)> {
    list_entries(CLUSTER_MANAGERS.static_slice())
}
