//! In-memory cluster manager
//!
//! Keeps cluster endpoint lists in a process-local map.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::CLUSTER_MANAGERS;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::ClusterManager;
use tracing::debug;

/// Cluster manager backed by a process-local map
///
/// # Example
///
/// ```rust
/// use cqb_domain::ports::ClusterManager;
/// use cqb_providers::InMemoryClusterManager;
///
/// let manager = InMemoryClusterManager::new();
/// manager.register_cluster("main", vec!["10.0.0.1:9042".into()]).unwrap();
/// assert_eq!(manager.cluster_names(), vec!["main".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryClusterManager {
    clusters: RwLock<BTreeMap<String, Vec<String>>>,
}

impl InMemoryClusterManager {
    /// Create an empty cluster manager
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClusterManager for InMemoryClusterManager {
    fn provider_name(&self) -> &str {
        "in-memory"
    }

    fn register_cluster(&self, name: &str, endpoints: Vec<String>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("cluster name cannot be empty"));
        }
        if endpoints.is_empty() {
            return Err(Error::invalid_argument(format!(
                "cluster '{name}' needs at least one endpoint"
            )));
        }
        debug!(cluster = name, endpoints = endpoints.len(), "registering cluster");
        self.clusters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), endpoints);
        Ok(())
    }

    fn endpoints(&self, name: &str) -> Result<Vec<String>> {
        self.clusters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| Error::invalid_argument(format!("unknown cluster '{name}'")))
    }

    fn cluster_names(&self) -> Vec<String> {
        self.clusters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

fn build_in_memory(_args: BoundArgs) -> Result<Arc<dyn ClusterManager>> {
    Ok(Arc::new(InMemoryClusterManager::new()))
}

#[linkme::distributed_slice(CLUSTER_MANAGERS)]
static IN_MEMORY_CLUSTER_MANAGER: TypeEntry<dyn ClusterManager> = TypeEntry {
    name: "in-memory",
    description: "Process-local cluster manager",
    constructors: &[Constructor {
        params: &[],
        build: build_in_memory,
    }],
};
