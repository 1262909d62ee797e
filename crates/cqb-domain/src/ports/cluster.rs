//! Cluster Manager Port

use crate::error::Result;

/// Keeps track of the clusters known to the process and their endpoints
pub trait ClusterManager: Send + Sync {
    /// Name of the concrete implementation
    fn provider_name(&self) -> &str;

    /// Register (or re-register) a cluster under `name`
    fn register_cluster(&self, name: &str, endpoints: Vec<String>) -> Result<()>;

    /// Endpoints of a registered cluster
    fn endpoints(&self, name: &str) -> Result<Vec<String>>;

    /// Names of all registered clusters, sorted
    fn cluster_names(&self) -> Vec<String>;
}
