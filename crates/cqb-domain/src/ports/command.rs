//! Command Factory Port

use crate::error::Result;
use crate::value_objects::Command;

/// Builds commands from statement text
pub trait CommandFactory: Send + Sync {
    /// Name of the concrete implementation
    fn provider_name(&self) -> &str;

    /// Build a command that executes `cql` directly
    fn query(&self, cql: &str) -> Result<Command>;

    /// Build a command that prepares `cql`
    fn prepare(&self, cql: &str) -> Result<Command>;
}
