//! Data Mapper Ports
//!
//! A factory is bound per mapping style; each factory builds a mapper for a
//! given result-set shape.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::value_objects::ColumnSpec;

/// Maps one row of column values into a single value
pub trait DataMapper: Send + Sync {
    /// Map `row`, whose values are in column order
    fn map_row(&self, row: &[Value]) -> Result<Value>;
}

/// Builds data mappers for a result-set shape
pub trait DataMapperFactory: Send + Sync {
    /// Name of the concrete implementation
    fn provider_name(&self) -> &str;

    /// Build a mapper for rows with the given columns
    fn create(&self, columns: &[ColumnSpec]) -> Result<Arc<dyn DataMapper>>;
}
