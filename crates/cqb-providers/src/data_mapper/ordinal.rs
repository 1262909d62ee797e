use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::DATA_MAPPER_FACTORIES;
use cqb_domain::error::Result;
use cqb_domain::ports::{DataMapper, DataMapperFactory};
use cqb_domain::value_objects::ColumnSpec;
use serde_json::Value;

use super::check_row_width;

/// Maps rows to arrays in column order
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalMapperFactory;

impl OrdinalMapperFactory {
    /// Create an ordinal mapper factory
    pub fn new() -> Self {
        Self
    }
}

struct OrdinalMapper {
    columns: Vec<ColumnSpec>,
}

impl DataMapper for OrdinalMapper {
    fn map_row(&self, row: &[Value]) -> Result<Value> {
        check_row_width(&self.columns, row)?;
        Ok(Value::Array(row.to_vec()))
    }
}

impl DataMapperFactory for OrdinalMapperFactory {
    fn provider_name(&self) -> &str {
        "ordinal"
    }

    fn create(&self, columns: &[ColumnSpec]) -> Result<Arc<dyn DataMapper>> {
        Ok(Arc::new(OrdinalMapper {
            columns: columns.to_vec(),
        }))
    }
}

fn build_ordinal(_args: BoundArgs) -> Result<Arc<dyn DataMapperFactory>> {
    Ok(Arc::new(OrdinalMapperFactory::new()))
}

#[linkme::distributed_slice(DATA_MAPPER_FACTORIES)]
static ORDINAL_MAPPER_FACTORY: TypeEntry<dyn DataMapperFactory> = TypeEntry {
    name: "ordinal",
    description: "Rows as arrays in column order",
    constructors: &[Constructor {
        params: &[],
        build: build_ordinal,
    }],
};
