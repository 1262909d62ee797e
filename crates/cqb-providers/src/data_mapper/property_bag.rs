use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::DATA_MAPPER_FACTORIES;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{DataMapper, DataMapperFactory};
use cqb_domain::value_objects::ColumnSpec;
use serde_json::{Map, Value};

use super::check_row_width;

/// Maps rows to objects keyed by the column names as returned
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyBagMapperFactory;

impl PropertyBagMapperFactory {
    /// Create a property-bag mapper factory
    pub fn new() -> Self {
        Self
    }
}

struct PropertyBagMapper {
    columns: Vec<ColumnSpec>,
}

impl DataMapper for PropertyBagMapper {
    fn map_row(&self, row: &[Value]) -> Result<Value> {
        check_row_width(&self.columns, row)?;
        let bag: Map<String, Value> = self
            .columns
            .iter()
            .zip(row)
            .map(|(column, value)| (column.name.clone(), value.clone()))
            .collect();
        Ok(Value::Object(bag))
    }
}

impl DataMapperFactory for PropertyBagMapperFactory {
    fn provider_name(&self) -> &str {
        "property-bag"
    }

    fn create(&self, columns: &[ColumnSpec]) -> Result<Arc<dyn DataMapper>> {
        let mut names = std::collections::HashSet::new();
        if let Some(column) = columns.iter().find(|c| !names.insert(c.name.as_str())) {
            return Err(Error::invalid_argument(format!(
                "column '{}' appears more than once",
                column.name
            )));
        }
        Ok(Arc::new(PropertyBagMapper {
            columns: columns.to_vec(),
        }))
    }
}

fn build_property_bag(_args: BoundArgs) -> Result<Arc<dyn DataMapperFactory>> {
    Ok(Arc::new(PropertyBagMapperFactory::new()))
}

#[linkme::distributed_slice(DATA_MAPPER_FACTORIES)]
static PROPERTY_BAG_MAPPER_FACTORY: TypeEntry<dyn DataMapperFactory> = TypeEntry {
    name: "property-bag",
    description: "Rows as name/value objects with column names kept verbatim",
    constructors: &[Constructor {
        params: &[],
        build: build_property_bag,
    }],
};
