//! POCO-style mapping
//!
//! Column names are converted to lowerCamelCase field names
//! (`user_id` -> `userId`, `CreatedAt` -> `createdAt`). Null columns are
//! left out of the mapped object.

use std::collections::HashSet;
use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::DATA_MAPPER_FACTORIES;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{DataMapper, DataMapperFactory};
use cqb_domain::value_objects::ColumnSpec;
use serde_json::{Map, Value};

use super::check_row_width;

/// Maps rows to objects with lowerCamelCase field names
#[derive(Debug, Clone, Copy, Default)]
pub struct PocoMapperFactory;

impl PocoMapperFactory {
    /// Create a POCO mapper factory
    pub fn new() -> Self {
        Self
    }
}

/// Field name for a column
pub fn field_name(column: &str) -> String {
    let mut field = String::with_capacity(column.len());
    let mut upper_next = false;
    for ch in column.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            upper_next = !field.is_empty();
        } else if field.is_empty() {
            field.extend(ch.to_lowercase());
        } else if upper_next {
            field.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            field.push(ch);
        }
    }
    field
}

struct PocoMapper {
    columns: Vec<ColumnSpec>,
    fields: Vec<String>,
}

impl DataMapper for PocoMapper {
    fn map_row(&self, row: &[Value]) -> Result<Value> {
        check_row_width(&self.columns, row)?;
        let object: Map<String, Value> = self
            .fields
            .iter()
            .zip(row)
            .filter(|(_, value)| !value.is_null())
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();
        Ok(Value::Object(object))
    }
}

impl DataMapperFactory for PocoMapperFactory {
    fn provider_name(&self) -> &str {
        "poco"
    }

    fn create(&self, columns: &[ColumnSpec]) -> Result<Arc<dyn DataMapper>> {
        let fields: Vec<String> = columns.iter().map(|c| field_name(&c.name)).collect();
        let mut seen = HashSet::new();
        for (column, field) in columns.iter().zip(&fields) {
            if field.is_empty() {
                return Err(Error::invalid_argument(format!(
                    "column '{}' has no usable field name",
                    column.name
                )));
            }
            if !seen.insert(field.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "column '{}' maps to field '{field}' which is already taken",
                    column.name
                )));
            }
        }
        Ok(Arc::new(PocoMapper {
            columns: columns.to_vec(),
            fields,
        }))
    }
}

fn build_poco(_args: BoundArgs) -> Result<Arc<dyn DataMapperFactory>> {
    Ok(Arc::new(PocoMapperFactory::new()))
}

#[linkme::distributed_slice(DATA_MAPPER_FACTORIES)]
static POCO_MAPPER_FACTORY: TypeEntry<dyn DataMapperFactory> = TypeEntry {
    name: "poco",
    description: "Rows as objects with lowerCamelCase field names",
    constructors: &[Constructor {
        params: &[],
        build: build_poco,
    }],
};
