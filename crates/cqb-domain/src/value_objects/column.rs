//! Column metadata

use serde::{Deserialize, Serialize};

use super::TypeDescriptor;

/// One column of a result set, as seen by a data mapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as returned by the server
    pub name: String,
    /// Declared column type
    pub data_type: TypeDescriptor,
}

impl ColumnSpec {
    /// Create a column spec
    pub fn new<S: Into<String>>(name: S, data_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
