//! Data mapper factories
//!
//! | Name | Row shape |
//! |------|-----------|
//! | `poco` | object keyed by lowerCamelCase column name, nulls skipped |
//! | `property-bag` | object keyed by column name as returned, nulls kept |
//! | `ordinal` | array in column order |

/// Ordinal (positional) mapping
pub mod ordinal;
/// Object mapping with lowerCamelCase field names
pub mod poco;
/// Verbatim name/value mapping
pub mod property_bag;

use cqb_domain::error::{Error, Result};
use cqb_domain::value_objects::ColumnSpec;
use serde_json::Value;

pub use ordinal::OrdinalMapperFactory;
pub use poco::PocoMapperFactory;
pub use property_bag::PropertyBagMapperFactory;

/// Fail unless `row` has one value per column
pub(crate) fn check_row_width(columns: &[ColumnSpec], row: &[Value]) -> Result<()> {
    if row.len() == columns.len() {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "row has {} values but the result set has {} columns",
            row.len(),
            columns.len()
        )))
    }
}
