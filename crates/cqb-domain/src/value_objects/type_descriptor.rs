//! Type descriptors
//!
//! A type descriptor names the column type a serializer is closed over.
//! Collection descriptors carry their element types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column type targeted by a serializer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// UTF-8 text
    Text,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    BigInt,
    /// Boolean
    Boolean,
    /// 64-bit IEEE-754 float
    Double,
    /// Opaque bytes
    Blob,
    /// Ordered list of elements
    List(Box<TypeDescriptor>),
    /// Key/value map
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// List descriptor over `element`
    pub fn list(element: TypeDescriptor) -> Self {
        Self::List(Box::new(element))
    }

    /// Map descriptor over `key` and `value`
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Name of the serializer registered for this descriptor
    pub fn serializer_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Blob => "blob",
            Self::List(_) => "list",
            Self::Map(..) => "map",
        }
    }

    /// Whether the descriptor is a collection
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(..))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
            scalar => f.write_str(scalar.serializer_name()),
        }
    }
}
