use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::SERIALIZERS;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{Serializer, ValueDecoder, ValueEncoder};
use cqb_domain::value_objects::TypeDescriptor;
use serde_json::{Number, Value};

/// Serializer for a fixed scalar type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarSerializer {
    target: TypeDescriptor,
}

impl ScalarSerializer {
    /// Serializer for `target`; fails for collection descriptors
    pub fn new(target: TypeDescriptor) -> Result<Self> {
        if target.is_collection() {
            return Err(Error::invalid_argument(format!(
                "{target} is not a scalar type"
            )));
        }
        Ok(Self { target })
    }

    fn mismatch(&self, value: &Value) -> Error {
        Error::serialization(format!("cannot encode {value} as {}", self.target))
    }
}

fn fixed<const N: usize>(target: &TypeDescriptor, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        Error::serialization(format!(
            "{target} needs {N} bytes, got {}",
            bytes.len()
        ))
    })
}

impl ValueEncoder for ScalarSerializer {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        match &self.target {
            TypeDescriptor::Text => value
                .as_str()
                .map(|s| s.as_bytes().to_vec())
                .ok_or_else(|| self.mismatch(value)),
            TypeDescriptor::Int => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(|n| n.to_be_bytes().to_vec())
                .ok_or_else(|| self.mismatch(value)),
            TypeDescriptor::BigInt => value
                .as_i64()
                .map(|n| n.to_be_bytes().to_vec())
                .ok_or_else(|| self.mismatch(value)),
            TypeDescriptor::Boolean => value
                .as_bool()
                .map(|b| vec![u8::from(b)])
                .ok_or_else(|| self.mismatch(value)),
            TypeDescriptor::Double => value
                .as_f64()
                .map(|n| n.to_be_bytes().to_vec())
                .ok_or_else(|| self.mismatch(value)),
            TypeDescriptor::Blob => value
                .as_array()
                .ok_or_else(|| self.mismatch(value))?
                .iter()
                .map(|byte| {
                    byte.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| self.mismatch(value))
                })
                .collect(),
            TypeDescriptor::List(_) | TypeDescriptor::Map(..) => Err(self.mismatch(value)),
        }
    }
}

impl ValueDecoder for ScalarSerializer {
    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let target = &self.target;
        match target {
            TypeDescriptor::Text => std::str::from_utf8(bytes)
                .map(|s| Value::String(s.to_string()))
                .map_err(|e| Error::serialization(format!("text is not valid UTF-8: {e}"))),
            TypeDescriptor::Int => Ok(Value::from(i32::from_be_bytes(fixed(target, bytes)?))),
            TypeDescriptor::BigInt => Ok(Value::from(i64::from_be_bytes(fixed(target, bytes)?))),
            TypeDescriptor::Boolean => match fixed::<1>(target, bytes)? {
                [0] => Ok(Value::Bool(false)),
                [1] => Ok(Value::Bool(true)),
                [other] => Err(Error::serialization(format!(
                    "invalid boolean byte {other}"
                ))),
            },
            TypeDescriptor::Double => {
                let n = f64::from_be_bytes(fixed(target, bytes)?);
                Number::from_f64(n)
                    .map(Value::Number)
                    .ok_or_else(|| Error::serialization(format!("{n} has no JSON representation")))
            }
            TypeDescriptor::Blob => Ok(Value::Array(bytes.iter().map(|&b| Value::from(b)).collect())),
            TypeDescriptor::List(_) | TypeDescriptor::Map(..) => Err(Error::serialization(
                format!("{target} is not a scalar type"),
            )),
        }
    }
}

impl Serializer for ScalarSerializer {
    fn serializer_name(&self) -> &str {
        self.target.serializer_name()
    }

    fn target(&self) -> Option<&TypeDescriptor> {
        Some(&self.target)
    }
}

fn build_text(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::Text)?))
}

fn build_int(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::Int)?))
}

fn build_bigint(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::BigInt)?))
}

fn build_boolean(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::Boolean)?))
}

fn build_double(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::Double)?))
}

fn build_blob(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    Ok(Arc::new(ScalarSerializer::new(TypeDescriptor::Blob)?))
}

#[linkme::distributed_slice(SERIALIZERS)]
static TEXT_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "text",
    description: "UTF-8 text",
    constructors: &[Constructor {
        params: &[],
        build: build_text,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static INT_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "int",
    description: "32-bit big-endian integer",
    constructors: &[Constructor {
        params: &[],
        build: build_int,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static BIGINT_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "bigint",
    description: "64-bit big-endian integer",
    constructors: &[Constructor {
        params: &[],
        build: build_bigint,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static BOOLEAN_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "boolean",
    description: "Single-byte boolean",
    constructors: &[Constructor {
        params: &[],
        build: build_boolean,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static DOUBLE_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "double",
    description: "64-bit big-endian IEEE-754 float",
    constructors: &[Constructor {
        params: &[],
        build: build_double,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static BLOB_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "blob",
    description: "Opaque bytes",
    constructors: &[Constructor {
        params: &[],
        build: build_blob,
    }],
};
