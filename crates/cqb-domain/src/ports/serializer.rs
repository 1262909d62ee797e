//! Serializer Ports
//!
//! Serializers convert between the dynamic value model (`serde_json::Value`)
//! and wire bytes. Encoding and decoding are separate traits so that element
//! encoders and decoders can be provided independently to collection
//! serializers.

use serde_json::Value;

use crate::error::Result;
use crate::value_objects::TypeDescriptor;

/// Encodes values into bytes
pub trait ValueEncoder: Send + Sync {
    /// Encode `value`
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;
}

/// Decodes bytes into values
pub trait ValueDecoder: Send + Sync {
    /// Decode `bytes`
    fn decode(&self, bytes: &[u8]) -> Result<Value>;
}

/// A cached serializer instance
pub trait Serializer: ValueEncoder + ValueDecoder {
    /// Registered name of the serializer
    fn serializer_name(&self) -> &str;

    /// Type the serializer is closed over, if any
    fn target(&self) -> Option<&TypeDescriptor>;
}
