//! Serializers
//!
//! Scalar serializers take no constructor arguments. Collection serializers
//! are closed over their collection descriptor and receive the encoder and
//! decoder providers they use for element values.
//!
//! ## Wire format
//!
//! | Type | Encoding |
//! |------|----------|
//! | `text` | UTF-8 bytes |
//! | `int` | 4-byte big-endian |
//! | `bigint` | 8-byte big-endian |
//! | `boolean` | one byte, `0` or `1` |
//! | `double` | 8-byte big-endian IEEE-754 |
//! | `blob` | raw bytes (values are arrays of `0..=255`) |
//! | `list` / `map` | 4-byte count, then each element as a 4-byte length followed by its bytes |

/// List and map serializers
pub mod collection;
/// Scalar serializers
pub mod scalar;

pub use collection::{ListSerializer, MapSerializer};
pub use scalar::ScalarSerializer;
