//! Serializer Registry
//!
//! Serializers are constructed from one of three argument shapes:
//!
//! | Shape | Candidates |
//! |-------|------------|
//! | plain | none |
//! | targeted | [`TypeDescriptor`] |
//! | collection | [`TypeDescriptor`], [`EncoderProvider`], [`DecoderProvider`] |
//!
//! Encoder and decoder providers share a call shape (type descriptor in,
//! element codec out) but are distinct types, so a constructor can declare
//! both slots without the match becoming order-dependent.

use std::fmt;
use std::sync::Arc;

use cqb_domain::constants::KIND_SERIALIZER;
use cqb_domain::error::Result;
use cqb_domain::ports::{Serializer, ValueDecoder, ValueEncoder};
use cqb_domain::value_objects::TypeDescriptor;

use super::{list_entries, resolve_entry};
use crate::ports::activation::{ParamSlot, TypeEntry};

/// Slot for the type a serializer is closed over
pub const TARGET_SLOT: ParamSlot = ParamSlot::of::<TypeDescriptor>("target");

/// Slot for the element encoder provider
pub const ENCODER_SLOT: ParamSlot = ParamSlot::of::<EncoderProvider>("default_encoder");

/// Slot for the element decoder provider
pub const DECODER_SLOT: ParamSlot = ParamSlot::of::<DecoderProvider>("default_decoder");

type EncoderFn = dyn Fn(&TypeDescriptor) -> Result<Arc<dyn ValueEncoder>> + Send + Sync;
type DecoderFn = dyn Fn(&TypeDescriptor) -> Result<Arc<dyn ValueDecoder>> + Send + Sync;

/// Supplies the encoder for a given element type
#[derive(Clone)]
pub struct EncoderProvider(Arc<EncoderFn>);

impl EncoderProvider {
    /// Wrap a provider function
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> Result<Arc<dyn ValueEncoder>> + Send + Sync + 'static,
    {
        Self(Arc::new(provider))
    }

    /// Encoder for values of type `target`
    pub fn encoder_for(&self, target: &TypeDescriptor) -> Result<Arc<dyn ValueEncoder>> {
        (self.0)(target)
    }
}

impl fmt::Debug for EncoderProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncoderProvider")
    }
}

/// Supplies the decoder for a given element type
#[derive(Clone)]
pub struct DecoderProvider(Arc<DecoderFn>);

impl DecoderProvider {
    /// Wrap a provider function
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> Result<Arc<dyn ValueDecoder>> + Send + Sync + 'static,
    {
        Self(Arc::new(provider))
    }

    /// Decoder for values of type `target`
    pub fn decoder_for(&self, target: &TypeDescriptor) -> Result<Arc<dyn ValueDecoder>> {
        (self.0)(target)
    }
}

impl fmt::Debug for DecoderProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecoderProvider")
    }
}

/// Registered serializer types
#[linkme::distributed_slice]
pub static SERIALIZERS: [TypeEntry<dyn Serializer>] = [..];

/// Resolve a serializer type by name
pub fn resolve_serializer(name: &str) -> Result<&'static TypeEntry<dyn Serializer>> {
    resolve_entry(SERIALIZERS.static_slice(), KIND_SERIALIZER, name)
}

/// List registered serializer types
pub fn list_serializers() -> Vec<(&'static str, &'static str)> {
    list_entries(SERIALIZERS.static_slice())
}
