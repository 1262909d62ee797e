//! Nested collection codecs built through the providers

use std::sync::Arc;

use cqb_application::ports::registry::{DecoderProvider, EncoderProvider};
use cqb_domain::ports::{ValueDecoder, ValueEncoder};
use cqb_domain::value_objects::TypeDescriptor;
use cqb_providers::{ListSerializer, MapSerializer, ScalarSerializer};
use serde_json::json;

fn encoder_for(target: &TypeDescriptor) -> cqb_domain::Result<Arc<dyn ValueEncoder>> {
    let (encoders, decoders) = providers();
    Ok(match target {
        TypeDescriptor::List(_) => Arc::new(ListSerializer::new(target.clone(), &encoders, &decoders)?),
        TypeDescriptor::Map(..) => Arc::new(MapSerializer::new(target.clone(), &encoders, &decoders)?),
        scalar => Arc::new(ScalarSerializer::new(scalar.clone())?),
    })
}

fn decoder_for(target: &TypeDescriptor) -> cqb_domain::Result<Arc<dyn ValueDecoder>> {
    let (encoders, decoders) = providers();
    Ok(match target {
        TypeDescriptor::List(_) => Arc::new(ListSerializer::new(target.clone(), &encoders, &decoders)?),
        TypeDescriptor::Map(..) => Arc::new(MapSerializer::new(target.clone(), &encoders, &decoders)?),
        scalar => Arc::new(ScalarSerializer::new(scalar.clone())?),
    })
}

fn providers() -> (EncoderProvider, DecoderProvider) {
    (EncoderProvider::new(encoder_for), DecoderProvider::new(decoder_for))
}

#[test]
fn test_map_of_lists() {
    let target = TypeDescriptor::map(
        TypeDescriptor::Text,
        TypeDescriptor::list(TypeDescriptor::BigInt),
    );
    let (encoders, decoders) = providers();
    let map = MapSerializer::new(target, &encoders, &decoders).unwrap();

    let value = json!({ "a": [1, 2, 3], "b": [] });
    let bytes = map.encode(&value).unwrap();
    assert_eq!(map.decode(&bytes).unwrap(), value);
}

#[test]
fn test_element_type_errors_surface() {
    let (encoders, decoders) = providers();
    let list =
        ListSerializer::new(TypeDescriptor::list(TypeDescriptor::Int), &encoders, &decoders)
            .unwrap();
    assert!(list.encode(&json!(["x"])).is_err());
}
