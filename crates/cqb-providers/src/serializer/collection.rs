//! Collection serializers
//!
//! Element codecs are obtained from the providers once, at construction.
//! Map values are objects when the key type is `text`; any other key type
//! uses an array of `[key, value]` pairs.

use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, Constructor, ParamSlot, TypeEntry};
use cqb_application::ports::registry::{
    DECODER_SLOT, DecoderProvider, ENCODER_SLOT, EncoderProvider, SERIALIZERS, TARGET_SLOT,
};
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{Serializer, ValueDecoder, ValueEncoder};
use cqb_domain::value_objects::TypeDescriptor;
use serde_json::{Map, Value};

const COLLECTION_SLOTS: &[ParamSlot] = &[TARGET_SLOT, ENCODER_SLOT, DECODER_SLOT];

fn write_len(out: &mut Vec<u8>, len: usize) -> Result<()> {
    let len = i32::try_from(len)
        .map_err(|_| Error::serialization(format!("length {len} does not fit in 32 bits")))?;
    out.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

fn write_element(out: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    write_len(out, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

/// Cursor over a length-prefixed collection payload
struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn read_len(&mut self) -> Result<usize> {
        let Some((head, rest)) = self.bytes.split_first_chunk::<4>() else {
            return Err(Error::serialization("truncated length prefix"));
        };
        self.bytes = rest;
        usize::try_from(i32::from_be_bytes(*head))
            .map_err(|_| Error::serialization("negative length prefix"))
    }

    fn read_element(&mut self) -> Result<&'a [u8]> {
        let len = self.read_len()?;
        if self.bytes.len() < len {
            return Err(Error::serialization(format!(
                "element needs {len} bytes, {} left",
                self.bytes.len()
            )));
        }
        let (element, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        Ok(element)
    }

    fn finish(&self) -> Result<()> {
        if self.bytes.is_empty() {
            Ok(())
        } else {
            Err(Error::serialization(format!(
                "{} trailing bytes after collection",
                self.bytes.len()
            )))
        }
    }
}

/// Serializer for `list<T>`
pub struct ListSerializer {
    target: TypeDescriptor,
    element_encoder: Arc<dyn ValueEncoder>,
    element_decoder: Arc<dyn ValueDecoder>,
}

impl ListSerializer {
    /// Serializer for the list descriptor `target`
    pub fn new(
        target: TypeDescriptor,
        encoders: &EncoderProvider,
        decoders: &DecoderProvider,
    ) -> Result<Self> {
        let TypeDescriptor::List(element) = &target else {
            return Err(Error::invalid_argument(format!("{target} is not a list type")));
        };
        let element_encoder = encoders.encoder_for(element)?;
        let element_decoder = decoders.decoder_for(element)?;
        Ok(Self {
            target,
            element_encoder,
            element_decoder,
        })
    }
}

impl ValueEncoder for ListSerializer {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let items = value
            .as_array()
            .ok_or_else(|| Error::serialization(format!("cannot encode {value} as {}", self.target)))?;
        let mut out = Vec::new();
        write_len(&mut out, items.len())?;
        for item in items {
            write_element(&mut out, &self.element_encoder.encode(item)?)?;
        }
        Ok(out)
    }
}

impl ValueDecoder for ListSerializer {
    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let mut reader = Reader { bytes };
        let count = reader.read_len()?;
        let items = (0..count)
            .map(|_| self.element_decoder.decode(reader.read_element()?))
            .collect::<Result<Vec<_>>>()?;
        reader.finish()?;
        Ok(Value::Array(items))
    }
}

impl Serializer for ListSerializer {
    fn serializer_name(&self) -> &str {
        "list"
    }

    fn target(&self) -> Option<&TypeDescriptor> {
        Some(&self.target)
    }
}

/// Serializer for `map<K, V>`
pub struct MapSerializer {
    target: TypeDescriptor,
    text_keys: bool,
    key_encoder: Arc<dyn ValueEncoder>,
    key_decoder: Arc<dyn ValueDecoder>,
    value_encoder: Arc<dyn ValueEncoder>,
    value_decoder: Arc<dyn ValueDecoder>,
}

impl MapSerializer {
    /// Serializer for the map descriptor `target`
    pub fn new(
        target: TypeDescriptor,
        encoders: &EncoderProvider,
        decoders: &DecoderProvider,
    ) -> Result<Self> {
        let TypeDescriptor::Map(key, value) = &target else {
            return Err(Error::invalid_argument(format!("{target} is not a map type")));
        };
        Ok(Self {
            text_keys: **key == TypeDescriptor::Text,
            key_encoder: encoders.encoder_for(key)?,
            key_decoder: decoders.decoder_for(key)?,
            value_encoder: encoders.encoder_for(value)?,
            value_decoder: decoders.decoder_for(value)?,
            target,
        })
    }

    fn entries(&self, value: &Value) -> Result<Vec<(Value, Value)>> {
        match value {
            Value::Object(object) if self.text_keys => Ok(object
                .iter()
                .map(|(k, v)| (Value::String(k.clone()), v.clone()))
                .collect()),
            Value::Array(pairs) => pairs
                .iter()
                .map(|pair| match pair.as_array().map(Vec::as_slice) {
                    Some([k, v]) => Ok((k.clone(), v.clone())),
                    _ => Err(Error::serialization(format!(
                        "map entry {pair} is not a [key, value] pair"
                    ))),
                })
                .collect(),
            other => Err(Error::serialization(format!(
                "cannot encode {other} as {}",
                self.target
            ))),
        }
    }
}

impl ValueEncoder for MapSerializer {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let entries = self.entries(value)?;
        let mut out = Vec::new();
        write_len(&mut out, entries.len())?;
        for (k, v) in &entries {
            write_element(&mut out, &self.key_encoder.encode(k)?)?;
            write_element(&mut out, &self.value_encoder.encode(v)?)?;
        }
        Ok(out)
    }
}

impl ValueDecoder for MapSerializer {
    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let mut reader = Reader { bytes };
        let count = reader.read_len()?;
        let mut entries = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let k = self.key_decoder.decode(reader.read_element()?)?;
            let v = self.value_decoder.decode(reader.read_element()?)?;
            entries.push((k, v));
        }
        reader.finish()?;

        if self.text_keys {
            let mut object = Map::new();
            for (k, v) in entries {
                if let Value::String(k) = k {
                    object.insert(k, v);
                }
            }
            Ok(Value::Object(object))
        } else {
            Ok(Value::Array(
                entries
                    .into_iter()
                    .map(|(k, v)| Value::Array(vec![k, v]))
                    .collect(),
            ))
        }
    }
}

impl Serializer for MapSerializer {
    fn serializer_name(&self) -> &str {
        "map"
    }

    fn target(&self) -> Option<&TypeDescriptor> {
        Some(&self.target)
    }
}

fn build_list(args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    let target = args.cloned::<TypeDescriptor>(0)?;
    let encoders = args.get::<EncoderProvider>(1)?;
    let decoders = args.get::<DecoderProvider>(2)?;
    Ok(Arc::new(ListSerializer::new(target, &encoders, &decoders)?))
}

fn build_map(args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    let target = args.cloned::<TypeDescriptor>(0)?;
    let encoders = args.get::<EncoderProvider>(1)?;
    let decoders = args.get::<DecoderProvider>(2)?;
    Ok(Arc::new(MapSerializer::new(target, &encoders, &decoders)?))
}

#[linkme::distributed_slice(SERIALIZERS)]
static LIST_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "list",
    description: "Length-prefixed list of elements",
    constructors: &[Constructor {
        params: COLLECTION_SLOTS,
        build: build_list,
    }],
};

#[linkme::distributed_slice(SERIALIZERS)]
static MAP_SERIALIZER: TypeEntry<dyn Serializer> = TypeEntry {
    name: "map",
    description: "Length-prefixed key/value pairs",
    constructors: &[Constructor {
        params: COLLECTION_SLOTS,
        build: build_map,
    }],
};
