//! Serializer cache
//!
//! Growth-only map from [`SerializerKey`] to the constructed serializer.
//! Hits are served from the map without taking the construction lock.
//! Misses take one cache-wide lock, re-check, construct and insert. The
//! lock is re-entrant so a serializer's constructor may ask the same cache
//! for its element serializers. Failed constructions are not stored; the
//! next miss tries again.

use std::fmt;
use std::sync::Arc;

use cqb_application::ports::activation::{CandidatePool, TypeEntry};
use cqb_application::ports::registry::SERIALIZERS;
use cqb_domain::constants::KIND_SERIALIZER;
use cqb_domain::error::Result;
use cqb_domain::ports::Serializer;
use cqb_domain::value_objects::TypeDescriptor;
use dashmap::DashMap;
use parking_lot::ReentrantMutex;
use tracing::{debug, info, warn};

use super::activator::TypeActivator;

/// Identifies a concrete serializer: the registered serializer type,
/// closed over an optional target type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializerKey {
    /// Registered serializer name
    pub serializer: String,
    /// Target type, when the serializer is closed over one
    pub target: Option<TypeDescriptor>,
}

impl SerializerKey {
    /// Key for the open serializer `serializer`
    pub fn new<S: Into<String>>(serializer: S) -> Self {
        Self {
            serializer: serializer.into(),
            target: None,
        }
    }

    /// Key for `serializer` closed over `target`
    pub fn closed<S: Into<String>>(serializer: S, target: TypeDescriptor) -> Self {
        Self {
            serializer: serializer.into(),
            target: Some(target),
        }
    }

    /// Key for the serializer registered for `target`
    pub fn for_target(target: &TypeDescriptor) -> Self {
        Self::closed(target.serializer_name(), target.clone())
    }
}

impl fmt::Display for SerializerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{}<{target}>", self.serializer),
            None => f.write_str(&self.serializer),
        }
    }
}

/// Constructs each distinct serializer at most once
pub struct SerializerCache {
    activator: TypeActivator<dyn Serializer>,
    entries: DashMap<SerializerKey, Arc<dyn Serializer>>,
    construction: ReentrantMutex<()>,
}

impl Default for SerializerCache {
    fn default() -> Self {
        Self::registered()
    }
}

impl SerializerCache {
    /// Cache over the registered serializer types
    pub fn registered() -> Self {
        Self::new(SERIALIZERS.static_slice())
    }

    /// Cache over the serializer types in `catalog`
    pub fn new(catalog: &'static [TypeEntry<dyn Serializer>]) -> Self {
        Self {
            activator: TypeActivator::new(catalog, KIND_SERIALIZER),
            entries: DashMap::new(),
            construction: ReentrantMutex::new(()),
        }
    }

    /// Number of cached serializers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached serializer for `key`, if constructed
    pub fn get(&self, key: &SerializerKey) -> Option<Arc<dyn Serializer>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// The serializer for `key`, constructing it from `pool` on a miss
    ///
    /// `pool` is only consulted when the key is absent; an existing entry is
    /// returned regardless of the arguments offered.
    pub fn get_or_create(
        &self,
        key: &SerializerKey,
        pool: &CandidatePool,
    ) -> Result<Arc<dyn Serializer>> {
        if let Some(serializer) = self.get(key) {
            return Ok(serializer);
        }

        let _guard = self.construction.lock();
        if let Some(serializer) = self.get(key) {
            debug!(serializer = %key, "constructed by another caller while waiting");
            return Ok(serializer);
        }

        let serializer = self
            .activator
            .create(&key.serializer, pool)
            .inspect_err(|err| {
                warn!(serializer = %key, error = %err, "serializer construction failed");
            })?;
        self.entries.insert(key.clone(), Arc::clone(&serializer));
        info!(serializer = %key, "serializer constructed");
        Ok(serializer)
    }
}

impl fmt::Debug for SerializerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerCache")
            .field("activator", &self.activator)
            .field("entries", &self.entries.len())
            .finish()
    }
}
