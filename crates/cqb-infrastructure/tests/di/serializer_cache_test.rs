//! Serializer cache
//!
//! Uses a local catalog of counting serializers so construction counts are
//! isolated from the registered defaults.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cqb_application::ports::activation::{BoundArgs, CandidatePool, Constructor, TypeEntry};
use cqb_application::ports::registry::TARGET_SLOT;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{Serializer, ValueDecoder, ValueEncoder};
use cqb_domain::value_objects::TypeDescriptor;
use cqb_infrastructure::di::{SerializerCache, SerializerKey};
use serde_json::Value;

struct ProbeSerializer {
    name: &'static str,
    target: Option<TypeDescriptor>,
}

impl ValueEncoder for ProbeSerializer {
    fn encode(&self, _value: &Value) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

impl ValueDecoder for ProbeSerializer {
    fn decode(&self, _bytes: &[u8]) -> Result<Value> {
        Ok(Value::Null)
    }
}

impl Serializer for ProbeSerializer {
    fn serializer_name(&self) -> &str {
        self.name
    }

    fn target(&self) -> Option<&TypeDescriptor> {
        self.target.as_ref()
    }
}

static COUNTED: AtomicUsize = AtomicUsize::new(0);
static TARGETED: AtomicUsize = AtomicUsize::new(0);
static FLAKY_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

fn build_counted(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    COUNTED.fetch_add(1, Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(20));
    Ok(Arc::new(ProbeSerializer {
        name: "counted",
        target: None,
    }))
}

fn build_targeted(args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    TARGETED.fetch_add(1, Ordering::SeqCst);
    Ok(Arc::new(ProbeSerializer {
        name: "targeted",
        target: Some(args.cloned::<TypeDescriptor>(0)?),
    }))
}

fn build_flaky(_args: BoundArgs) -> Result<Arc<dyn Serializer>> {
    if FLAKY_ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
        return Err(Error::activation("flaky", "first attempt fails"));
    }
    Ok(Arc::new(ProbeSerializer {
        name: "flaky",
        target: None,
    }))
}

static PROBES: [TypeEntry<dyn Serializer>; 3] = [
    TypeEntry {
        name: "counted",
        description: "Counts its constructions",
        constructors: &[Constructor {
            params: &[],
            build: build_counted,
        }],
    },
    TypeEntry {
        name: "targeted",
        description: "Closed over a target type",
        constructors: &[Constructor {
            params: &[TARGET_SLOT],
            build: build_targeted,
        }],
    },
    TypeEntry {
        name: "flaky",
        description: "Fails on its first construction",
        constructors: &[Constructor {
            params: &[],
            build: build_flaky,
        }],
    },
];

#[test]
fn test_concurrent_same_key_constructs_once() {
    const CALLERS: usize = 50;
    let cache = SerializerCache::new(&PROBES);
    let key = SerializerKey::new("counted");

    let instances: Vec<Arc<dyn Serializer>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| scope.spawn(|| cache.get_or_create(&key, &CandidatePool::new()).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(instances.len(), CALLERS);
    assert!(instances.iter().all(|s| Arc::ptr_eq(s, &instances[0])));
    assert_eq!(COUNTED.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_distinct_keys_get_distinct_stable_instances() {
    let cache = SerializerCache::new(&PROBES);
    let ints = SerializerKey::closed("targeted", TypeDescriptor::Int);
    let texts = SerializerKey::closed("targeted", TypeDescriptor::Text);

    let int_pool = CandidatePool::new().with(TypeDescriptor::Int);
    let text_pool = CandidatePool::new().with(TypeDescriptor::Text);

    let first_int = cache.get_or_create(&ints, &int_pool).unwrap();
    let first_text = cache.get_or_create(&texts, &text_pool).unwrap();
    assert!(!Arc::ptr_eq(&first_int, &first_text));
    assert_eq!(first_int.target(), Some(&TypeDescriptor::Int));
    assert_eq!(first_text.target(), Some(&TypeDescriptor::Text));

    for _ in 0..3 {
        assert!(Arc::ptr_eq(&cache.get_or_create(&ints, &int_pool).unwrap(), &first_int));
        assert!(Arc::ptr_eq(&cache.get_or_create(&texts, &text_pool).unwrap(), &first_text));
    }
    assert_eq!(TARGETED.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failed_construction_is_retried() {
    let cache = SerializerCache::new(&PROBES);
    let key = SerializerKey::new("flaky");

    assert!(cache.get_or_create(&key, &CandidatePool::new()).is_err());
    assert!(cache.get(&key).is_none());

    let serializer = cache.get_or_create(&key, &CandidatePool::new()).unwrap();
    assert_eq!(serializer.serializer_name(), "flaky");
    assert_eq!(FLAKY_ATTEMPTS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_missing_target_is_unmatched() {
    let cache = SerializerCache::new(&PROBES);
    let err = cache
        .get_or_create(&SerializerKey::new("targeted"), &CandidatePool::new())
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, Error::ArgumentUnmatched { ref slot, .. } if slot == "target"));
    assert!(cache.is_empty());
}

#[test]
fn test_key_display() {
    assert_eq!(SerializerKey::new("text").to_string(), "text");
    assert_eq!(
        SerializerKey::for_target(&TypeDescriptor::list(TypeDescriptor::Int)).to_string(),
        "list<list<int>>"
    );
}
