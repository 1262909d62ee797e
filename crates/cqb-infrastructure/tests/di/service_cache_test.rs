//! Per-capability singletons
//!
//! Counting probes are registered into the real cluster manager slice and
//! bound through `BindingsConfig`, the way a deployment would substitute a
//! concrete type.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::CLUSTER_MANAGERS;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::ClusterManager;
use cqb_domain::value_objects::Capability;
use cqb_infrastructure::config::BindingsConfig;
use cqb_infrastructure::di::ServiceContext;
use cqb_providers::InMemoryClusterManager;

static COUNTED_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);
static FAILING_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

fn build_counted(_args: BoundArgs) -> Result<Arc<dyn ClusterManager>> {
    COUNTED_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    // Widen the race window for concurrent first access
    std::thread::sleep(Duration::from_millis(20));
    Ok(Arc::new(InMemoryClusterManager::new()))
}

fn build_failing(_args: BoundArgs) -> Result<Arc<dyn ClusterManager>> {
    FAILING_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    Err(Error::activation("failing-probe", "cluster unreachable"))
}

#[linkme::distributed_slice(CLUSTER_MANAGERS)]
static COUNTED_PROBE: TypeEntry<dyn ClusterManager> = TypeEntry {
    name: "counted-probe",
    description: "Counts its constructions",
    constructors: &[Constructor {
        params: &[],
        build: build_counted,
    }],
};

#[linkme::distributed_slice(CLUSTER_MANAGERS)]
static FAILING_PROBE: TypeEntry<dyn ClusterManager> = TypeEntry {
    name: "failing-probe",
    description: "Always fails to construct",
    constructors: &[Constructor {
        params: &[],
        build: build_failing,
    }],
};

fn context_bound_to(type_name: &str) -> ServiceContext {
    let mut bindings = BindingsConfig::default();
    bindings.set_binding(Capability::ClusterManager, type_name);
    ServiceContext::with_bindings(bindings)
}

#[test]
fn test_concurrent_first_access_constructs_once() {
    const CALLERS: usize = 64;
    let context = context_bound_to("counted-probe");

    let instances: Vec<Arc<dyn ClusterManager>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| scope.spawn(|| context.cluster_manager().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(instances.len(), CALLERS);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    assert_eq!(COUNTED_CONSTRUCTIONS.load(Ordering::SeqCst), 1);

    // Later calls are served from the cache too
    let again = context.cluster_manager().unwrap();
    assert!(Arc::ptr_eq(&again, &instances[0]));
    assert_eq!(COUNTED_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unresolvable_binding_fails_the_same_way_every_time() {
    let context = context_bound_to("no-such-cluster-manager");

    let first = context.cluster_manager().map(|_| ()).unwrap_err();
    let second = context.cluster_manager().map(|_| ()).unwrap_err();

    assert!(matches!(first, Error::TypeNotFound { ref name, .. } if name == "no-such-cluster-manager"));
    assert!(matches!(second, Error::TypeNotFound { .. }));
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_construction_failure_is_sticky() {
    let context = context_bound_to("failing-probe");

    let failures: Vec<String> = (0..5)
        .map(|_| context.cluster_manager().map(|_| ()).unwrap_err().to_string())
        .collect();

    assert_eq!(FAILING_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(failures.iter().all(|f| f == &failures[0]));
    assert!(failures[0].contains("cluster unreachable"));
}

#[test]
fn test_failure_of_one_capability_does_not_affect_others() {
    let context = context_bound_to("no-such-cluster-manager");

    assert!(context.cluster_manager().is_err());
    assert_eq!(context.command_factory().unwrap().provider_name(), "cql");
}
