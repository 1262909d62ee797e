//! Type Registry System
//!
//! Defines the auto-registration infrastructure for concrete types. Uses the
//! `linkme` crate for compile-time registration of types that are resolved
//! by name and activated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Type Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(SERIALIZERS)]│
//! │                        static ENTRY: TypeEntry<..> = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SERIALIZERS: [Entry] = [..]   │
//! │                              ↓                                  │
//! │  3. Resolver queries:  resolve_entry(&SERIALIZERS, kind, name)  │
//! │                              ↓                                  │
//! │  4. Binding selects:   "cluster_manager = in-memory"            │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Type (in cqb-providers)
//!
//! ```ignore
//! use cqb_application::ports::registry::CLUSTER_MANAGERS;
//!
//! #[linkme::distributed_slice(CLUSTER_MANAGERS)]
//! static IN_MEMORY: TypeEntry<dyn ClusterManager> = TypeEntry {
//!     name: "in-memory",
//!     description: "Process-local cluster manager",
//!     constructors: &[Constructor { params: &[], build: build_in_memory }],
//! };
//! ```

pub mod cluster;
pub mod command;
pub mod data_mapper;
pub mod future;
pub mod serializer;

use std::collections::HashSet;
use std::fmt;

use cqb_domain::constants::{
    KIND_CLUSTER_MANAGER, KIND_COMMAND_FACTORY, KIND_DATA_MAPPER_FACTORY, KIND_FUTURE_FACTORY,
    KIND_SERIALIZER,
};
use cqb_domain::error::{Error, Result};
use tracing::debug;

use crate::ports::activation::TypeEntry;

pub use cluster::{CLUSTER_MANAGERS, list_cluster_managers, resolve_cluster_manager};
pub use command::{COMMAND_FACTORIES, list_command_factories, resolve_command_factory};
pub use data_mapper::{
    DATA_MAPPER_FACTORIES, list_data_mapper_factories, resolve_data_mapper_factory,
};
pub use future::{FUTURE_FACTORIES, list_future_factories, resolve_future_factory};
pub use serializer::{
    DECODER_SLOT, DecoderProvider, ENCODER_SLOT, EncoderProvider, SERIALIZERS, TARGET_SLOT,
    list_serializers, resolve_serializer,
};

/// Resolve the entry registered under `name` in `catalog`
///
/// Fails with `TypeNotFound` when no entry of that name exists.
pub fn resolve_entry<I: ?Sized + 'static>(
    catalog: &'static [TypeEntry<I>],
    kind: &str,
    name: &str,
) -> Result<&'static TypeEntry<I>> {
    catalog
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            debug!(
                kind,
                name,
                available = ?catalog.iter().map(|e| e.name).collect::<Vec<_>>(),
                "type resolution failed"
            );
            Error::type_not_found(kind, name)
        })
}

/// List `(name, description)` of every entry in `catalog`
pub fn list_entries<I: ?Sized + 'static>(
    catalog: &'static [TypeEntry<I>],
) -> Vec<(&'static str, &'static str)> {
    catalog.iter().map(|e| (e.name, e.description)).collect()
}

/// Check that every entry in `catalog` has a unique name and a single,
/// unambiguous constructor
pub fn validate_catalog<I: ?Sized + 'static>(
    catalog: &'static [TypeEntry<I>],
    kind: &str,
) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in catalog {
        if !seen.insert(entry.name) {
            return Err(Error::configuration(format!(
                "{kind} '{}' is registered more than once",
                entry.name
            )));
        }
        entry.sole_constructor()?;
    }
    Ok(())
}

/// Validate every registry slice
pub fn validate_registry() -> Result<()> {
    validate_catalog(CLUSTER_MANAGERS.static_slice(), KIND_CLUSTER_MANAGER)?;
    validate_catalog(FUTURE_FACTORIES.static_slice(), KIND_FUTURE_FACTORY)?;
    validate_catalog(COMMAND_FACTORIES.static_slice(), KIND_COMMAND_FACTORY)?;
    validate_catalog(DATA_MAPPER_FACTORIES.static_slice(), KIND_DATA_MAPPER_FACTORY)?;
    validate_catalog(SERIALIZERS.static_slice(), KIND_SERIALIZER)
}

/// Registered types by kind
#[derive(Debug, Clone)]
pub struct AvailableTypes {
    /// Cluster managers (name, description)
    pub cluster_managers: Vec<(&'static str, &'static str)>,
    /// Future factories (name, description)
    pub future_factories: Vec<(&'static str, &'static str)>,
    /// Command factories (name, description)
    pub command_factories: Vec<(&'static str, &'static str)>,
    /// Data mapper factories (name, description)
    pub data_mapper_factories: Vec<(&'static str, &'static str)>,
    /// Serializers (name, description)
    pub serializers: Vec<(&'static str, &'static str)>,
}

impl AvailableTypes {
    fn sections(&self) -> [(&'static str, &Vec<(&'static str, &'static str)>); 5] {
        [
            (KIND_CLUSTER_MANAGER, &self.cluster_managers),
            (KIND_FUTURE_FACTORY, &self.future_factories),
            (KIND_COMMAND_FACTORY, &self.command_factories),
            (KIND_DATA_MAPPER_FACTORY, &self.data_mapper_factories),
            (KIND_SERIALIZER, &self.serializers),
        ]
    }
}

/// List every registered type across all kinds
pub fn list_available_types() -> AvailableTypes {
    AvailableTypes {
        cluster_managers: list_cluster_managers(),
        future_factories: list_future_factories(),
        command_factories: list_command_factories(),
        data_mapper_factories: list_data_mapper_factories(),
        serializers: list_serializers(),
    }
}

impl fmt::Display for AvailableTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered Types:")?;
        for (kind, entries) in self.sections() {
            writeln!(f)?;
            writeln!(f, "{kind}:")?;
            for (name, desc) in entries {
                writeln!(f, "  - {name}: {desc}")?;
            }
        }
        Ok(())
    }
}
