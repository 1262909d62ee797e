//! # cqb - Default Implementations
//!
//! Concrete types registered into the `cqb-application` slices. Each
//! implements a port defined in `cqb-domain`.
//!
//! ## Registered Types
//!
//! | Slice | Port | Names |
//! |-------|------|-------|
//! | `CLUSTER_MANAGERS` | `ClusterManager` | `in-memory` |
//! | `FUTURE_FACTORIES` | `FutureFactory` | `condvar` |
//! | `COMMAND_FACTORIES` | `CommandFactory` | `cql` |
//! | `DATA_MAPPER_FACTORIES` | `DataMapperFactory` | `poco`, `property-bag`, `ordinal` |
//! | `SERIALIZERS` | `Serializer` | `text`, `int`, `bigint`, `boolean`, `double`, `blob`, `list`, `map` |
//!
//! Linking this crate is what makes the entries visible; binaries and test
//! suites that never name a type from it should still `extern crate
//! cqb_providers;`.

pub use cqb_domain::error::{Error, Result};

/// In-memory cluster manager
pub mod cluster;
/// CQL command factory
pub mod command;
/// Data mapper factories
pub mod data_mapper;
/// Condvar-backed futures
pub mod future;
/// Scalar and collection serializers
pub mod serializer;

pub use cluster::InMemoryClusterManager;
pub use command::CqlCommandFactory;
pub use data_mapper::{OrdinalMapperFactory, PocoMapperFactory, PropertyBagMapperFactory};
pub use future::{CondvarFutureFactory, CondvarPromise};
pub use serializer::{ListSerializer, MapSerializer, ScalarSerializer};
