//! Capability Ports
//!
//! Contracts for the services the registry constructs and caches. Each
//! capability is served as a process-lifetime singleton behind an
//! `Arc<dyn Trait>`; serializers are cached per serializer key.
//!
//! | Port | Capability |
//! |------|------------|
//! | [`ClusterManager`] | `Capability::ClusterManager` |
//! | [`FutureFactory`] | `Capability::Future` |
//! | [`CommandFactory`] | `Capability::CommandFactory` |
//! | [`DataMapperFactory`] | POCO, property-bag and ordinal mapper capabilities |
//! | [`Serializer`] | serializer cache entries |

/// Cluster manager port
pub mod cluster;
/// Command factory port
pub mod command;
/// Data mapper ports
pub mod data_mapper;
/// Future/promise ports
pub mod future;
/// Serializer ports
pub mod serializer;

pub use cluster::ClusterManager;
pub use command::CommandFactory;
pub use data_mapper::{DataMapper, DataMapperFactory};
pub use future::{FutureFactory, Promise};
pub use serializer::{Serializer, ValueDecoder, ValueEncoder};
