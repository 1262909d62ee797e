//! # cqb
//!
//! A process-wide service registry. Each capability (cluster manager,
//! future factory, command factory and the three data mapper factories) is
//! bound to one registered concrete type, constructed on first use and
//! shared for the rest of the process. Serializers are constructed once per
//! [`SerializerKey`] and cached.
//!
//! ## Example
//!
//! ```ignore
//! use cqb::TypeDescriptor;
//!
//! let commands = cqb::command_factory()?;
//! let query = commands.query("SELECT * FROM users WHERE id = ?")?;
//!
//! let ints = cqb::create_serializer("int")?;
//! let bytes = ints.encode(&serde_json::json!(42))?;
//!
//! let list = cqb::create_serializer_with(
//!     "list",
//!     TypeDescriptor::list(TypeDescriptor::Int),
//!     cqb::context().default_encoder_provider(),
//!     cqb::context().default_decoder_provider(),
//! )?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, value objects, errors
//! - `application` - registry slices and constructor descriptions
//! - `infrastructure` - matching, activation, caches, config, logging
//! - `providers` - the default concrete types

// Force-link cqb-providers so the default types are registered
extern crate cqb_providers;

use std::sync::Arc;

/// Domain layer - capability ports, value objects and errors
pub mod domain {
    pub use cqb_domain::*;
}

/// Application layer - registry slices and activation ports
pub mod application {
    pub use cqb_application::*;
}

/// Infrastructure layer - service context, config and logging
pub mod infrastructure {
    pub use cqb_infrastructure::*;
}

/// Default concrete types
pub mod providers {
    pub use cqb_providers::*;
}

pub use cqb_application::ports::registry::{DecoderProvider, EncoderProvider};
pub use cqb_domain::ports::{
    ClusterManager, CommandFactory, DataMapper, DataMapperFactory, FutureFactory, Promise,
    Serializer, ValueDecoder, ValueEncoder,
};
pub use cqb_infrastructure::di::{SerializerKey, ServiceContext};
pub use domain::*;

/// The process-wide service context
pub fn context() -> &'static ServiceContext {
    cqb_infrastructure::di::global()
}

/// Install `context` as the process-wide context
///
/// Must run before any accessor below; fails otherwise.
pub fn install(context: ServiceContext) -> Result<&'static ServiceContext> {
    cqb_infrastructure::di::install(context)
}

/// The cluster manager singleton
pub fn cluster_manager() -> Result<Arc<dyn ClusterManager>> {
    context().cluster_manager()
}

/// The future factory singleton
pub fn future() -> Result<Arc<dyn FutureFactory>> {
    context().future()
}

/// The command factory singleton
pub fn command_factory() -> Result<Arc<dyn CommandFactory>> {
    context().command_factory()
}

/// The POCO data mapper factory singleton
pub fn poco_data_mapper_factory() -> Result<Arc<dyn DataMapperFactory>> {
    context().poco_data_mapper_factory()
}

/// The property-bag data mapper factory singleton
pub fn property_bag_data_mapper_factory() -> Result<Arc<dyn DataMapperFactory>> {
    context().property_bag_data_mapper_factory()
}

/// The ordinal data mapper factory singleton
pub fn ordinal_data_mapper_factory() -> Result<Arc<dyn DataMapperFactory>> {
    context().ordinal_data_mapper_factory()
}

/// The open serializer `serializer`
pub fn create_serializer(serializer: &str) -> Result<Arc<dyn Serializer>> {
    context().create_serializer(serializer)
}

/// `serializer` closed over `target`
pub fn create_serializer_for(serializer: &str, target: TypeDescriptor) -> Result<Arc<dyn Serializer>> {
    context().create_serializer_for(serializer, target)
}

/// `serializer` closed over `target`, given element codec providers
pub fn create_serializer_with(
    serializer: &str,
    target: TypeDescriptor,
    default_encoder: EncoderProvider,
    default_decoder: DecoderProvider,
) -> Result<Arc<dyn Serializer>> {
    context().create_serializer_with(serializer, target, default_encoder, default_decoder)
}
