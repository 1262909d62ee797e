//! Service context
//!
//! Composition root for the registry: one [`ServiceCache`] per capability,
//! bound from configuration when the context is built, and one shared
//! [`SerializerCache`].
//!
//! ## Usage
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let context = ServiceContext::new(&config);
//!
//! let clusters = context.cluster_manager()?;
//! let list = context.serializer_for(&TypeDescriptor::list(TypeDescriptor::Int))?;
//! ```

use std::sync::{Arc, Weak};

use cqb_application::ports::activation::CandidatePool;
use cqb_application::ports::registry::{
    CLUSTER_MANAGERS, COMMAND_FACTORIES, DATA_MAPPER_FACTORIES, DecoderProvider, EncoderProvider,
    FUTURE_FACTORIES,
};
use cqb_domain::constants::{
    KIND_CLUSTER_MANAGER, KIND_COMMAND_FACTORY, KIND_DATA_MAPPER_FACTORY, KIND_FUTURE_FACTORY,
};
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{
    ClusterManager, CommandFactory, DataMapperFactory, FutureFactory, Serializer, ValueDecoder,
    ValueEncoder,
};
use cqb_domain::value_objects::{Capability, TypeDescriptor};
use tracing::info;

use super::activator::TypeActivator;
use super::serializer_cache::{SerializerCache, SerializerKey};
use super::service_cache::ServiceCache;
use crate::config::{AppConfig, BindingsConfig};

/// Registry context: capability singletons and serializers
pub struct ServiceContext {
    bindings: BindingsConfig,
    cluster_manager: ServiceCache<dyn ClusterManager>,
    future: ServiceCache<dyn FutureFactory>,
    command_factory: ServiceCache<dyn CommandFactory>,
    poco_data_mapper_factory: ServiceCache<dyn DataMapperFactory>,
    property_bag_data_mapper_factory: ServiceCache<dyn DataMapperFactory>,
    ordinal_data_mapper_factory: ServiceCache<dyn DataMapperFactory>,
    serializers: Arc<SerializerCache>,
}

impl Default for ServiceContext {
    fn default() -> Self {
        Self::with_bindings(BindingsConfig::default())
    }
}

impl ServiceContext {
    /// Context bound according to `config`
    pub fn new(config: &AppConfig) -> Self {
        Self::with_bindings(config.bindings.clone())
    }

    /// Context with explicit bindings
    pub fn with_bindings(bindings: BindingsConfig) -> Self {
        let data_mappers =
            TypeActivator::new(DATA_MAPPER_FACTORIES.static_slice(), KIND_DATA_MAPPER_FACTORY);
        Self {
            cluster_manager: ServiceCache::new(
                Capability::ClusterManager,
                TypeActivator::new(CLUSTER_MANAGERS.static_slice(), KIND_CLUSTER_MANAGER),
                bindings.binding(Capability::ClusterManager),
            ),
            future: ServiceCache::new(
                Capability::Future,
                TypeActivator::new(FUTURE_FACTORIES.static_slice(), KIND_FUTURE_FACTORY),
                bindings.binding(Capability::Future),
            ),
            command_factory: ServiceCache::new(
                Capability::CommandFactory,
                TypeActivator::new(COMMAND_FACTORIES.static_slice(), KIND_COMMAND_FACTORY),
                bindings.binding(Capability::CommandFactory),
            ),
            poco_data_mapper_factory: ServiceCache::new(
                Capability::PocoDataMapperFactory,
                data_mappers,
                bindings.binding(Capability::PocoDataMapperFactory),
            ),
            property_bag_data_mapper_factory: ServiceCache::new(
                Capability::PropertyBagDataMapperFactory,
                data_mappers,
                bindings.binding(Capability::PropertyBagDataMapperFactory),
            ),
            ordinal_data_mapper_factory: ServiceCache::new(
                Capability::OrdinalDataMapperFactory,
                data_mappers,
                bindings.binding(Capability::OrdinalDataMapperFactory),
            ),
            serializers: Arc::new(SerializerCache::registered()),
            bindings,
        }
    }

    /// Bindings the context was built with
    pub fn bindings(&self) -> &BindingsConfig {
        &self.bindings
    }

    /// The cluster manager singleton
    pub fn cluster_manager(&self) -> Result<Arc<dyn ClusterManager>> {
        self.cluster_manager.get_or_create()
    }

    /// The future factory singleton
    pub fn future(&self) -> Result<Arc<dyn FutureFactory>> {
        self.future.get_or_create()
    }

    /// The command factory singleton
    pub fn command_factory(&self) -> Result<Arc<dyn CommandFactory>> {
        self.command_factory.get_or_create()
    }

    /// The POCO data mapper factory singleton
    pub fn poco_data_mapper_factory(&self) -> Result<Arc<dyn DataMapperFactory>> {
        self.poco_data_mapper_factory.get_or_create()
    }

    /// The property-bag data mapper factory singleton
    pub fn property_bag_data_mapper_factory(&self) -> Result<Arc<dyn DataMapperFactory>> {
        self.property_bag_data_mapper_factory.get_or_create()
    }

    /// The ordinal data mapper factory singleton
    pub fn ordinal_data_mapper_factory(&self) -> Result<Arc<dyn DataMapperFactory>> {
        self.ordinal_data_mapper_factory.get_or_create()
    }

    /// Provider name of the singleton serving `capability`
    pub fn provider_name(&self, capability: Capability) -> Result<String> {
        Ok(match capability {
            Capability::ClusterManager => self.cluster_manager()?.provider_name().to_string(),
            Capability::Future => self.future()?.provider_name().to_string(),
            Capability::CommandFactory => self.command_factory()?.provider_name().to_string(),
            Capability::PocoDataMapperFactory => {
                self.poco_data_mapper_factory()?.provider_name().to_string()
            }
            Capability::PropertyBagDataMapperFactory => self
                .property_bag_data_mapper_factory()?
                .provider_name()
                .to_string(),
            Capability::OrdinalDataMapperFactory => {
                self.ordinal_data_mapper_factory()?.provider_name().to_string()
            }
        })
    }

    /// Touch every capability once and report what each resolved to
    pub fn warm_up(&self) -> Vec<(Capability, Result<String>)> {
        let report: Vec<_> = Capability::ALL
            .into_iter()
            .map(|capability| (capability, self.provider_name(capability)))
            .collect();
        let failed = report.iter().filter(|(_, outcome)| outcome.is_err()).count();
        info!(capabilities = report.len(), failed, "warm-up complete");
        report
    }

    /// The shared serializer cache
    pub fn serializer_cache(&self) -> &SerializerCache {
        &self.serializers
    }

    /// The open serializer `serializer`
    pub fn create_serializer(&self, serializer: &str) -> Result<Arc<dyn Serializer>> {
        self.serializers
            .get_or_create(&SerializerKey::new(serializer), &CandidatePool::new())
    }

    /// `serializer` closed over `target`
    pub fn create_serializer_for(
        &self,
        serializer: &str,
        target: TypeDescriptor,
    ) -> Result<Arc<dyn Serializer>> {
        let key = SerializerKey::closed(serializer, target.clone());
        self.serializers
            .get_or_create(&key, &CandidatePool::new().with(target))
    }

    /// `serializer` closed over `target`, given element codec providers
    ///
    /// The providers only take part in the first construction for a key.
    pub fn create_serializer_with(
        &self,
        serializer: &str,
        target: TypeDescriptor,
        default_encoder: EncoderProvider,
        default_decoder: DecoderProvider,
    ) -> Result<Arc<dyn Serializer>> {
        let key = SerializerKey::closed(serializer, target.clone());
        let pool = CandidatePool::new()
            .with(target)
            .with(default_encoder)
            .with(default_decoder);
        self.serializers.get_or_create(&key, &pool)
    }

    /// The serializer registered for `target`, with this context's default
    /// providers supplying element codecs for collections
    pub fn serializer_for(&self, target: &TypeDescriptor) -> Result<Arc<dyn Serializer>> {
        serializer_for(&self.serializers, target)
    }

    /// Encoder provider backed by this context's serializer cache
    pub fn default_encoder_provider(&self) -> EncoderProvider {
        encoder_provider(Arc::downgrade(&self.serializers))
    }

    /// Decoder provider backed by this context's serializer cache
    pub fn default_decoder_provider(&self) -> DecoderProvider {
        decoder_provider(Arc::downgrade(&self.serializers))
    }
}

fn serializer_for(
    cache: &Arc<SerializerCache>,
    target: &TypeDescriptor,
) -> Result<Arc<dyn Serializer>> {
    let mut pool = CandidatePool::new().with(target.clone());
    if target.is_collection() {
        pool.push(encoder_provider(Arc::downgrade(cache)));
        pool.push(decoder_provider(Arc::downgrade(cache)));
    }
    cache.get_or_create(&SerializerKey::for_target(target), &pool)
}

fn upgrade(cache: &Weak<SerializerCache>) -> Result<Arc<SerializerCache>> {
    cache
        .upgrade()
        .ok_or_else(|| Error::internal("serializer cache is no longer available"))
}

fn encoder_provider(cache: Weak<SerializerCache>) -> EncoderProvider {
    EncoderProvider::new(move |target: &TypeDescriptor| {
        let serializer = serializer_for(&upgrade(&cache)?, target)?;
        Ok(serializer as Arc<dyn ValueEncoder>)
    })
}

fn decoder_provider(cache: Weak<SerializerCache>) -> DecoderProvider {
    DecoderProvider::new(move |target: &TypeDescriptor| {
        let serializer = serializer_for(&upgrade(&cache)?, target)?;
        Ok(serializer as Arc<dyn ValueDecoder>)
    })
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("bindings", &self.bindings)
            .field("serializers", &self.serializers.len())
            .finish_non_exhaustive()
    }
}
