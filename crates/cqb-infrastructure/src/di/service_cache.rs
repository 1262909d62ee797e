//! Per-capability deferred singleton
//!
//! The first access resolves the bound type, activates it with an empty
//! candidate pool and memoizes the outcome. Racing first accesses block
//! until the single construction finishes. A failed construction is
//! memoized too and returned unchanged on every later access.

use std::sync::Arc;

use cqb_application::ports::activation::CandidatePool;
use cqb_domain::error::Result;
use cqb_domain::value_objects::Capability;
use once_cell::sync::OnceCell;
use tracing::{error, info};

use super::activator::TypeActivator;

/// Lazily constructed, process-lifetime service instance
pub struct ServiceCache<I: ?Sized + 'static> {
    capability: Capability,
    type_name: String,
    activator: TypeActivator<I>,
    slot: OnceCell<Result<Arc<I>>>,
}

impl<I: ?Sized + Send + Sync + 'static> ServiceCache<I> {
    /// Cache for `capability`, bound to the type registered as `type_name`
    pub fn new<S: Into<String>>(
        capability: Capability,
        activator: TypeActivator<I>,
        type_name: S,
    ) -> Self {
        Self {
            capability,
            type_name: type_name.into(),
            activator,
            slot: OnceCell::new(),
        }
    }

    /// The capability served
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Name of the bound concrete type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether construction has already run (successfully or not)
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The memoized instance, constructing it on first access
    pub fn get_or_create(&self) -> Result<Arc<I>> {
        self.slot.get_or_init(|| self.construct()).clone()
    }

    fn construct(&self) -> Result<Arc<I>> {
        let outcome = self
            .activator
            .create(&self.type_name, &CandidatePool::new());
        match &outcome {
            Ok(_) => info!(
                capability = %self.capability,
                type_name = %self.type_name,
                "service constructed"
            ),
            Err(err) => error!(
                capability = %self.capability,
                type_name = %self.type_name,
                error = %err,
                "service construction failed; failure is cached"
            ),
        }
        outcome
    }
}

impl<I: ?Sized + 'static> std::fmt::Debug for ServiceCache<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCache")
            .field("capability", &self.capability)
            .field("type_name", &self.type_name)
            .field("initialized", &self.slot.get().is_some())
            .finish()
    }
}
