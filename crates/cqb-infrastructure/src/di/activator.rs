//! Type activation
//!
//! Resolves a concrete type by name within one registry slice, binds a
//! candidate pool to its sole constructor and invokes the builder. Nothing
//! is cached here.

use std::sync::Arc;

use cqb_application::ports::activation::{BoundArgs, CandidatePool, Constructor, TypeEntry};
use cqb_application::ports::registry::resolve_entry;
use cqb_domain::error::{Error, Result};
use tracing::debug;

use super::matcher::ArgumentMatcher;

/// Constructs instances of types registered in one catalog
pub struct TypeActivator<I: ?Sized + 'static> {
    catalog: &'static [TypeEntry<I>],
    kind: &'static str,
}

impl<I: ?Sized + 'static> Clone for TypeActivator<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized + 'static> Copy for TypeActivator<I> {}

impl<I: ?Sized + 'static> TypeActivator<I> {
    /// Activator over `catalog`, whose entries are of kind `kind`
    pub const fn new(catalog: &'static [TypeEntry<I>], kind: &'static str) -> Self {
        Self { catalog, kind }
    }

    /// Kind of the types in the catalog
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Resolve the entry registered as `name`
    pub fn resolve(&self, name: &str) -> Result<&'static TypeEntry<I>> {
        resolve_entry(self.catalog, self.kind, name)
    }

    /// Invoke `constructor` of `entry` with already-bound arguments
    ///
    /// Builder errors that are not activation failures are wrapped as one,
    /// keeping the original as the source.
    pub fn activate(
        &self,
        entry: &'static TypeEntry<I>,
        constructor: &'static Constructor<I>,
        args: BoundArgs,
    ) -> Result<Arc<I>> {
        (constructor.build)(args).map_err(|err| match err {
            Error::ActivationFailure { .. } => err,
            other => Error::activation_with_source(entry.name, other),
        })
    }

    /// Resolve `name`, match `pool` against its constructor and activate it
    pub fn create(&self, name: &str, pool: &CandidatePool) -> Result<Arc<I>> {
        let entry = self.resolve(name)?;
        let constructor = entry.sole_constructor()?;
        let args = ArgumentMatcher::match_slots(entry.name, constructor.params, pool)?;
        debug!(kind = self.kind, type_name = entry.name, args = args.len(), "activating");
        self.activate(entry, constructor, args)
    }
}

impl<I: ?Sized + 'static> std::fmt::Debug for TypeActivator<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeActivator")
            .field("kind", &self.kind)
            .field("types", &self.catalog.len())
            .finish()
    }
}
