//! Condvar-backed futures

use std::sync::{Arc, Condvar, Mutex, PoisonError};

use cqb_application::ports::activation::{BoundArgs, Constructor, TypeEntry};
use cqb_application::ports::registry::FUTURE_FACTORIES;
use cqb_domain::error::{Error, Result};
use cqb_domain::ports::{FutureFactory, Promise};
use serde_json::Value;

/// A promise whose waiters block on a condition variable
#[derive(Debug, Default)]
pub struct CondvarPromise {
    outcome: Mutex<Option<Result<Value>>>,
    ready: Condvar,
}

impl CondvarPromise {
    /// Create a pending promise
    pub fn new() -> Self {
        Self::default()
    }
}

impl Promise for CondvarPromise {
    fn complete(&self, outcome: Result<Value>) -> bool {
        let mut slot = self.outcome.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return false;
        }
        *slot = Some(outcome);
        self.ready.notify_all();
        true
    }

    fn is_completed(&self) -> bool {
        self.outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn wait(&self) -> Result<Value> {
        let slot = self.outcome.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = self
            .ready
            .wait_while(slot, |outcome| outcome.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        slot.clone()
            .unwrap_or_else(|| Err(Error::internal("promise woke without an outcome")))
    }
}

/// Creates [`CondvarPromise`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct CondvarFutureFactory;

impl CondvarFutureFactory {
    /// Create a future factory
    pub fn new() -> Self {
        Self
    }
}

impl FutureFactory for CondvarFutureFactory {
    fn provider_name(&self) -> &str {
        "condvar"
    }

    fn create(&self) -> Arc<dyn Promise> {
        Arc::new(CondvarPromise::new())
    }
}

fn build_condvar(_args: BoundArgs) -> Result<Arc<dyn FutureFactory>> {
    Ok(Arc::new(CondvarFutureFactory::new()))
}

#[linkme::distributed_slice(FUTURE_FACTORIES)]
static CONDVAR_FUTURE_FACTORY: TypeEntry<dyn FutureFactory> = TypeEntry {
    name: "condvar",
    description: "Blocking promises on a mutex and condition variable",
    constructors: &[Constructor {
        params: &[],
        build: build_condvar,
    }],
};
