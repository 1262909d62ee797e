//! Future Ports
//!
//! A promise is completed once by a producer and awaited by any number of
//! consumers.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result};

/// A single-assignment result slot
pub trait Promise: Send + Sync {
    /// Complete the promise. Returns `false` if it was already completed.
    fn complete(&self, outcome: Result<Value>) -> bool;

    /// Whether an outcome has been stored
    fn is_completed(&self) -> bool;

    /// Block until the promise completes and return its outcome
    fn wait(&self) -> Result<Value>;
}

/// Creates promises
pub trait FutureFactory: Send + Sync {
    /// Name of the concrete implementation
    fn provider_name(&self) -> &str;

    /// A new, pending promise
    fn create(&self) -> Arc<dyn Promise>;

    /// A promise already completed with `value`
    fn completed(&self, value: Value) -> Arc<dyn Promise> {
        let promise = self.create();
        promise.complete(Ok(value));
        promise
    }

    /// A promise already failed with `error`
    fn failed(&self, error: Error) -> Arc<dyn Promise> {
        let promise = self.create();
        promise.complete(Err(error));
        promise
    }
}
