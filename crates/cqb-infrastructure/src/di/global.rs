//! Process-wide service context
//!
//! Backs the free accessor functions of the `cqb` crate. A context can be
//! installed once at start of process; otherwise the first access builds
//! one with the default bindings.

use cqb_domain::error::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

use super::context::ServiceContext;

static GLOBAL: OnceCell<ServiceContext> = OnceCell::new();

/// Install `context` as the process-wide context
///
/// Fails if a context is already in place, including one created
/// implicitly by an earlier [`global`] call.
pub fn install(context: ServiceContext) -> Result<&'static ServiceContext> {
    GLOBAL
        .set(context)
        .map_err(|_| Error::configuration("a process-wide service context is already installed"))?;
    Ok(global())
}

/// The process-wide context
pub fn global() -> &'static ServiceContext {
    GLOBAL.get_or_init(|| {
        debug!("no service context installed, using default bindings");
        ServiceContext::default()
    })
}

/// Whether a process-wide context exists yet
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}
