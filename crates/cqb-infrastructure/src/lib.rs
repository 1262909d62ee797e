//! # Infrastructure Layer
//!
//! Construction, caching and the process-wide plumbing around them.
//!
//! ### Activation & Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Argument matching, type activation, service and serializer caches, `ServiceContext` |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based loading of bindings and logging settings |
//! | [`constants`] | File names, env prefixes and logging defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use error_ext::ErrorContext;
