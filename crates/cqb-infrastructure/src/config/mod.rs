//! Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [bindings]
//! cluster_manager = "in-memory"
//! poco_data_mapper_factory = "poco"
//! ```
//!
//! Sources merge in order: defaults, TOML file, `CQB_`-prefixed environment
//! variables (`CQB_BINDINGS__FUTURE=condvar`).

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, BindingsConfig, LoggingConfig};
