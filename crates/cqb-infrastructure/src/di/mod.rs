//! Activation and caching
//!
//! ```text
//! accessor ──▶ ServiceCache ──miss──▶ TypeActivator ──▶ ArgumentMatcher
//!                  │ (once)               │ resolve          │ bind slots
//!                  ▼                      ▼                  ▼
//!           Arc<dyn Port>         TypeEntry (slice)      BoundArgs ──▶ build
//!
//! create_serializer ──▶ SerializerCache ──miss (locked)──▶ TypeActivator
//! ```
//!
//! [`ServiceContext`] owns one [`ServiceCache`] per capability and one
//! [`SerializerCache`]; [`global`] holds the process-wide context.

pub mod activator;
pub mod context;
pub mod global;
pub mod matcher;
pub mod serializer_cache;
pub mod service_cache;

pub use activator::TypeActivator;
pub use context::ServiceContext;
pub use global::{global, install, is_installed};
pub use matcher::ArgumentMatcher;
pub use serializer_cache::{SerializerCache, SerializerKey};
pub use service_cache::ServiceCache;
