//! Registry Ports
//!
//! ## Organization
//!
//! - **activation** - constructor descriptions and the argument model
//! - **registry/** - auto-registration slices for concrete types

/// Constructor descriptions, candidates and bound arguments
pub mod activation;
/// Type registry for name-based resolution
pub mod registry;

pub use activation::{BoundArgs, Candidate, CandidatePool, Constructor, ParamSlot, TypeEntry};
pub use registry::{
    AvailableTypes, DecoderProvider, EncoderProvider, list_available_types, list_entries,
    resolve_entry, validate_catalog, validate_registry,
};
