//! Value Objects
//!
//! Immutable values passed between the registry and the capabilities it
//! hands out.

/// Capability markers and their default bindings
pub mod capability;
/// Column metadata consumed by data mappers
pub mod column;
/// Commands produced by command factories
pub mod command;
/// Type descriptors targeted by serializers
pub mod type_descriptor;

pub use capability::Capability;
pub use column::ColumnSpec;
pub use command::{Command, CommandKind};
pub use type_descriptor::TypeDescriptor;
