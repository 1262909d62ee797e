//! # cqb Domain Layer
//!
//! Core types shared by every other cqb crate:
//!
//! - [`error`] - the error taxonomy and `Result` alias
//! - [`ports`] - capability contracts the registry hands out as singletons
//! - [`value_objects`] - capabilities, type descriptors, commands and columns
//! - [`constants`] - default bindings and registry-wide names
//!
//! The domain crate has no knowledge of how implementations are registered,
//! matched or cached; that lives in `cqb-application` and
//! `cqb-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Capability, ColumnSpec, Command, CommandKind, TypeDescriptor};
