//! Application Layer - cqb
//!
//! Defines how concrete types are described to the registry and where they
//! are registered.
//!
//! ## Ports
//!
//! - `ports::activation` - constructor slots, candidates and bound arguments
//! - `ports::registry` - linkme distributed slices, one per contract kind,
//!   plus name-based lookup over them
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cqb-domain`: capability ports, value objects and errors
//! - `linkme`: compile-time registration of concrete types

pub mod ports;

pub use ports::*;
