//! Error handling types
//!
//! Errors are `Clone` so a cached failure can be handed back verbatim on
//! every later access. Foreign sources are therefore shared through `Arc`
//! instead of boxed.

use std::sync::Arc;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Shared, type-erased error source
pub type SharedSource = Arc<dyn std::error::Error + Send + Sync>;

/// Main error type for cqb
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The bound concrete type name is not registered for its kind
    #[error("Type not found: no {kind} registered under '{name}'")]
    TypeNotFound {
        /// Registry kind that was searched
        kind: String,
        /// Name that failed to resolve
        name: String,
    },

    /// The target type does not expose exactly one constructor
    #[error(
        "Constructor ambiguous: '{type_name}' declares {count} constructors, exactly one is required"
    )]
    ConstructorAmbiguous {
        /// Concrete type being constructed
        type_name: String,
        /// Number of constructors declared
        count: usize,
    },

    /// Two slots of the sole constructor declare the same type
    #[error("Signature ambiguous: '{type_name}' declares more than one slot of type {slot_type}")]
    SignatureAmbiguous {
        /// Concrete type being constructed
        type_name: String,
        /// Type shared by the clashing slots
        slot_type: String,
    },

    /// No compatible, available candidate exists for a required slot
    #[error(
        "Argument unmatched: '{type_name}' slot '{slot}' expects {expected} and no compatible candidate is available"
    )]
    ArgumentUnmatched {
        /// Concrete type being constructed
        type_name: String,
        /// Slot that could not be bound
        slot: String,
        /// Declared type of the slot
        expected: String,
    },

    /// The constructor itself failed
    #[error("Activation failed for '{type_name}': {message}")]
    ActivationFailure {
        /// Concrete type being constructed
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<SharedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<SharedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Value could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<SharedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registry error creation methods
impl Error {
    /// Create a type-not-found error
    pub fn type_not_found<K: Into<String>, N: Into<String>>(kind: K, name: N) -> Self {
        Self::TypeNotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a constructor-ambiguous error
    pub fn constructor_ambiguous<S: Into<String>>(type_name: S, count: usize) -> Self {
        Self::ConstructorAmbiguous {
            type_name: type_name.into(),
            count,
        }
    }

    /// Create a signature-ambiguous error
    pub fn signature_ambiguous<S: Into<String>, T: Into<String>>(type_name: S, slot_type: T) -> Self {
        Self::SignatureAmbiguous {
            type_name: type_name.into(),
            slot_type: slot_type.into(),
        }
    }

    /// Create an argument-unmatched error
    pub fn argument_unmatched<S, L, E>(type_name: S, slot: L, expected: E) -> Self
    where
        S: Into<String>,
        L: Into<String>,
        E: Into<String>,
    {
        Self::ArgumentUnmatched {
            type_name: type_name.into(),
            slot: slot.into(),
            expected: expected.into(),
        }
    }

    /// Create an activation failure
    pub fn activation<S: Into<String>, M: Into<String>>(type_name: S, message: M) -> Self {
        Self::ActivationFailure {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an activation failure with source
    pub fn activation_with_source<S, E>(type_name: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ActivationFailure {
            type_name: type_name.into(),
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }
}

// General error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error was raised while resolving or constructing a type
    pub fn is_construction_failure(&self) -> bool {
        matches!(
            self,
            Self::TypeNotFound { .. }
                | Self::ConstructorAmbiguous { .. }
                | Self::SignatureAmbiguous { .. }
                | Self::ArgumentUnmatched { .. }
                | Self::ActivationFailure { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            message: source.to_string(),
        }
    }
}
