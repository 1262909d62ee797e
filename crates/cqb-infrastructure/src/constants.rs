//! Infrastructure layer constants
//!
//! Registry defaults (the bound type names) live in `cqb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cqb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cqb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CQB";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "CQB_LOG";

/// Log file stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "cqb";
