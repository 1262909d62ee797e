//! Logging configuration

use cqb_infrastructure::config::LoggingConfig;
use cqb_infrastructure::constants::DEFAULT_LOG_LEVEL;
use cqb_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_default_level_is_valid() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert_eq!(parse_log_level(&config.level).unwrap(), Level::INFO);
}

#[test]
fn test_all_levels_parse() {
    for (name, level) in [
        ("trace", Level::TRACE),
        ("debug", Level::DEBUG),
        ("info", Level::INFO),
        ("warn", Level::WARN),
        ("error", Level::ERROR),
    ] {
        assert_eq!(parse_log_level(name).unwrap(), level);
    }
}
