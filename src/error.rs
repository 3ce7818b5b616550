use thiserror::Error;

/// Errors raised while turning raw detector output into a `HandSample`
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("Expected {expected} landmarks, got {found}")]
    WrongLandmarkCount { expected: usize, found: usize },

    #[error("Landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Errors that can occur while loading engine settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
