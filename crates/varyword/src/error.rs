use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Locale '{locale}' is not allowed. Allowed locales are: {allowed}")]
    Locale { locale: String, allowed: String },

    #[error("Number of variations {0} does not fit in memory on this platform")]
    CountTooLarge(i64),
}

/// Failures raised while drawing a replacement word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("Word list for {0} is empty")]
    EmptyList(String),

    #[error("Word source failed: {0}")]
    Other(String),
}
