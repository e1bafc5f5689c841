//! Error types for spectrogram construction and configuration.

/// Errors raised while validating a [`SpectrogramConfig`](crate::SpectrogramConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Highlight threshold must be in 0..100 percent, got {0}")]
    InvalidThreshold(f32),
    #[error("Upper index cap must be at least 1")]
    InvalidUpperIndexCap,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while building or resizing a spectrogram.
#[derive(Debug, thiserror::Error)]
pub enum SpectrogramError {
    #[error("No host container with id '{0}'")]
    MissingContainer(String),
    #[error("Host container '{id}' has zero width")]
    EmptyContainer { id: String },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
