use thiserror::Error;

/// Top-level error type for the trackdrive kernel.
#[derive(Debug, Error)]
pub enum TrackdriveError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building a centerline from path commands.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("malformed path input: no usable segment among {commands} command(s)")]
    MalformedPathInput { commands: usize },
}

/// Errors raised at the configuration boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("corridor width must be positive, got {width}")]
    NonPositiveWidth { width: f64 },
}

/// Convenience type alias for results using [`TrackdriveError`].
pub type Result<T> = std::result::Result<T, TrackdriveError>;
