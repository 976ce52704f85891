use thiserror::Error;

/// Result type alias for Cookbook operations
pub type Result<T> = std::result::Result<T, CookbookError>;

/// Errors that can occur during Cookbook operations
#[derive(Error, Debug)]
pub enum CookbookError {
    /// The request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, TLS, read)
    #[error("Unable to complete request: {0}")]
    UnableToComplete(#[source] reqwest::Error),

    /// Server answered with something other than HTTP 200
    #[error("Invalid response from server (HTTP {status})")]
    InvalidResponse { status: u16 },

    /// Empty body or body that does not match the expected schema
    #[error("Invalid data received from server: {0}")]
    InvalidData(String),

    /// Lookup returned no meal for the id
    #[error("Meal not found: {0}")]
    MealNotFound(String),

    /// Image could not be fetched or decoded
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl CookbookError {
    /// Create an invalid response error from an HTTP status code
    pub fn invalid_response(status: u16) -> Self {
        Self::InvalidResponse { status }
    }

    /// Create an invalid data error with a description of what was wrong
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Config(_) | Self::InvalidUrl(_) => 2,
            Self::UnableToComplete(_) => 3,
            Self::InvalidResponse { .. } => 4,
            Self::InvalidData(_) => 5,
            Self::ImageUnavailable(_) | Self::MealNotFound(_) => 6,
            _ => 1,
        }
    }
}
