use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Marker attribute not found in the type universe: {name} (maybe disappeared?)")]
    MissingMarker { name: String },

    #[error("Malformed input '{field}' on {owner}: {field_type} is not instantiated with exactly one generic argument")]
    MalformedInput {
        owner: String,
        field: String,
        field_type: String,
    },

    #[error("Metadata source does not exist: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingMarker { .. } => 2,
            Self::MalformedInput { .. } => 3,
            Self::InvalidArgument { .. } => 4,
            Self::SourceNotFound { .. } => 5,
            Self::ConfigParse { .. } | Self::ConfigKeyNotFound { .. } | Self::TomlSer(_) => 6,
            _ => 1,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
