use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::ParseError;

#[derive(Error, Debug)]
pub enum SemiGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SemiGuardError {
    /// Short label for the error category, used in machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Parse { .. } => "Parse",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, SemiGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
