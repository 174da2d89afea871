//! Error types for icon indexing and lookup.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::Variation;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Icon directory not found: {path}: {reason}")]
    DirectoryNotFound { path: PathBuf, reason: String },

    #[error("Icon not found: {name}{}", variation.map(|v| format!(" ({v})")).unwrap_or_default())]
    IconNotFound {
        name: String,
        variation: Option<Variation>,
    },

    #[error("Failed to read icon '{name}' at {path}: {source}")]
    IconRead {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndexError {
    /// Whether this error should reach an external caller as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, IndexError::IconNotFound { .. })
    }
}

pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_variation() {
        let err = IndexError::IconNotFound {
            name: "aws".to_string(),
            variation: Some(Variation::Mono),
        };
        assert_eq!(err.to_string(), "Icon not found: aws (mono)");
        assert!(err.is_not_found());

        let err = IndexError::IconNotFound {
            name: "aws".to_string(),
            variation: None,
        };
        assert_eq!(err.to_string(), "Icon not found: aws");
    }
}
