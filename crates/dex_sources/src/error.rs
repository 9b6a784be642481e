//! Extractor errors.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout file {}: {source}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = SourceError::Io {
            path: PathBuf::from("c/src/Base_Stats.c"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("c/src/Base_Stats.c"));
    }
}
