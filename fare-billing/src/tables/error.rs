//! Table I/O error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when reading an input table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV, missing header, or missing column
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field held a value that failed validation
    #[error("line {line}: {source}")]
    Row { line: u64, source: DomainError },
}

/// Errors that can occur when writing the billing table.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Output file could not be created
    #[error("failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialising or flushing a row failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::Io {
            path: PathBuf::from("zones.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to open zones.csv: not found");

        let err = LoadError::Row {
            line: 3,
            source: DomainError::InvalidTimestamp {
                value: "noon".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "line 3: invalid timestamp \"noon\": expected YYYY-MM-DDTHH:MM:SS"
        );

        let err = WriteError::Io {
            path: PathBuf::from("out/output.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to create out/output.csv: denied");
    }
}
