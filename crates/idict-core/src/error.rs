use std::path::PathBuf;

/// The source document could not be read
#[derive(Debug, thiserror::Error)]
pub enum ParseInputError {
    #[error("failed to read source document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The serialized entry dataset could not be read or decoded
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed entries could not be written out
#[derive(Debug, thiserror::Error)]
pub enum DatasetWriteError {
    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write dataset {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
