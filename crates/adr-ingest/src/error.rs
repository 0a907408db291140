use std::path::PathBuf;

/// Fatal failure loading the reference dataset. No lookup may be served
/// after this is returned.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("reference dataset not found: {path}")]
    Missing { path: PathBuf },

    #[error("failed to read reference dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("reference dataset {path} has no {column:?} column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("reference dataset {path} contains no drug records")]
    Empty { path: PathBuf },
}

impl DatasetLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::Missing { path };
        }
        Self::Io { path, source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
