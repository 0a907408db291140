//! Reference dataset path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "ADR_DATASET_PATH";

/// File name of the bundled reference dataset.
pub const DEFAULT_DATASET_FILE: &str = "adr_reference.csv";

/// Get the reference dataset path.
///
/// Resolution order:
/// 1. `ADR_DATASET_PATH` environment variable
/// 2. `data/adr_reference.csv` relative to the workspace root
pub fn default_dataset_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATASET_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(DEFAULT_DATASET_FILE)
}
