#![deny(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod loader;
pub mod paths;

pub use crate::dataset::{Dataset, RejectedRow};
pub use crate::error::DatasetLoadError;
pub use crate::loader::{load_dataset, load_default_dataset, parse_dataset};
pub use crate::paths::{DATASET_ENV_VAR, DEFAULT_DATASET_FILE, default_dataset_path};
