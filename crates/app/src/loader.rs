//! Sample-data loader.
//!
//! Reads `products.json` and `customers.json` from a data directory so
//! the demo starts with a populated catalog. A missing directory, a
//! missing file, and malformed JSON are distinct failures; nothing here
//! touches the stores, the service layer owns that step.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::{CustomerDto, ProductDto};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads sample-data files from one directory.
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
}

impl DataLoader {
    /// Fails immediately when the directory does not exist, so a wrong
    /// path surfaces before the first file read.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let data_dir = data_dir.into();
        if !data_dir.is_dir() {
            return Err(LoadError::MissingDir(data_dir));
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_products(&self) -> Result<Vec<ProductDto>, LoadError> {
        self.load_json("products.json")
    }

    pub fn load_customers(&self) -> Result<Vec<CustomerDto>, LoadError> {
        self.load_json("customers.json")
    }

    fn load_json<T: DeserializeOwned>(&self, filename: &str) -> Result<T, LoadError> {
        let path = self.data_dir.join(filename);
        if !path.is_file() {
            return Err(LoadError::MissingFile(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Json { path, source })
    }
}

/// Data directory for the demo: `SHOPLITE_DATA_DIR` when set, the
/// crate's bundled `data/` otherwise.
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("SHOPLITE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")))
}
