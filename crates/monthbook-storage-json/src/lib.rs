//! monthbook-storage-json
//!
//! JSON persistence for the period store: the whole store is one blob on
//! disk, written atomically by staging to a temporary file and renaming
//! over the target. Loads are lenient by contract: a missing or
//! unparseable file is "no prior data" and yields an empty store.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use monthbook_core::{CoreError, SnapshotStorage};
use monthbook_domain::Store;
use thiserror::Error;

const STORE_FILE: &str = "store.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        CoreError::Storage(err.to_string())
    }
}

/// Stores the whole period store as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Places the store file inside `base`, creating the directory chain.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(STORE_FILE)))
    }

    /// Default location under the platform data directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir()
            .ok_or_else(|| {
                StorageError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no platform data directory available",
                ))
            })?
            .join("monthbook");
        Self::with_base_dir(base)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for JsonStorage {
    fn load(&self) -> Result<Store, CoreError> {
        if !self.path.exists() {
            return Ok(Store::new());
        }
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("could not read {}: {err}; starting empty", self.path.display());
                return Ok(Store::new());
            }
        };
        match serde_json::from_str(&data) {
            Ok(store) => Ok(store),
            Err(err) => {
                tracing::warn!(
                    "could not parse {}: {err}; starting empty",
                    self.path.display()
                );
                Ok(Store::new())
            }
        }
    }

    fn save(&self, store: &Store) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(store)
            .map_err(|err| StorageError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(StorageError::from)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
