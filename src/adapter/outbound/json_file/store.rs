//! Product list stored as a flat JSON array.
//!
//! The file holds nothing but `["mjölk","bröd"]`. A missing file means no
//! list has been created yet.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::ProductList;
use crate::error::Result;
use crate::port::ProductStore;

/// Default file name, relative to the working directory.
pub const DEFAULT_PRODUCTS_FILE: &str = "products.json";

/// [`ProductStore`] writing a JSON array to a single file.
///
/// Writes go through a temp file and rename. The mutex only serializes
/// access within this process.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, json: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

impl ProductStore for JsonFileStore {
    fn load(&self) -> Result<Option<ProductList>> {
        let _guard = self.lock.lock();

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let items: Vec<String> = serde_json::from_str(&raw)?;
        Ok(Some(ProductList::from_stored(items)))
    }

    fn save(&self, list: &ProductList) -> Result<()> {
        let _guard = self.lock.lock();

        let json = serde_json::to_string(list.items())?;
        self.write_atomic(&json)?;
        debug!(path = %self.path.display(), count = list.len(), "Saved product list");
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        let _guard = self.lock.lock();

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
