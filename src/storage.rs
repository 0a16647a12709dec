//! Storage

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::cart::CartLine;

/// Errors raised by a [`CartStore`] or the snapshot codec.
///
/// Store failures are never fatal to a cart operation: the manager logs
/// them and keeps the in-memory state as the source of truth for the
/// session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrapped filesystem error.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wrapped snapshot encode/decode error.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

/// Durable string-blob storage for the cart snapshot.
///
/// The storefront persists the whole line sequence as one opaque blob under
/// a single implicit key; there is no versioning or migration scheme. A
/// blob the codec cannot decode is treated as absent by the caller.
pub trait CartStore {
    /// Durably store the given snapshot blob, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the blob could not be written.
    fn save(&mut self, blob: &str) -> Result<(), StoreError>;

    /// Retrieve the previously stored snapshot blob, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage medium could not be read.
    /// A missing entry is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<String>, StoreError>;
}

/// Encode a line sequence as a snapshot blob.
///
/// The layout is a JSON array of line objects, each carrying the full
/// product fields plus `quantity`.
///
/// # Errors
///
/// Returns a [`StoreError::Codec`] if serialization fails.
pub fn encode(lines: &[CartLine]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(lines)?)
}

/// Decode a snapshot blob back into a line sequence.
///
/// # Errors
///
/// Returns a [`StoreError::Codec`] if the blob is malformed. Callers
/// restoring a cart treat that as an absent snapshot rather than a fault.
pub fn decode(blob: &str) -> Result<Vec<CartLine>, StoreError> {
    Ok(serde_json::from_str(blob)?)
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl CartStore for MemoryStore {
    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_string());

        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.clone())
    }
}

/// Single-file store holding the snapshot blob on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; a missing file loads as an
    /// absent snapshot.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        fs::write(&self.path, blob)?;

        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Io(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        cart::Cart,
        fixtures,
        products::{Product, ProductId},
    };

    fn product(id: u32) -> Product {
        fixtures::catalog()
            .get(ProductId::new(id))
            .cloned()
            .unwrap_or_else(|| panic!("fixture catalog has no product {id}"))
    }

    #[test]
    fn round_trip_preserves_ids_quantities_and_order() -> TestResult {
        let mut cart = Cart::new();
        cart.add(&product(2));
        cart.add(&product(4));
        cart.add(&product(2));

        let blob = encode(cart.lines())?;
        let restored = Cart::from_lines(decode(&blob)?);

        assert_eq!(restored.lines(), cart.lines());

        Ok(())
    }

    #[test]
    fn decode_rejects_malformed_blobs() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"quantity\":1}").is_err());
    }

    #[test]
    fn memory_store_returns_the_saved_blob() -> TestResult {
        let mut store = MemoryStore::new();
        assert_eq!(store.load()?, None);

        store.save("[]")?;

        assert_eq!(store.load()?, Some("[]".to_string()));

        Ok(())
    }

    #[test]
    fn file_store_loads_absent_for_missing_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = JsonFileStore::new(dir.path().join("cart.json"));

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn file_store_round_trips_the_blob() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = JsonFileStore::new(dir.path().join("cart.json"));

        store.save("[{\"id\":1}]")?;

        assert_eq!(store.load()?, Some("[{\"id\":1}]".to_string()));

        Ok(())
    }

    #[test]
    fn snapshot_lines_carry_the_render_fields() -> TestResult {
        let mut cart = Cart::new();
        cart.add(&product(3));

        let blob = encode(cart.lines())?;
        let value: serde_json::Value = serde_json::from_str(&blob)?;
        let Some(line) = value.get(0) else {
            panic!("snapshot should contain one line");
        };

        for field in ["id", "quantity", "name", "price", "unit", "emoji"] {
            assert!(line.get(field).is_some(), "snapshot line missing {field}");
        }

        Ok(())
    }
}
