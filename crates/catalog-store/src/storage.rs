use catalog_types::Product;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::{Error, KeyValueDb, Result};

/// Key the product list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "demo_products";

/// Persistence seam for the catalog.
///
/// Storage is a write-through mirror of the in-memory list: it is read once at
/// startup and overwritten in full on every mutation.
pub trait ProductStorage {
    /// Read the persisted list.
    ///
    /// Never fails: a missing, corrupt, or non-list value is an empty catalog.
    fn load(&self) -> Vec<Product>;

    /// Replace the persisted list with `products`.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Remove the persisted list entirely.
    fn clear(&mut self) -> Result<()>;
}

/// Serialize a product list to its stored text form.
pub fn encode_products(products: &[Product]) -> Result<String> {
    Ok(serde_json::to_string(products)?)
}

/// Parse stored text into a product list.
///
/// Fails when the text is not JSON or not an array. Missing fields take their
/// defaults; only elements that cannot be a product at all (non-objects,
/// wrongly typed fields) are dropped.
pub fn decode_products(raw: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        return Err(Error::NotAList);
    };

    let mut products = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Product>(item) {
            Ok(product) => products.push(product),
            Err(err) => warn!(index, error = %err, "skipping unreadable product record"),
        }
    }
    Ok(products)
}

fn products_or_empty(raw: Option<String>, key: &str) -> Vec<Product> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        debug!(key, "no stored products");
        return Vec::new();
    };

    match decode_products(&raw) {
        Ok(products) => {
            debug!(key, count = products.len(), "loaded products");
            products
        }
        Err(err) => {
            warn!(key, error = %err, "ignoring unreadable stored products");
            Vec::new()
        }
    }
}

/// Product storage over the SQLite key-value table.
pub struct KvProductStorage {
    db: KeyValueDb,
    key: String,
}

impl KvProductStorage {
    pub fn new(db: KeyValueDb, key: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
        }
    }

    pub fn open(db_path: &Path, key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(KeyValueDb::open(db_path)?, key))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn db(&self) -> &KeyValueDb {
        &self.db
    }
}

impl ProductStorage for KvProductStorage {
    fn load(&self) -> Vec<Product> {
        match self.db.get_item(&self.key) {
            Ok(raw) => products_or_empty(raw, &self.key),
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read stored products");
                Vec::new()
            }
        }
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let raw = encode_products(products)?;
        self.db.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = products.len(), "saved products");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.db.remove_item(&self.key)
    }
}

/// In-memory storage holding the same serialized text the real store would.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary stored text (possibly corrupt).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent `save`/`clear` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Io(std::io::Error::other("storage quota exceeded")));
        }
        Ok(())
    }
}

impl ProductStorage for MemoryStorage {
    fn load(&self) -> Vec<Product> {
        products_or_empty(self.raw.clone(), "memory")
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.check_writable()?;
        self.raw = Some(encode_products(products)?);
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.check_writable()?;
        self.raw = None;
        self.writes += 1;
        Ok(())
    }
}
