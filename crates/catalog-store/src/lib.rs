// Local key-value storage for the catalog
// One key holds the whole product list as a JSON array

mod db;
mod error;
pub mod list;
mod schema;
mod storage;

// Public API
pub use db::KeyValueDb;
pub use error::{Error, Result};
pub use storage::{
    DEFAULT_STORAGE_KEY, KvProductStorage, MemoryStorage, ProductStorage, decode_products,
    encode_products,
};
