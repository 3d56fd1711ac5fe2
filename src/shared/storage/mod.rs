//! Key-value storage port.
//!
//! Stands in for browser-local storage: string keys, string values,
//! synchronous access. Favorites and the auth session both persist through it.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::shared::errors::AppResult;

pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}
