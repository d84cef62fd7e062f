//! Key-value persistence port
//!
//! Repositories persist through [`KeyValueStore`], a string-in/string-out
//! store keyed by record name. [`JsonFileStore`] keeps one `<key>.json` file
//! per key; [`MemoryStore`] keeps everything in a map and is used in tests.
//!
//! [`load_json`] never fails: a missing key and a malformed value both come
//! back as `None`, so corrupted data degrades to an empty state instead of
//! taking the application down. List values go through [`load_records`],
//! which decodes each element on its own and keeps the unreadable ones
//! verbatim so that [`save_records`] writes them back untouched.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::SpendError;

use super::file_io::{read_text, write_text_atomic};

/// Key of the expense list
pub const EXPENSES_KEY: &str = "expenses";
/// Key of the monthly budget record
pub const MONTHLY_BUDGET_KEY: &str = "monthlyBudget";
/// Key of the category budget list
pub const CATEGORY_BUDGETS_KEY: &str = "categoryBudgets";

/// Storage port shared by the repositories
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, SpendError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), SpendError>;
}

/// Shared handle to a store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Load and decode the value under `key`, treating any problem as absence
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value");
            return None;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value; treating as empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is malformed; treating as empty");
            None
        }
    }
}

/// Encode `value` and write it under `key`
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), SpendError> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|e| SpendError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "saved");
    Ok(())
}

/// Elements of a stored list, split into decoded records and the raw
/// elements that failed to decode
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecords<T> {
    pub records: Vec<T>,
    pub unreadable: Vec<Value>,
}

impl<T> Default for StoredRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            unreadable: Vec::new(),
        }
    }
}

/// Load the list under `key`, decoding each element independently
///
/// A value that is not a list at all loads as empty, like [`load_json`].
pub fn load_records<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoredRecords<T> {
    let mut loaded = StoredRecords::default();

    for value in load_json::<Vec<Value>>(store, key).unwrap_or_default() {
        match T::deserialize(&value) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                tracing::warn!(key, error = %e, "keeping unreadable record as stored");
                loaded.unreadable.push(value);
            }
        }
    }

    loaded
}

/// Write `records` under `key`, followed by the `unreadable` elements as
/// they were loaded
pub fn save_records<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[T],
    unreadable: &[Value],
) -> Result<(), SpendError> {
    let mut values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SpendError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    values.extend(unreadable.iter().cloned());
    save_json(store, key, &values)
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SpendError> {
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SpendError> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SpendError> {
        let values = self
            .values
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SpendError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
