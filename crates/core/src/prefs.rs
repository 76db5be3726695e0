//! Key-value preference port.
//!
//! Import-history bookkeeping and language preference used to live in
//! browser storage; here they sit behind an explicit port so the API
//! can persist them in the content store while tests run against an
//! in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;

/// Well-known preference keys.
pub const KEY_IMPORT_HISTORY: &str = "import_history";
pub const KEY_LANGUAGE: &str = "language";

/// Simple string key-value persistence.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-memory store for tests and storage-less environments.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append a line to the newline-delimited import history value.
pub async fn append_import_history(
    store: &dyn PreferenceStore,
    line: &str,
) -> Result<(), CoreError> {
    let existing = store.get(KEY_IMPORT_HISTORY).await?.unwrap_or_default();
    let updated = if existing.is_empty() {
        line.to_string()
    } else {
        format!("{existing}\n{line}")
    };
    store.set(KEY_IMPORT_HISTORY, &updated).await
}
