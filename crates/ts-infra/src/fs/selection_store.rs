//! File-based selection store
//!
//! Persists the "selected id" side channel as a flat JSON object in the
//! application data directory. Values are stored as the caller hands them
//! over (already JSON-encoded).

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use ts_core::ports::{SelectionStoreError, SelectionStorePort};

pub const DEFAULT_SELECTION_FILE: &str = "selection.json";

pub struct FileSelectionStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSelectionStore {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_SELECTION_FILE))
    }

    async fn ensure_parent_dir(&self) -> Result<(), SelectionStoreError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SelectionStoreError::Io(format!("Failed to create data dir: {e}")))?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, SelectionStoreError> {
        let content = match fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(SelectionStoreError::Io(format!(
                    "Failed to read selection file: {e}"
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| SelectionStoreError::Corrupt(format!("Failed to parse selection file: {e}")))
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SelectionStoreError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| SelectionStoreError::Corrupt(format!("Failed to serialize selection: {e}")))?;

        let mut file = fs::File::create(&self.file_path)
            .await
            .map_err(|e| SelectionStoreError::Io(format!("Failed to create selection file: {e}")))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| SelectionStoreError::Io(format!("Failed to write selection file: {e}")))?;
        file.sync_all()
            .await
            .map_err(|e| SelectionStoreError::Io(format!("Failed to sync selection file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl SelectionStorePort for FileSelectionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }
}
