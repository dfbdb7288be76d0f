//! Helpers for the JSON-encoded "selected id" side channel.

use ts_core::ports::{SelectionKey, SelectionStoreError, SelectionStorePort};

/// Reads and decodes a selected id. `None` when nothing was selected.
pub async fn read_selected_id<T>(
    store: &dyn SelectionStorePort,
    key: SelectionKey,
) -> Result<Option<T>, SelectionStoreError>
where
    T: From<String>,
{
    let Some(raw) = store.get(key.as_str()).await? else {
        return Ok(None);
    };
    let id: String = serde_json::from_str(&raw).map_err(|e| {
        SelectionStoreError::Corrupt(format!("{}: {e}", key.as_str()))
    })?;
    Ok(Some(T::from(id)))
}

/// Encodes and stores a selected id.
pub async fn write_selected_id(
    store: &dyn SelectionStorePort,
    key: SelectionKey,
    id: &str,
) -> Result<(), SelectionStoreError> {
    let encoded =
        serde_json::to_string(id).map_err(|e| SelectionStoreError::Corrupt(e.to_string()))?;
    store.set(key.as_str(), &encoded).await
}
