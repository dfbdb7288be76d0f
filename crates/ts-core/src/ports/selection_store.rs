use async_trait::async_trait;

use crate::ports::errors::SelectionStoreError;

/// Keys of the "selected item" side channel screens use to deep-link into
/// detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    School,
    Student,
    Task,
}

impl SelectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKey::School => "selectedSchoolId",
            SelectionKey::Student => "selectedStudentId",
            SelectionKey::Task => "selectedTaskId",
        }
    }
}

/// String key/value store for the selected ids. Values are JSON-encoded.
#[async_trait]
pub trait SelectionStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError>;
}
