use async_trait::async_trait;

use crate::ids::{SubjectId, TaskId};
use crate::ports::errors::RequestError;
use crate::task::{Subject, Task};

#[async_trait]
pub trait TaskPort: Send + Sync {
    async fn get_task(&self, task_id: &TaskId) -> Result<Task, RequestError>;
}

#[async_trait]
pub trait SubjectPort: Send + Sync {
    async fn get_subject(&self, subject_id: &SubjectId) -> Result<Subject, RequestError>;
}
