//! Task details screen: the selected task and the name of its subject.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info_span, warn, Instrument};
use ts_core::ports::{
    RequestError, SelectionKey, SelectionStoreError, SelectionStorePort, SubjectPort, TaskPort,
};
use ts_core::task::{Task, SUBJECT_NAME_PLACEHOLDER};
use ts_core::TaskId;

use crate::usecases::selection::read_selected_id;

#[derive(Debug, thiserror::Error)]
pub enum TaskDetailsError {
    #[error("no task selected")]
    NoSelection,
    #[error("selection store error: {0}")]
    Selection(#[from] SelectionStoreError),
    #[error("fetch task failed: {0}")]
    FetchTask(#[source] RequestError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetailsView {
    pub task: Task,
    pub subject_name: String,
}

impl TaskDetailsView {
    /// The "mark as concluded" action is offered only for open tasks.
    pub fn can_mark_concluded(&self) -> bool {
        !self.task.concluded
    }
}

pub struct LoadTaskDetails {
    selection: Arc<dyn SelectionStorePort>,
    tasks: Arc<dyn TaskPort>,
    subjects: Arc<dyn SubjectPort>,
}

impl LoadTaskDetails {
    pub fn new(
        selection: Arc<dyn SelectionStorePort>,
        tasks: Arc<dyn TaskPort>,
        subjects: Arc<dyn SubjectPort>,
    ) -> Self {
        Self {
            selection,
            tasks,
            subjects,
        }
    }

    pub async fn execute(&self) -> Result<TaskDetailsView, TaskDetailsError> {
        let task_id: TaskId = read_selected_id(self.selection.as_ref(), SelectionKey::Task)
            .await?
            .ok_or(TaskDetailsError::NoSelection)?;

        let span = info_span!("usecase.task_details.load", task_id = %task_id);
        async {
            let task = self.tasks.get_task(&task_id).await.map_err(|err| {
                error!(error = %err, "failed to fetch task");
                TaskDetailsError::FetchTask(err)
            })?;

            let subject_name = match &task.subject_id {
                Some(subject_id) => match self.subjects.get_subject(subject_id).await {
                    Ok(subject) => subject.name,
                    Err(err) => {
                        warn!(subject_id = %subject_id, error = %err, "failed to fetch subject");
                        SUBJECT_NAME_PLACEHOLDER.to_string()
                    }
                },
                None => SUBJECT_NAME_PLACEHOLDER.to_string(),
            };

            Ok(TaskDetailsView { task, subject_name })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::mock_ports::{MockSelection, MockSubjects, MockTasks};
    use chrono::{TimeZone, Utc};
    use ts_core::task::Subject;
    use ts_core::SubjectId;

    fn task(subject: Option<&str>, concluded: bool) -> Task {
        Task {
            id: TaskId::new("t1"),
            student_id: None,
            subject_id: subject.map(SubjectId::new),
            description: "Exercícios de frações".into(),
            deadline_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            images: vec![],
            concluded,
        }
    }

    fn selected_task() -> MockSelection {
        let mut selection = MockSelection::new();
        selection
            .expect_get()
            .withf(|key| key.to_string() == "selectedTaskId")
            .returning(|_| Ok(Some("\"t1\"".to_string())));
        selection
    }

    #[tokio::test]
    async fn resolves_subject_name() {
        let mut tasks = MockTasks::new();
        tasks
            .expect_get_task()
            .withf(|id| id.as_str() == "t1")
            .returning(|_| Ok(task(Some("math"), false)));
        let mut subjects = MockSubjects::new();
        subjects.expect_get_subject().returning(|id| {
            Ok(Subject {
                id: id.clone(),
                name: "Matemática".into(),
            })
        });

        let uc = LoadTaskDetails::new(Arc::new(selected_task()), Arc::new(tasks), Arc::new(subjects));
        let view = uc.execute().await.unwrap();

        assert_eq!(view.subject_name, "Matemática");
        assert!(view.can_mark_concluded());
    }

    #[tokio::test]
    async fn keeps_placeholder_when_subject_lookup_fails() {
        let mut tasks = MockTasks::new();
        tasks
            .expect_get_task()
            .returning(|_| Ok(task(Some("math"), true)));
        let mut subjects = MockSubjects::new();
        subjects
            .expect_get_subject()
            .returning(|_| Err(RequestError::NotFound));

        let uc = LoadTaskDetails::new(Arc::new(selected_task()), Arc::new(tasks), Arc::new(subjects));
        let view = uc.execute().await.unwrap();

        assert_eq!(view.subject_name, SUBJECT_NAME_PLACEHOLDER);
        assert!(!view.can_mark_concluded());
    }

    #[tokio::test]
    async fn task_without_subject_skips_lookup() {
        let mut tasks = MockTasks::new();
        tasks.expect_get_task().returning(|_| Ok(task(None, false)));
        let mut subjects = MockSubjects::new();
        subjects.expect_get_subject().never();

        let uc = LoadTaskDetails::new(Arc::new(selected_task()), Arc::new(tasks), Arc::new(subjects));
        let view = uc.execute().await.unwrap();

        assert_eq!(view.subject_name, "...");
    }

    #[tokio::test]
    async fn task_fetch_failure_is_returned() {
        let mut tasks = MockTasks::new();
        tasks
            .expect_get_task()
            .returning(|_| Err(RequestError::Transport("offline".into())));

        let uc = LoadTaskDetails::new(
            Arc::new(selected_task()),
            Arc::new(tasks),
            Arc::new(MockSubjects::new()),
        );
        let err = uc.execute().await.unwrap_err();

        assert!(matches!(err, TaskDetailsError::FetchTask(_)));
    }

    #[tokio::test]
    async fn nothing_selected() {
        let mut selection = MockSelection::new();
        selection.expect_get().returning(|_| Ok(None));

        let uc = LoadTaskDetails::new(
            Arc::new(selection),
            Arc::new(MockTasks::new()),
            Arc::new(MockSubjects::new()),
        );

        assert!(matches!(uc.execute().await, Err(TaskDetailsError::NoSelection)));
    }
}
