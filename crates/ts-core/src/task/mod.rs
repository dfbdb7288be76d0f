//! Task domain module: homework tasks shown to guardians.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{StudentId, SubjectId, TaskId};

/// Placeholder shown while (or instead of) resolving the subject name.
pub const SUBJECT_NAME_PLACEHOLDER: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub subject_id: Option<SubjectId>,
    #[serde(default)]
    pub description: String,
    pub deadline_date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub concluded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}
