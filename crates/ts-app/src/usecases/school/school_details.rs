use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, info_span, warn, Instrument};
use ts_core::ports::{
    NavigationPort, RequestError, SchoolPort, SelectionKey, SelectionStoreError,
    SelectionStorePort, SessionPort, StudentPort,
};
use ts_core::school::{filter_students, School, Student};
use ts_core::{SchoolId, Screen, StudentId};

use crate::usecases::selection::{read_selected_id, write_selected_id};

#[derive(Debug, thiserror::Error)]
pub enum SchoolDetailsError {
    #[error("no school selected")]
    NoSelection,
    #[error("selection store error: {0}")]
    Selection(#[from] SelectionStoreError),
    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// Data behind the school details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolDetailsView {
    pub school_id: SchoolId,
    /// `None` when the school could not be fetched.
    pub school: Option<School>,
    /// Only populated for tutors.
    pub students: Vec<Student>,
    pub is_tutor: bool,
}

impl SchoolDetailsView {
    pub fn shows_qr_code(&self) -> bool {
        self.is_tutor
    }

    pub fn shows_roster(&self) -> bool {
        self.is_tutor
    }

    pub fn formatted_address(&self) -> Option<String> {
        self.school.as_ref().map(School::formatted_address)
    }

    /// Students whose name contains `term`, ignoring case.
    pub fn filtered<'a>(&'a self, term: &str) -> Vec<&'a Student> {
        filter_students(&self.students, term)
    }
}

/// Loads the selected school and, for tutors, its students.
pub struct LoadSchoolDetails {
    selection: Arc<dyn SelectionStorePort>,
    session: Arc<dyn SessionPort>,
    schools: Arc<dyn SchoolPort>,
    students: Arc<dyn StudentPort>,
}

impl LoadSchoolDetails {
    pub fn new(
        selection: Arc<dyn SelectionStorePort>,
        session: Arc<dyn SessionPort>,
        schools: Arc<dyn SchoolPort>,
        students: Arc<dyn StudentPort>,
    ) -> Self {
        Self {
            selection,
            session,
            schools,
            students,
        }
    }

    pub async fn execute(&self) -> Result<SchoolDetailsView, SchoolDetailsError> {
        let school_id: SchoolId = read_selected_id(self.selection.as_ref(), SelectionKey::School)
            .await?
            .ok_or(SchoolDetailsError::NoSelection)?;

        let span = info_span!("usecase.school_details.load", school_id = %school_id);
        async {
            let is_tutor = self
                .session
                .current_user()
                .await
                .is_some_and(|user| user.is_tutor());

            let school = match self.schools.get_school(&school_id).await {
                Ok(school) => Some(school),
                Err(err) => {
                    error!(error = %err, "failed to fetch school");
                    None
                }
            };

            let students = if is_tutor {
                fetch_roster(self.students.as_ref(), &school_id).await
            } else {
                Vec::new()
            };

            debug!(is_tutor, students = students.len(), "school details loaded");
            Ok(SchoolDetailsView {
                school_id: school_id.clone(),
                school,
                students,
                is_tutor,
            })
        }
        .instrument(span)
        .await
    }
}

async fn fetch_roster(students: &dyn StudentPort, school_id: &SchoolId) -> Vec<Student> {
    match students.list_students_by_school(school_id).await {
        Ok(list) => list,
        Err(err) => {
            error!(school_id = %school_id, error = %err, "failed to fetch students");
            Vec::new()
        }
    }
}

/// Removes a student from a school and returns the refreshed roster.
pub struct UnlinkStudent {
    students: Arc<dyn StudentPort>,
}

impl UnlinkStudent {
    pub fn new(students: Arc<dyn StudentPort>) -> Self {
        Self { students }
    }

    pub async fn execute(
        &self,
        school_id: &SchoolId,
        student_id: &StudentId,
    ) -> Result<Vec<Student>, RequestError> {
        if let Err(err) = self.students.unlink_student_from_school(student_id).await {
            warn!(student_id = %student_id, error = %err, "failed to unlink student");
            return Err(err);
        }
        info!(student_id = %student_id, school_id = %school_id, "student unlinked");

        Ok(fetch_roster(self.students.as_ref(), school_id).await)
    }
}

/// Remembers the tapped student and opens its details screen.
pub struct OpenStudentDetails {
    selection: Arc<dyn SelectionStorePort>,
    navigation: Arc<dyn NavigationPort>,
}

impl OpenStudentDetails {
    pub fn new(selection: Arc<dyn SelectionStorePort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            selection,
            navigation,
        }
    }

    pub async fn execute(&self, student_id: &StudentId) -> Result<(), SchoolDetailsError> {
        write_selected_id(
            self.selection.as_ref(),
            SelectionKey::Student,
            student_id.as_str(),
        )
        .await?;

        self.navigation
            .navigate_to(Screen::StudentDetails)
            .await
            .map_err(SchoolDetailsError::Navigation)
    }
}
