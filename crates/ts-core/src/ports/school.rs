use async_trait::async_trait;

use crate::ids::{SchoolId, StudentId};
use crate::ports::errors::RequestError;
use crate::school::{NewSchool, School, Student};

#[async_trait]
pub trait SchoolPort: Send + Sync {
    async fn create_school(&self, school: NewSchool) -> Result<School, RequestError>;
    async fn get_school(&self, school_id: &SchoolId) -> Result<School, RequestError>;
    async fn update_school_profile_image(
        &self,
        school_id: &SchoolId,
        image_url: &str,
    ) -> Result<(), RequestError>;
}

#[async_trait]
pub trait StudentPort: Send + Sync {
    async fn list_students_by_school(
        &self,
        school_id: &SchoolId,
    ) -> Result<Vec<Student>, RequestError>;
    async fn unlink_student_from_school(&self, student_id: &StudentId)
        -> Result<(), RequestError>;
}
