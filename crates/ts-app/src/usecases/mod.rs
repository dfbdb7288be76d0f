//! Business logic use cases
//!
//! A use case is its own type when the user (or the system) has to make a
//! new decision before it runs: finishing the sign-up wizard, adding a
//! school, opening a student, and so on.

#[cfg(test)]
pub(crate) mod mock_ports;
pub mod profile_image;
pub mod registration;
pub mod school;
pub mod selection;
pub mod task;

pub use profile_image::UploadProfileImage;
pub use registration::{
    RegistrationOrchestrator, RegistrationOrchestratorError, SubmissionOutcome,
    SubmitRegistration, SubmitRegistrationError,
};
pub use school::{
    AddSchool, AddSchoolError, AddSchoolInput, AddSchoolOutcome, LoadSchoolDetails,
    OpenStudentDetails, ResolvePostalCode, SchoolDetailsError, SchoolDetailsView, UnlinkStudent,
};
pub use task::{LoadTaskDetails, TaskDetailsError, TaskDetailsView};
