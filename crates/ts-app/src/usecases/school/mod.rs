//! School use cases: adding a school and the school details screen.

pub mod add_school;
pub mod school_details;

pub use add_school::{AddSchool, AddSchoolError, AddSchoolInput, AddSchoolOutcome, ResolvePostalCode};
pub use school_details::{
    LoadSchoolDetails, OpenStudentDetails, SchoolDetailsError, SchoolDetailsView, UnlinkStudent,
};
