//! School domain module: schools, their student roster and the address form
//! used when registering a new school.

mod address;
mod model;
mod roster;

pub use address::{PostalAddress, SchoolAddressForm};
pub use model::{NewSchool, School, Student};
pub use roster::filter_students;
