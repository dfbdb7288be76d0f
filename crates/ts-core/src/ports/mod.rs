//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. Remote services, the image picker,
//! on-device storage and host navigation all sit behind these traits so the
//! wizard and screen logic can be driven and tested without any of them.

pub mod account;
pub mod errors;
pub mod media;
pub mod navigation;
pub mod postal_code;
pub mod school;
pub mod selection_store;
pub mod session;
pub mod task;

pub use account::{AccountPort, UserProfileImagePort};
pub use errors::{PostalCodeError, RequestError, SelectionStoreError, UploadError};
pub use media::{ImagePickerPort, ImageUploadPort};
pub use navigation::NavigationPort;
pub use postal_code::PostalCodePort;
pub use school::{SchoolPort, StudentPort};
pub use selection_store::{SelectionKey, SelectionStorePort};
pub use session::SessionPort;
pub use task::{SubjectPort, TaskPort};
