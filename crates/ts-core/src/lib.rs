//! # ts-core
//!
//! Core domain models and business logic for the Tutoring School client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod media;
pub mod navigation;
pub mod ports;
pub mod registration;
pub mod school;
pub mod security;
pub mod session;
pub mod task;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{AccountId, SchoolId, StudentId, SubjectId, TaskId};
pub use media::{AvatarOutcome, AvatarSelection, ImageDestination};
pub use navigation::Screen;
pub use registration::{Account, NewAccount, Role};
pub use security::SecretString;
pub use session::SessionUser;
