//! Registration use cases.
//!
//! This module exposes the registration orchestrator and the submission
//! coordinator it runs on "finalize".

mod context;
pub mod orchestrator;
pub mod submit;

pub use orchestrator::{RegistrationOrchestrator, RegistrationOrchestratorError};
pub use submit::{SubmissionOutcome, SubmitRegistration, SubmitRegistrationError};
