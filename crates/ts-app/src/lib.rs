//! Tutoring School Application Orchestration Layer
//!
//! This crate contains business logic use cases and the registration
//! orchestrator that drives the wizard state machine against the ports.

pub mod usecases;

pub use usecases::registration::{RegistrationOrchestrator, SubmitRegistration};
