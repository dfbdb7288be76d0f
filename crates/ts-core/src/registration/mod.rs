//! Registration domain module.
//!
//! Two-step sign-up wizard: personal details, then account type.

mod model;
pub mod state_machine;
pub mod validation;

pub use model::{Account, NewAccount, RegistrationDraft, RegistrationForm, Role};
pub use state_machine::{
    RegistrationAction, RegistrationError, RegistrationEvent, RegistrationState,
    RegistrationStateMachine,
};
pub use validation::{FieldError, FieldErrors, RegistrationField};
