//! Registration state machine.
//!
//! Defines a pure state transition function for the two-step sign-up flow.
//! Side effects are returned as [`RegistrationAction`]s and executed by the
//! application layer.

use crate::ids::AccountId;
use crate::media::AvatarSelection;
use crate::navigation::Screen;

use super::model::{RegistrationDraft, RegistrationForm, Role};
use super::validation::{validate_form, FieldErrors};

/// Registration flow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    /// Step 1: personal details form.
    Details {
        form: RegistrationForm,
        errors: FieldErrors,
        role: Role,
        avatar: Option<AvatarSelection>,
    },
    /// Step 2: account type selection.
    ChooseRole {
        form: RegistrationForm,
        draft: RegistrationDraft,
        role: Role,
        avatar: Option<AvatarSelection>,
        error: Option<RegistrationError>,
    },
    /// Account creation in flight.
    Submitting {
        form: RegistrationForm,
        draft: RegistrationDraft,
        role: Role,
        avatar: Option<AvatarSelection>,
    },
    /// Account created; the wizard is done.
    Completed { account_id: AccountId },
    /// The user left the wizard from the host screen.
    Exited,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::Details {
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            role: Role::default(),
            avatar: None,
        }
    }
}

impl RegistrationState {
    /// Zero-based wizard step shown to the user, if any.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Self::Details { .. } => Some(0),
            Self::ChooseRole { .. } | Self::Submitting { .. } => Some(1),
            Self::Completed { .. } | Self::Exited => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Details { role, .. }
            | Self::ChooseRole { role, .. }
            | Self::Submitting { role, .. } => Some(*role),
            Self::Completed { .. } | Self::Exited => None,
        }
    }

    pub fn avatar(&self) -> Option<&AvatarSelection> {
        match self {
            Self::Details { avatar, .. }
            | Self::ChooseRole { avatar, .. }
            | Self::Submitting { avatar, .. } => avatar.as_ref(),
            Self::Completed { .. } | Self::Exited => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Exited)
    }
}

/// Events that drive the registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// Confirm the details form.
    SubmitDetails { form: RegistrationForm },
    /// An image was picked for the profile.
    AvatarPicked { avatar: AvatarSelection },
    /// The picked image was discarded.
    ClearAvatar,
    /// Account type chosen.
    SelectRole { role: Role },
    /// In-wizard "back" button on step 2.
    Back,
    /// "Finish registration" on step 2.
    Finalize,
    /// Account creation result (from orchestrator).
    SubmissionSucceeded { account_id: AccountId },
    SubmissionFailed { error: RegistrationError },
    /// Host "go back": leave the wizard without side effects.
    Exit,
}

impl RegistrationEvent {
    /// Variant name without payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitDetails { .. } => "SubmitDetails",
            Self::AvatarPicked { .. } => "AvatarPicked",
            Self::ClearAvatar => "ClearAvatar",
            Self::SelectRole { .. } => "SelectRole",
            Self::Back => "Back",
            Self::Finalize => "Finalize",
            Self::SubmissionSucceeded { .. } => "SubmissionSucceeded",
            Self::SubmissionFailed { .. } => "SubmissionFailed",
            Self::Exit => "Exit",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Create the account, then upload/attach the avatar if one is present.
    SubmitRegistration {
        draft: RegistrationDraft,
        role: Role,
        avatar: Option<AvatarSelection>,
    },
    NavigateTo { screen: Screen },
    GoBack,
}

/// Error recorded on the role step after a failed finalize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("account creation failed: {reason}")]
    AccountCreationFailed { reason: String },
}

/// Pure registration state machine.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        use RegistrationEvent as E;
        use RegistrationState as S;

        match (state, event) {
            (
                S::Details {
                    role, avatar, ..
                },
                E::SubmitDetails { form },
            ) => match validate_form(&form) {
                Ok(draft) => (
                    S::ChooseRole {
                        form,
                        draft,
                        role,
                        avatar,
                        error: None,
                    },
                    Vec::new(),
                ),
                Err(errors) => (
                    S::Details {
                        form,
                        errors,
                        role,
                        avatar,
                    },
                    Vec::new(),
                ),
            },
            (S::Details { form, errors, role, .. }, E::AvatarPicked { avatar }) => (
                S::Details {
                    form,
                    errors,
                    role,
                    avatar: Some(avatar),
                },
                Vec::new(),
            ),
            (S::Details { form, errors, role, .. }, E::ClearAvatar) => (
                S::Details {
                    form,
                    errors,
                    role,
                    avatar: None,
                },
                Vec::new(),
            ),
            (
                S::ChooseRole {
                    form,
                    draft,
                    avatar,
                    error,
                    ..
                },
                E::SelectRole { role },
            ) => (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    avatar,
                    error,
                },
                Vec::new(),
            ),
            (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    error,
                    ..
                },
                E::AvatarPicked { avatar },
            ) => (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    avatar: Some(avatar),
                    error,
                },
                Vec::new(),
            ),
            (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    error,
                    ..
                },
                E::ClearAvatar,
            ) => (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    avatar: None,
                    error,
                },
                Vec::new(),
            ),
            (
                S::ChooseRole {
                    form, role, avatar, ..
                },
                E::Back,
            ) => (
                S::Details {
                    form,
                    errors: FieldErrors::new(),
                    role,
                    avatar,
                },
                Vec::new(),
            ),
            (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    avatar,
                    ..
                },
                E::Finalize,
            ) => (
                S::Submitting {
                    form,
                    draft: draft.clone(),
                    role,
                    avatar: avatar.clone(),
                },
                vec![RegistrationAction::SubmitRegistration {
                    draft,
                    role,
                    avatar,
                }],
            ),
            (S::Submitting { .. }, E::SubmissionSucceeded { account_id }) => (
                S::Completed { account_id },
                vec![RegistrationAction::NavigateTo {
                    screen: Screen::Login,
                }],
            ),
            (
                S::Submitting {
                    form,
                    draft,
                    role,
                    avatar,
                },
                E::SubmissionFailed { error },
            ) => (
                S::ChooseRole {
                    form,
                    draft,
                    role,
                    avatar,
                    error: Some(error),
                },
                Vec::new(),
            ),
            (
                S::Details { .. } | S::ChooseRole { .. } | S::Submitting { .. },
                E::Exit,
            ) => (S::Exited, vec![RegistrationAction::GoBack]),
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(event = _event.name(), "registration event ignored in current state");
                (state, Vec::new())
            }
        }
    }
}
