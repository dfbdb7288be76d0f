//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and side effects.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, Instrument};

use ts_core::ports::{ImagePickerPort, NavigationPort};
use ts_core::registration::{
    RegistrationAction, RegistrationError, RegistrationEvent, RegistrationForm,
    RegistrationState, RegistrationStateMachine, Role,
};

use crate::usecases::registration::context::RegistrationContext;
use crate::usecases::registration::submit::{SubmissionOutcome, SubmitRegistration};

/// Errors produced by the registration orchestrator.
///
/// A failed account creation is not one of them: it is recorded in the
/// returned state instead.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationOrchestratorError {
    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// Orchestrator that drives registration state and side effects.
pub struct RegistrationOrchestrator {
    context: Arc<RegistrationContext>,
    last_submission: Mutex<Option<SubmissionOutcome>>,

    submit_registration: Arc<SubmitRegistration>,
    image_picker: Arc<dyn ImagePickerPort>,
    navigation: Arc<dyn NavigationPort>,
}

impl RegistrationOrchestrator {
    pub fn new(
        submit_registration: Arc<SubmitRegistration>,
        image_picker: Arc<dyn ImagePickerPort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            context: RegistrationContext::new(RegistrationState::default()).arc(),
            last_submission: Mutex::new(None),
            submit_registration,
            image_picker,
            navigation,
        }
    }

    pub async fn submit_details(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::SubmitDetails { form }).await
    }

    /// Opens the image picker; a cancelled pick leaves the state untouched.
    pub async fn pick_avatar(&self) -> Result<RegistrationState, RegistrationOrchestratorError> {
        match self.image_picker.pick_single_image().await {
            Some(avatar) => self.dispatch(RegistrationEvent::AvatarPicked { avatar }).await,
            None => {
                debug!("image picker cancelled");
                Ok(self.get_state().await)
            }
        }
    }

    pub async fn clear_avatar(&self) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::ClearAvatar).await
    }

    pub async fn select_role(
        &self,
        role: Role,
    ) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::SelectRole { role }).await
    }

    pub async fn back(&self) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::Back).await
    }

    pub async fn finalize(&self) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::Finalize).await
    }

    pub async fn exit(&self) -> Result<RegistrationState, RegistrationOrchestratorError> {
        self.dispatch(RegistrationEvent::Exit).await
    }

    pub async fn get_state(&self) -> RegistrationState {
        self.context.get_state().await
    }

    /// Outcome of the last successful submission, including the avatar step.
    pub async fn last_submission(&self) -> Option<SubmissionOutcome> {
        self.last_submission.lock().await.clone()
    }

    pub async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<RegistrationState, RegistrationOrchestratorError> {
        // Serialize dispatches so a double "finalize" cannot submit twice.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration_orchestrator.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.step_index();
                let event_name = event.name();
                let (next, actions) = RegistrationStateMachine::transition(current, event);
                info!(from = ?from, to = ?next.step_index(), event = %event_name, "registration state transition");
                self.context.set_state(next.clone()).await;
                let follow_up_events = self.execute_actions(actions).await?;
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Result<Vec<RegistrationEvent>, RegistrationOrchestratorError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                RegistrationAction::SubmitRegistration {
                    draft,
                    role,
                    avatar,
                } => {
                    debug!(role = %role, has_avatar = avatar.is_some(), "registration executing submit");
                    match self
                        .submit_registration
                        .execute(&draft, role, avatar.as_ref())
                        .await
                    {
                        Ok(outcome) => {
                            let account_id = outcome.account.id.clone();
                            *self.last_submission.lock().await = Some(outcome);
                            follow_up_events
                                .push(RegistrationEvent::SubmissionSucceeded { account_id });
                        }
                        Err(err) => {
                            error!(error = %err, "registration submission failed");
                            follow_up_events.push(RegistrationEvent::SubmissionFailed {
                                error: RegistrationError::AccountCreationFailed {
                                    reason: err.to_string(),
                                },
                            });
                        }
                    }
                }
                RegistrationAction::NavigateTo { screen } => {
                    self.navigation
                        .navigate_to(screen)
                        .await
                        .map_err(RegistrationOrchestratorError::Navigation)?;
                    debug!(screen = %screen, "registration navigated");
                }
                RegistrationAction::GoBack => {
                    self.navigation
                        .go_back()
                        .await
                        .map_err(RegistrationOrchestratorError::Navigation)?;
                    debug!("registration left via host back");
                }
            }
        }

        Ok(follow_up_events)
    }
}
