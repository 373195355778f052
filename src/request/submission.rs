//! Submission flow for the service request form.
//!
//! The machine is pure: every event returns the list of [`Effect`]s the view
//! layer has to carry out (render errors, move focus, post the payload, ...).
//!
//! ```text
//! Idle -> Validating -> Idle                       (invalid)
//!                    -> Submitting -> Succeeded    (terminal, form replaced)
//!                                  -> Idle         (remote or transport failure)
//! ```

use log::{debug, error, info, warn};

use crate::config::ConfigError;
use crate::request::client::RemoteReply;
use crate::request::fields::{FieldId, FormValues};
use crate::request::payload::SubmissionPayload;
use crate::request::validation::{validate, ValidatedForm, ValidationResult};

pub const REMOTE_ERROR_PREFIX: &str = "There was an error submitting your request: ";
pub const REMOTE_ERROR_FALLBACK: &str = "Please try again later.";
pub const CONNECTIVITY_NOTICE: &str = "Could not send request. Please check your internet connection and try again. If the problem persists, contact support.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success,
    RemoteError { message: String },
    TransportError { message: String },
}

impl From<RemoteReply> for SubmissionOutcome {
    fn from(reply: RemoteReply) -> Self {
        if reply.is_success() {
            SubmissionOutcome::Success
        } else {
            SubmissionOutcome::RemoteError {
                message: reply
                    .message_text()
                    .unwrap_or_else(|| REMOTE_ERROR_FALLBACK.to_string()),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submitted(FormValues),
    ValidationCompleted(ValidationResult),
    ResponseReceived(RemoteReply),
    TransportFailed(String),
}

/// Presentation of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Ready,
    Busy,
    Disabled,
}

impl TriggerState {
    pub fn is_disabled(self) -> bool {
        self != TriggerState::Ready
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace every error slot with the given result.
    RenderErrors(ValidationResult),
    Focus(FieldId),
    SetTrigger(TriggerState),
    Send(SubmissionPayload),
    /// Blocking notification.
    Notify(String),
    RevealSuccess,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Validating(FormValues),
    Submitting,
    Succeeded,
    /// No endpoint configured; the form never submits.
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionMachine {
    phase: Phase,
}

impl SubmissionMachine {
    pub fn new(endpoint: Result<&str, ConfigError>) -> Self {
        let phase = match endpoint {
            Ok(_) => Phase::Idle,
            Err(e) => {
                warn!("{}", e);
                Phase::Disabled
            }
        };
        Self { phase }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn trigger(&self) -> TriggerState {
        match self.phase {
            Phase::Idle | Phase::Validating(_) => TriggerState::Ready,
            Phase::Submitting | Phase::Succeeded => TriggerState::Busy,
            Phase::Disabled => TriggerState::Disabled,
        }
    }

    pub fn handle(&mut self, event: FormEvent) -> Vec<Effect> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match (phase, event) {
            (Phase::Idle, FormEvent::Submitted(values)) => {
                let result = validate(&values);
                self.phase = Phase::Validating(values);
                self.handle(FormEvent::ValidationCompleted(result))
            }
            (Phase::Validating(values), FormEvent::ValidationCompleted(result)) => {
                let promoted = if result.is_valid() {
                    ValidatedForm::try_from(values)
                } else {
                    Err(result)
                };
                match promoted {
                    Ok(form) => {
                        self.phase = Phase::Submitting;
                        vec![
                            Effect::RenderErrors(ValidationResult::default()),
                            Effect::SetTrigger(TriggerState::Busy),
                            Effect::Send(SubmissionPayload::from(form)),
                        ]
                    }
                    Err(result) => {
                        info!("Form validation failed.");
                        self.phase = Phase::Idle;
                        let focus = result.first_invalid();
                        let mut effects = vec![Effect::RenderErrors(result)];
                        effects.extend(focus.map(Effect::Focus));
                        effects
                    }
                }
            }
            (Phase::Submitting, FormEvent::ResponseReceived(reply)) => {
                if !reply.is_success() {
                    error!(
                        "Error submitting form (Apps Script): {} {}",
                        reply.message_text().unwrap_or_default(),
                        reply.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
                    );
                }
                self.settle(SubmissionOutcome::from(reply))
            }
            (Phase::Submitting, FormEvent::TransportFailed(message)) => {
                error!("Fetch Error: {}", message);
                self.settle(SubmissionOutcome::TransportError { message })
            }
            (phase, event) => {
                debug!("Ignoring {:?} while {:?}", event, phase);
                self.phase = phase;
                Vec::new()
            }
        }
    }

    fn settle(&mut self, outcome: SubmissionOutcome) -> Vec<Effect> {
        match outcome {
            SubmissionOutcome::Success => {
                info!("Form data successfully submitted to Google Sheets.");
                self.phase = Phase::Succeeded;
                vec![Effect::RevealSuccess]
            }
            SubmissionOutcome::RemoteError { message } => {
                self.phase = Phase::Idle;
                vec![
                    Effect::Notify(format!("{}{}", REMOTE_ERROR_PREFIX, message)),
                    Effect::SetTrigger(TriggerState::Ready),
                ]
            }
            SubmissionOutcome::TransportError { .. } => {
                self.phase = Phase::Idle;
                vec![
                    Effect::Notify(CONNECTIVITY_NOTICE.to_string()),
                    Effect::SetTrigger(TriggerState::Ready),
                ]
            }
        }
    }
}
