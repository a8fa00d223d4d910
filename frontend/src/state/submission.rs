//! Submission state machine for the sign-in form.
//!
//! [`transition`] is pure: it maps the current state, the agreement gate and
//! one event to the next state plus the effect the caller has to carry out.
//! [`SubmissionController`] owns the single state instance and the field
//! errors of the latest validation run.

use crate::api::{SignInError, SignInRequest};
use crate::pages::login::utils::{self, FormInput, ValidationErrors};
use crate::state::agreement::AgreementGate;
use crate::state::flash::FlashKind;

pub const SIGN_IN_SUCCESS: &str = "Login successful!";
pub const REJECTED_FALLBACK: &str = "An error occurred";
pub const TRANSPORT_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Resolved {
        kind: FlashKind,
        text: String,
    },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit(FormInput),
    Accepted,
    Rejected(Option<String>),
    TransportFailed,
    Dismissed,
}

impl From<Result<(), SignInError>> for SubmissionEvent {
    fn from(outcome: Result<(), SignInError>) -> Self {
        match outcome {
            Ok(()) => SubmissionEvent::Accepted,
            Err(SignInError::Rejected { message, .. }) => SubmissionEvent::Rejected(message),
            Err(SignInError::Transport(_)) => SubmissionEvent::TransportFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Guard refused the event or it does not apply in the current state.
    Inert,
    ShowFieldErrors(ValidationErrors),
    SignIn(SignInRequest),
    Flash { kind: FlashKind, text: String },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: SubmissionState,
    pub effect: Effect,
}

impl Step {
    fn stay(state: &SubmissionState, effect: Effect) -> Self {
        Step {
            next: state.clone(),
            effect,
        }
    }

    fn resolve(kind: FlashKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Step {
            next: SubmissionState::Resolved {
                kind,
                text: text.clone(),
            },
            effect: Effect::Flash { kind, text },
        }
    }
}

/// Submission is reachable only with the box ticked and nothing in flight.
pub fn can_submit(state: &SubmissionState, gate: &AgreementGate) -> bool {
    gate.is_satisfied() && !state.is_pending()
}

pub fn transition(state: &SubmissionState, gate: &AgreementGate, event: SubmissionEvent) -> Step {
    match (state, event) {
        (_, SubmissionEvent::Submit(_)) if !can_submit(state, gate) => {
            Step::stay(state, Effect::Inert)
        }
        (_, SubmissionEvent::Submit(input)) => {
            let errors = utils::validate(&input);
            if errors.is_empty() {
                Step {
                    next: SubmissionState::Pending,
                    effect: Effect::SignIn(input.into()),
                }
            } else {
                Step::stay(state, Effect::ShowFieldErrors(errors))
            }
        }
        (SubmissionState::Pending, SubmissionEvent::Accepted) => {
            Step::resolve(FlashKind::Success, SIGN_IN_SUCCESS)
        }
        (SubmissionState::Pending, SubmissionEvent::Rejected(message)) => Step::resolve(
            FlashKind::Error,
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
        ),
        (SubmissionState::Pending, SubmissionEvent::TransportFailed) => {
            Step::resolve(FlashKind::Error, TRANSPORT_FAILURE)
        }
        (SubmissionState::Resolved { .. }, SubmissionEvent::Dismissed) => Step {
            next: SubmissionState::Idle,
            effect: Effect::Cleared,
        },
        (state, _) => Step::stay(state, Effect::Inert),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionController {
    state: SubmissionState,
    errors: ValidationErrors,
}

impl SubmissionController {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn can_submit(&self, gate: &AgreementGate) -> bool {
        can_submit(&self.state, gate)
    }

    pub fn handle(&mut self, gate: &AgreementGate, event: SubmissionEvent) -> Effect {
        let step = transition(&self.state, gate, event);
        match &step.effect {
            Effect::ShowFieldErrors(errors) => self.errors = errors.clone(),
            Effect::SignIn(_) => self.errors = ValidationErrors::default(),
            _ => {}
        }
        self.state = step.next;
        step.effect
    }
}
