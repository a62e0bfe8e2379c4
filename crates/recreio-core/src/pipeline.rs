//! Submission pipeline
//!
//! Runs one submit action end to end:
//! - Interception (re-entrancy, native validity, confirmation pair)
//! - Submitting state on the button, restored on every exit
//! - Dispatch and classification
//! - Feedback and navigation
//!
//! Every failure is handled here; callers only get a [`SubmitReport`].

use crate::config::Messages;
use crate::forms::{FormSpec, MessageTarget};
use crate::interceptor::{Interception, SubmitInterceptor};
use crate::presenter::FeedbackPresenter;
use recreio_client::{DispatchError, Dispatcher, FormSubmission, Outcome, SubmissionId, Transport};
use recreio_form::{Form, FormControls, Host};
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// How a submit action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Button was disabled
    Ignored,
    /// Native validation failed
    Blocked,
    /// Confirmation pair differed
    Rejected,
    /// 2xx; navigated away
    Success,
    /// 400; messages shown per field
    ValidationFailure,
    /// Routed 401/409
    DomainConflict,
    /// 500; message alerted
    ServerFailure,
    /// Status outside the contract, or a conflict this form does not route
    UnexpectedStatus,
    /// No usable response
    NetworkOrParseFailure,
}

impl OutcomeKind {
    /// Whether a request was issued
    #[must_use]
    pub fn dispatched(self) -> bool {
        !matches!(self, Self::Ignored | Self::Blocked | Self::Rejected)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ignored => "ignored",
            Self::Blocked => "blocked",
            Self::Rejected => "rejected",
            Self::Success => "success",
            Self::ValidationFailure => "validation_failure",
            Self::DomainConflict => "domain_conflict",
            Self::ServerFailure => "server_failure",
            Self::UnexpectedStatus => "unexpected_status",
            Self::NetworkOrParseFailure => "network_or_parse_failure",
        };
        f.write_str(name)
    }
}

/// Result of [`SubmissionPipeline::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    /// Id of the dispatched submission, if one was dispatched
    pub submission: Option<SubmissionId>,
    /// How it ended
    pub kind: OutcomeKind,
}

impl SubmitReport {
    fn local(kind: OutcomeKind) -> Self {
        Self {
            submission: None,
            kind,
        }
    }

    /// Whether the submission succeeded and navigated away
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Interceptor, dispatcher and presenter wired together
#[derive(Clone)]
pub struct SubmissionPipeline {
    interceptor: SubmitInterceptor,
    dispatcher: Dispatcher,
    presenter: FeedbackPresenter,
    host: Arc<dyn Host>,
}

impl fmt::Debug for SubmissionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionPipeline")
            .field("dispatcher", &self.dispatcher)
            .field("presenter", &self.presenter)
            .finish_non_exhaustive()
    }
}

impl SubmissionPipeline {
    /// Create pipeline sending through `transport` and reporting through `host`
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, host: Arc<dyn Host>, messages: Messages) -> Self {
        let presenter = FeedbackPresenter::new(host.clone(), messages);
        Self {
            interceptor: SubmitInterceptor::new(presenter.clone()),
            dispatcher: Dispatcher::new(transport),
            presenter,
            host,
        }
    }

    /// Presenter used for feedback
    #[inline]
    #[must_use]
    pub fn presenter(&self) -> &FeedbackPresenter {
        &self.presenter
    }

    /// Dispatcher used for requests
    #[inline]
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle one submit action on `form`
    ///
    /// The submit button shows `spec.submitting_label` and stays disabled from
    /// dispatch until feedback has been presented. It is restored exactly once,
    /// also when the returned future is dropped before completing.
    pub async fn submit(&self, form: &mut Form, spec: &FormSpec) -> SubmitReport {
        let submission = match self.interceptor.intercept(form, spec) {
            Interception::Accepted(submission) => submission,
            Interception::Ignored => return SubmitReport::local(OutcomeKind::Ignored),
            Interception::Blocked => return SubmitReport::local(OutcomeKind::Blocked),
            Interception::Rejected => return SubmitReport::local(OutcomeKind::Rejected),
        };

        let span = tracing::info_span!(
            "submission",
            id = %submission.id,
            form = %submission.form,
            endpoint = %submission.endpoint,
        );
        let kind = self.run(form, spec, &submission).instrument(span).await;

        SubmitReport {
            submission: Some(submission.id),
            kind,
        }
    }

    async fn run(&self, form: &mut Form, spec: &FormSpec, submission: &FormSubmission) -> OutcomeKind {
        let (controls, button) = form.parts_mut();
        let _submitting = button.begin_submitting(spec.submitting_label.as_deref());

        match self.dispatcher.dispatch(submission).await {
            Ok(outcome) => self.present(controls, spec, outcome),
            Err(err) => self.present_failure(&err),
        }
    }

    fn present(&self, controls: &mut FormControls, spec: &FormSpec, outcome: Outcome) -> OutcomeKind {
        match outcome {
            Outcome::Success { status, .. } => {
                tracing::info!(status, route = %spec.success.route, "Submission succeeded");
                if let Some(alert) = &spec.success.alert {
                    self.host.alert(alert);
                }
                self.host.replace_location(&spec.success.route);
                OutcomeKind::Success
            }
            Outcome::ValidationFailure(errors) => {
                tracing::warn!(fields = errors.len(), "Validation failed");
                self.presenter.show_validation_errors(controls, &errors);
                OutcomeKind::ValidationFailure
            }
            Outcome::DomainConflict { status, message } => match spec.conflict_target(status) {
                Some(MessageTarget::Field(field)) => {
                    tracing::warn!(status, field = %field, "Conflict shown on field");
                    self.presenter.show_field_error(controls, field, &message);
                    OutcomeKind::DomainConflict
                }
                Some(MessageTarget::Alert) => {
                    tracing::warn!(status, "Conflict alerted");
                    self.presenter.alert(&message);
                    OutcomeKind::DomainConflict
                }
                None => {
                    tracing::error!(status, message = %message, "Conflict status not routed for this form");
                    self.presenter.alert_generic_failure();
                    OutcomeKind::UnexpectedStatus
                }
            },
            Outcome::ServerFailure { message } => {
                tracing::warn!(message = %message, "Server failure");
                self.presenter.alert(&message);
                OutcomeKind::ServerFailure
            }
        }
    }

    fn present_failure(&self, err: &DispatchError) -> OutcomeKind {
        match err {
            DispatchError::UnexpectedStatus { status, body } => {
                tracing::error!(status, body = %body, "Unexpected response status");
            }
            other => tracing::error!(error = %other, status = ?other.status(), "Submission failed"),
        }
        self.presenter.alert_generic_failure();

        if err.is_network_or_parse() {
            OutcomeKind::NetworkOrParseFailure
        } else {
            OutcomeKind::UnexpectedStatus
        }
    }
}
