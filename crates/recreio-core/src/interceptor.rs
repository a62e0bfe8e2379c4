//! Submit interceptor
//!
//! Decides whether a submit action goes to the network. Nothing here touches
//! the submit button: a submit that does not reach dispatch leaves it as it was.

use crate::forms::FormSpec;
use crate::presenter::FeedbackPresenter;
use recreio_client::FormSubmission;
use recreio_form::Form;

/// Result of intercepting one submit action
#[derive(Debug, Clone)]
pub enum Interception {
    /// Submit button is disabled; another submission owns the form
    Ignored,
    /// Native constraints failed; the browser-style validity UI is showing
    Blocked,
    /// Confirmation pair differs; the message is on the confirmation control
    Rejected,
    /// Ready to dispatch
    Accepted(FormSubmission),
}

impl Interception {
    /// Whether the submit goes on to dispatch
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Runs the pre-dispatch checks of a form
#[derive(Debug, Clone)]
pub struct SubmitInterceptor {
    presenter: FeedbackPresenter,
}

impl SubmitInterceptor {
    /// Create interceptor reporting through `presenter`
    #[inline]
    #[must_use]
    pub fn new(presenter: FeedbackPresenter) -> Self {
        Self { presenter }
    }

    /// Intercept a submit of `form`
    pub fn intercept(&self, form: &mut Form, spec: &FormSpec) -> Interception {
        if form.submit_button().is_disabled() {
            tracing::debug!(form = %form.id(), "Submit ignored, button disabled");
            return Interception::Ignored;
        }

        if !form.check_validity() {
            form.report_validity();
            tracing::debug!(form = %form.id(), "Submit blocked by native validation");
            return Interception::Blocked;
        }

        if let Some(confirmation) = &spec.confirmation {
            let value = form.value(&confirmation.field).unwrap_or_default();
            let repeated = form.value(&confirmation.confirm).unwrap_or_default();
            if value != repeated {
                self.presenter.show_field_error(
                    form.controls_mut(),
                    &confirmation.confirm,
                    &confirmation.message,
                );
                tracing::debug!(form = %form.id(), field = %confirmation.confirm, "Confirmation mismatch");
                return Interception::Rejected;
            }
        }

        let submission = spec
            .collect_values(form.controls())
            .into_iter()
            .fold(
                FormSubmission::new(form.id(), spec.endpoint, form.submit_button().snapshot()),
                |submission, (name, value)| submission.with_value(name, value),
            );
        Interception::Accepted(submission)
    }
}
