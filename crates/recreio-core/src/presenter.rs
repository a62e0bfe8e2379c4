//! Feedback presenter
//!
//! Turns server messages into visible feedback:
//! - Field-level: custom validity on the control, cleared by the next edit
//! - Bulk: one joined message per field of a validation failure
//! - Page-level: alerts through the [`Host`]

use crate::config::Messages;
use recreio_client::FieldErrors;
use recreio_form::{Field, FieldEvent, FormControls, Host};
use std::sync::Arc;

/// Where a message ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// On the matching control
    Field,
    /// In a page-level alert
    Alert,
}

/// Join several messages for one field into a single sentence
///
/// Every message after the first has its first character lower-cased; every
/// message but the last has one trailing `.` turned into `,`.
///
/// ```rust
/// use recreio_core::presenter::join_validity_messages;
///
/// let messages = vec!["Muito curta.".to_string(), "Deve conter número".to_string()];
/// let joined = join_validity_messages(&messages);
/// assert_eq!(joined, "Muito curta, deve conter número");
/// ```
#[must_use]
pub fn join_validity_messages(messages: &[String]) -> String {
    let last = messages.len().saturating_sub(1);
    messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let message = if i == 0 {
                message.clone()
            } else {
                lowercase_first(message)
            };
            match message.strip_suffix('.') {
                Some(head) if i != last => format!("{head},"),
                _ => message,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `- message` line per message
#[must_use]
pub fn format_alert_lines(messages: &[String]) -> String {
    messages
        .iter()
        .map(|message| format!("- {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lowercase_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shows feedback on forms and the page
#[derive(Clone)]
pub struct FeedbackPresenter {
    host: Arc<dyn Host>,
    messages: Messages,
}

impl std::fmt::Debug for FeedbackPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackPresenter")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl FeedbackPresenter {
    /// Create presenter alerting through `host`
    #[inline]
    #[must_use]
    pub fn new(host: Arc<dyn Host>, messages: Messages) -> Self {
        Self { host, messages }
    }

    /// Shared feedback texts
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Page-level alert, shown verbatim
    pub fn alert(&self, message: &str) {
        self.host.alert(message);
    }

    /// Alert the generic failure text
    pub fn alert_generic_failure(&self) {
        self.host.alert(&self.messages.generic_failure);
    }

    /// Alert the messages of a field the form does not have
    pub fn alert_field_errors(&self, field: &str, messages: &[String]) {
        self.host.alert(&format!(
            "{} {field}: \n{}",
            self.messages.field_errors_header,
            format_alert_lines(messages)
        ));
    }

    /// Show `message` on the control matching `field`
    ///
    /// The message stays until the first `Input` or `Change` on the control,
    /// which clears it and refreshes the validity UI. A field carries at most
    /// one such listener: a new message replaces the previous one.
    pub fn show_field_error(
        &self,
        controls: &mut FormControls,
        field: &str,
        message: &str,
    ) -> Placement {
        let previous = match controls.get_mut(field) {
            Some(target) => {
                target.set_custom_validity(message);
                target.report_validity();
                target.validity_mut().take_clear_listener()
            }
            None => {
                tracing::debug!(field, "No control for field error, alerting");
                self.alert_field_errors(field, &[message.to_string()]);
                return Placement::Alert;
            }
        };
        if let Some(previous) = previous {
            controls.dispose(previous);
        }

        let clear = Box::new(|control: &mut Field| {
            control.validity_mut().take_clear_listener();
            control.set_custom_validity("");
            control.report_validity();
        });
        if let Ok(disposer) = controls.listen(field, &[FieldEvent::Input, FieldEvent::Change], true, clear)
        {
            if let Some(target) = controls.get_mut(field) {
                target.validity_mut().replace_clear_listener(disposer);
            }
        }
        Placement::Field
    }

    /// Show every field's messages of a validation failure, in server order
    pub fn show_validation_errors(
        &self,
        controls: &mut FormControls,
        errors: &FieldErrors,
    ) -> Vec<Placement> {
        errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, messages)| {
                if controls.contains(field) {
                    self.show_field_error(controls, field, &join_validity_messages(messages))
                } else {
                    self.alert_field_errors(field, messages);
                    Placement::Alert
                }
            })
            .collect()
    }
}
