//! Form controls and their validity state

use crate::constraint::{Constraint, InputKind};
use crate::listener::Disposer;

/// Events a control emits when the user edits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    /// Value changed by typing
    Input,
    /// Value committed (blur, paste, autofill)
    Change,
}

/// Custom validity attached to a single control
///
/// An empty message means the control carries no custom error. The optional
/// disposer belongs to the listener that clears the message on the next edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidityState {
    message: String,
    clear_listener: Option<Disposer>,
}

impl FieldValidityState {
    /// Current custom message (empty when valid)
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a custom message is set
    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.message.is_empty()
    }

    /// Listener installed to clear the message, if any
    #[inline]
    #[must_use]
    pub fn clear_listener(&self) -> Option<Disposer> {
        self.clear_listener
    }

    /// Remember the clearing listener, returning the one it replaces
    pub fn replace_clear_listener(&mut self, disposer: Disposer) -> Option<Disposer> {
        self.clear_listener.replace(disposer)
    }

    /// Forget the clearing listener (after it fired or was disposed)
    pub fn take_clear_listener(&mut self) -> Option<Disposer> {
        self.clear_listener.take()
    }
}

/// A single form control
#[derive(Debug, Clone)]
pub struct Field {
    id: String,
    name: String,
    kind: InputKind,
    constraints: Vec<Constraint>,
    value: String,
    validity: FieldValidityState,
    shown: Option<String>,
}

impl Field {
    /// Create a control whose `name` equals its `id`
    #[must_use]
    pub fn new(id: impl Into<String>, kind: InputKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            constraints: Vec::new(),
            value: String::new(),
            validity: FieldValidityState::default(),
            shown: None,
        }
    }

    /// With a distinct `name` attribute
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With an additional constraint
    #[inline]
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// With an initial value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Control id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Control name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input type
    #[inline]
    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Declared constraints
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Current value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value without emitting events
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether `key` names this control by id or by name
    #[inline]
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key
    }

    /// Custom validity state
    #[inline]
    #[must_use]
    pub fn validity(&self) -> &FieldValidityState {
        &self.validity
    }

    /// Mutable custom validity state
    #[inline]
    pub fn validity_mut(&mut self) -> &mut FieldValidityState {
        &mut self.validity
    }

    /// Set the custom validity message; an empty message clears it
    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.validity.message = message.into();
    }

    /// Message the validity UI would show, if the control is invalid
    ///
    /// A custom message wins over constraint violations, as in the browser.
    #[must_use]
    pub fn validation_message(&self) -> Option<String> {
        if self.validity.is_set() {
            return Some(self.validity.message.clone());
        }
        self.constraints
            .iter()
            .find_map(|c| c.violation(&self.value))
            .or_else(|| self.kind.violation(&self.value))
    }

    /// Whether the control satisfies its constraints and has no custom error
    #[inline]
    #[must_use]
    pub fn check_validity(&self) -> bool {
        self.validation_message().is_none()
    }

    /// Refresh the validity UI and return whether the control is valid
    pub fn report_validity(&mut self) -> bool {
        self.shown = self.validation_message();
        self.shown.is_none()
    }

    /// Message currently displayed by the validity UI
    #[inline]
    #[must_use]
    pub fn shown_message(&self) -> Option<&str> {
        self.shown.as_deref()
    }
}
