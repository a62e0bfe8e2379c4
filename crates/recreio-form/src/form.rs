//! Forms, their controls and the submit button
//!
//! A [`Form`] splits into [`FormControls`] (controls plus their listeners) and a
//! [`SubmitButton`], so a submission can hold the button's [`SubmittingGuard`]
//! while the feedback layer annotates controls.

use crate::error::FormError;
use crate::field::{Field, FieldEvent};
use crate::listener::{Disposer, Handler, Listeners};

/// Snapshot of the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    /// Whether the button ignores clicks
    pub disabled: bool,
    /// Display label
    pub label: String,
}

/// The control that submits a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    state: SubmitButtonState,
}

impl SubmitButton {
    /// Enabled button with `label`
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: SubmitButtonState {
                disabled: false,
                label: label.into(),
            },
        }
    }

    /// Whether the button is disabled
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    /// Current label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.state.label
    }

    /// Copy of the current state
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> SubmitButtonState {
        self.state.clone()
    }

    /// Disable the button, optionally relabel it, and restore it when the guard drops
    pub fn begin_submitting(&mut self, label: Option<&str>) -> SubmittingGuard<'_> {
        let saved = self.snapshot();
        self.state.disabled = true;
        if let Some(label) = label {
            self.state.label = label.to_string();
        }
        SubmittingGuard {
            button: self,
            saved,
        }
    }
}

/// Restores the submit button to its pre-submission state on drop
///
/// Dropping is the only restore path, so restoration happens exactly once on
/// every exit: normal return, early return, panic unwinding or a cancelled future.
#[derive(Debug)]
#[must_use = "dropping the guard immediately re-enables the button"]
pub struct SubmittingGuard<'a> {
    button: &'a mut SubmitButton,
    saved: SubmitButtonState,
}

impl SubmittingGuard<'_> {
    /// State that will be restored
    #[inline]
    #[must_use]
    pub fn saved(&self) -> &SubmitButtonState {
        &self.saved
    }

    /// State while submitting
    #[inline]
    #[must_use]
    pub fn current(&self) -> &SubmitButtonState {
        &self.button.state
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.button.state = self.saved.clone();
    }
}

/// Controls of one form together with their listeners
#[derive(Debug, Default)]
pub struct FormControls {
    fields: Vec<Field>,
    listeners: Listeners,
}

impl FormControls {
    /// Index of the control matching `key` by id or name
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.matches(key))
    }

    /// Control matching `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.matches(key))
    }

    /// Mutable control matching `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.matches(key))
    }

    /// Whether a control matches `key`
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Value of the control matching `key`
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Field::value)
    }

    /// All controls in document order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of controls
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no controls
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a control
    ///
    /// # Errors
    /// `FormError::DuplicateField` if its id or name is already taken
    pub fn add(&mut self, field: Field) -> Result<usize, FormError> {
        for key in [field.id(), field.name()] {
            if self.contains(key) {
                return Err(FormError::DuplicateField(key.to_string()));
            }
        }
        self.fields.push(field);
        Ok(self.fields.len() - 1)
    }

    /// Register a listener on the control matching `key`
    ///
    /// # Errors
    /// `FormError::UnknownField` if no control matches
    pub fn listen(
        &mut self,
        key: &str,
        events: &[FieldEvent],
        once: bool,
        handler: Handler,
    ) -> Result<Disposer, FormError> {
        let index = self.require(key)?;
        Ok(self.listeners.register(index, events, once, handler))
    }

    /// Remove a listener; `false` if it already fired or was disposed
    pub fn dispose(&mut self, disposer: Disposer) -> bool {
        self.listeners.dispose(disposer)
    }

    /// Whether the listener behind `disposer` is still registered
    #[must_use]
    pub fn is_listening(&self, disposer: Disposer) -> bool {
        self.listeners.is_active(disposer)
    }

    /// Number of listeners on the control matching `key`
    #[must_use]
    pub fn listener_count(&self, key: &str) -> usize {
        self.position(key)
            .map_or(0, |index| self.listeners.count_for(index))
    }

    /// User typed into a control: update its value and emit `Input`
    ///
    /// Returns the number of handlers that ran.
    ///
    /// # Errors
    /// `FormError::UnknownField` if no control matches
    pub fn input(&mut self, key: &str, value: impl Into<String>) -> Result<usize, FormError> {
        let index = self.require(key)?;
        self.fields[index].set_value(value);
        Ok(self.emit(index, FieldEvent::Input))
    }

    /// User committed a control: emit `Change`
    ///
    /// # Errors
    /// `FormError::UnknownField` if no control matches
    pub fn change(&mut self, key: &str) -> Result<usize, FormError> {
        let index = self.require(key)?;
        Ok(self.emit(index, FieldEvent::Change))
    }

    /// Whether every control is valid
    #[must_use]
    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(Field::check_validity)
    }

    /// Show the validity UI on the first invalid control
    ///
    /// Returns `true` if every control is valid.
    pub fn report_validity(&mut self) -> bool {
        match self.fields.iter_mut().find(|f| !f.check_validity()) {
            Some(field) => {
                field.report_validity();
                false
            }
            None => true,
        }
    }

    fn require(&self, key: &str) -> Result<usize, FormError> {
        self.position(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    fn emit(&mut self, index: usize, event: FieldEvent) -> usize {
        let Self { fields, listeners } = self;
        listeners.fire(index, event, &mut fields[index])
    }
}

/// A form: its controls and its submit button
#[derive(Debug)]
pub struct Form {
    id: String,
    controls: FormControls,
    submit: SubmitButton,
}

impl Form {
    /// Empty form whose submit button reads `label`
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            controls: FormControls::default(),
            submit: SubmitButton::new(label),
        }
    }

    /// With an additional control
    ///
    /// # Errors
    /// `FormError::DuplicateField` if its id or name is already taken
    pub fn with_field(mut self, field: Field) -> Result<Self, FormError> {
        self.controls.add(field)?;
        Ok(self)
    }

    /// Form id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Controls
    #[inline]
    #[must_use]
    pub fn controls(&self) -> &FormControls {
        &self.controls
    }

    /// Mutable controls
    #[inline]
    pub fn controls_mut(&mut self) -> &mut FormControls {
        &mut self.controls
    }

    /// Submit button
    #[inline]
    #[must_use]
    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit
    }

    /// Mutable submit button
    #[inline]
    pub fn submit_button_mut(&mut self) -> &mut SubmitButton {
        &mut self.submit
    }

    /// Borrow controls and submit button independently
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut FormControls, &mut SubmitButton) {
        (&mut self.controls, &mut self.submit)
    }

    /// Control matching `key`
    #[inline]
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.controls.get(key)
    }

    /// Value of the control matching `key`
    #[inline]
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.controls.value(key)
    }

    /// See [`FormControls::input`]
    ///
    /// # Errors
    /// `FormError::UnknownField` if no control matches
    #[inline]
    pub fn input(&mut self, key: &str, value: impl Into<String>) -> Result<usize, FormError> {
        self.controls.input(key, value)
    }

    /// See [`FormControls::change`]
    ///
    /// # Errors
    /// `FormError::UnknownField` if no control matches
    #[inline]
    pub fn change(&mut self, key: &str) -> Result<usize, FormError> {
        self.controls.change(key)
    }

    /// See [`FormControls::check_validity`]
    #[inline]
    #[must_use]
    pub fn check_validity(&self) -> bool {
        self.controls.check_validity()
    }

    /// See [`FormControls::report_validity`]
    #[inline]
    pub fn report_validity(&mut self) -> bool {
        self.controls.report_validity()
    }
}
