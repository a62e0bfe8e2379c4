//! Error types for the form model

/// Errors raised while building or driving a form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No control matches the key by id or by name
    #[error("no control with id or name '{0}'")]
    UnknownField(String),

    /// A control with the same id or name already exists
    #[error("duplicate control: '{0}'")]
    DuplicateField(String),
}

impl FormError {
    /// Key the error refers to
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownField(key) | Self::DuplicateField(key) => key,
        }
    }
}
