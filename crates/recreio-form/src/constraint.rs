//! Native constraint validation
//!
//! Mirrors the subset of HTML constraint validation the account forms rely on.
//! Empty values only ever fail `Required`; length and type checks skip them.

use once_cell::sync::Lazy;
use regex::Regex;

/// WHATWG "valid e-mail address" production
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static e-mail pattern compiles")
});

/// Input type of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    /// Free text
    #[default]
    Text,
    /// E-mail address (type mismatch when malformed)
    Email,
    /// Password (never echoed by front ends)
    Password,
}

impl InputKind {
    /// Type-mismatch message for `value`, if any
    #[must_use]
    pub fn violation(self, value: &str) -> Option<String> {
        match self {
            Self::Email if !value.is_empty() && !EMAIL.is_match(value) => {
                Some("Insira um endereço de e-mail válido.".to_string())
            }
            _ => None,
        }
    }

    /// Whether front ends should mask the value
    #[inline]
    #[must_use]
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Declarative constraint attached to a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Value must not be empty
    Required,
    /// Minimum number of characters
    MinLength(usize),
    /// Maximum number of characters
    MaxLength(usize),
}

impl Constraint {
    /// Violation message for `value`, if the constraint fails
    #[must_use]
    pub fn violation(self, value: &str) -> Option<String> {
        let len = value.chars().count();
        match self {
            Self::Required if value.is_empty() => Some("Preencha este campo.".to_string()),
            Self::MinLength(min) if len > 0 && len < min => Some(format!(
                "Use pelo menos {min} caracteres (atualmente, {len})."
            )),
            Self::MaxLength(max) if len > max => {
                Some(format!("Use no máximo {max} caracteres (atualmente, {len})."))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fails_only_on_empty() {
        assert!(Constraint::Required.violation("").is_some());
        assert!(Constraint::Required.violation(" ").is_none());
    }

    #[test]
    fn length_constraints_skip_empty_values() {
        assert!(Constraint::MinLength(8).violation("").is_none());
        assert!(Constraint::MinLength(8).violation("abc").is_some());
        assert!(Constraint::MinLength(8).violation("abcdefgh").is_none());
        assert!(Constraint::MaxLength(3).violation("abcd").is_some());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(Constraint::MaxLength(4).violation("ação").is_none());
    }

    #[test]
    fn email_type_mismatch() {
        assert!(InputKind::Email.violation("ana@example.com").is_none());
        assert!(InputKind::Email.violation("ana.example.com").is_some());
        assert!(InputKind::Email.violation("").is_none());
        assert!(InputKind::Text.violation("not an email").is_none());
    }
}
