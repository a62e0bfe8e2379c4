//! Recreio Form - headless form model
//!
//! Stands in for the browser DOM of the account pages:
//! - Controls with native constraints (`required`, `minlength`, `maxlength`, `type=email`)
//! - Custom validity messages and the validity UI they drive
//! - Per-control listeners registered with explicit disposers
//! - Submit button state with guaranteed restoration
//! - The [`Host`] seam for page-level alerts and navigation
//!
//! # Example
//!
//! ```rust
//! use recreio_form::{Constraint, Field, FieldEvent, Form, InputKind};
//!
//! let mut form = Form::new("login-form", "Entrar")
//!     .with_field(Field::new("email", InputKind::Email).with_constraint(Constraint::Required))
//!     .unwrap();
//!
//! assert!(!form.check_validity());
//! form.input("email", "ana@example.com").unwrap();
//! assert!(form.check_validity());
//! # let _ = FieldEvent::Input;
//! ```

#![warn(unreachable_pub)]

pub mod constraint;
pub mod error;
pub mod field;
pub mod form;
pub mod host;
pub mod listener;

pub use constraint::{Constraint, InputKind};
pub use error::FormError;
pub use field::{Field, FieldEvent, FieldValidityState};
pub use form::{Form, FormControls, SubmitButton, SubmitButtonState, SubmittingGuard};
pub use host::Host;
pub use listener::{Disposer, Handler, Listeners};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
