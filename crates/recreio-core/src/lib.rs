//! Recreio Core - account form submission pipeline
//!
//! Everything between a submit action and what the user sees:
//! - Intercepts submits (re-entrancy, native validity, confirmation pairs)
//! - Holds the submitting state of the button while a request is in flight
//! - Dispatches through a [`recreio_client::Transport`] and classifies the response
//! - Presents field-level, bulk and page-level feedback
//! - Navigates on success
//!
//! Also hosts the small page components (site header, game catalog search)
//! and the configuration the `recreio` binary runs with.
//!
//! # Example
//!
//! ```rust,ignore
//! use recreio_core::{AccountForm, ConsoleHost, SiteConfig, SubmissionPipeline};
//! use recreio_client::HttpTransport;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SiteConfig::new();
//! let transport = Arc::new(HttpTransport::new(&config.client)?);
//! let pipeline = SubmissionPipeline::new(transport, Arc::new(ConsoleHost::new()), config.messages);
//!
//! let spec = AccountForm::Login.spec();
//! let mut form = spec.build_form()?;
//! form.input("email", "ana@example.com")?;
//! form.input("password", "Senha123!")?;
//!
//! let report = pipeline.submit(&mut form, &spec).await;
//! println!("{}", report.kind);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod component;
pub mod config;
pub mod console;
pub mod error;
pub mod forms;
pub mod interceptor;
pub mod logging;
pub mod pipeline;
pub mod presenter;

pub use catalog::{CatalogSearch, CatalogView, Game, GameCatalog};
pub use component::{AppHeader, Component, HeaderProps};
pub use config::{Messages, SiteConfig};
pub use console::ConsoleHost;
pub use error::{ConfigError, HeaderError};
pub use forms::{AccountForm, Confirmation, FieldSpec, FormSpec, MessageTarget, SuccessAction};
pub use interceptor::{Interception, SubmitInterceptor};
pub use pipeline::{OutcomeKind, SubmissionPipeline, SubmitReport};
pub use presenter::{FeedbackPresenter, Placement};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for wiring a submission pipeline
    pub use crate::{
        AccountForm, FeedbackPresenter, FormSpec, Messages, OutcomeKind, SiteConfig,
        SubmissionPipeline, SubmitReport,
    };
    pub use recreio_client::{HttpTransport, Transport};
    pub use recreio_form::{Form, Host};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
