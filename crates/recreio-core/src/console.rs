//! Terminal stand-in for the browser page

use parking_lot::Mutex;
use recreio_form::Host;
use std::io::Write;

/// [`Host`] that prints alerts and navigations
///
/// Remembers the last route so callers can tell whether the page navigated.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    location: Mutex<Option<String>>,
}

impl ConsoleHost {
    /// Create console host
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route of the last navigation
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.location.lock().clone()
    }
}

impl Host for ConsoleHost {
    fn alert(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "[alerta] {message}");
    }

    fn replace_location(&self, route: &str) {
        *self.location.lock() = Some(route.to_string());
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "[navegação] {route}");
    }
}
