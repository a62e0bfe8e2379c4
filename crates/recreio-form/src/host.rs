//! Page-level environment seam

use std::sync::Arc;

/// The page a form lives in
///
/// Implementations decide how alerts are shown and how navigation happens;
/// the pipeline only ever replaces the current history entry.
pub trait Host: Send + Sync {
    /// Show a blocking, page-level notification
    fn alert(&self, message: &str);

    /// Navigate to `route`, replacing the current history entry
    fn replace_location(&self, route: &str);
}

impl<H: Host + ?Sized> Host for Arc<H> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn replace_location(&self, route: &str) {
        (**self).replace_location(route);
    }
}
