//! Gate between the engine and the injected layout logger.

use cutlist_core::LayoutLogger;

/// Forwards trace messages to a [`LayoutLogger`] when logging is enabled.
///
/// Messages are built lazily so a disabled trace costs nothing.
#[derive(Clone, Copy)]
pub struct Trace<'a> {
    logger: &'a dyn LayoutLogger,
    enabled: bool,
}

impl<'a> Trace<'a> {
    pub fn new(logger: &'a dyn LayoutLogger, enabled: bool) -> Self {
        Self { logger, enabled }
    }

    pub fn line(&self, message: impl FnOnce() -> String) {
        if self.enabled {
            self.logger.log_line(&message());
        }
    }

    pub fn warning(&self, message: impl FnOnce() -> String) {
        if self.enabled {
            self.logger.log_warning(&message());
        }
    }
}
