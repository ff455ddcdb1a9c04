//! Diagnostic trace channel for layout runs.

/// Receives a human-readable trace of placement decisions.
///
/// Implementations must not influence the run: a [`NoopLogger`] and any other
/// logger produce identical results.
pub trait LayoutLogger {
    /// Records an informational trace line.
    fn log_line(&self, message: &str);

    /// Records a warning, e.g. a piece that could not be placed.
    fn log_warning(&self, message: &str);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl LayoutLogger for NoopLogger {
    fn log_line(&self, _message: &str) {}

    fn log_warning(&self, _message: &str) {}
}

/// Forwards trace lines to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LayoutLogger for LogFacade {
    fn log_line(&self, message: &str) {
        log::info!("{}", message);
    }

    fn log_warning(&self, message: &str) {
        log::warn!("{}", message);
    }
}

impl<L: LayoutLogger + ?Sized> LayoutLogger for &L {
    fn log_line(&self, message: &str) {
        (**self).log_line(message)
    }

    fn log_warning(&self, message: &str) {
        (**self).log_warning(message)
    }
}

impl<L: LayoutLogger + ?Sized> LayoutLogger for Box<L> {
    fn log_line(&self, message: &str) {
        (**self).log_line(message)
    }

    fn log_warning(&self, message: &str) {
        (**self).log_warning(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        lines: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
    }

    impl LayoutLogger for Recorder {
        fn log_line(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }

        fn log_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_forwarding_through_references() {
        let recorder = Recorder::default();
        {
            let by_ref: &dyn LayoutLogger = &recorder;
            by_ref.log_line("sheet 1 complete");
            (&by_ref).log_warning("piece too large");
        }
        assert_eq!(recorder.lines.borrow().as_slice(), ["sheet 1 complete"]);
        assert_eq!(recorder.warnings.borrow().as_slice(), ["piece too large"]);
    }

    #[test]
    fn test_noop_and_facade_accept_messages() {
        NoopLogger.log_line("ignored");
        NoopLogger.log_warning("ignored");
        LogFacade.log_line("info");
        LogFacade.log_warning("warn");
    }
}
