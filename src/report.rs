//! Diagnostic Reporting
//!
//! The driver never logs on its own behalf to a fixed sink. Conditions the
//! host should hear about (faults on an established link, recovery failures,
//! transport errors swallowed by [`get_state`](crate::pcs::PcsOps::get_state))
//! are handed to a [`Reporter`] supplied at construction.
//!
//! Any `FnMut(Severity, &str)` closure is a reporter:
//!
//! ```ignore
//! let xpcs = Xpcs::with_reporter(0, delay, |severity, msg: &str| {
//!     defmt::info!("xpcs {}: {}", severity, msg);
//! });
//! ```

/// Severity of a reported condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// Informational
    Info,
    /// Degraded but operational
    Warning,
    /// Operation failed
    Error,
}

impl Severity {
    /// Short lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for driver diagnostics
pub trait Reporter {
    /// Deliver one diagnostic message
    fn report(&mut self, severity: Severity, message: &str);
}

impl<F: FnMut(Severity, &str)> Reporter for F {
    fn report(&mut self, severity: Severity, message: &str) {
        self(severity, message);
    }
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _severity: Severity, _message: &str) {}
}
