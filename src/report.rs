//! Violation reporting.
//!
//! Checks never panic on a failed assertion; they push a [`Violation`] into
//! a [`ReportSink`] and keep probing, so one broken guarantee does not hide
//! the rest. [`ViolationLog`] is the provided collecting sink; closures work
//! too for custom routing (a test harness, a CI artifact writer).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recorded contract violation.
///
/// Carries the subject's human-readable name and a description of the
/// guarantee that was broken, with expected/actual values where the check
/// has them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the subject under test, as supplied by the caller
    pub subject: String,
    /// Which guarantee was broken
    pub message: String,
}

impl Violation {
    /// Creates a new violation record.
    #[must_use]
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Sink for contract violations.
///
/// Implemented by [`ViolationLog`] and, through a blanket impl, by any
/// `FnMut(Violation)` closure:
///
/// ```
/// use comprobar::{ReportSink, Violation};
///
/// let mut seen = Vec::new();
/// let mut sink = |v: Violation| seen.push(v.to_string());
/// sink.report(Violation::new("ridge", "example violation"));
/// assert_eq!(seen, vec!["ridge: example violation"]);
/// ```
pub trait ReportSink {
    /// Records one violation.
    fn report(&mut self, violation: Violation);
}

impl<F: FnMut(Violation)> ReportSink for F {
    fn report(&mut self, violation: Violation) {
        self(violation);
    }
}

/// In-memory violation collector, the usual sink for test code.
///
/// # Examples
///
/// ```
/// use comprobar::{ReportSink, Violation, ViolationLog};
///
/// let mut log = ViolationLog::new();
/// log.report(Violation::new("lasso", "round trip lost values"));
///
/// assert_eq!(log.len(), 1);
/// assert!(!log.is_empty());
/// assert_eq!(log.violations()[0].subject, "lasso");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationLog {
    violations: Vec<Violation>,
}

impl ViolationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations, in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Asserts that no violation was recorded.
    ///
    /// The one-call ending for a conformance test: passes silently on an
    /// empty log, otherwise panics with the full listing.
    ///
    /// # Panics
    ///
    /// Panics if any violation was recorded.
    #[track_caller]
    pub fn assert_clean(&self) {
        assert!(self.is_empty(), "contract violations:\n{self}");
    }
}

impl ReportSink for ViolationLog {
    fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl fmt::Display for ViolationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }
        Ok(())
    }
}
