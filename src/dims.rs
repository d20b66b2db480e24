//! The dimension-reporting conformance check.
//!
//! A thin companion to the parameter check: it compares what a subject
//! reports through [`Dimensioned`] against the shape the caller knows the
//! subject was built for.

use crate::report::{ReportSink, Violation};
use crate::traits::Dimensioned;

/// Checks the reported input and output widths of `subject` against the
/// expected ones.
///
/// The two comparisons are independent; a subject can fail one, the other,
/// or both, and each mismatch is reported on its own with the expected and
/// found values.
///
/// # Examples
///
/// ```
/// use comprobar::{check_dimensions, Dimensioned, ViolationLog};
///
/// struct Regressor;
///
/// impl Dimensioned for Regressor {
///     fn input_dim(&self) -> usize {
///         4
///     }
///     fn output_dim(&self) -> usize {
///         1
///     }
/// }
///
/// let mut log = ViolationLog::new();
/// check_dimensions(&Regressor, "regressor", 4, 1, &mut log);
/// log.assert_clean();
/// ```
pub fn check_dimensions<S, R>(
    subject: &S,
    name: &str,
    expected_input: usize,
    expected_output: usize,
    sink: &mut R,
) where
    S: Dimensioned + ?Sized,
    R: ReportSink + ?Sized,
{
    let found_input = subject.input_dim();
    if found_input != expected_input {
        sink.report(Violation::new(
            name,
            format!("input dimension mismatch: expected {expected_input}, found {found_input}"),
        ));
    }

    let found_output = subject.output_dim();
    if found_output != expected_output {
        sink.report(Violation::new(
            name,
            format!("output dimension mismatch: expected {expected_output}, found {found_output}"),
        ));
    }
}
