//! Scoped panic capture for probing fail-loudly contracts.
//!
//! Everything here wraps a single closure in `catch_unwind`; no
//! process-global state (panic hooks included) is ever touched, so checks
//! on different subjects can run concurrently without interfering.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// What to do with a panic caught during the baseline read.
///
/// Applies only to the probe where a panic is a violation; for the bounds
/// probes the panic is the expected signal and is always consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanicPolicy {
    /// Record the violation, then resume unwinding so the caller's test
    /// process observes the subject's original failure context.
    #[default]
    Resume,
    /// Record the violation and end the check without re-raising.
    Suppress,
}

/// Runs `f`, returning its result or the panic payload.
///
/// Probe closures capture `&mut` subjects, which are not `UnwindSafe`, so
/// the bound is asserted away. The default panic hook still prints for
/// captured panics.
pub fn capture<T>(f: impl FnOnce() -> T) -> Result<T, Box<dyn Any + Send + 'static>> {
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Returns true if `f` panicked. The panic is consumed either way.
pub fn panics(f: impl FnOnce()) -> bool {
    capture(f).is_err()
}
