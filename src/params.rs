//! The parameter-access conformance check.
//!
//! [`check_parameters`] probes one subject through the full
//! [`Parameterized`] contract: baseline read, length, agreement between the
//! allocating and buffer-filling read paths, aliasing on the read path,
//! copy semantics on the write path, round trip, and the bounds probes that
//! must panic. Build a [`ParameterCheck`] instead to pin the random seed or
//! to keep a panicking baseline read contained.

use serde::{Deserialize, Serialize};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::guard::{self, PanicPolicy};
use crate::report::{ReportSink, Violation};
use crate::traits::Parameterized;

/// Configured parameter-contract check.
///
/// # Examples
///
/// ```
/// use comprobar::{PanicPolicy, ParameterCheck, Parameterized, ViolationLog};
///
/// struct Empty;
///
/// impl Parameterized for Empty {
///     fn num_parameters(&self) -> usize {
///         0
///     }
///     fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
///         let out = into.unwrap_or_default();
///         assert!(out.is_empty(), "parameter buffer length mismatch");
///         out
///     }
///     fn set_parameters(&mut self, params: &[f32]) {
///         assert!(params.is_empty(), "parameter buffer length mismatch");
///     }
/// }
///
/// let check = ParameterCheck::new()
///     .with_random_state(42)
///     .with_panic_policy(PanicPolicy::Suppress);
///
/// let mut log = ViolationLog::new();
/// check.run(&mut Empty, "empty", &mut log);
/// log.assert_clean();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterCheck {
    /// Policy for a panic caught during the baseline read
    policy: PanicPolicy,
    /// Seed for the perturbation values; entropy-seeded when `None`
    random_state: Option<u64>,
}

impl ParameterCheck {
    /// Creates a check with [`PanicPolicy::Resume`] and entropy seeding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for a panic caught during the baseline read.
    #[must_use]
    pub fn with_panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seeds the perturbation values for reproducible runs.
    ///
    /// The probes only need values that differ from the stored parameters
    /// with overwhelming probability, so seeding is optional; pin it when a
    /// deterministic failure listing matters.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Runs the check, reporting every violated guarantee to `sink`.
    ///
    /// Probe order (later probes depend on earlier guarantees holding):
    ///
    /// 1. `parameters(None)` baseline read. A panic here is reported, then
    ///    re-raised under [`PanicPolicy::Resume`]; either way the check
    ///    ends, since no later probe is meaningful without a baseline.
    /// 2. The baseline length must equal `num_parameters()`.
    /// 3. `parameters(Some(_))` with a correctly sized buffer must agree
    ///    with the baseline element for element.
    /// 4. After the verifier overwrites its own copies with random values,
    ///    a fresh `parameters(None)` must still equal the baseline.
    /// 5. `set_parameters` must not mutate the buffer passed to it.
    /// 6. Reading back after `set_parameters` must return exactly the
    ///    values written.
    /// 7. Both operations must panic for a buffer of length
    ///    `num_parameters() + 3` and, when the count is nonzero, for one of
    ///    length `num_parameters() - 1`.
    ///
    /// A mismatch reports and moves on; only the step-1 panic aborts. The
    /// subject is left holding the random vector written in step 6.
    pub fn run<S, R>(&self, subject: &mut S, name: &str, sink: &mut R)
    where
        S: Parameterized + ?Sized,
        R: ReportSink + ?Sized,
    {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let baseline = match guard::capture(|| subject.parameters(None)) {
            Ok(values) => values,
            Err(payload) => {
                sink.report(Violation::new(
                    name,
                    "parameters(None) panicked during the baseline read",
                ));
                if self.policy == PanicPolicy::Resume {
                    std::panic::resume_unwind(payload);
                }
                return;
            }
        };

        let n = subject.num_parameters();
        if baseline.len() != n {
            sink.report(Violation::new(
                name,
                format!(
                    "parameters(None) returned {} values, want num_parameters() = {n}",
                    baseline.len()
                ),
            ));
        }

        // Verifier-side snapshot; the aliasing probe compares against it.
        let snapshot = baseline.clone();

        let mut perturbed = subject.parameters(Some(vec![0.0; n]));
        if perturbed != baseline {
            sink.report(Violation::new(
                name,
                "parameters(None) and parameters(Some(_)) returned different values",
            ));
        }

        for value in &mut perturbed {
            *value = standard_normal(&mut rng);
        }

        // The returned vectors are the caller's; mutating them must not
        // show up in a fresh read.
        if subject.parameters(None) != snapshot {
            sink.report(Violation::new(
                name,
                "mutating a returned parameter vector changed a subsequent parameters(None) read",
            ));
        }

        let written = perturbed.clone();
        subject.set_parameters(&written);
        if written != perturbed {
            sink.report(Violation::new(
                name,
                "set_parameters() mutated the buffer passed to it",
            ));
        }

        if subject.parameters(None) != written {
            sink.report(Violation::new(
                name,
                "parameters(None) after set_parameters() did not return the values written",
            ));
        }

        // Wrong-length buffers must fail loudly, never truncate or extend.
        let too_long = vec![0.0; n + 3];
        if !guard::panics(|| {
            subject.parameters(Some(too_long.clone()));
        }) {
            sink.report(Violation::new(
                name,
                format!(
                    "parameters() did not panic for a buffer of length {}, want num_parameters() = {n}",
                    n + 3
                ),
            ));
        }
        if !guard::panics(|| subject.set_parameters(&too_long)) {
            sink.report(Violation::new(
                name,
                format!(
                    "set_parameters() did not panic for a buffer of length {}, want num_parameters() = {n}",
                    n + 3
                ),
            ));
        }

        if n == 0 {
            // No length below zero exists to construct; only the oversized
            // probe is meaningful here.
            return;
        }

        let too_short = vec![0.0; n - 1];
        if !guard::panics(|| {
            subject.parameters(Some(too_short.clone()));
        }) {
            sink.report(Violation::new(
                name,
                format!(
                    "parameters() did not panic for a buffer of length {}, want num_parameters() = {n}",
                    n - 1
                ),
            ));
        }
        if !guard::panics(|| subject.set_parameters(&too_short)) {
            sink.report(Violation::new(
                name,
                format!(
                    "set_parameters() did not panic for a buffer of length {}, want num_parameters() = {n}",
                    n - 1
                ),
            ));
        }
    }
}

/// Checks `subject` against the full parameter contract with the default
/// configuration: entropy-seeded perturbation and [`PanicPolicy::Resume`].
///
/// # Examples
///
/// ```
/// use comprobar::{check_parameters, Parameterized, ViolationLog};
///
/// struct Bias {
///     value: [f32; 1],
/// }
///
/// impl Parameterized for Bias {
///     fn num_parameters(&self) -> usize {
///         1
///     }
///     fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
///         let mut out = into.unwrap_or_else(|| vec![0.0]);
///         assert_eq!(out.len(), 1, "parameter buffer length mismatch");
///         out.copy_from_slice(&self.value);
///         out
///     }
///     fn set_parameters(&mut self, params: &[f32]) {
///         assert_eq!(params.len(), 1, "parameter buffer length mismatch");
///         self.value.copy_from_slice(params);
///     }
/// }
///
/// let mut log = ViolationLog::new();
/// check_parameters(&mut Bias { value: [0.0] }, "bias", &mut log);
/// log.assert_clean();
/// ```
pub fn check_parameters<S, R>(subject: &mut S, name: &str, sink: &mut R)
where
    S: Parameterized + ?Sized,
    R: ReportSink + ?Sized,
{
    ParameterCheck::new().run(subject, name, sink);
}

/// Standard-normal draw via the Box-Muller transform.
fn standard_normal(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen_range(0.0001_f32..1.0_f32);
    let u2: f32 = rng.gen_range(0.0_f32..1.0_f32);
    (-2.0_f32 * u1.ln()).sqrt() * (2.0_f32 * std::f32::consts::PI * u2).cos()
}


#[cfg(test)]
#[path = "tests_params_contract.rs"]
mod tests_params_contract;
