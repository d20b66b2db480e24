//! End-to-end conformance runs against small reference models.
//!
//! Each test drives the public API the way a model crate's suite would:
//! implement the traits, run the checks, inspect the log.

use comprobar::prelude::*;

/// Linear map with a flat parameter vector, one output.
struct Linear {
    weights: Vec<f32>,
}

impl Linear {
    fn zeros(n: usize) -> Self {
        Self {
            weights: vec![0.0; n],
        }
    }
}

impl Parameterized for Linear {
    fn num_parameters(&self) -> usize {
        self.weights.len()
    }

    fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
        let mut out = match into {
            Some(buf) => {
                assert_eq!(buf.len(), self.weights.len(), "buffer length mismatch");
                buf
            }
            None => vec![0.0; self.weights.len()],
        };
        out.copy_from_slice(&self.weights);
        out
    }

    fn set_parameters(&mut self, params: &[f32]) {
        assert_eq!(params.len(), self.weights.len(), "buffer length mismatch");
        self.weights.copy_from_slice(params);
    }
}

impl Dimensioned for Linear {
    fn input_dim(&self) -> usize {
        self.weights.len()
    }

    fn output_dim(&self) -> usize {
        1
    }
}

/// Reports whatever shape it was built with.
struct Projection {
    input: usize,
    output: usize,
}

impl Dimensioned for Projection {
    fn input_dim(&self) -> usize {
        self.input
    }

    fn output_dim(&self) -> usize {
        self.output
    }
}

/// Accepts any buffer length, quietly copying what fits.
struct Truncating {
    weights: Vec<f32>,
}

impl Parameterized for Truncating {
    fn num_parameters(&self) -> usize {
        self.weights.len()
    }

    fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
        let mut out = into.unwrap_or_else(|| vec![0.0; self.weights.len()]);
        let shared = out.len().min(self.weights.len());
        out[..shared].copy_from_slice(&self.weights[..shared]);
        out
    }

    fn set_parameters(&mut self, params: &[f32]) {
        let shared = params.len().min(self.weights.len());
        self.weights[..shared].copy_from_slice(&params[..shared]);
    }
}

#[test]
fn fresh_zero_model_passes_the_parameter_check() {
    let mut model = Linear::zeros(3);
    let mut log = ViolationLog::new();
    check_parameters(&mut model, "linear", &mut log);
    log.assert_clean();
}

#[test]
fn set_parameters_round_trips_exact_values() {
    let mut model = Linear::zeros(3);
    let mut log = ViolationLog::new();
    check_parameters(&mut model, "linear", &mut log);
    log.assert_clean();

    model.set_parameters(&[1.5, -2.0, 0.25]);
    assert_eq!(model.parameters(None), vec![1.5, -2.0, 0.25]);
}

#[test]
#[should_panic(expected = "buffer length mismatch")]
fn oversized_read_buffer_panics() {
    let model = Linear::zeros(3);
    let _ = model.parameters(Some(vec![0.0; 5]));
}

#[test]
#[should_panic(expected = "buffer length mismatch")]
fn undersized_write_buffer_panics() {
    let mut model = Linear::zeros(3);
    model.set_parameters(&[0.0, 0.0]);
}

#[test]
fn matching_dimensions_pass() {
    let model = Linear::zeros(4);
    let mut log = ViolationLog::new();
    check_dimensions(&model, "linear", 4, 1, &mut log);
    log.assert_clean();
}

#[test]
fn output_mismatch_is_flagged_once_with_output_values() {
    let subject = Projection {
        input: 4,
        output: 1,
    };
    let mut log = ViolationLog::new();
    check_dimensions(&subject, "projection", 4, 2, &mut log);

    assert_eq!(log.len(), 1);
    assert_eq!(
        log.violations()[0].message,
        "output dimension mismatch: expected 2, found 1"
    );
}

#[test]
fn both_dimension_mismatches_are_reported_in_order() {
    let subject = Projection {
        input: 3,
        output: 2,
    };
    let mut log = ViolationLog::new();
    check_dimensions(&subject, "projection", 4, 1, &mut log);

    assert_eq!(log.len(), 2);
    assert!(log.violations()[0].message.starts_with("input dimension mismatch"));
    assert!(log.violations()[1].message.starts_with("output dimension mismatch"));
}

#[test]
fn truncating_subject_fails_every_bounds_probe() {
    let mut model = Truncating {
        weights: vec![0.0; 3],
    };
    let mut log = ViolationLog::new();
    check_parameters(&mut model, "truncating", &mut log);

    assert_eq!(log.len(), 4, "unexpected violations:\n{log}");
    for violation in log.violations() {
        assert_eq!(violation.subject, "truncating");
        assert!(violation.message.contains("did not panic"));
    }
}

#[test]
fn closure_sinks_collect_violations() {
    let subject = Projection {
        input: 3,
        output: 2,
    };
    let mut seen: Vec<Violation> = Vec::new();
    check_dimensions(&subject, "projection", 4, 1, &mut |violation: Violation| {
        seen.push(violation);
    });

    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|v| v.subject == "projection"));
}

#[test]
fn both_checks_share_one_log() {
    let mut model = Linear::zeros(3);
    let mut log = ViolationLog::new();

    check_parameters(&mut model, "linear", &mut log);
    check_dimensions(&model, "linear", 3, 1, &mut log);

    log.assert_clean();
}

#[test]
fn boxed_subjects_run_through_dyn() {
    let mut boxed: Box<dyn Parameterized> = Box::new(Linear::zeros(2));
    let mut log = ViolationLog::new();
    check_parameters(&mut *boxed, "boxed", &mut log);
    log.assert_clean();
}

#[test]
fn nan_parameters_break_exact_comparison() {
    // Equality is exact IEEE comparison, so a NaN-holding subject cannot
    // pass the read-stability probes even when its plumbing is correct.
    let mut model = Linear {
        weights: vec![f32::NAN, 1.0],
    };
    let mut log = ViolationLog::new();
    check_parameters(&mut model, "nan", &mut log);

    assert_eq!(log.len(), 2, "unexpected violations:\n{log}");
    assert!(log.violations()[0]
        .message
        .contains("returned different values"));
    assert!(log.violations()[1]
        .message
        .contains("changed a subsequent parameters(None) read"));
}

#[test]
fn log_serializes_for_test_artifacts() {
    let subject = Projection {
        input: 3,
        output: 2,
    };
    let mut log = ViolationLog::new();
    check_dimensions(&subject, "projection", 4, 1, &mut log);

    let json = serde_json::to_string(&log).expect("log serializes");
    let restored: ViolationLog = serde_json::from_str(&json).expect("log deserializes");
    assert_eq!(restored, log);

    assert_eq!(
        log.to_string(),
        "projection: input dimension mismatch: expected 4, found 3\n\
         projection: output dimension mismatch: expected 1, found 2\n"
    );
}

#[test]
#[should_panic(expected = "contract violations")]
fn assert_clean_fails_loudly_on_a_dirty_log() {
    let subject = Projection {
        input: 3,
        output: 1,
    };
    let mut log = ViolationLog::new();
    check_dimensions(&subject, "projection", 4, 1, &mut log);
    log.assert_clean();
}

#[test]
fn suppressed_subject_panic_does_not_stop_the_suite() {
    struct Poisoned;

    impl Parameterized for Poisoned {
        fn num_parameters(&self) -> usize {
            1
        }

        fn parameters(&self, _into: Option<Vec<f32>>) -> Vec<f32> {
            panic!("poisoned state");
        }

        fn set_parameters(&mut self, _params: &[f32]) {}
    }

    let mut log = ViolationLog::new();
    let check = ParameterCheck::new().with_panic_policy(PanicPolicy::Suppress);
    check.run(&mut Poisoned, "poisoned", &mut log);
    assert_eq!(log.len(), 1);

    // The next subject is unaffected.
    let mut model = Linear::zeros(2);
    check.run(&mut model, "linear", &mut log);
    assert_eq!(log.len(), 1);
}
