// =========================================================================
// FALSIFY-PC: parameter-access contract (comprobar params)
//
// Each test encodes one falsifiable claim about what the check flags and
// what it lets through. A failure message starting with FALSIFIED names
// the claim that fell.
//
// References:
//   - Parameterized trait docs (src/traits.rs) for the contract itself
// =========================================================================

use super::*;
use crate::report::ViolationLog;

/// Stores exactly what it is given and hands back copies.
struct Conforming {
    store: Vec<f32>,
}

impl Conforming {
    fn zeros(n: usize) -> Self {
        Self {
            store: vec![0.0; n],
        }
    }
}

impl Parameterized for Conforming {
    fn num_parameters(&self) -> usize {
        self.store.len()
    }

    fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
        let mut out = match into {
            Some(buf) => {
                assert_eq!(buf.len(), self.store.len(), "buffer length mismatch");
                buf
            }
            None => vec![0.0; self.store.len()],
        };
        out.copy_from_slice(&self.store);
        out
    }

    fn set_parameters(&mut self, params: &[f32]) {
        assert_eq!(params.len(), self.store.len(), "buffer length mismatch");
        self.store.copy_from_slice(params);
    }
}

/// FALSIFY-PC-001: A conforming subject produces no violations at any size
#[test]
fn falsify_pc_001_conforming_subject_is_clean() {
    let mut log = ViolationLog::new();
    for n in [1, 2, 3, 8, 32] {
        let mut subject = Conforming::zeros(n);
        check_parameters(&mut subject, "conforming", &mut log);
    }

    assert!(
        log.is_empty(),
        "FALSIFIED PC-001: conforming subject was flagged:\n{log}"
    );
}

/// FALSIFY-PC-002: A baseline read shorter than num_parameters() is flagged
#[test]
fn falsify_pc_002_baseline_length_mismatch_is_flagged() {
    /// Truncates the allocating read path only.
    struct ShortRead {
        store: Vec<f32>,
    }

    impl Parameterized for ShortRead {
        fn num_parameters(&self) -> usize {
            self.store.len()
        }

        fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
            match into {
                Some(buf) => {
                    assert_eq!(buf.len(), self.store.len(), "buffer length mismatch");
                    let mut out = buf;
                    out.copy_from_slice(&self.store);
                    out
                }
                None => self.store[..self.store.len() - 1].to_vec(),
            }
        }

        fn set_parameters(&mut self, params: &[f32]) {
            assert_eq!(params.len(), self.store.len(), "buffer length mismatch");
            self.store.copy_from_slice(params);
        }
    }

    let mut subject = ShortRead {
        store: vec![0.0; 3],
    };
    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_random_state(11)
        .run(&mut subject, "short_read", &mut log);

    assert!(
        log.violations()
            .iter()
            .any(|v| v.message == "parameters(None) returned 2 values, want num_parameters() = 3"),
        "FALSIFIED PC-002: truncated baseline not flagged:\n{log}"
    );
}

/// FALSIFY-PC-003: Disagreement between the two read paths is flagged
#[test]
fn falsify_pc_003_read_path_disagreement_is_flagged() {
    /// Fills supplied buffers with shifted values.
    struct SplitBrain {
        store: Vec<f32>,
    }

    impl Parameterized for SplitBrain {
        fn num_parameters(&self) -> usize {
            self.store.len()
        }

        fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
            match into {
                Some(buf) => {
                    assert_eq!(buf.len(), self.store.len(), "buffer length mismatch");
                    self.store.iter().map(|w| w + 1.0).collect()
                }
                None => self.store.clone(),
            }
        }

        fn set_parameters(&mut self, params: &[f32]) {
            assert_eq!(params.len(), self.store.len(), "buffer length mismatch");
            self.store.copy_from_slice(params);
        }
    }

    let mut subject = SplitBrain {
        store: vec![0.0; 2],
    };
    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_random_state(11)
        .run(&mut subject, "split_brain", &mut log);

    assert!(
        log.violations().iter().any(
            |v| v.message == "parameters(None) and parameters(Some(_)) returned different values"
        ),
        "FALSIFIED PC-003: read-path disagreement not flagged:\n{log}"
    );
}

/// FALSIFY-PC-004: Reads that change after the caller mutates a returned
/// vector are flagged
#[test]
fn falsify_pc_004_unstable_rereads_are_flagged() {
    use std::cell::Cell;

    /// Returns shifted values from the third read onward.
    struct ReadBump {
        store: Vec<f32>,
        reads: Cell<usize>,
    }

    impl Parameterized for ReadBump {
        fn num_parameters(&self) -> usize {
            self.store.len()
        }

        fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
            self.reads.set(self.reads.get() + 1);
            let bump = if self.reads.get() > 2 { 1.0 } else { 0.0 };
            let mut out = match into {
                Some(buf) => {
                    assert_eq!(buf.len(), self.store.len(), "buffer length mismatch");
                    buf
                }
                None => vec![0.0; self.store.len()],
            };
            for (slot, w) in out.iter_mut().zip(&self.store) {
                *slot = w + bump;
            }
            out
        }

        fn set_parameters(&mut self, params: &[f32]) {
            assert_eq!(params.len(), self.store.len(), "buffer length mismatch");
            self.store.copy_from_slice(params);
        }
    }

    let mut subject = ReadBump {
        store: vec![0.0; 3],
        reads: Cell::new(0),
    };
    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_random_state(11)
        .run(&mut subject, "read_bump", &mut log);

    assert!(
        log.violations().iter().any(|v| v
            .message
            .contains("changed a subsequent parameters(None) read")),
        "FALSIFIED PC-004: unstable re-read not flagged:\n{log}"
    );
}

/// FALSIFY-PC-005: A write that does not round-trip through a read is flagged
#[test]
fn falsify_pc_005_lossy_write_is_flagged() {
    /// Stores half of every value written.
    struct HalfStore {
        store: Vec<f32>,
    }

    impl Parameterized for HalfStore {
        fn num_parameters(&self) -> usize {
            self.store.len()
        }

        fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
            let mut out = match into {
                Some(buf) => {
                    assert_eq!(buf.len(), self.store.len(), "buffer length mismatch");
                    buf
                }
                None => vec![0.0; self.store.len()],
            };
            out.copy_from_slice(&self.store);
            out
        }

        fn set_parameters(&mut self, params: &[f32]) {
            assert_eq!(params.len(), self.store.len(), "buffer length mismatch");
            for (slot, p) in self.store.iter_mut().zip(params) {
                *slot = p * 0.5;
            }
        }
    }

    let mut subject = HalfStore {
        store: vec![0.0; 3],
    };
    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_random_state(11)
        .run(&mut subject, "half_store", &mut log);

    assert!(
        log.violations()
            .iter()
            .any(|v| v.message.contains("did not return the values written")),
        "FALSIFIED PC-005: lossy write not flagged:\n{log}"
    );
}

/// FALSIFY-PC-006: Accepting an oversized buffer is flagged on both paths
#[test]
fn falsify_pc_006_oversized_buffer_acceptance_is_flagged() {
    /// Panics on short buffers but quietly copies a prefix of long ones.
    struct PrefixStore {
        store: Vec<f32>,
    }

    impl Parameterized for PrefixStore {
        fn num_parameters(&self) -> usize {
            self.store.len()
        }

        fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
            let mut out = match into {
                Some(buf) => {
                    assert!(buf.len() >= self.store.len(), "buffer too short");
                    buf
                }
                None => vec![0.0; self.store.len()],
            };
            out[..self.store.len()].copy_from_slice(&self.store);
            out
        }

        fn set_parameters(&mut self, params: &[f32]) {
            assert!(params.len() >= self.store.len(), "buffer too short");
            let n = self.store.len();
            self.store.copy_from_slice(&params[..n]);
        }
    }

    let mut subject = PrefixStore {
        store: vec![0.0; 2],
    };
    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_random_state(11)
        .run(&mut subject, "prefix_store", &mut log);

    assert_eq!(
        log.len(),
        2,
        "FALSIFIED PC-006: expected both oversized probes to flag:\n{log}"
    );
    for violation in log.violations() {
        assert!(
            violation.message.contains("length 5"),
            "FALSIFIED PC-006: unexpected violation: {violation}"
        );
    }
}

/// FALSIFY-PC-007: A zero-parameter subject passes without an underflow probe
#[test]
fn falsify_pc_007_zero_count_subject_is_clean() {
    let mut subject = Conforming::zeros(0);
    let mut log = ViolationLog::new();
    check_parameters(&mut subject, "empty", &mut log);

    assert!(
        log.is_empty(),
        "FALSIFIED PC-007: zero-parameter subject was flagged:\n{log}"
    );
}

/// FALSIFY-PC-008: Suppress contains a baseline panic as a single violation
#[test]
fn falsify_pc_008_suppress_contains_baseline_panic() {
    struct Refusing;

    impl Parameterized for Refusing {
        fn num_parameters(&self) -> usize {
            1
        }

        fn parameters(&self, _into: Option<Vec<f32>>) -> Vec<f32> {
            panic!("no parameters today");
        }

        fn set_parameters(&mut self, _params: &[f32]) {}
    }

    let mut log = ViolationLog::new();
    ParameterCheck::new()
        .with_panic_policy(PanicPolicy::Suppress)
        .run(&mut Refusing, "refusing", &mut log);

    assert_eq!(
        log.len(),
        1,
        "FALSIFIED PC-008: expected exactly one violation:\n{log}"
    );
    assert!(
        log.violations()[0].message.contains("panicked during the baseline read"),
        "FALSIFIED PC-008: wrong violation: {}",
        log.violations()[0]
    );
}

/// FALSIFY-PC-009: Resume re-raises the baseline panic after reporting it
#[test]
fn falsify_pc_009_resume_reraises_baseline_panic() {
    struct Refusing;

    impl Parameterized for Refusing {
        fn num_parameters(&self) -> usize {
            1
        }

        fn parameters(&self, _into: Option<Vec<f32>>) -> Vec<f32> {
            panic!("no parameters today");
        }

        fn set_parameters(&mut self, _params: &[f32]) {}
    }

    let mut log = ViolationLog::new();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        check_parameters(&mut Refusing, "refusing", &mut log);
    }));

    assert!(
        outcome.is_err(),
        "FALSIFIED PC-009: baseline panic was swallowed under Resume"
    );
    assert_eq!(
        log.len(),
        1,
        "FALSIFIED PC-009: violation not recorded before re-raise:\n{log}"
    );
}

/// FALSIFY-PC-010: Equal seeds leave equal parameters behind
#[test]
fn falsify_pc_010_seeded_checks_are_deterministic() {
    let mut first = Conforming::zeros(6);
    let mut second = Conforming::zeros(6);
    let mut log = ViolationLog::new();

    let check = ParameterCheck::new().with_random_state(99);
    check.run(&mut first, "first", &mut log);
    check.run(&mut second, "second", &mut log);

    log.assert_clean();
    assert_eq!(
        first.store, second.store,
        "FALSIFIED PC-010: equal seeds diverged"
    );
}
