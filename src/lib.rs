//! Comprobar: conformance checks for parameter-bearing model components.
//!
//! Comprobar probes a model's parameter accessors and reported dimensions
//! against the contracts their callers rely on, reporting every violated
//! guarantee instead of stopping at the first. Implement [`Parameterized`]
//! or [`Dimensioned`] for a component, hand it to a check together with a
//! [`ViolationLog`], and assert the log stayed clean.
//!
//! # Quick Start
//!
//! ```
//! use comprobar::prelude::*;
//!
//! // A minimal linear map with a flat parameter vector.
//! struct Linear {
//!     weights: Vec<f32>,
//! }
//!
//! impl Parameterized for Linear {
//!     fn num_parameters(&self) -> usize {
//!         self.weights.len()
//!     }
//!     fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
//!         let mut out = match into {
//!             Some(buf) => {
//!                 assert_eq!(buf.len(), self.weights.len(), "buffer length mismatch");
//!                 buf
//!             }
//!             None => vec![0.0; self.weights.len()],
//!         };
//!         out.copy_from_slice(&self.weights);
//!         out
//!     }
//!     fn set_parameters(&mut self, params: &[f32]) {
//!         assert_eq!(params.len(), self.weights.len(), "buffer length mismatch");
//!         self.weights.copy_from_slice(params);
//!     }
//! }
//!
//! impl Dimensioned for Linear {
//!     fn input_dim(&self) -> usize {
//!         self.weights.len()
//!     }
//!     fn output_dim(&self) -> usize {
//!         1
//!     }
//! }
//!
//! let mut model = Linear { weights: vec![0.0; 3] };
//! let mut log = ViolationLog::new();
//!
//! check_parameters(&mut model, "linear", &mut log);
//! check_dimensions(&model, "linear", 3, 1, &mut log);
//!
//! log.assert_clean();
//! ```
//!
//! # Modules
//!
//! - [`traits`]: The [`Parameterized`] and [`Dimensioned`] contracts
//! - [`params`]: The parameter-access check and its configuration
//! - [`dims`]: The dimension-reporting check
//! - [`report`]: Violations, sinks, and the [`ViolationLog`] collector

pub mod dims;
mod guard;
pub mod params;
pub mod prelude;
pub mod report;
pub mod traits;

pub use dims::check_dimensions;
pub use guard::PanicPolicy;
pub use params::{check_parameters, ParameterCheck};
pub use report::{ReportSink, Violation, ViolationLog};
pub use traits::{Dimensioned, Parameterized};
