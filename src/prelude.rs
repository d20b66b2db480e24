//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use comprobar::prelude::*;
//! ```

pub use crate::dims::check_dimensions;
pub use crate::guard::PanicPolicy;
pub use crate::params::{check_parameters, ParameterCheck};
pub use crate::report::{ReportSink, Violation, ViolationLog};
pub use crate::traits::{Dimensioned, Parameterized};
