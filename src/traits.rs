//! Capability traits checked by this crate.
//!
//! Models opt into a check by implementing the matching trait: the
//! parameter-access contract is [`Parameterized`], the dimension-reporting
//! contract is [`Dimensioned`]. Both are object safe, so checks accept
//! `&mut dyn Parameterized` / `&dyn Dimensioned` as well as concrete types.

/// Access to a model's flat parameter vector.
///
/// Implementors expose their tunable state as an ordered `f32` sequence of
/// fixed length. The contract, as [`crate::check_parameters`] verifies it:
///
/// - [`parameters`](Parameterized::parameters) with `None` allocates and
///   returns a fresh vector of length exactly
///   [`num_parameters`](Parameterized::num_parameters);
/// - with `Some(buf)` it fills `buf` and returns it by move, accepting only
///   `buf.len() == num_parameters()`;
/// - the returned vector is the caller's: mutating it must not change what
///   a later `parameters` call returns;
/// - [`set_parameters`](Parameterized::set_parameters) copies its input and
///   never retains or mutates the caller's buffer;
/// - writing a vector and reading it back returns the same values,
///   element for element.
///
/// Length violations must panic rather than silently truncate or extend.
///
/// # Examples
///
/// ```
/// use comprobar::Parameterized;
///
/// struct Affine {
///     weights: Vec<f32>,
/// }
///
/// impl Parameterized for Affine {
///     fn num_parameters(&self) -> usize {
///         self.weights.len()
///     }
///
///     fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32> {
///         let mut out = match into {
///             Some(buf) => {
///                 assert_eq!(buf.len(), self.weights.len(), "parameter buffer length mismatch");
///                 buf
///             }
///             None => vec![0.0; self.weights.len()],
///         };
///         out.copy_from_slice(&self.weights);
///         out
///     }
///
///     fn set_parameters(&mut self, params: &[f32]) {
///         assert_eq!(params.len(), self.weights.len(), "parameter buffer length mismatch");
///         self.weights.copy_from_slice(params);
///     }
/// }
///
/// let mut model = Affine { weights: vec![0.0, 0.0] };
/// model.set_parameters(&[1.0, -0.5]);
/// assert_eq!(model.parameters(None), vec![1.0, -0.5]);
/// ```
pub trait Parameterized {
    /// Returns the parameter count.
    ///
    /// Non-negative by construction and stable across calls unless the
    /// model is explicitly reconfigured.
    fn num_parameters(&self) -> usize;

    /// Reads the parameters into `into`, or into a fresh vector when `into`
    /// is `None`, and returns the filled vector.
    ///
    /// `None` means "no buffer supplied". It is distinct from
    /// `Some(vec![])`, a zero-length buffer that is valid only when
    /// `num_parameters() == 0`.
    ///
    /// # Panics
    ///
    /// Panics if `into` is `Some(buf)` with `buf.len() != num_parameters()`.
    fn parameters(&self, into: Option<Vec<f32>>) -> Vec<f32>;

    /// Overwrites the parameters with a copy of `params`.
    ///
    /// The slice is copied, not retained; the caller's buffer is left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `params.len() != num_parameters()`.
    fn set_parameters(&mut self, params: &[f32]);
}

/// Fixed input/output dimensionality reporting.
///
/// Pure accessors; [`crate::check_dimensions`] compares them against the
/// values the caller expects.
///
/// # Examples
///
/// ```
/// use comprobar::Dimensioned;
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
/// assert_eq!(Regressor.input_dim(), 4);
/// ```
pub trait Dimensioned {
    /// Number of input features the model consumes.
    fn input_dim(&self) -> usize;

    /// Number of output values the model produces.
    fn output_dim(&self) -> usize;
}
