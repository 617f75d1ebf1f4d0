//! autodiff — the differentiation boundary between user mappings and the model layer.
//!
//! Purpose
//! -------
//! Provide exact first- and second-order derivative information for
//! user-supplied vector mappings via forward-mode automatic differentiation
//! over `num-dual` scalars. The model layer never differentiates anything
//! itself; every Jacobian, Hessian, and directional product it hands to a
//! solver is produced by the drivers in [`dual`].
//!
//! Key behaviors
//! -------------
//! - Define the capability users implement once: [`VectorFunction`], a
//!   mapping from a fixed-size numeric input to a fixed-size numeric output,
//!   evaluable generically over any scalar implementing
//!   [`DualNum<f64>`](num_dual::DualNum). Writing the mapping generically is
//!   what lets the same body run on plain `f64` for values, on dual numbers
//!   for first derivatives, and on hyper-dual numbers for curvature.
//! - Provide seeded forward sweeps in [`dual`]: full Jacobians, directional
//!   Jacobian products, transpose products, weighted lower-triangular
//!   Hessians, and weighted Hessian-vector products.
//! - Validate every sweep's output arity and finiteness, reporting the first
//!   offending entry through [`AdError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Derivatives are exact to floating-point precision; no finite-difference
//!   fallback exists anywhere in this crate.
//! - A mapping must be a pure function of its inputs. Branching on the dual
//!   scalar's value (rather than computing with it) silently degrades the
//!   derivative and cannot be detected here.
//! - Domain failures inside a mapping surface as non-finite dual components
//!   and are reported, never repaired or retried.
//!
//! Downstream usage
//! ----------------
//! - The model layer (`crate::nls`) calls the [`dual`] drivers with raw
//!   slices and wraps results into its `ndarray` aliases.
//! - User code implements [`VectorFunction`] for its residual and constraint
//!   types and otherwise never touches this module directly.

pub mod dual;
pub mod errors;

pub use self::errors::{AdError, AdResult};

// Re-exported so implementors can write the generic bound without depending
// on `num-dual` themselves.
pub use num_dual::DualNum;

/// A differentiable mapping from ℝⁿ to ℝᵐ.
///
/// Implementors write the body once, generically over the scalar type `D`.
/// The drivers in [`dual`] instantiate it with plain `f64` (values),
/// [`Dual64`](num_dual::Dual64) (first derivatives) and
/// [`HyperDual64`](num_dual::HyperDual64) (second derivatives).
///
/// The output length must not depend on the evaluation point; the model
/// layer declares it up front and the drivers reject any call where the
/// returned vector disagrees.
///
/// # Example
///
/// ```
/// use adnls::autodiff::{DualNum, VectorFunction};
///
/// struct Residual;
///
/// impl VectorFunction for Residual {
///     fn eval<D: DualNum<f64> + Copy>(&self, x: &[D]) -> Vec<D> {
///         vec![x[0] * x[0] - D::from(1.0), x[0] * x[1]]
///     }
/// }
/// ```
pub trait VectorFunction {
    /// Evaluate the mapping at `x`, generically over the scalar type.
    fn eval<D: DualNum<f64> + Copy>(&self, x: &[D]) -> Vec<D>;
}
