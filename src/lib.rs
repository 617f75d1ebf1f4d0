//! adnls — AD-backed derivative evaluation for nonlinear least-squares models.
//!
//! Purpose
//! -------
//! Provide the derivative layer between a user-supplied residual mapping
//! F(x) (and optional constraint mapping c(x)) and a nonlinear
//! least-squares solver: exact Jacobians, Jacobian-vector and
//! transpose-Jacobian-vector products, per-component and weighted
//! Hessians, the Gauss-Newton-plus-curvature Hessian of the Lagrangian,
//! and matrix-free Hessian-vector products, together with evaluation
//! counters and coordinate (triple) export. Differentiation is forward-mode
//! automatic differentiation over `num-dual` scalars: exact to floating
//! point, never finite differences.
//!
//! Key behaviors
//! -------------
//! - Users implement one trait, [`autodiff::VectorFunction`], writing their
//!   mapping generically over the scalar type; the crate instruments it
//!   with dual and hyper-dual numbers as needed.
//! - [`nls::NlsModel`] owns the mapping(s), validated structural metadata
//!   (dimensions, bounds, multipliers, nonzero counts), and per-kind
//!   evaluation counters; every public operation validates shapes, counts
//!   itself exactly once, and propagates failures synchronously.
//! - Hessians use lower-triangular half-storage throughout; the
//!   coordinate exporter preserves that convention for sparse consumers.
//!
//! Downstream usage
//! ----------------
//! - Implement [`autodiff::VectorFunction`] for your residual (and
//!   constraint) type, build an [`nls::NlsModel`], and hand it to your
//!   solver loop:
//!
//! ```
//! use adnls::autodiff::{DualNum, VectorFunction};
//! use adnls::nls::NlsModel;
//! use ndarray::array;
//!
//! struct Residual;
//!
//! impl VectorFunction for Residual {
//!     fn eval<D: DualNum<f64> + Copy>(&self, x: &[D]) -> Vec<D> {
//!         vec![x[0] * x[0] - D::from(1.0), x[0] * x[1]]
//!     }
//! }
//!
//! let mut model = NlsModel::new(Residual, array![2.0, 3.0], 2).unwrap();
//! let jacobian = model.residual_jacobian(&array![2.0, 3.0]).unwrap();
//! assert_eq!(jacobian[[0, 0]], 4.0);
//! ```

pub mod autodiff;
pub mod nls;
