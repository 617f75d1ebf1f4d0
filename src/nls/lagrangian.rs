//! nls::lagrangian — assembly of the Lagrangian Hessian and its product.
//!
//! Purpose
//! -------
//! Combine the raw differentiation primitives into the second-order
//! quantity a constrained least-squares solver actually consumes: the
//! Hessian of
//!
//! ```text
//! L(x, y) = obj_weight · ½‖F(x)‖² + Σ_i y_i · c_i(x)
//! ```
//!
//! in lower-triangular storage, and the matching Hessian-vector product
//! that never materializes a matrix.
//!
//! Key behaviors
//! -------------
//! - The objective block is the Gauss-Newton matrix JᵗJ plus the exact
//!   residual curvature Σ_k F_k(x)·∇²F_k(x). Carrying the curvature term is
//!   what distinguishes this assembly from a pure Gauss-Newton
//!   approximation: the result is the exact Hessian of ½‖F‖².
//! - `obj_weight == 0` skips the objective block outright: no residual
//!   value, Jacobian, or curvature sweep runs.
//! - Constraint curvature is one multiplier-weighted sweep; components with
//!   a zero multiplier contribute neither work nor entries. An all-zero
//!   multiplier vector skips the constraint block entirely, so an
//!   unconstrained model (ncon = 0, empty y) assembles without touching the
//!   missing constraint mapping.
//! - The product path replaces JᵗJ·v with two directional sweeps (J·v, then
//!   columns of J dotted against it) and the curvature term with one
//!   weighted Hessian-product sweep.
//! - Each entry point bumps exactly its own counter; the internal sweeps
//!   leave the residual- and constraint-side counters untouched.
//!
//! Invariants & assumptions
//! ------------------------
//! - Results are lower-triangular: entries above the diagonal are zero by
//!   the symmetric half-storage convention, and consumers reconstruct the
//!   symmetric operator from the lower triangle.
//! - Dense and product paths agree to floating-point roundoff; both carry
//!   exact curvature, neither is an approximation of the other.

use crate::autodiff::{dual, VectorFunction};
use crate::nls::{
    errors::ModelResult,
    model::NlsModel,
    types::{Hessian, Point, Vector},
    validation::{validate_direction, validate_multipliers, validate_point},
};

impl<F: VectorFunction, C: VectorFunction> NlsModel<F, C> {
    /// Lower-triangular Hessian of the Lagrangian at `x`.
    ///
    /// `y` carries one multiplier per constraint (empty on unconstrained
    /// models); `obj_weight` scales the least-squares objective and, when
    /// zero, suppresses its evaluation entirely.
    ///
    /// # Errors
    /// - [`ModelError::PointDimMismatch`](crate::nls::ModelError) /
    ///   [`ModelError::MultiplierDimMismatch`](crate::nls::ModelError) for
    ///   wrong input shapes.
    /// - [`ModelError::ConstraintsNotImplemented`](crate::nls::ModelError)
    ///   if a nonzero multiplier asks for curvature of a missing mapping.
    /// - Differentiation-boundary errors from the sweeps.
    pub fn lagrangian_hessian(
        &mut self, x: &Point, y: &Vector, obj_weight: f64,
    ) -> ModelResult<Hessian> {
        validate_point(x, self.meta.nvar)?;
        validate_multipliers(y, self.meta.ncon)?;

        let nvar = self.meta.nvar;
        let xs = x.to_vec();
        let mut hess = Hessian::zeros((nvar, nvar));

        if obj_weight != 0.0 {
            let jac = dual::jacobian_of(&self.residual_fn, &xs, self.meta.nequ)?;
            let fx = dual::values_of(&self.residual_fn, &xs, self.meta.nequ)?;
            let curvature = dual::weighted_hessian_of(&self.residual_fn, &xs, &fx)?;
            let gauss_newton = jac.t().dot(&jac);
            for a in 0..nvar {
                for b in 0..=a {
                    hess[[a, b]] = obj_weight * (gauss_newton[[a, b]] + curvature[[a, b]]);
                }
            }
        }

        if y.iter().any(|&yi| yi != 0.0) {
            let cfun = self.constraint_fn()?;
            let weighted = dual::weighted_hessian_of(cfun, &xs, &y.to_vec())?;
            for a in 0..nvar {
                for b in 0..=a {
                    hess[[a, b]] += weighted[[a, b]];
                }
            }
        }

        self.counters.lagrangian_hessian += 1;
        Ok(hess)
    }

    /// Product of the Lagrangian Hessian with `v`, length `nvar`, without
    /// materializing any matrix.
    ///
    /// Matches [`lagrangian_hessian`](Self::lagrangian_hessian) applied to
    /// `v` (with the lower triangle mirrored) to floating-point roundoff,
    /// including the `obj_weight == 0` short-circuit and the zero-multiplier
    /// skip.
    ///
    /// # Errors
    /// Same as [`lagrangian_hessian`](Self::lagrangian_hessian), plus
    /// [`ModelError::DirectionDimMismatch`](crate::nls::ModelError) for a
    /// direction of the wrong length.
    pub fn lagrangian_hessian_product(
        &mut self, x: &Point, y: &Vector, v: &Vector, obj_weight: f64,
    ) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        validate_multipliers(y, self.meta.ncon)?;
        validate_direction(v, self.meta.nvar)?;

        let nvar = self.meta.nvar;
        let xs = x.to_vec();
        let vs = v.to_vec();
        let mut product = vec![0.0; nvar];

        if obj_weight != 0.0 {
            let fx = dual::values_of(&self.residual_fn, &xs, self.meta.nequ)?;
            let jv = dual::jacobian_product_of(&self.residual_fn, &xs, &vs, self.meta.nequ)?;
            let gauss_newton_v =
                dual::jacobian_transpose_product_of(&self.residual_fn, &xs, &jv, self.meta.nequ)?;
            let curvature_v =
                dual::weighted_hessian_product_of(&self.residual_fn, &xs, &fx, &vs)?;
            for k in 0..nvar {
                product[k] = obj_weight * (gauss_newton_v[k] + curvature_v[k]);
            }
        }

        if y.iter().any(|&yi| yi != 0.0) {
            let cfun = self.constraint_fn()?;
            let weighted_v = dual::weighted_hessian_product_of(cfun, &xs, &y.to_vec(), &vs)?;
            for k in 0..nvar {
                product[k] += weighted_v[k];
            }
        }

        self.counters.lagrangian_hessian_product += 1;
        Ok(Vector::from(product))
    }
}
