//! nls::residual — derivative operations of the residual mapping.
//!
//! Purpose
//! -------
//! Expose the residual side of the model: values, the dense Jacobian,
//! directional and transpose products, weighted and per-component Hessians,
//! Hessian-vector products, and the derived scalar objective surface
//! (½‖F(x)‖² and its gradient Jᵗ·F). Every operation validates its input
//! shapes, bumps its own counter exactly once, and delegates the actual
//! differentiation to `crate::autodiff::dual`.
//!
//! Conventions
//! -----------
//! - Component indices are 0-based; `i < nequ`.
//! - Hessians are populated on and below the diagonal only; the upper
//!   triangle is zero by the symmetric half-storage convention. Products
//!   are always against the full symmetric operator.
//! - Failures from the mapping itself (wrong arity, non-finite values or
//!   derivatives) propagate unchanged through the
//!   [`ModelError`](crate::nls::ModelError) wrappers; nothing is retried.

use crate::autodiff::{dual, VectorFunction};
use crate::nls::{
    errors::ModelResult,
    model::NlsModel,
    types::{Hessian, Jacobian, Point, Vector},
    validation::{validate_component, validate_direction, validate_point, validate_weights},
};

impl<F: VectorFunction, C: VectorFunction> NlsModel<F, C> {
    /// Residual values F(x), length `nequ`.
    ///
    /// # Errors
    /// - [`ModelError::PointDimMismatch`](crate::nls::ModelError) for a
    ///   point of the wrong length.
    /// - Differentiation-boundary errors from evaluating the mapping.
    pub fn residual(&mut self, x: &Point) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        let fx = dual::values_of(&self.residual_fn, &x.to_vec(), self.meta.nequ)?;
        self.counters.residual += 1;
        Ok(Vector::from(fx))
    }

    /// Dense residual Jacobian J(x), shape `nequ × nvar`.
    pub fn residual_jacobian(&mut self, x: &Point) -> ModelResult<Jacobian> {
        validate_point(x, self.meta.nvar)?;
        let jac = dual::jacobian_of(&self.residual_fn, &x.to_vec(), self.meta.nequ)?;
        self.counters.residual_jacobian += 1;
        Ok(jac)
    }

    /// Directional product J(x)·v for a direction of length `nvar`; result
    /// has length `nequ`. The Jacobian is never materialized.
    pub fn residual_jacobian_product(&mut self, x: &Point, v: &Vector) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        validate_direction(v, self.meta.nvar)?;
        let jv =
            dual::jacobian_product_of(&self.residual_fn, &x.to_vec(), &v.to_vec(), self.meta.nequ)?;
        self.counters.residual_jacobian_product += 1;
        Ok(Vector::from(jv))
    }

    /// Transpose product J(x)ᵗ·v for a direction of length `nequ`; result
    /// has length `nvar`. Swept column by column, J is never materialized.
    pub fn residual_jacobian_transpose_product(
        &mut self, x: &Point, v: &Vector,
    ) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        validate_direction(v, self.meta.nequ)?;
        let jtv = dual::jacobian_transpose_product_of(
            &self.residual_fn,
            &x.to_vec(),
            &v.to_vec(),
            self.meta.nequ,
        )?;
        self.counters.residual_jacobian_transpose_product += 1;
        Ok(Vector::from(jtv))
    }

    /// Lower-triangular Hessian of x ↦ w·F(x) for a weight vector of length
    /// `nequ`. This is the curvature term the Lagrangian assembler combines
    /// with the Gauss-Newton matrix.
    pub fn residual_hessian(&mut self, x: &Point, w: &Vector) -> ModelResult<Hessian> {
        validate_point(x, self.meta.nvar)?;
        validate_weights(w, self.meta.nequ)?;
        let hess = dual::weighted_hessian_of(&self.residual_fn, &x.to_vec(), &w.to_vec())?;
        self.counters.residual_hessian += 1;
        Ok(hess)
    }

    /// Lower-triangular Hessian of the single component F_i, 0-based
    /// `i < nequ`.
    pub fn residual_component_hessian(&mut self, x: &Point, i: usize) -> ModelResult<Hessian> {
        validate_point(x, self.meta.nvar)?;
        validate_component(i, self.meta.nequ)?;
        let mut unit = vec![0.0; self.meta.nequ];
        unit[i] = 1.0;
        let hess = dual::weighted_hessian_of(&self.residual_fn, &x.to_vec(), &unit)?;
        self.counters.residual_component_hessian += 1;
        Ok(hess)
    }

    /// Product (∇²F_i)·v against the full symmetric component Hessian,
    /// without forming the matrix. `v` has length `nvar`.
    pub fn residual_component_hessian_product(
        &mut self, x: &Point, i: usize, v: &Vector,
    ) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        validate_component(i, self.meta.nequ)?;
        validate_direction(v, self.meta.nvar)?;
        let mut unit = vec![0.0; self.meta.nequ];
        unit[i] = 1.0;
        let hv = dual::weighted_hessian_product_of(
            &self.residual_fn,
            &x.to_vec(),
            &unit,
            &v.to_vec(),
        )?;
        self.counters.residual_component_hessian_product += 1;
        Ok(Vector::from(hv))
    }

    /// Scalar objective ½‖F(x)‖².
    pub fn objective(&mut self, x: &Point) -> ModelResult<f64> {
        validate_point(x, self.meta.nvar)?;
        let fx = dual::values_of(&self.residual_fn, &x.to_vec(), self.meta.nequ)?;
        self.counters.objective += 1;
        Ok(0.5 * fx.iter().map(|r| r * r).sum::<f64>())
    }

    /// Objective gradient J(x)ᵗ·F(x), length `nvar`.
    pub fn objective_gradient(&mut self, x: &Point) -> ModelResult<Vector> {
        validate_point(x, self.meta.nvar)?;
        let xs = x.to_vec();
        let fx = dual::values_of(&self.residual_fn, &xs, self.meta.nequ)?;
        let grad =
            dual::jacobian_transpose_product_of(&self.residual_fn, &xs, &fx, self.meta.nequ)?;
        self.counters.objective_gradient += 1;
        Ok(Vector::from(grad))
    }
}
