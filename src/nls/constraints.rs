//! nls::constraints — derivative operations of the constraint mapping.
//!
//! Purpose
//! -------
//! Mirror the residual surface for the constraint mapping c: values, dense
//! Jacobian, directional and transpose products, per-component Hessians,
//! and Hessian-vector products, each with its own counter.
//!
//! Key behaviors
//! -------------
//! - A model built without a constraint mapping rejects every operation
//!   here with [`ModelError::ConstraintsNotImplemented`](crate::nls::ModelError),
//!   checked before shapes so callers always see the availability error
//!   first.
//! - A supplied mapping with `ncon == 0` is a valid configuration: the
//!   Jacobian is `0 × nvar`, products are empty, and no error is raised.
//!   [`Unconstrained`] is the placeholder type occupying the constraint
//!   slot of models that never had a mapping.
//!
//! Conventions
//! -----------
//! - Same 0-based indexing and lower-triangular half-storage as the
//!   residual side.

use crate::autodiff::{dual, DualNum, VectorFunction};
use crate::nls::{
    errors::ModelResult,
    model::NlsModel,
    types::{Hessian, Jacobian, Point, Vector},
    validation::{validate_component, validate_direction, validate_point},
};

/// Placeholder constraint type for models built without constraints.
///
/// Never evaluated: models carrying it hold no constraint mapping at all,
/// and every constraint operation fails with the distinct "not implemented"
/// error before evaluation could happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl VectorFunction for Unconstrained {
    fn eval<D: DualNum<f64> + Copy>(&self, _x: &[D]) -> Vec<D> {
        Vec::new()
    }
}

impl<F: VectorFunction, C: VectorFunction> NlsModel<F, C> {
    /// Constraint values c(x), length `ncon`.
    ///
    /// # Errors
    /// - [`ModelError::ConstraintsNotImplemented`](crate::nls::ModelError)
    ///   on a model built without constraints.
    /// - [`ModelError::PointDimMismatch`](crate::nls::ModelError) for a
    ///   point of the wrong length.
    /// - Differentiation-boundary errors from evaluating the mapping.
    pub fn constraints(&mut self, x: &Point) -> ModelResult<Vector> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        let cx = dual::values_of(cfun, &x.to_vec(), self.meta.ncon)?;
        self.counters.constraint += 1;
        Ok(Vector::from(cx))
    }

    /// Dense constraint Jacobian, shape `ncon × nvar` (`0 × nvar` when the
    /// model has zero constraints).
    pub fn constraint_jacobian(&mut self, x: &Point) -> ModelResult<Jacobian> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        let jac = dual::jacobian_of(cfun, &x.to_vec(), self.meta.ncon)?;
        self.counters.constraint_jacobian += 1;
        Ok(jac)
    }

    /// Directional product J_c(x)·v for a direction of length `nvar`;
    /// result has length `ncon`.
    pub fn constraint_jacobian_product(&mut self, x: &Point, v: &Vector) -> ModelResult<Vector> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        validate_direction(v, self.meta.nvar)?;
        let jv = dual::jacobian_product_of(cfun, &x.to_vec(), &v.to_vec(), self.meta.ncon)?;
        self.counters.constraint_jacobian_product += 1;
        Ok(Vector::from(jv))
    }

    /// Transpose product J_c(x)ᵗ·v for a direction of length `ncon`;
    /// result has length `nvar`.
    pub fn constraint_jacobian_transpose_product(
        &mut self, x: &Point, v: &Vector,
    ) -> ModelResult<Vector> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        validate_direction(v, self.meta.ncon)?;
        let jtv =
            dual::jacobian_transpose_product_of(cfun, &x.to_vec(), &v.to_vec(), self.meta.ncon)?;
        self.counters.constraint_jacobian_transpose_product += 1;
        Ok(Vector::from(jtv))
    }

    /// Lower-triangular Hessian of the single component c_i, 0-based
    /// `i < ncon`.
    pub fn constraint_component_hessian(&mut self, x: &Point, i: usize) -> ModelResult<Hessian> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        validate_component(i, self.meta.ncon)?;
        let mut unit = vec![0.0; self.meta.ncon];
        unit[i] = 1.0;
        let hess = dual::weighted_hessian_of(cfun, &x.to_vec(), &unit)?;
        self.counters.constraint_component_hessian += 1;
        Ok(hess)
    }

    /// Product (∇²c_i)·v against the full symmetric component Hessian,
    /// without forming the matrix. `v` has length `nvar`.
    pub fn constraint_component_hessian_product(
        &mut self, x: &Point, i: usize, v: &Vector,
    ) -> ModelResult<Vector> {
        let cfun = self.constraint_fn()?;
        validate_point(x, self.meta.nvar)?;
        validate_component(i, self.meta.ncon)?;
        validate_direction(v, self.meta.nvar)?;
        let mut unit = vec![0.0; self.meta.ncon];
        unit[i] = 1.0;
        let hv = dual::weighted_hessian_product_of(cfun, &x.to_vec(), &unit, &v.to_vec())?;
        self.counters.constraint_component_hessian_product += 1;
        Ok(Vector::from(hv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nls::errors::ModelError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constraint-side derivatives against hand-derived results.
    // - The "not implemented" rejection on models built without constraints.
    // - The valid empty-constraint configuration.
    //
    // They intentionally DO NOT cover:
    // - Residual-side operations and Lagrangian assembly (sibling tests).
    // -------------------------------------------------------------------------

    /// F(x) = [x₀·x₁], a minimal residual for constrained fixtures.
    struct Product;

    impl VectorFunction for Product {
        fn eval<D: DualNum<f64> + Copy>(&self, x: &[D]) -> Vec<D> {
            vec![x[0] * x[1]]
        }
    }

    /// c(x) = [x₀² + x₁², x₀·x₁]; at x = (2, 3): c = (13, 6),
    /// J_c = [[4, 6], [3, 2]], ∇²c₀ = 2I, ∇²c₁ = [[0, 1], [1, 0]].
    struct Circle;

    impl VectorFunction for Circle {
        fn eval<D: DualNum<f64> + Copy>(&self, x: &[D]) -> Vec<D> {
            vec![x[0] * x[0] + x[1] * x[1], x[0] * x[1]]
        }
    }

    fn constrained_model() -> NlsModel<Product, Circle> {
        NlsModel::constrained(
            Product,
            array![2.0, 3.0],
            1,
            Circle,
            array![0.0, 0.0],
            array![1.0, 1.0],
            array![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Constraint values and first derivatives must agree with the
    // hand-derived results, and each call bumps only its own counter.
    //
    // Given
    // -----
    // - c as above at x = (2, 3), v = (1, 1), u = (1, 1).
    //
    // Expect
    // ------
    // - c = [13, 6]; J_c·v = [10, 5]; J_cᵗ·u = [7, 8].
    fn constraint_derivatives_match_hand_results() {
        let mut model = constrained_model();
        let x = array![2.0, 3.0];

        assert_eq!(model.constraints(&x).unwrap(), array![13.0, 6.0]);

        let jac = model.constraint_jacobian(&x).unwrap();
        assert_eq!(jac.shape(), &[2, 2]);
        assert_eq!(jac[[0, 0]], 4.0);
        assert_eq!(jac[[0, 1]], 6.0);
        assert_eq!(jac[[1, 0]], 3.0);
        assert_eq!(jac[[1, 1]], 2.0);

        let jv = model.constraint_jacobian_product(&x, &array![1.0, 1.0]).unwrap();
        assert_eq!(jv, array![10.0, 5.0]);

        let jtv = model.constraint_jacobian_transpose_product(&x, &array![1.0, 1.0]).unwrap();
        assert_eq!(jtv, array![7.0, 8.0]);

        let counters = model.counters();
        assert_eq!(counters.constraint, 1);
        assert_eq!(counters.constraint_jacobian, 1);
        assert_eq!(counters.constraint_jacobian_product, 1);
        assert_eq!(counters.constraint_jacobian_transpose_product, 1);
        assert_eq!(counters.total(), 4);
    }

    #[test]
    // Purpose
    // -------
    // Component Hessians and their products must match the hand-derived
    // curvature of each constraint.
    //
    // Given
    // -----
    // - ∇²c₀ = 2I and ∇²c₁ = [[0, 1], [1, 0]] at x = (2, 3), v = (1, 2).
    //
    // Expect
    // ------
    // - Lower triangles [[2, ·], [0, 2]] and [[0, ·], [1, 0]];
    //   (∇²c₁)·v = [2, 1].
    fn constraint_component_hessians_match_hand_results() {
        let mut model = constrained_model();
        let x = array![2.0, 3.0];

        let h0 = model.constraint_component_hessian(&x, 0).unwrap();
        assert_eq!(h0[[0, 0]], 2.0);
        assert_eq!(h0[[1, 0]], 0.0);
        assert_eq!(h0[[1, 1]], 2.0);
        assert_eq!(h0[[0, 1]], 0.0);

        let hv = model.constraint_component_hessian_product(&x, 1, &array![1.0, 2.0]).unwrap();
        assert_eq!(hv, array![2.0, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // A model built without constraints must reject every constraint
    // operation with the distinct availability error, ahead of any shape
    // check, leaving counters untouched.
    fn missing_constraints_are_a_distinct_error() {
        let mut model = NlsModel::new(Product, array![2.0, 3.0], 1).unwrap();
        let x = array![2.0, 3.0];

        assert_eq!(model.constraints(&x).unwrap_err(), ModelError::ConstraintsNotImplemented);
        assert_eq!(
            model.constraint_jacobian(&x).unwrap_err(),
            ModelError::ConstraintsNotImplemented
        );
        // Availability is reported even when the shapes are also wrong.
        assert_eq!(
            model
                .constraint_jacobian_transpose_product(&x, &array![1.0, 2.0, 3.0])
                .unwrap_err(),
            ModelError::ConstraintsNotImplemented
        );
        assert_eq!(model.counters().total(), 0);
    }

    #[test]
    // Purpose
    // -------
    // Zero constraints with a supplied mapping is a valid state: empty
    // results, no errors.
    //
    // Given
    // -----
    // - A constrained model whose constraint data is empty.
    //
    // Expect
    // ------
    // - c(x) is empty, the Jacobian is 0 × nvar, and the transpose product
    //   of an empty direction is the zero vector of length nvar.
    fn zero_constraints_evaluate_to_empty_results() {
        /// c(x) = [], the legitimate empty mapping.
        struct Empty;
        impl VectorFunction for Empty {
            fn eval<D: DualNum<f64> + Copy>(&self, _x: &[D]) -> Vec<D> {
                Vec::new()
            }
        }

        let mut model = NlsModel::constrained(
            Product,
            array![2.0, 3.0],
            1,
            Empty,
            array![],
            array![],
            array![],
        )
        .unwrap();
        let x = array![2.0, 3.0];

        assert_eq!(model.constraints(&x).unwrap().len(), 0);
        assert_eq!(model.constraint_jacobian(&x).unwrap().shape(), &[0, 2]);
        assert_eq!(model.constraint_jacobian_product(&x, &array![1.0, 1.0]).unwrap().len(), 0);
        assert_eq!(
            model.constraint_jacobian_transpose_product(&x, &array![]).unwrap(),
            array![0.0, 0.0]
        );
    }
}
