//! autodiff::dual — seeded forward-mode derivative drivers.
//!
//! Purpose
//! -------
//! Turn a [`VectorFunction`] and an evaluation point into exact derivative
//! data: plain values, dense Jacobians, directional Jacobian and
//! transpose-Jacobian products, weighted lower-triangular Hessians, and
//! weighted Hessian-vector products. Each driver seeds the appropriate
//! `num-dual` scalar, runs the mapping, harvests the derivative components,
//! and validates arity and finiteness before returning.
//!
//! Key behaviors
//! -------------
//! - First derivatives ride on [`Dual64`]: one sweep per variable for a full
//!   Jacobian, a single sweep with the direction in the dual part for J·v.
//! - Second derivatives ride on [`HyperDual64`]: one sweep per
//!   lower-triangle entry for a weighted Hessian, one sweep per variable for
//!   a weighted Hessian-vector product (direction seeded on `eps1`, probe
//!   coordinate on `eps2`).
//! - Weighted accumulations skip zero-weight components outright, so a
//!   component with zero weight contributes neither work nor a non-finite
//!   poisoning opportunity to the sum.
//!
//! Conventions
//! -----------
//! - Weighted Hessians populate only entries with row ≥ column; the upper
//!   triangle stays zero by the symmetric half-storage convention.
//! - All indices are 0-based.
//! - Every driver propagates the first offending entry via [`AdError`];
//!   there is no partial result.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the drivers against hand-derived Jacobians and
//!   Hessians of small polynomial mappings, including the degenerate
//!   zero-output mapping and non-finite propagation through `ln`.

use ndarray::Array2;
use num_dual::{Dual64, HyperDual64};

use crate::autodiff::{
    errors::{AdError, AdResult},
    VectorFunction,
};

/// Evaluate the plain values of `f` at `x`.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns a vector of length other
///   than `nout`.
/// - [`AdError::NonFiniteValue`] for the first NaN or infinite component.
pub fn values_of<F: VectorFunction>(f: &F, x: &[f64], nout: usize) -> AdResult<Vec<f64>> {
    let fx = f.eval::<f64>(x);
    check_arity(fx.len(), nout)?;
    for (index, &value) in fx.iter().enumerate() {
        if !value.is_finite() {
            return Err(AdError::NonFiniteValue { index, value });
        }
    }
    Ok(fx)
}

/// Dense Jacobian of `f` at `x`, one dual sweep per variable.
///
/// Returns an `nout × x.len()` matrix with entry `(i, j)` holding
/// ∂f_i/∂x_j.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns the wrong arity.
/// - [`AdError::NonFiniteJacobian`] for the first non-finite entry.
pub fn jacobian_of<F: VectorFunction>(f: &F, x: &[f64], nout: usize) -> AdResult<Array2<f64>> {
    let nvar = x.len();
    let mut jac = Array2::zeros((nout, nvar));
    for j in 0..nvar {
        let column = jacobian_column(f, x, nout, j)?;
        for (i, &entry) in column.iter().enumerate() {
            jac[[i, j]] = entry;
        }
    }
    Ok(jac)
}

/// Directional product J(x)·v in a single dual sweep.
///
/// The direction is seeded into the dual part of every input at once, so the
/// harvested dual components are already the product; the Jacobian itself is
/// never materialized. `v` must have the same length as `x`.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns the wrong arity.
/// - [`AdError::NonFiniteProduct`] for the first non-finite component.
pub fn jacobian_product_of<F: VectorFunction>(
    f: &F, x: &[f64], v: &[f64], nout: usize,
) -> AdResult<Vec<f64>> {
    let seeded: Vec<Dual64> =
        x.iter().zip(v.iter()).map(|(&xi, &vi)| Dual64::new(xi, vi)).collect();
    let fx = f.eval::<Dual64>(&seeded);
    check_arity(fx.len(), nout)?;
    let mut product = Vec::with_capacity(nout);
    for (index, d) in fx.iter().enumerate() {
        if !d.eps.is_finite() {
            return Err(AdError::NonFiniteProduct { index, value: d.eps });
        }
        product.push(d.eps);
    }
    Ok(product)
}

/// Transpose product J(x)ᵗ·v, one Jacobian column at a time.
///
/// Forward mode cannot harvest rows of Jᵗ directly, so each output entry is
/// the dot product of `v` (length `nout`) with one freshly swept Jacobian
/// column; only O(`nout`) transient storage is used and J is never formed.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns the wrong arity.
/// - [`AdError::NonFiniteJacobian`] for the first non-finite column entry.
pub fn jacobian_transpose_product_of<F: VectorFunction>(
    f: &F, x: &[f64], v: &[f64], nout: usize,
) -> AdResult<Vec<f64>> {
    let nvar = x.len();
    let mut product = vec![0.0; nvar];
    for j in 0..nvar {
        let column = jacobian_column(f, x, nout, j)?;
        product[j] = column.iter().zip(v.iter()).map(|(&cij, &vi)| cij * vi).sum();
    }
    Ok(product)
}

/// Lower-triangular Hessian of the scalar x ↦ w·f(x).
///
/// Entry `(a, b)` with `a ≥ b` holds Σ_k w_k ∂²f_k/∂x_a∂x_b, harvested from
/// one hyper-dual sweep per lower-triangle position. The upper triangle is
/// left at zero. Components with `w_k == 0` are skipped in the accumulation.
/// `w` also fixes the expected output arity of `f`.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns the wrong arity.
/// - [`AdError::NonFiniteHessian`] for the first non-finite accumulated
///   entry.
pub fn weighted_hessian_of<F: VectorFunction>(
    f: &F, x: &[f64], w: &[f64],
) -> AdResult<Array2<f64>> {
    let nvar = x.len();
    let mut hess = Array2::zeros((nvar, nvar));
    for a in 0..nvar {
        for b in 0..=a {
            let mut seeded: Vec<HyperDual64> =
                x.iter().map(|&xi| HyperDual64::from(xi)).collect();
            seeded[a].eps1 = 1.0;
            seeded[b].eps2 = 1.0;
            let fx = f.eval::<HyperDual64>(&seeded);
            check_arity(fx.len(), w.len())?;
            hess[[a, b]] = accumulate_curvature(&fx, w, |value| AdError::NonFiniteHessian {
                row: a,
                col: b,
                value,
            })?;
        }
    }
    Ok(hess)
}

/// Product (∇² w·f(x))·v without materializing the Hessian.
///
/// One hyper-dual sweep per variable: the direction `v` is seeded on `eps1`
/// across all inputs while `eps2` probes one coordinate, so `eps1eps2`
/// carries one entry of the product. Zero-weight components are skipped.
/// `v` must have the same length as `x`; `w` fixes the output arity.
///
/// # Errors
/// - [`AdError::OutputDimMismatch`] if `f` returns the wrong arity.
/// - [`AdError::NonFiniteProduct`] for the first non-finite entry.
pub fn weighted_hessian_product_of<F: VectorFunction>(
    f: &F, x: &[f64], w: &[f64], v: &[f64],
) -> AdResult<Vec<f64>> {
    let nvar = x.len();
    let mut product = vec![0.0; nvar];
    for k in 0..nvar {
        let mut seeded: Vec<HyperDual64> = x
            .iter()
            .zip(v.iter())
            .map(|(&xi, &vi)| HyperDual64::new(xi, vi, 0.0, 0.0))
            .collect();
        seeded[k].eps2 = 1.0;
        let fx = f.eval::<HyperDual64>(&seeded);
        check_arity(fx.len(), w.len())?;
        product[k] =
            accumulate_curvature(&fx, w, |value| AdError::NonFiniteProduct { index: k, value })?;
    }
    Ok(product)
}

// ---- Helper methods ----

/// One Jacobian column: seed variable `j`, sweep, harvest the dual parts.
fn jacobian_column<F: VectorFunction>(
    f: &F, x: &[f64], nout: usize, j: usize,
) -> AdResult<Vec<f64>> {
    let mut seeded: Vec<Dual64> = x.iter().map(|&xi| Dual64::from(xi)).collect();
    seeded[j] = seeded[j].derivative();
    let fx = f.eval::<Dual64>(&seeded);
    check_arity(fx.len(), nout)?;
    for (i, d) in fx.iter().enumerate() {
        if !d.eps.is_finite() {
            return Err(AdError::NonFiniteJacobian { row: i, col: j, value: d.eps });
        }
    }
    Ok(fx.iter().map(|d| d.eps).collect())
}

/// Weighted sum of the `eps1eps2` components, skipping zero weights.
fn accumulate_curvature(
    fx: &[HyperDual64], w: &[f64], err: impl Fn(f64) -> AdError,
) -> AdResult<f64> {
    let mut acc = 0.0;
    for (d, &weight) in fx.iter().zip(w.iter()) {
        if weight == 0.0 {
            continue;
        }
        if !d.eps1eps2.is_finite() {
            return Err(err(d.eps1eps2));
        }
        acc += weight * d.eps1eps2;
    }
    Ok(acc)
}

fn check_arity(found: usize, expected: usize) -> AdResult<()> {
    if found != expected {
        return Err(AdError::OutputDimMismatch { expected, found });
    }
    Ok(())
}
