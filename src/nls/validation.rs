//! Validation helpers for the least-squares model layer.
//!
//! This module centralizes the shape checks shared across the model
//! interface:
//!
//! - **Call-time shapes**: [`validate_point`], [`validate_direction`],
//!   [`validate_weights`], [`validate_multipliers`] enforce the vector
//!   lengths each operation's contract states, before any differentiation
//!   work starts.
//! - **Component indices**: [`validate_component`] keeps 0-based component
//!   selection inside the declared output arity.
//! - **Construction data**: [`validate_bounds`] and
//!   [`validate_constraint_data`] reject inconsistent bound and multiplier
//!   sequences at build time, before any evaluation is possible.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`ModelError`] variants, making higher-level code more uniform and easier
//! to debug.

use crate::nls::{
    errors::{ModelError, ModelResult},
    types::{Point, Vector},
};

/// Validate an evaluation point against the variable count.
///
/// # Errors
/// Returns [`ModelError::PointDimMismatch`] if `x.len() != nvar`.
pub fn validate_point(x: &Point, nvar: usize) -> ModelResult<()> {
    if x.len() != nvar {
        return Err(ModelError::PointDimMismatch { expected: nvar, found: x.len() });
    }
    Ok(())
}

/// Validate a direction vector against the length an operation expects.
///
/// # Errors
/// Returns [`ModelError::DirectionDimMismatch`] on length disagreement.
pub fn validate_direction(v: &Vector, expected: usize) -> ModelResult<()> {
    if v.len() != expected {
        return Err(ModelError::DirectionDimMismatch { expected, found: v.len() });
    }
    Ok(())
}

/// Validate a weight vector against the component count it scales.
///
/// # Errors
/// Returns [`ModelError::WeightDimMismatch`] on length disagreement.
pub fn validate_weights(w: &Vector, expected: usize) -> ModelResult<()> {
    if w.len() != expected {
        return Err(ModelError::WeightDimMismatch { expected, found: w.len() });
    }
    Ok(())
}

/// Validate a multiplier vector against the constraint count.
///
/// # Errors
/// Returns [`ModelError::MultiplierDimMismatch`] on length disagreement.
pub fn validate_multipliers(y: &Vector, ncon: usize) -> ModelResult<()> {
    if y.len() != ncon {
        return Err(ModelError::MultiplierDimMismatch { expected: ncon, found: y.len() });
    }
    Ok(())
}

/// Validate a 0-based component index against the component count.
///
/// # Errors
/// Returns [`ModelError::ComponentOutOfRange`] if `index >= count`.
pub fn validate_component(index: usize, count: usize) -> ModelResult<()> {
    if index >= count {
        return Err(ModelError::ComponentOutOfRange { index, count });
    }
    Ok(())
}

/// Validate variable bound sequences against the variable count.
///
/// # Errors
/// - [`ModelError::LowerBoundDimMismatch`] if `lvar.len() != nvar`.
/// - [`ModelError::UpperBoundDimMismatch`] if `uvar.len() != nvar`.
pub fn validate_bounds(lvar: &Point, uvar: &Point, nvar: usize) -> ModelResult<()> {
    if lvar.len() != nvar {
        return Err(ModelError::LowerBoundDimMismatch { expected: nvar, found: lvar.len() });
    }
    if uvar.len() != nvar {
        return Err(ModelError::UpperBoundDimMismatch { expected: nvar, found: uvar.len() });
    }
    Ok(())
}

/// Validate constraint bounds and initial multipliers for equal length.
///
/// # Returns
/// The common length, which becomes the model's constraint count `ncon`.
///
/// # Errors
/// Returns [`ModelError::ConstraintDataDimMismatch`] if the three sequences
/// disagree.
pub fn validate_constraint_data(lcon: &Vector, ucon: &Vector, y0: &Vector) -> ModelResult<usize> {
    if lcon.len() != ucon.len() || lcon.len() != y0.len() {
        return Err(ModelError::ConstraintDataDimMismatch {
            lcon: lcon.len(),
            ucon: ucon.len(),
            y0: y0.len(),
        });
    }
    Ok(lcon.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accept/reject behavior of every shape helper, including the empty
    //   constraint-data case.
    //
    // They intentionally DO NOT cover:
    // - How the model surfaces these errors from its public operations
    //   (covered by the evaluator tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Matching lengths must pass, disagreeing lengths must name the expected
    // and found sizes.
    fn point_and_direction_checks_report_sizes() {
        let x = Array1::from(vec![1.0, 2.0]);
        assert!(validate_point(&x, 2).is_ok());
        assert_eq!(
            validate_point(&x, 3).unwrap_err(),
            ModelError::PointDimMismatch { expected: 3, found: 2 }
        );
        assert_eq!(
            validate_direction(&x, 1).unwrap_err(),
            ModelError::DirectionDimMismatch { expected: 1, found: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Component selection is 0-based: index nequ is already out of range.
    fn component_check_is_zero_based() {
        assert!(validate_component(0, 2).is_ok());
        assert!(validate_component(1, 2).is_ok());
        assert_eq!(
            validate_component(2, 2).unwrap_err(),
            ModelError::ComponentOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Constraint data of equal length yields that length as ncon; empty
    // sequences are a valid zero-constraint configuration.
    fn constraint_data_check_returns_common_length() {
        let empty = Array1::<f64>::from(vec![]);
        assert_eq!(validate_constraint_data(&empty, &empty, &empty).unwrap(), 0);

        let two = Array1::from(vec![0.0, 0.0]);
        let three = Array1::from(vec![0.0, 0.0, 0.0]);
        assert_eq!(validate_constraint_data(&two, &two, &two).unwrap(), 2);
        assert_eq!(
            validate_constraint_data(&two, &three, &two).unwrap_err(),
            ModelError::ConstraintDataDimMismatch { lcon: 2, ucon: 3, y0: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Bound checks distinguish the lower and upper sequences in their error
    // variants.
    fn bound_checks_distinguish_sides() {
        let ok = Array1::from(vec![0.0, 0.0]);
        let bad = Array1::from(vec![0.0]);
        assert!(validate_bounds(&ok, &ok, 2).is_ok());
        assert_eq!(
            validate_bounds(&bad, &ok, 2).unwrap_err(),
            ModelError::LowerBoundDimMismatch { expected: 2, found: 1 }
        );
        assert_eq!(
            validate_bounds(&ok, &bad, 2).unwrap_err(),
            ModelError::UpperBoundDimMismatch { expected: 2, found: 1 }
        );
    }
}
