//! nls::meta — structural metadata of a least-squares model.
//!
//! Purpose
//! -------
//! Hold everything a solver needs to size its buffers before the first
//! evaluation: the variable/residual/constraint counts, the variable and
//! constraint bounds, the initial multipliers, and the derived nonzero
//! counts of the exported derivative matrices. The record is validated at
//! construction and immutable afterwards.
//!
//! Invariants & assumptions
//! ------------------------
//! - `nvar >= 1` and `nequ >= 1`; `ncon` may be zero.
//! - `lvar`/`uvar` have length `nvar`; `lcon`/`ucon`/`y0` all have length
//!   `ncon`. Violations fail construction, never evaluation.
//! - Nonzero counts describe the dense export shapes: `nvar * nequ` for the
//!   residual Jacobian, `nvar * ncon` for the constraint Jacobian, and
//!   `nvar * (nvar + 1) / 2` for a lower-triangular Hessian.

use crate::nls::{
    errors::{ModelError, ModelResult},
    types::{Point, Vector},
    validation::{validate_bounds, validate_constraint_data},
};
use ndarray::Array1;

/// Validated structural metadata, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NlsMeta {
    /// Number of decision variables.
    pub nvar: usize,
    /// Number of residual components.
    pub nequ: usize,
    /// Number of constraint components (0 when unconstrained).
    pub ncon: usize,
    /// Lower variable bounds, length `nvar`.
    pub lvar: Point,
    /// Upper variable bounds, length `nvar`.
    pub uvar: Point,
    /// Lower constraint bounds, length `ncon`.
    pub lcon: Vector,
    /// Upper constraint bounds, length `ncon`.
    pub ucon: Vector,
    /// Initial Lagrange multipliers, length `ncon`.
    pub y0: Vector,
    /// Entries of the dense residual Jacobian.
    pub nnzj_residual: usize,
    /// Entries of the dense constraint Jacobian.
    pub nnzj_constraint: usize,
    /// Entries of a lower-triangular Hessian.
    pub nnzh: usize,
}

impl NlsMeta {
    /// Build validated metadata.
    ///
    /// Missing variable bounds default to unbounded (`-inf`/`+inf`).
    /// `constraint_data` is the `(lcon, ucon, y0)` triple; `None` leaves the
    /// model with `ncon == 0` and empty constraint sequences.
    ///
    /// # Errors
    /// - [`ModelError::InvalidDimension`] if `nvar == 0` or `nequ == 0`.
    /// - [`ModelError::LowerBoundDimMismatch`] /
    ///   [`ModelError::UpperBoundDimMismatch`] for bound sequences of the
    ///   wrong length.
    /// - [`ModelError::ConstraintDataDimMismatch`] if the constraint triple
    ///   disagrees in length.
    pub fn new(
        nvar: usize, nequ: usize, lvar: Option<Point>, uvar: Option<Point>,
        constraint_data: Option<(Vector, Vector, Vector)>,
    ) -> ModelResult<Self> {
        if nvar == 0 {
            return Err(ModelError::InvalidDimension {
                name: "nvar",
                value: nvar,
                reason: "A model needs at least one decision variable.",
            });
        }
        if nequ == 0 {
            return Err(ModelError::InvalidDimension {
                name: "nequ",
                value: nequ,
                reason: "A model needs at least one residual component.",
            });
        }

        let lvar = lvar.unwrap_or_else(|| Array1::from_elem(nvar, f64::NEG_INFINITY));
        let uvar = uvar.unwrap_or_else(|| Array1::from_elem(nvar, f64::INFINITY));
        validate_bounds(&lvar, &uvar, nvar)?;

        let (lcon, ucon, y0) = match constraint_data {
            Some((lcon, ucon, y0)) => (lcon, ucon, y0),
            None => (Array1::from(vec![]), Array1::from(vec![]), Array1::from(vec![])),
        };
        let ncon = validate_constraint_data(&lcon, &ucon, &y0)?;

        Ok(Self {
            nvar,
            nequ,
            ncon,
            lvar,
            uvar,
            lcon,
            ucon,
            y0,
            nnzj_residual: nvar * nequ,
            nnzj_constraint: nvar * ncon,
            nnzh: nvar * (nvar + 1) / 2,
        })
    }
}
