//! nls::model — the least-squares model entity.
//!
//! Purpose
//! -------
//! Own everything a derivative evaluation needs: the validated structural
//! metadata, the initial point, the residual mapping, the optional
//! constraint mapping, and the evaluation counters. The model is the single
//! entry point a solver talks to; its evaluation methods live in the
//! sibling modules (`residual`, `constraints`, `lagrangian`) and all follow
//! the same discipline: validate shapes, bump exactly one counter, delegate
//! the differentiation to `crate::autodiff`.
//!
//! Key behaviors
//! -------------
//! - Constructors validate every dimension up front and return a fully
//!   usable, immutable model; only the counters mutate afterwards, which is
//!   why evaluation methods take `&mut self`.
//! - The constraint mapping is an `Option`: a model built without one
//!   rejects every constraint operation with
//!   [`ModelError::ConstraintsNotImplemented`](crate::nls::ModelError),
//!   a state deliberately distinct from a supplied mapping with zero
//!   components (`ncon == 0`), which evaluates to empty results.
//!
//! Conventions
//! -----------
//! - `nvar` is always taken from the initial point's length; `nequ` is
//!   declared by the caller and enforced against the mapping's output on
//!   every evaluation; `ncon` is derived from the constraint-data lengths.
//! - Evaluation methods never cache: every call re-evaluates the mapping at
//!   the given point.

use crate::autodiff::VectorFunction;
use crate::nls::{
    constraints::Unconstrained,
    counters::Counters,
    errors::{ModelError, ModelResult},
    meta::NlsMeta,
    types::{Point, Vector},
};

/// A nonlinear least-squares model with AD-backed derivative evaluation.
///
/// Wraps a residual mapping `F: ℝ^nvar → ℝ^nequ` (whose squared norm is the
/// objective) and optionally a constraint mapping `c: ℝ^nvar → ℝ^ncon`,
/// together with bounds, initial data, and evaluation counters.
pub struct NlsModel<F: VectorFunction, C: VectorFunction = Unconstrained> {
    pub(crate) meta: NlsMeta,
    pub(crate) x0: Point,
    pub(crate) residual_fn: F,
    pub(crate) constraint_fn: Option<C>,
    pub(crate) counters: Counters,
}

impl<F: VectorFunction> NlsModel<F, Unconstrained> {
    /// Build an unconstrained model from a residual mapping, an initial
    /// point, and the residual arity.
    ///
    /// Variable bounds default to unbounded.
    ///
    /// # Errors
    /// Any construction error from [`NlsMeta::new`].
    pub fn new(residual_fn: F, x0: Point, nequ: usize) -> ModelResult<Self> {
        let meta = NlsMeta::new(x0.len(), nequ, None, None, None)?;
        Ok(Self { meta, x0, residual_fn, constraint_fn: None, counters: Counters::new() })
    }

    /// Build an unconstrained model with explicit variable bounds.
    ///
    /// # Errors
    /// Any construction error from [`NlsMeta::new`], in particular bound
    /// sequences whose length disagrees with `x0.len()`.
    pub fn with_bounds(
        residual_fn: F, x0: Point, nequ: usize, lvar: Point, uvar: Point,
    ) -> ModelResult<Self> {
        let meta = NlsMeta::new(x0.len(), nequ, Some(lvar), Some(uvar), None)?;
        Ok(Self { meta, x0, residual_fn, constraint_fn: None, counters: Counters::new() })
    }
}

impl<F: VectorFunction, C: VectorFunction> NlsModel<F, C> {
    /// Build a constrained model.
    ///
    /// The constraint count is the common length of `lcon`, `ucon`, and
    /// `y0`; passing three empty sequences is valid and yields a model whose
    /// constraint operations return empty results rather than errors.
    ///
    /// # Errors
    /// Any construction error from [`NlsMeta::new`], in particular
    /// constraint sequences of unequal length.
    pub fn constrained(
        residual_fn: F, x0: Point, nequ: usize, constraint_fn: C, lcon: Vector, ucon: Vector,
        y0: Vector,
    ) -> ModelResult<Self> {
        let meta = NlsMeta::new(x0.len(), nequ, None, None, Some((lcon, ucon, y0)))?;
        Ok(Self {
            meta,
            x0,
            residual_fn,
            constraint_fn: Some(constraint_fn),
            counters: Counters::new(),
        })
    }

    /// Build a constrained model with explicit variable bounds.
    ///
    /// # Errors
    /// Any construction error from [`NlsMeta::new`].
    pub fn constrained_with_bounds(
        residual_fn: F, x0: Point, nequ: usize, lvar: Point, uvar: Point, constraint_fn: C,
        lcon: Vector, ucon: Vector, y0: Vector,
    ) -> ModelResult<Self> {
        let meta =
            NlsMeta::new(x0.len(), nequ, Some(lvar), Some(uvar), Some((lcon, ucon, y0)))?;
        Ok(Self {
            meta,
            x0,
            residual_fn,
            constraint_fn: Some(constraint_fn),
            counters: Counters::new(),
        })
    }

    /// Structural metadata (dimensions, bounds, nonzero counts).
    pub fn meta(&self) -> &NlsMeta {
        &self.meta
    }

    /// The initial point supplied at construction.
    pub fn x0(&self) -> &Point {
        &self.x0
    }

    /// Evaluation counters for diagnostics and telemetry.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Reset every evaluation counter to zero.
    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// The constraint mapping, or the distinct "not implemented" error for
    /// models built without one.
    pub(crate) fn constraint_fn(&self) -> ModelResult<&C> {
        self.constraint_fn.as_ref().ok_or(ModelError::ConstraintsNotImplemented)
    }
}
