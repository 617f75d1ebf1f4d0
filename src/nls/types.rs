//! nls::types — shared numeric aliases for the model layer.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used throughout the least-squares
//! model layer. By defining these in one place, the rest of the crate can
//! stay agnostic to `ndarray` and can more easily evolve if the backend
//! changes.
//!
//! Conventions
//! -----------
//! - [`Point`] and [`Vector`] are conceptually column vectors; a `Point`
//!   always has length `nvar`, while a `Vector` carries whatever length the
//!   operation's contract states (`nequ`, `ncon`, or `nvar`).
//! - [`Jacobian`] is dense and row-major in meaning: entry `(i, j)` is
//!   ∂f_i/∂x_j.
//! - [`Hessian`] is square `nvar × nvar` and, wherever the crate produces
//!   one, populated only on and below the diagonal (symmetric half-storage);
//!   the upper triangle is defined to be zero.
//! - [`EvalCountMap`] mirrors the evaluation counters as name/count pairs
//!   for diagnostics and telemetry.

use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Evaluation point `x`, length `nvar`.
pub type Point = Array1<f64>;

/// General numeric vector (residual values, products, multipliers).
pub type Vector = Array1<f64>;

/// Dense first-derivative matrix of a vector mapping.
pub type Jacobian = Array2<f64>;

/// Dense second-derivative matrix, lower triangle populated.
pub type Hessian = Array2<f64>;

/// Evaluation counters keyed by operation name.
pub type EvalCountMap = HashMap<&'static str, u64>;
