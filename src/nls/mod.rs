//! nls — the least-squares model layer.
//!
//! Purpose
//! -------
//! Turn "a residual mapping and a point" into "the matrices, vectors, and
//! products an NLS solver needs", with correct counting and correct
//! mathematical combination rules. Callers construct an [`NlsModel`] from a
//! [`VectorFunction`](crate::autodiff::VectorFunction) (and optionally a
//! constraint mapping plus bounds), then evaluate derivatives through its
//! methods; the raw differentiation is delegated to [`crate::autodiff`].
//!
//! Key behaviors
//! -------------
//! - [`model`] owns the entity: validated construction, metadata and
//!   counter access, and the constraint-availability tag.
//! - [`residual`] and [`constraints`] expose the two structurally identical
//!   evaluator surfaces (values, Jacobians, directional and transpose
//!   products, component and weighted Hessians, Hessian-vector products),
//!   plus the derived scalar objective on the residual side.
//! - [`lagrangian`] assembles the Gauss-Newton-plus-curvature objective
//!   Hessian and the multiplier-weighted constraint curvature, dense and
//!   matrix-free.
//! - [`coord`] exports any dense derivative matrix as deterministic
//!   coordinate triples.
//! - [`meta`], [`counters`], [`types`], [`validation`], and [`errors`]
//!   carry the structural metadata, the bookkeeping, the canonical numeric
//!   aliases, the shared shape checks, and the unified error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - The model is immutable after construction except for its counters;
//!   evaluation methods take `&mut self` solely for counting.
//! - Every operation either fully succeeds or fails synchronously with a
//!   [`ModelError`]; there is no partial result, retry, or fallback.
//! - Hessians are stored lower-triangular; the upper triangle is defined to
//!   be zero and consumers mirror it when they need the full operator.
//!
//! Downstream usage
//! ----------------
//! - Solver code holds one model per optimization run, reads [`NlsMeta`]
//!   once to size its buffers, evaluates per iterate, and reads
//!   [`Counters`] for budgets and telemetry.
//! - The re-exported surface below (or the [`prelude`]) is all a consumer
//!   normally needs.

pub mod constraints;
pub mod coord;
pub mod counters;
pub mod errors;
pub mod lagrangian;
pub mod meta;
pub mod model;
pub mod residual;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::constraints::Unconstrained;
pub use self::coord::{lower_triangle_triples, matrix_triples, CoordTriples};
pub use self::counters::Counters;
pub use self::errors::{ModelError, ModelResult};
pub use self::meta::NlsMeta;
pub use self::model::NlsModel;
pub use self::types::{EvalCountMap, Hessian, Jacobian, Point, Vector};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use adnls::nls::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::coord::{lower_triangle_triples, matrix_triples};
    pub use super::errors::{ModelError, ModelResult};
    pub use super::model::NlsModel;
    pub use super::types::{Hessian, Jacobian, Point, Vector};
    pub use crate::autodiff::{DualNum, VectorFunction};
}
