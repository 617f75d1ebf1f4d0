//! nls::coord — coordinate (triple) export of dense derivative matrices.
//!
//! Purpose
//! -------
//! Convert the dense matrices produced by the evaluators into the parallel
//! `(rows, cols, values)` sequences sparse-matrix-based solvers assemble
//! from. Enumeration order is deterministic: row-major, ties broken by
//! column, so repeated exports of the same matrix are identical.
//!
//! Conventions
//! -----------
//! - Indices are 0-based.
//! - [`matrix_triples`] enumerates every entry of a general `m × n` matrix.
//! - [`lower_triangle_triples`] enumerates only entries with row ≥ column,
//!   the export shape of the crate's half-stored symmetric Hessians; a
//!   consumer reconstructs the full operator by mirroring.

use ndarray::Array2;

/// Parallel `(rows, cols, values)` sequences of equal length.
pub type CoordTriples = (Vec<usize>, Vec<usize>, Vec<f64>);

/// Export every entry of a dense matrix in row-major order.
pub fn matrix_triples(m: &Array2<f64>) -> CoordTriples {
    let mut rows = Vec::with_capacity(m.len());
    let mut cols = Vec::with_capacity(m.len());
    let mut values = Vec::with_capacity(m.len());
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            rows.push(i);
            cols.push(j);
            values.push(m[[i, j]]);
        }
    }
    (rows, cols, values)
}

/// Export the lower triangle (row ≥ column) of a square matrix in
/// row-major order; `n·(n+1)/2` entries for an `n × n` input.
///
/// # Panics
/// May panic on a non-square input due to out-of-bounds indexing; callers
/// pass the crate's square half-stored Hessians.
pub fn lower_triangle_triples(m: &Array2<f64>) -> CoordTriples {
    let n = m.nrows();
    let nnz = n * (n + 1) / 2;
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut values = Vec::with_capacity(nnz);
    for i in 0..n {
        for j in 0..=i {
            rows.push(i);
            cols.push(j);
            values.push(m[[i, j]]);
        }
    }
    (rows, cols, values)
}
