//! nls::counters — per-kind evaluation counters.
//!
//! Purpose
//! -------
//! Track how many times each evaluation kind has been invoked on a model
//! instance. Pure bookkeeping: every counter starts at zero, is bumped
//! exactly once per public operation call that validates and completes,
//! and is never bumped by the internal sub-steps of another operation. The
//! assembler, for instance, sweeps residual Jacobians internally without
//! touching the residual-Jacobian counter.
//!
//! Downstream usage
//! ----------------
//! - Solvers read the counters for evaluation budgets and telemetry, either
//!   field by field or through [`Counters::as_map`].
//! - [`Counters::reset`] returns every counter to zero between solver runs
//!   on the same model.

use crate::nls::types::EvalCountMap;

/// One monotonically non-decreasing counter per evaluation kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    pub residual: u64,
    pub residual_jacobian: u64,
    pub residual_jacobian_product: u64,
    pub residual_jacobian_transpose_product: u64,
    pub residual_hessian: u64,
    pub residual_component_hessian: u64,
    pub residual_component_hessian_product: u64,
    pub objective: u64,
    pub objective_gradient: u64,
    pub constraint: u64,
    pub constraint_jacobian: u64,
    pub constraint_jacobian_product: u64,
    pub constraint_jacobian_transpose_product: u64,
    pub constraint_component_hessian: u64,
    pub constraint_component_hessian_product: u64,
    pub lagrangian_hessian: u64,
    pub lagrangian_hessian_product: u64,
}

impl Counters {
    /// Fresh counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.as_map().values().sum()
    }

    /// Export the counters as name/count pairs for diagnostics.
    pub fn as_map(&self) -> EvalCountMap {
        EvalCountMap::from([
            ("residual", self.residual),
            ("residual_jacobian", self.residual_jacobian),
            ("residual_jacobian_product", self.residual_jacobian_product),
            ("residual_jacobian_transpose_product", self.residual_jacobian_transpose_product),
            ("residual_hessian", self.residual_hessian),
            ("residual_component_hessian", self.residual_component_hessian),
            ("residual_component_hessian_product", self.residual_component_hessian_product),
            ("objective", self.objective),
            ("objective_gradient", self.objective_gradient),
            ("constraint", self.constraint),
            ("constraint_jacobian", self.constraint_jacobian),
            ("constraint_jacobian_product", self.constraint_jacobian_product),
            ("constraint_jacobian_transpose_product", self.constraint_jacobian_transpose_product),
            ("constraint_component_hessian", self.constraint_component_hessian),
            ("constraint_component_hessian_product", self.constraint_component_hessian_product),
            ("lagrangian_hessian", self.lagrangian_hessian),
            ("lagrangian_hessian_product", self.lagrangian_hessian_product),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Zero initialization, reset behavior, and the exported map shape.
    //
    // They intentionally DO NOT cover:
    // - The once-per-operation increment discipline, which is asserted where
    //   the operations live (evaluator and assembler tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Fresh counters must be all zero and export one entry per kind.
    //
    // Expect
    // ------
    // - total() is 0 and as_map() has 17 entries.
    fn new_counters_are_zero_and_fully_exported() {
        let counters = Counters::new();
        assert_eq!(counters.total(), 0);
        assert_eq!(counters.as_map().len(), 17);
    }

    #[test]
    // Purpose
    // -------
    // Reset must return a mutated record to the pristine state.
    //
    // Given
    // -----
    // - A counters record with two kinds bumped.
    //
    // Expect
    // ------
    // - After reset, the record equals a fresh one.
    fn reset_restores_pristine_state() {
        // Arrange
        let mut counters = Counters::new();
        counters.residual += 3;
        counters.lagrangian_hessian += 1;
        assert_eq!(counters.total(), 4);

        // Act
        counters.reset();

        // Assert
        assert_eq!(counters, Counters::new());
    }

    #[test]
    // Purpose
    // -------
    // The exported map must reflect per-field values under their names.
    //
    // Given
    // -----
    // - A record with residual = 2 and constraint_jacobian = 5.
    //
    // Expect
    // ------
    // - as_map() reports those values and zero elsewhere.
    fn as_map_reflects_field_values() {
        // Arrange
        let mut counters = Counters::new();
        counters.residual = 2;
        counters.constraint_jacobian = 5;

        // Act
        let map = counters.as_map();

        // Assert
        assert_eq!(map["residual"], 2);
        assert_eq!(map["constraint_jacobian"], 5);
        assert_eq!(map["objective"], 0);
    }
}
