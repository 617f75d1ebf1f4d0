use crate::autodiff::AdError;

/// Crate-wide result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Construction ----
    /// A structural dimension was outside its admissible range.
    InvalidDimension {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Lower variable bounds do not match the variable count.
    LowerBoundDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Upper variable bounds do not match the variable count.
    UpperBoundDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Constraint bounds and initial multipliers must all have equal length.
    ConstraintDataDimMismatch {
        lcon: usize,
        ucon: usize,
        y0: usize,
    },

    // ---- Call-time shapes ----
    /// Evaluation point length does not match the variable count.
    PointDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Direction vector length does not match the operation's contract.
    DirectionDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Weight vector length does not match the component count.
    WeightDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Multiplier vector length does not match the constraint count.
    MultiplierDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Component index is out of range.
    ComponentOutOfRange {
        index: usize,
        count: usize,
    },

    // ---- Constraint availability ----
    /// A constraint operation was invoked on a model built without a
    /// constraint function. Distinct from the valid `ncon == 0` state.
    ConstraintsNotImplemented,

    // ---- Differentiation boundary ----
    /// Wrapper for [`AdError::OutputDimMismatch`].
    OutputDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Wrapper for [`AdError::NonFiniteValue`].
    NonFiniteValue {
        index: usize,
        value: f64,
    },
    /// Wrapper for [`AdError::NonFiniteJacobian`].
    NonFiniteJacobian {
        row: usize,
        col: usize,
        value: f64,
    },
    /// Wrapper for [`AdError::NonFiniteHessian`].
    NonFiniteHessian {
        row: usize,
        col: usize,
        value: f64,
    },
    /// Wrapper for [`AdError::NonFiniteProduct`].
    NonFiniteProduct {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Construction ----
            ModelError::InvalidDimension { name, value, reason } => {
                write!(f, "Invalid dimension {name} = {value}: {reason}")
            }
            ModelError::LowerBoundDimMismatch { expected, found } => {
                write!(f, "Lower bound dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::UpperBoundDimMismatch { expected, found } => {
                write!(f, "Upper bound dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::ConstraintDataDimMismatch { lcon, ucon, y0 } => {
                write!(
                    f,
                    "Constraint data dimension mismatch: lcon has {lcon}, ucon has {ucon}, \
                     y0 has {y0}"
                )
            }

            // ---- Call-time shapes ----
            ModelError::PointDimMismatch { expected, found } => {
                write!(f, "Point dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::DirectionDimMismatch { expected, found } => {
                write!(f, "Direction dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::WeightDimMismatch { expected, found } => {
                write!(f, "Weight dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::MultiplierDimMismatch { expected, found } => {
                write!(f, "Multiplier dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::ComponentOutOfRange { index, count } => {
                write!(f, "Component index {index} out of range for {count} components")
            }

            // ---- Constraint availability ----
            ModelError::ConstraintsNotImplemented => {
                write!(f, "Constraints not implemented: model was built without a constraint function")
            }

            // ---- Differentiation boundary ----
            ModelError::OutputDimMismatch { expected, found } => {
                write!(f, "Mapping output dimension mismatch: expected {expected}, found {found}")
            }
            ModelError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite function value at component {index}: {value}")
            }
            ModelError::NonFiniteJacobian { row, col, value } => {
                write!(f, "Non-finite Jacobian entry at ({row}, {col}): {value}")
            }
            ModelError::NonFiniteHessian { row, col, value } => {
                write!(f, "Non-finite Hessian entry at ({row}, {col}): {value}")
            }
            ModelError::NonFiniteProduct { index, value } => {
                write!(f, "Non-finite derivative product at index {index}: {value}")
            }
        }
    }
}

impl From<AdError> for ModelError {
    fn from(err: AdError) -> Self {
        match err {
            AdError::OutputDimMismatch { expected, found } => {
                ModelError::OutputDimMismatch { expected, found }
            }
            AdError::NonFiniteValue { index, value } => ModelError::NonFiniteValue { index, value },
            AdError::NonFiniteJacobian { row, col, value } => {
                ModelError::NonFiniteJacobian { row, col, value }
            }
            AdError::NonFiniteHessian { row, col, value } => {
                ModelError::NonFiniteHessian { row, col, value }
            }
            AdError::NonFiniteProduct { index, value } => {
                ModelError::NonFiniteProduct { index, value }
            }
        }
    }
}
