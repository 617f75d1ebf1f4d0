/// Crate-wide result alias for derivative-driver operations.
pub type AdResult<T> = Result<T, AdError>;

/// Failures raised at the differentiation boundary.
///
/// A user mapping is a pure function of its (dual) inputs, so domain errors
/// inside it (a log of a negative argument, a division by zero) surface as
/// non-finite components of the evaluated duals. Each variant carries the
/// position of the first offending entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AdError {
    /// The mapping returned a different number of components than declared.
    OutputDimMismatch {
        expected: usize,
        found: usize,
    },

    /// A plain function value was NaN or infinite.
    NonFiniteValue {
        index: usize,
        value: f64,
    },

    /// A first-derivative entry was NaN or infinite.
    NonFiniteJacobian {
        row: usize,
        col: usize,
        value: f64,
    },

    /// A second-derivative entry was NaN or infinite.
    NonFiniteHessian {
        row: usize,
        col: usize,
        value: f64,
    },

    /// A derivative-product entry was NaN or infinite.
    NonFiniteProduct {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for AdError {}

impl std::fmt::Display for AdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdError::OutputDimMismatch { expected, found } => {
                write!(f, "Mapping output dimension mismatch: expected {expected}, found {found}")
            }
            AdError::NonFiniteValue { index, value } => {
                write!(f, "Non-finite function value at component {index}: {value}")
            }
            AdError::NonFiniteJacobian { row, col, value } => {
                write!(f, "Non-finite Jacobian entry at ({row}, {col}): {value}")
            }
            AdError::NonFiniteHessian { row, col, value } => {
                write!(f, "Non-finite Hessian entry at ({row}, {col}): {value}")
            }
            AdError::NonFiniteProduct { index, value } => {
                write!(f, "Non-finite derivative product at index {index}: {value}")
            }
        }
    }
}
