use std::error::Error;
use std::fmt;

/// Errors raised by the vector, matrix and orthogonalization routines.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// An index fell outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// Operand sizes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    EmptyMatrix,
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },
    EmptyInput,
    DegenerateVector { norm: f64 },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            LinalgError::DimensionMismatch { op, left, right } => write!(
                f,
                "Cannot {} operands of dimension {} and {}",
                op, left, right
            ),
            LinalgError::EmptyMatrix => write!(f, "No columns given to matrix"),
            LinalgError::RaggedColumns {
                column,
                expected,
                found,
            } => write!(
                f,
                "Columns of matrix have varying length: column {} has {} rows, expected {}",
                column, found, expected
            ),
            LinalgError::EmptyInput => write!(f, "Cannot orthogonalize an empty set of vectors"),
            LinalgError::DegenerateVector { norm } => {
                write!(f, "Cannot normalize a vector with norm {}", norm)
            }
        }
    }
}

impl Error for LinalgError {}
