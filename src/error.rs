use thiserror::Error;

/// Error type for this crate.
///
/// Every fallible operation on a [`SquareMatrix`](crate::SquareMatrix)
/// reports one of these variants. A failed operation never
/// leaves a partially modified matrix behind.
///
/// # Example
///
/// Adding matrices of different sizes
/// gives [`MatrixError::DimensionMismatch`](crate::MatrixError::DimensionMismatch).
///
/// ```
/// use squaremat::{MatrixError, SquareMatrix};
///
/// let a = SquareMatrix::new(2).unwrap();
/// let b = SquareMatrix::new(3).unwrap();
/// assert!(matches!(&a + &b, Err(MatrixError::DimensionMismatch { .. })));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// A matrix was requested with a size of zero.
    #[error("matrix size must be positive, got: {0}")]
    InvalidSize(usize),
    /// A row or column index fell outside `[0, size)`.
    #[error("{axis} index {index} out of range for matrix of size {size}")]
    IndexOutOfRange {
        #[allow(missing_docs)]
        axis: Axis,
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        size: usize,
    },
    /// A binary operation received operands of different sizes.
    #[error("matrix sizes do not match for {operation}: {left} vs {right}")]
    DimensionMismatch {
        /// Name of the rejected operation
        operation: &'static str,
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
    /// Division by zero, modulo by a non-positive value,
    /// or a negative exponent.
    #[error("{0}")]
    InvalidScalar(String),
    /// Element data whose length does not match the declared size.
    #[error("{0}")]
    InvalidShape(String),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}

/// Which index of an element access was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    #[allow(missing_docs)]
    Row,
    #[allow(missing_docs)]
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}
