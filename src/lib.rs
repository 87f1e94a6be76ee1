//! # Dense square matrices
//!
//! [`SquareMatrix`] is an `n x n` matrix of `f64` that owns its
//! storage, checks every index, and validates the operands of
//! every operation.
//!
//! ```
//! use squaremat::SquareMatrix;
//!
//! # fn main() -> Result<(), squaremat::MatrixError> {
//! let mut m = SquareMatrix::new(2)?;
//! m.set(0, 0, 1.0)?;
//! m.set(0, 1, 2.0)?;
//! m.set(1, 0, 3.0)?;
//! m.set(1, 1, 4.0)?;
//!
//! let squared = (&m ^ 2)?;
//! assert_eq!(squared.as_slice(), (&m * &m)?.as_slice());
//! assert_eq!(!&m, -2.0);
//! assert_eq!(m.transpose().get(0, 1)?, 3.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failures
//!
//! Operations that can fail return [`MatrixError`]:
//!
//! * a zero size,
//! * an index outside `[0, size)`,
//! * operands of different sizes,
//! * division by zero, modulo by a non-positive
//!   value, or a negative power.
//!
//! In-place operations check their arguments first,
//! so an error never leaves a half-updated matrix.
//!
//! ## Comparison
//!
//! `==`, `!=`, `<`, `>`, `<=` and `>=` compare the sum of
//! all elements:
//!
//! ```
//! use squaremat::SquareMatrix;
//!
//! let a = SquareMatrix::from_rows(vec![vec![4., 3.], vec![2., 1.]]).unwrap();
//! let b = SquareMatrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
//! assert!(a == b);
//! assert_ne!(a.as_slice(), b.as_slice());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod macros;

mod determinant;
mod error;
mod ops;
mod serialization;
mod square_matrix;

pub use error::{Axis, MatrixError};
#[cfg(feature = "json")]
pub use serialization::loads_json;
pub use serialization::{load, loads};
pub use square_matrix::{Row, RowMut, SquareMatrix};
