use crate::error::{Axis, MatrixError};
use crate::serialization::InputSquareMatrix;
use serde::{Deserialize, Serialize};

/// A dense `n x n` matrix of [`f64`](std::primitive::f64).
///
/// Elements are stored row-major in a single buffer
/// owned by the matrix. Cloning performs a deep copy.
///
/// # Notes
///
/// * The size is fixed at construction and is always `>= 1`.
/// * Comparison operators (`==`, `<`, ...) compare the *sum*
///   of all elements, not the elements themselves.
///   Use [`SquareMatrix::as_slice`] for element-wise equality.
/// * A matrix is not synchronized. Sharing one instance
///   between threads requires external locking.
///
/// # Examples
///
/// ```
/// use squaremat::SquareMatrix;
///
/// let mut m = SquareMatrix::new(2).unwrap();
/// m.set(0, 1, 3.0).unwrap();
/// assert_eq!(m.get(0, 1).unwrap(), 3.0);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "InputSquareMatrix")]
pub struct SquareMatrix {
    #[serde(rename = "size")]
    pub(crate) nrows: usize,
    #[serde(rename = "elements")]
    pub(crate) data: Vec<f64>,
}

fn validate_size(size: usize) -> Result<(), MatrixError> {
    if size == 0 {
        Err(MatrixError::InvalidSize(size))
    } else {
        Ok(())
    }
}

impl SquareMatrix {
    /// Create a `size x size` matrix filled with `0.0`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, MatrixError> {
        validate_size(size)?;
        Ok(Self {
            data: vec![0.0; size * size],
            nrows: size,
        })
    }

    /// Create the identity matrix of the given size.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidSize`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut rv = Self::new(size)?;
        for i in 0..size {
            rv.data[i * size + i] = 1.0;
        }
        Ok(rv)
    }

    /// Build a matrix from row-major element data.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::InvalidSize`] if `size` is zero.
    /// * [`MatrixError::InvalidShape`] if `data.len() != size * size`.
    pub fn from_vec(size: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        validate_size(size)?;
        if data.len() != size * size {
            let msg = format!(
                "a matrix of size {size} needs {} elements, got: {}",
                size * size,
                data.len()
            );
            return Err(MatrixError::InvalidShape(msg));
        }
        Ok(Self { data, nrows: size })
    }

    /// Build a matrix from a vector of rows.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1., 2., 3., 4.]);
    /// assert!(SquareMatrix::from_rows(vec![vec![1., 2.]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        validate_size(size)?;
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                let msg = format!("row {i} has {} elements, expected {size}", row.len());
                return Err(MatrixError::InvalidShape(msg));
            }
            data.extend(row);
        }
        Ok(Self { data, nrows: size })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.nrows
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.nrows)
    }

    /// Sum of all elements.
    ///
    /// This is the quantity compared by `==`, `<`, and friends.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.nrows {
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                size: self.nrows,
            })
        } else {
            Ok(())
        }
    }

    fn row_bounds(&self, row: usize) -> Result<std::ops::Range<usize>, MatrixError> {
        self.check_row(row)?;
        let start = row * self.nrows;
        Ok(start..start + self.nrows)
    }

    /// Checked access to one row.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `row >= size`.
    pub fn row(&self, row: usize) -> Result<Row<'_>, MatrixError> {
        let range = self.row_bounds(row)?;
        Ok(Row {
            data: &self.data[range],
        })
    }

    /// Checked mutable access to one row.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `row >= size`.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>, MatrixError> {
        let range = self.row_bounds(row)?;
        Ok(RowMut {
            data: &mut self.data[range],
        })
    }

    /// Value at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        self.row(row)?.get(column)
    }

    /// Mutable reference to the value at `(row, column)`.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut f64, MatrixError> {
        self.row_mut(row)?.into_mut(column)
    }

    /// Overwrite the value at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    pub(crate) fn ensure_same_size(
        &self,
        other: &Self,
        operation: &'static str,
    ) -> Result<(), MatrixError> {
        if self.nrows != other.nrows {
            log::debug!(
                "rejecting {operation} of a {0}x{0} and a {1}x{1} matrix",
                self.nrows,
                other.nrows
            );
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.nrows,
                right: other.nrows,
            });
        }
        Ok(())
    }

    /// New matrix with `f` applied to every element.
    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            nrows: self.nrows,
        }
    }

    /// New matrix combining corresponding elements of `self` and `other`.
    pub(crate) fn zip_map<F>(
        &self,
        other: &Self,
        operation: &'static str,
        f: F,
    ) -> Result<Self, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_size(other, operation)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
        })
    }

    pub(crate) fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        self.data.iter_mut().for_each(|v| *v = f(*v));
    }

    pub(crate) fn zip_apply<F>(
        &mut self,
        other: &Self,
        operation: &'static str,
        f: F,
    ) -> Result<(), MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_size(other, operation)?;
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = f(*a, b));
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = MatrixError;
    fn try_from(value: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(value)
    }
}

/// Read-only view of one row, produced by [`SquareMatrix::row`].
#[derive(Copy, Clone, Debug)]
pub struct Row<'a> {
    data: &'a [f64],
}

fn column_out_of_range(column: usize, size: usize) -> MatrixError {
    MatrixError::IndexOutOfRange {
        axis: Axis::Column,
        index: column,
        size,
    }
}

impl<'a> Row<'a> {
    /// Value in `column`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `column >= size`.
    pub fn get(&self, column: usize) -> Result<f64, MatrixError> {
        self.data
            .get(column)
            .copied()
            .ok_or_else(|| column_out_of_range(column, self.data.len()))
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: matrices have at least one column.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[allow(missing_docs)]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

/// Mutable view of one row, produced by [`SquareMatrix::row_mut`].
#[derive(Debug)]
pub struct RowMut<'a> {
    data: &'a mut [f64],
}

impl<'a> RowMut<'a> {
    /// Value in `column`.
    pub fn get(&self, column: usize) -> Result<f64, MatrixError> {
        self.data
            .get(column)
            .copied()
            .ok_or_else(|| column_out_of_range(column, self.data.len()))
    }

    /// Mutable reference to the value in `column`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `column >= size`.
    pub fn get_mut(&mut self, column: usize) -> Result<&mut f64, MatrixError> {
        let size = self.data.len();
        self.data
            .get_mut(column)
            .ok_or_else(|| column_out_of_range(column, size))
    }

    /// Overwrite the value in `column`.
    pub fn set(&mut self, column: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(column)? = value;
        Ok(())
    }

    // Consumes the view so the reference can live as long as the matrix borrow.
    fn into_mut(self, column: usize) -> Result<&'a mut f64, MatrixError> {
        let size = self.data.len();
        self.data
            .get_mut(column)
            .ok_or_else(|| column_out_of_range(column, size))
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: matrices have at least one column.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Unchecked-style access that panics on a bad index.
///
/// The panic message is the text of the corresponding
/// [`MatrixError::IndexOutOfRange`].
/// Prefer [`SquareMatrix::get`] when the index may be invalid.
impl std::ops::Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        let range = match self.row_bounds(row) {
            Ok(range) => range,
            Err(e) => panic!("{e}"),
        };
        match self.data[range].get(column) {
            Some(value) => value,
            None => panic!("{}", column_out_of_range(column, self.nrows)),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(row, column) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.sum() == other.sum()
    }
}

impl PartialOrd for SquareMatrix {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.sum().partial_cmp(&other.sum())
    }
}

/// One line per row, `"|  "`, then each element followed by a space, then `" |"`.
///
/// Elements use the [`Display`](std::fmt::Display) form of `f64`, the
/// shortest text that reads back to the same value (`0.3333333333333333`,
/// `1000000`), not a fixed number of significant digits.
impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            write!(f, "|  ")?;
            for value in row {
                write!(f, "{value} ")?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = SquareMatrix::from_rows(vec![vec![1., 2.5], vec![-3., 4.]]).unwrap();
        let f = format!("{m}");
        assert_eq!(f, String::from("|  1 2.5  |\n|  -3 4  |\n"));
    }

    #[test]
    fn test_display_non_integer_elements() {
        let m = SquareMatrix::from_vec(1, vec![1.0 / 3.0]).unwrap();
        assert_eq!(format!("{m}"), String::from("|  0.3333333333333333  |\n"));
        let m = SquareMatrix::from_vec(1, vec![1e6]).unwrap();
        assert_eq!(format!("{m}"), String::from("|  1000000  |\n"));
    }

    #[test]
    fn test_rows_iterator() {
        let m = SquareMatrix::identity(3).unwrap();
        let rows = m.rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[0., 1., 0.]);
    }

    #[test]
    fn test_zip_apply_leaves_receiver_on_error() {
        let mut a = SquareMatrix::identity(2).unwrap();
        let b = SquareMatrix::identity(3).unwrap();
        assert!(a.zip_apply(&b, "test", |x, y| x + y).is_err());
        assert_eq!(a.as_slice(), &[1., 0., 0., 1.]);
    }

    #[test]
    #[should_panic]
    fn test_index_panics_out_of_range() {
        let m = SquareMatrix::new(2).unwrap();
        let _ = m[(0, 2)];
    }
}
