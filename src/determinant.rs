use crate::square_matrix::SquareMatrix;

impl SquareMatrix {
    /// Determinant, by cofactor expansion along the first row.
    ///
    /// The cost grows factorially with the size,
    /// so this is meant for small matrices.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
    /// assert_eq!(m.determinant(), -2.0);
    /// assert_eq!(!&m, -2.0);
    /// ```
    pub fn determinant(&self) -> f64 {
        cofactor_expansion(&self.data, self.nrows)
    }
}

fn cofactor_expansion(data: &[f64], n: usize) -> f64 {
    match n {
        // empty product; unreachable through SquareMatrix
        0 => 1.0,
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => {
            log::trace!("cofactor expansion of a {n}x{n} block");
            let mut minor = vec![0.0; (n - 1) * (n - 1)];
            let mut det = 0.0;
            let mut sign = 1.0;
            for column in 0..n {
                fill_minor(data, n, column, &mut minor);
                det += sign * data[column] * cofactor_expansion(&minor, n - 1);
                sign = -sign;
            }
            det
        }
    }
}

// Copy `data` without row 0 and `skip_column` into `minor`.
fn fill_minor(data: &[f64], n: usize, skip_column: usize, minor: &mut [f64]) {
    let mut k = 0;
    for row in data.chunks_exact(n).skip(1) {
        for (column, &value) in row.iter().enumerate() {
            if column != skip_column {
                minor[k] = value;
                k += 1;
            }
        }
    }
}
