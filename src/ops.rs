use crate::error::MatrixError;
use crate::square_matrix::SquareMatrix;

// Remainder of `value / modulus` that is never negative for modulus > 0.
pub(crate) fn non_negative_modulo(value: f64, modulus: i64) -> f64 {
    let b = modulus as f64;
    // floored remainder, exact for any finite value
    let rv = value.rem_euclid(b);
    // rounding of tiny negative values can land exactly on the modulus
    if rv >= b {
        rv - b
    } else {
        rv
    }
}

fn validate_divisor(scalar: f64) -> Result<(), MatrixError> {
    if scalar == 0.0 {
        log::debug!("rejecting division by zero");
        Err(MatrixError::InvalidScalar("cannot divide by zero".to_string()))
    } else {
        Ok(())
    }
}

fn validate_modulus(modulus: i64) -> Result<(), MatrixError> {
    if modulus <= 0 {
        log::debug!("rejecting modulo by {modulus}");
        let msg = format!("modulus must be > 0, got: {modulus}");
        Err(MatrixError::InvalidScalar(msg))
    } else {
        Ok(())
    }
}

/// Arithmetic.
///
/// Each method has an operator form as well.
/// Operators involving two matrices return
/// `Result`, as do division, modulo and power:
///
/// ```
/// use squaremat::SquareMatrix;
///
/// # fn main() -> Result<(), squaremat::MatrixError> {
/// let a = SquareMatrix::from_rows(vec![vec![1., 2.], vec![3., 4.]])?;
/// let b = SquareMatrix::identity(2)?;
/// let c = (&a * &b)?;
/// assert_eq!(c.as_slice(), a.as_slice());
/// let d = 2.0 * &a;
/// assert_eq!(d.as_slice(), &[2., 4., 6., 8.]);
/// let e = (&a % 3)?;
/// assert_eq!(e.as_slice(), &[1., 2., 0., 1.]);
/// # Ok(())
/// # }
/// ```
impl SquareMatrix {
    /// Element-wise sum (`+`).
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_map(other, "addition", |a, b| a + b)
    }

    /// Element-wise difference (`-`).
    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_map(other, "subtraction", |a, b| a - b)
    }

    /// Matrix product (`*`).
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.ensure_same_size(other, "multiplication")?;
        let n = self.nrows;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self.data[i * n + k] * other.data[k * n + j];
                }
                data[i * n + j] = sum;
            }
        }
        Ok(Self { data, nrows: n })
    }

    /// Element-wise (Hadamard) product (`%` with a matrix).
    pub fn hadamard(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_map(other, "element-wise multiplication", |a, b| a * b)
    }

    /// Multiply every element by `scalar` (`*` with an `f64`).
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divide every element by `scalar` (`/`).
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidScalar`] if `scalar == 0.0`.
    pub fn try_div(&self, scalar: f64) -> Result<Self, MatrixError> {
        validate_divisor(scalar)?;
        Ok(self.map(|v| v / scalar))
    }

    /// Non-negative remainder of every element (`%` with an `i64`).
    ///
    /// Every element of the result lies in `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidScalar`] if `modulus <= 0`.
    pub fn try_rem(&self, modulus: i64) -> Result<Self, MatrixError> {
        validate_modulus(modulus)?;
        Ok(self.map(|v| non_negative_modulo(v, modulus)))
    }

    /// Raise to an integer power by repeated multiplication (`^`).
    ///
    /// `pow(0)` is the identity and `pow(1)` a copy.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidScalar`] if `power < 0`.
    pub fn pow(&self, power: i32) -> Result<Self, MatrixError> {
        if power < 0 {
            log::debug!("rejecting negative power {power}");
            let msg = format!(
                "negative powers are not supported (inverse not implemented), got: {power}"
            );
            return Err(MatrixError::InvalidScalar(msg));
        }
        match power {
            0 => Self::identity(self.nrows),
            1 => Ok(self.clone()),
            _ => {
                let mut rv = self.clone();
                for step in 1..power {
                    log::trace!("power {power}: multiplication {step}");
                    rv = rv.matmul(self)?;
                }
                Ok(rv)
            }
        }
    }

    /// Transposed copy (`result[i][j] == self[j][i]`).
    pub fn transpose(&self) -> Self {
        let n = self.nrows;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[i * n + j] = self.data[j * n + i];
            }
        }
        Self { data, nrows: n }
    }
}

/// In-place arithmetic.
///
/// Operands are validated before anything is written,
/// so a rejected call leaves `self` untouched.
impl SquareMatrix {
    /// `self += other`
    pub fn try_add_assign(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.zip_apply(other, "+=", |a, b| a + b)?;
        Ok(self)
    }

    /// `self -= other`
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.zip_apply(other, "-=", |a, b| a - b)?;
        Ok(self)
    }

    /// `self = self * other` (matrix product)
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.ensure_same_size(other, "*=")?;
        let product = self.matmul(other)?;
        self.data = product.data;
        Ok(self)
    }

    /// `self = self % other` (element-wise product)
    pub fn try_hadamard_assign(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.zip_apply(other, "%=", |a, b| a * b)?;
        Ok(self)
    }

    /// `self *= scalar`
    pub fn scale_assign(&mut self, scalar: f64) -> &mut Self {
        self.apply(|v| v * scalar);
        self
    }

    /// `self %= modulus`, see [`SquareMatrix::try_rem`].
    pub fn try_rem_assign(&mut self, modulus: i64) -> Result<&mut Self, MatrixError> {
        validate_modulus(modulus)?;
        self.apply(|v| non_negative_modulo(v, modulus));
        Ok(self)
    }

    /// `self /= scalar`
    pub fn try_div_assign(&mut self, scalar: f64) -> Result<&mut Self, MatrixError> {
        validate_divisor(scalar)?;
        self.apply(|v| v / scalar);
        Ok(self)
    }

    /// Add `1.0` to every element and return the updated matrix.
    pub fn increment(&mut self) -> &mut Self {
        self.apply(|v| v + 1.0);
        self
    }

    /// Add `1.0` to every element, returning the matrix as it was before.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let mut m = SquareMatrix::new(2).unwrap();
    /// let before = m.post_increment();
    /// assert_eq!(before.as_slice(), &[0.; 4]);
    /// assert_eq!(m.as_slice(), &[1.; 4]);
    /// ```
    pub fn post_increment(&mut self) -> Self {
        let rv = self.clone();
        self.increment();
        rv
    }

    /// Subtract `1.0` from every element and return the updated matrix.
    pub fn decrement(&mut self) -> &mut Self {
        self.apply(|v| v - 1.0);
        self
    }

    /// Subtract `1.0` from every element, returning the matrix as it was before.
    pub fn post_decrement(&mut self) -> Self {
        let rv = self.clone();
        self.decrement();
        rv
    }
}

impl_matrix_arithmetic!(Add, add, try_add);
impl_matrix_arithmetic!(Sub, sub, try_sub);
impl_matrix_arithmetic!(Mul, mul, matmul);
impl_matrix_arithmetic!(Rem, rem, hadamard);

impl_scalar_arithmetic!(Mul, mul, f64, SquareMatrix, scale);
impl_scalar_arithmetic!(Div, div, f64, Result<SquareMatrix, MatrixError>, try_div);
impl_scalar_arithmetic!(Rem, rem, i64, Result<SquareMatrix, MatrixError>, try_rem);
impl_scalar_arithmetic!(BitXor, bitxor, i32, Result<SquareMatrix, MatrixError>, pow);

impl std::ops::Mul<&SquareMatrix> for f64 {
    type Output = SquareMatrix;
    fn mul(self, value: &SquareMatrix) -> Self::Output {
        value.scale(self)
    }
}

impl std::ops::Mul<SquareMatrix> for f64 {
    type Output = SquareMatrix;
    fn mul(self, value: SquareMatrix) -> Self::Output {
        value.scale(self)
    }
}

impl std::ops::MulAssign<f64> for SquareMatrix {
    fn mul_assign(&mut self, value: f64) {
        self.scale_assign(value);
    }
}

impl std::ops::Neg for &SquareMatrix {
    type Output = SquareMatrix;
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl std::ops::Neg for SquareMatrix {
    type Output = SquareMatrix;
    fn neg(mut self) -> Self::Output {
        self.apply(|v| -v);
        self
    }
}

/// `!m` is the determinant.
impl std::ops::Not for &SquareMatrix {
    type Output = f64;
    fn not(self) -> Self::Output {
        self.determinant()
    }
}

impl std::ops::Not for SquareMatrix {
    type Output = f64;
    fn not(self) -> Self::Output {
        self.determinant()
    }
}
