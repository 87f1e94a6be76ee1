#![macro_use]

// Binary operators between two matrices, for every
// owned/borrowed combination of operands.
macro_rules! impl_matrix_arithmetic {
    ($op: ident, $fn: ident, $method: ident) => {
        impl std::ops::$op<&SquareMatrix> for &SquareMatrix {
            type Output = Result<SquareMatrix, MatrixError>;
            fn $fn(self, value: &SquareMatrix) -> Self::Output {
                self.$method(value)
            }
        }

        impl std::ops::$op<SquareMatrix> for &SquareMatrix {
            type Output = Result<SquareMatrix, MatrixError>;
            fn $fn(self, value: SquareMatrix) -> Self::Output {
                self.$method(&value)
            }
        }

        impl std::ops::$op<&SquareMatrix> for SquareMatrix {
            type Output = Result<SquareMatrix, MatrixError>;
            fn $fn(self, value: &SquareMatrix) -> Self::Output {
                self.$method(value)
            }
        }

        impl std::ops::$op<SquareMatrix> for SquareMatrix {
            type Output = Result<SquareMatrix, MatrixError>;
            fn $fn(self, value: SquareMatrix) -> Self::Output {
                self.$method(&value)
            }
        }
    };
}

// Binary operators between a matrix and a scalar.
macro_rules! impl_scalar_arithmetic {
    ($op: ident, $fn: ident, $scalar: ty, $output: ty, $method: ident) => {
        impl std::ops::$op<$scalar> for &SquareMatrix {
            type Output = $output;
            fn $fn(self, value: $scalar) -> Self::Output {
                self.$method(value)
            }
        }

        impl std::ops::$op<$scalar> for SquareMatrix {
            type Output = $output;
            fn $fn(self, value: $scalar) -> Self::Output {
                self.$method(value)
            }
        }
    };
}
