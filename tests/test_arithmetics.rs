use squaremat::{MatrixError, SquareMatrix};

fn m1() -> SquareMatrix {
    SquareMatrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap()
}

fn m2() -> SquareMatrix {
    SquareMatrix::from_rows(vec![vec![5., 6.], vec![7., 8.]]).unwrap()
}

fn m3() -> SquareMatrix {
    SquareMatrix::new(3).unwrap()
}

#[test]
fn addition() -> anyhow::Result<()> {
    let result = (&m1() + &m2())?;
    assert_eq!(result.as_slice(), &[6., 8., 10., 12.]);
    let result = (m1() + m2())?;
    assert_eq!(result.as_slice(), &[6., 8., 10., 12.]);
    Ok(())
}

#[test]
fn subtraction() -> anyhow::Result<()> {
    let result = (&m2() - &m1())?;
    assert_eq!(result.as_slice(), &[4., 4., 4., 4.]);
    Ok(())
}

#[test]
fn unary_minus() {
    let result = -&m1();
    assert_eq!(result.as_slice(), &[-1., -2., -3., -4.]);
    let result = -m1();
    assert_eq!(result.as_slice(), &[-1., -2., -3., -4.]);
}

#[test]
fn matrix_multiplication() -> anyhow::Result<()> {
    let result = (&m1() * &m2())?;
    assert_eq!(result.as_slice(), &[19., 22., 43., 50.]);
    Ok(())
}

#[test]
fn scalar_multiplication_commutes() {
    let a = &m1() * 2.0;
    let b = 2.0 * &m1();
    assert_eq!(a.as_slice(), &[2., 4., 6., 8.]);
    assert_eq!(a.as_slice(), b.as_slice());
    assert_eq!((m1() * 0.5).as_slice(), (0.5 * m1()).as_slice());
}

#[test]
fn elementwise_multiplication() -> anyhow::Result<()> {
    let result = (&m1() % &m2())?;
    assert_eq!(result.as_slice(), &[5., 12., 21., 32.]);
    Ok(())
}

#[test]
fn modulo_by_scalar() -> anyhow::Result<()> {
    let m = SquareMatrix::from_rows(vec![vec![5., -7.], vec![-6., 2.5]])?;
    let result = (&m % 3)?;
    assert_eq!(result.as_slice(), &[2., 2., 0., 2.5]);
    Ok(())
}

#[test]
fn modulo_by_non_positive_fails() {
    assert!(matches!(&m1() % 0, Err(MatrixError::InvalidScalar(_))));
    assert!(matches!(&m1() % -2, Err(MatrixError::InvalidScalar(_))));
}

#[test]
fn division_by_scalar() -> anyhow::Result<()> {
    let result = (&m2() / 2.0)?;
    assert_eq!(result.as_slice(), &[2.5, 3., 3.5, 4.]);
    assert!(matches!(&m2() / 0.0, Err(MatrixError::InvalidScalar(_))));
    Ok(())
}

#[test]
fn transpose() {
    let result = m1().transpose();
    assert_eq!(result.as_slice(), &[1., 3., 2., 4.]);
}

#[test]
fn operands_are_not_mutated() -> anyhow::Result<()> {
    let a = m1();
    let b = m2();
    let _ = (&a + &b)?;
    let _ = (&a * &b)?;
    let _ = (&a % &b)?;
    let _ = -&a;
    let _ = a.transpose();
    assert_eq!(a.as_slice(), &[1., 2., 3., 4.]);
    assert_eq!(b.as_slice(), &[5., 6., 7., 8.]);
    Ok(())
}

#[test]
fn compound_assignment() -> anyhow::Result<()> {
    let mut a = m1();
    a.try_add_assign(&m2())?;
    assert_eq!(a.as_slice(), &[6., 8., 10., 12.]);
    a.try_sub_assign(&m2())?;
    assert_eq!(a.as_slice(), &[1., 2., 3., 4.]);
    a.try_mul_assign(&m2())?;
    assert_eq!(a.as_slice(), &[19., 22., 43., 50.]);

    let mut a = m1();
    a *= 3.0;
    assert_eq!(a.as_slice(), &[3., 6., 9., 12.]);
    a.scale_assign(0.5);
    assert_eq!(a.as_slice(), &[1.5, 3., 4.5, 6.]);

    let mut a = m1();
    a.try_hadamard_assign(&m2())?;
    assert_eq!(a.as_slice(), &[5., 12., 21., 32.]);
    a.try_rem_assign(5)?;
    assert_eq!(a.as_slice(), &[0., 2., 1., 2.]);
    a.try_div_assign(2.0)?;
    assert_eq!(a.as_slice(), &[0., 1., 0.5, 1.]);
    Ok(())
}

#[test]
fn chained_compound_assignment() -> anyhow::Result<()> {
    let mut a = m1();
    a.try_add_assign(&m1())?.try_div_assign(2.0)?;
    assert_eq!(a.as_slice(), m1().as_slice());
    Ok(())
}

#[test]
fn rejected_scalar_assignment_leaves_receiver() {
    let mut a = m1();
    assert!(a.try_div_assign(0.0).is_err());
    assert!(a.try_rem_assign(0).is_err());
    assert!(a.try_rem_assign(-1).is_err());
    assert_eq!(a.as_slice(), &[1., 2., 3., 4.]);
}

macro_rules! test_dimension_mismatch {
    ($fn_name: ident, $operation: expr, $op: expr) => {
        #[test]
        fn $fn_name() {
            let a = m1();
            let b = m3();
            match $op(&a, &b) {
                Err(MatrixError::DimensionMismatch {
                    operation,
                    left,
                    right,
                }) => {
                    assert_eq!(operation, $operation);
                    assert_eq!(left, 2);
                    assert_eq!(right, 3);
                }
                other => panic!("expected a dimension mismatch, got {other:?}"),
            }
            assert_eq!(a.as_slice(), &[1., 2., 3., 4.]);
            assert_eq!(b.as_slice(), &[0.; 9]);
        }
    };
}

test_dimension_mismatch!(add_mismatch, "addition", |a: &SquareMatrix, b: &SquareMatrix| a + b);
test_dimension_mismatch!(sub_mismatch, "subtraction", |a: &SquareMatrix, b: &SquareMatrix| a - b);
test_dimension_mismatch!(mul_mismatch, "multiplication", |a: &SquareMatrix, b: &SquareMatrix| a * b);
test_dimension_mismatch!(
    hadamard_mismatch,
    "element-wise multiplication",
    |a: &SquareMatrix, b: &SquareMatrix| a % b
);

macro_rules! test_assign_dimension_mismatch {
    ($fn_name: ident, $method: ident) => {
        #[test]
        fn $fn_name() {
            let mut a = m1();
            let b = m3();
            assert!(matches!(
                a.$method(&b),
                Err(MatrixError::DimensionMismatch { .. })
            ));
            assert_eq!(a.as_slice(), &[1., 2., 3., 4.]);
            assert_eq!(b.as_slice(), &[0.; 9]);
        }
    };
}

test_assign_dimension_mismatch!(add_assign_mismatch, try_add_assign);
test_assign_dimension_mismatch!(sub_assign_mismatch, try_sub_assign);
test_assign_dimension_mismatch!(mul_assign_mismatch, try_mul_assign);
test_assign_dimension_mismatch!(hadamard_assign_mismatch, try_hadamard_assign);

#[test]
fn modulo_of_large_elements_stays_in_range() -> anyhow::Result<()> {
    let m = SquareMatrix::from_vec(2, vec![1e20, -1e20, 123456789012345678.0, -9.87654321e18])?;
    let result = (&m % 3)?;
    assert_eq!(result.get(0, 0)?, 1.0);
    assert_eq!(result.get(0, 1)?, 2.0);
    for &v in result.as_slice() {
        assert!(v >= 0.0 && v < 3.0, "{v} not in [0, 3)");
    }

    let mut in_place = m.clone();
    in_place.try_rem_assign(7)?;
    for &v in in_place.as_slice() {
        assert!(v >= 0.0 && v < 7.0, "{v} not in [0, 7)");
    }
    Ok(())
}
