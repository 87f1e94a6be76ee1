use squaremat::SquareMatrix;

fn yes_no(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn main() -> Result<(), squaremat::MatrixError> {
    env_logger::init();

    println!("SquareMatrix demo");
    println!("=================\n");

    println!("Creating a 3x3 matrix m1:");
    let mut m1 = SquareMatrix::new(3)?;
    for (k, value) in (1..=9).enumerate() {
        m1.set(k / 3, k % 3, f64::from(value))?;
    }
    println!("{m1}");

    println!("Creating another 3x3 matrix m2:");
    let m2 = SquareMatrix::from_rows(vec![
        vec![9., 8., 7.],
        vec![6., 5., 4.],
        vec![3., 2., 1.],
    ])?;
    println!("{m2}");

    println!("Matrix addition (m1 + m2):\n{}", (&m1 + &m2)?);
    println!("Matrix subtraction (m1 - m2):\n{}", (&m1 - &m2)?);
    println!("Matrix multiplication (m1 * m2):\n{}", (&m1 * &m2)?);
    println!("Element-wise multiplication (m1 % m2):\n{}", (&m1 % &m2)?);
    println!("Scalar multiplication (m1 * 2):\n{}", &m1 * 2.0);
    println!("Scalar division (m1 / 2):\n{}", (&m1 / 2.0)?);
    println!("Transpose of m1:\n{}", m1.transpose());
    println!("Determinant of m1 (!m1): {}\n", !&m1);

    let m3 = SquareMatrix::from_rows(vec![
        vec![1., 2., 3.],
        vec![0., 1., 4.],
        vec![5., 6., 0.],
    ])?;
    println!("Creating an invertible matrix m3:\n{m3}");
    println!("Determinant of m3 (!m3): {}\n", !&m3);
    println!("m3 raised to power 2 (m3 ^ 2):\n{}", (&m3 ^ 2)?);
    println!("3x3 identity matrix:\n{}", SquareMatrix::identity(3)?);

    println!("Comparison of m1 and m2:\n");
    println!("m1 == m2: {}", yes_no(m1 == m2));
    println!("m1 != m2: {}", yes_no(m1 != m2));
    println!("m1 < m2: {}", yes_no(m1 < m2));
    println!("m1 > m2: {}\n", yes_no(m1 > m2));

    println!("m1:\n{m1}");
    println!("Pre-increment:\n{}", m1.increment());
    println!("Post-increment:\n{}", m1.post_increment());
    println!("After post-increment, m1:\n{m1}");
    println!("Pre-decrement:\n{}", m1.decrement());
    println!("Post-decrement:\n{}", m1.post_decrement());
    println!("After post-decrement, m1:\n{m1}");

    println!("Compound assignment (m1 += m2):\n{}", m1.try_add_assign(&m2)?);
    m1 *= 2.0;
    println!("Compound assignment (m1 *= 2):\n{m1}");
    println!("Compound assignment (m1 %= 3):\n{}", m1.try_rem_assign(3)?);
    println!("Compound assignment (m1 /= 2):\n{}", m1.try_div_assign(2.0)?);
    println!("Modulo operation (m1 % 3):\n{}", (&m1 % 3)?);

    println!("Accessing m1[0][1]: {}\n", m1.row(0)?.get(1)?);
    m1.row_mut(0)?.set(1, 42.0)?;
    println!("After setting m1[0][1] = 42:\n{m1}");

    println!("Rejected operations:");
    if let Err(e) = &m1 + &SquareMatrix::new(2)? {
        println!("  {e}");
    }
    if let Err(e) = &m1 / 0.0 {
        println!("  {e}");
    }
    if let Err(e) = &m1 ^ -1 {
        println!("  {e}");
    }
    if let Err(e) = m1.get(3, 0) {
        println!("  {e}");
    }

    println!("\nm1 as YAML:\n{}", m1.as_string()?);
    println!("Demo completed successfully!");
    Ok(())
}
