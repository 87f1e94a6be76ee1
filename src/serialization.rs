use crate::error::MatrixError;
use crate::square_matrix::SquareMatrix;
use serde::Deserialize;

/// Unvalidated input for [`SquareMatrix`], used when loading.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InputSquareMatrix {
    size: usize,
    elements: Vec<f64>,
}

impl TryFrom<InputSquareMatrix> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(value: InputSquareMatrix) -> Result<Self, Self::Error> {
        SquareMatrix::from_vec(value.size, value.elements)
    }
}

impl SquareMatrix {
    /// Return a representation of the matrix as a `YAML` string.
    ///
    /// The record has two fields, `size` and `elements`,
    /// with elements in row-major order.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_yaml::to_string`
    /// returns an error.
    pub fn as_string(&self) -> Result<String, MatrixError> {
        match serde_yaml::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }

    /// Return a representation of the matrix as a `JSON` string.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_json::to_string`
    /// returns an error.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> Result<String, MatrixError> {
        match serde_json::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }
}

/// Build a [`SquareMatrix`] from a `YAML` string.
///
/// # Errors
///
/// Malformed input gives [`MatrixError::YamlError`].
/// Well-formed input violating the size rules of
/// [`SquareMatrix::from_vec`] is reported through the
/// same variant, carrying the validation message.
///
/// # Examples
///
/// ```
/// let yaml = "
/// size: 2
/// elements: [1, 2, 3, 4]
/// ";
/// let m = squaremat::loads(yaml).unwrap();
/// assert_eq!(m.determinant(), -2.0);
/// assert!(squaremat::loads("size: 2\nelements: [1, 2, 3]\n").is_err());
/// ```
pub fn loads(yaml: &str) -> Result<SquareMatrix, MatrixError> {
    let matrix: SquareMatrix = serde_yaml::from_str(yaml)?;
    Ok(matrix)
}

/// Build a [`SquareMatrix`] from a reader of `YAML` data.
pub fn load<T: std::io::Read>(reader: T) -> Result<SquareMatrix, MatrixError> {
    let matrix: SquareMatrix = serde_yaml::from_reader(reader)?;
    Ok(matrix)
}

/// Build a [`SquareMatrix`] from a `JSON` string.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<SquareMatrix, MatrixError> {
    let matrix: SquareMatrix = serde_json::from_str(json)?;
    Ok(matrix)
}
