use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

/// A real vector whose dimension is fixed when it is built.
///
/// Every arithmetic method returns a fresh `Vector`; there is no way to
/// change an entry once the vector exists. Unit vectors are produced with
/// [`Vector::basis`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Box<[f64]>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    pub fn from_slice(data: &[f64]) -> Self {
        Self { data: data.into() }
    }

    pub fn zeros(len: usize) -> Self {
        Vector::new(vec![0.0; len])
    }

    /// The `index`-th standard basis vector of dimension `len`.
    pub fn basis(len: usize, index: usize) -> Result<Self> {
        if index >= len {
            return Err(LinalgError::IndexOutOfRange { index, len });
        }
        let mut data = vec![0.0; len];
        data[index] = 1.0;
        Ok(Vector::new(data))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    fn check_same_dimension(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    pub fn inner_product(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimension(other, "take the inner product of")?;
        Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
    }

    pub fn scale(&self, s: f64) -> Vector {
        self.iter().map(|v| s * v).collect()
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_same_dimension(other, "add")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a + b).collect())
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.check_same_dimension(other, "subtract")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a - b).collect())
    }

    /// Euclidean length, `sqrt(<self, self>)`.
    pub fn norm(&self) -> f64 {
        dot_scalar_f64(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// The zero vector has no direction: the result is `self.scale(1.0 / 0.0)`,
    /// whose entries are NaN. Use [`Vector::try_normalize`] to get an error
    /// instead.
    pub fn normalize(&self) -> Vector {
        self.scale(1.0 / self.norm())
    }

    pub fn try_normalize(&self) -> Result<Vector> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(LinalgError::DegenerateVector { norm });
        }
        Ok(self.scale(1.0 / norm))
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::new(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data.into_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
