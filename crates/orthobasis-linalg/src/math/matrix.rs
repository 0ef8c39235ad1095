use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::vector::Vector;

/// A dense real matrix stored as a list of column vectors.
///
/// All columns share the same dimension, and there is always at least one
/// row and one column. Rows are not stored; [`Matrix::row_at`] builds them on
/// demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector>", into = "Vec<Vector>")]
pub struct Matrix {
    columns: Vec<Vector>,
    rows: usize,
}

impl Matrix {
    pub fn from_columns(columns: Vec<Vector>) -> Result<Self> {
        let rows = match columns.first() {
            Some(first) if !first.is_empty() => first.dimension(),
            _ => return Err(LinalgError::EmptyMatrix),
        };
        for (column, vector) in columns.iter().enumerate() {
            if vector.dimension() != rows {
                return Err(LinalgError::RaggedColumns {
                    column,
                    expected: rows,
                    found: vector.dimension(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let columns = (0..n)
            .map(|i| Vector::basis(n, i))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_columns(columns)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn columns(&self) -> &[Vector] {
        &self.columns
    }

    pub fn row_at(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        Ok(self.columns.iter().map(|column| column[row]).collect())
    }

    pub fn column_at(&self, col: usize) -> Result<&Vector> {
        self.columns.get(col).ok_or(LinalgError::IndexOutOfRange {
            index: col,
            len: self.column_count(),
        })
    }

    pub fn entry_at(&self, row: usize, col: usize) -> Result<f64> {
        self.column_at(col)?.get(row)
    }

    /// `self × other`.
    pub fn multiply_right(&self, other: &Matrix) -> Result<Matrix> {
        if self.column_count() != other.row_count() {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                left: self.column_count(),
                right: other.row_count(),
            });
        }
        let rows = (0..self.rows)
            .map(|i| self.row_at(i))
            .collect::<Result<Vec<_>>>()?;

        let mut columns = Vec::with_capacity(other.column_count());
        for column in other.columns() {
            let entries = rows
                .iter()
                .map(|row| row.inner_product(column))
                .collect::<Result<Vec<_>>>()?;
            columns.push(Vector::new(entries));
        }
        Matrix::from_columns(columns)
    }

    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.column_count() != other.column_count() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: self.column_count(),
                right: other.column_count(),
            });
        }
        if self.row_count() != other.row_count() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: self.row_count(),
                right: other.row_count(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, "add")?;
        let columns = self
            .columns
            .iter()
            .zip(other.columns())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_columns(columns)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, "subtract")?;
        let columns = self
            .columns
            .iter()
            .zip(other.columns())
            .map(|(a, b)| a.sub(b))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_columns(columns)
    }

    pub fn scale(&self, s: f64) -> Matrix {
        Matrix {
            columns: self.columns.iter().map(|c| c.scale(s)).collect(),
            rows: self.rows,
        }
    }

    pub fn transpose(&self) -> Matrix {
        let columns = (0..self.rows)
            .map(|i| self.columns.iter().map(|column| column[i]).collect::<Vector>())
            .collect();
        Matrix {
            columns,
            rows: self.column_count(),
        }
    }

    /// Square root of the sum of squared entries.
    pub fn frobenius_norm(&self) -> f64 {
        self.columns
            .iter()
            .flat_map(|c| c.iter())
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt()
    }

    pub fn max_abs(&self) -> f64 {
        self.columns
            .iter()
            .flat_map(|c| c.iter())
            .fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    pub fn is_finite(&self) -> bool {
        self.columns.iter().all(Vector::is_finite)
    }
}

impl TryFrom<Vec<Vector>> for Matrix {
    type Error = LinalgError;

    fn try_from(columns: Vec<Vector>) -> Result<Self> {
        Matrix::from_columns(columns)
    }
}

impl From<Matrix> for Vec<Vector> {
    fn from(value: Matrix) -> Self {
        value.columns
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, column) in self.columns.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", column[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
