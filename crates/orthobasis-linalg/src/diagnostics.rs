//! Checks on how close a computed basis is to being orthonormal.
use crate::error::Result;
use crate::math::{Matrix, Vector};

/// Assemble basis vectors as the columns of `Q`.
pub fn basis_matrix(basis: &[Vector]) -> Result<Matrix> {
    Matrix::from_columns(basis.to_vec())
}

/// `I - QᵀQ`, which is zero exactly when the columns of `q` are orthonormal.
pub fn orthonormality_defect(q: &Matrix) -> Result<Matrix> {
    let gram = q.transpose().multiply_right(q)?;
    Matrix::identity(q.column_count())?.sub(&gram)
}

/// Whether every pair in `basis` has `|<q_i, q_j>| < tolerance` and every
/// vector has `| ||q_i|| - 1 | < tolerance`.
pub fn is_orthonormal(basis: &[Vector], tolerance: f64) -> Result<bool> {
    // written as negated `<` so that NaN entries fail the check
    for (i, q_i) in basis.iter().enumerate() {
        if !((q_i.norm() - 1.0).abs() < tolerance) {
            return Ok(false);
        }
        for q_j in &basis[i + 1..] {
            if !(q_i.inner_product(q_j)?.abs() < tolerance) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_no_defect() {
        let id = Matrix::identity(3).unwrap();
        let defect = orthonormality_defect(&id).unwrap();
        assert_eq!(defect.frobenius_norm(), 0.0);
    }

    #[test]
    fn nan_basis_is_not_orthonormal() {
        let basis = vec![Vector::zeros(2).normalize()];
        assert!(!is_orthonormal(&basis, 1e-9).unwrap());
    }
}
