//! Integration tests for classical and modified Gram-Schmidt.

use std::str::FromStr;

use orthobasis_linalg::diagnostics::{basis_matrix, is_orthonormal, orthonormality_defect};
use orthobasis_linalg::{
    classical_gram_schmidt, modified_gram_schmidt, GramSchmidt, LinalgError, Matrix, Vector,
};

fn v(values: &[f64]) -> Vector {
    Vector::from_slice(values)
}

/// `a_i = k e_i + e_n` for `i < n`, in `R^(n+1)`.
fn near_dependent(k: f64, n: usize) -> Vec<Vector> {
    (0..n)
        .map(|i| {
            let mut entries = vec![0.0; n + 1];
            entries[i] = k;
            entries[n] = 1.0;
            Vector::new(entries)
        })
        .collect()
}

fn well_conditioned() -> Vec<Vector> {
    vec![
        v(&[2.0, 1.0, 0.0, 1.0]),
        v(&[1.0, 3.0, 1.0, 0.0]),
        v(&[0.0, 1.0, 4.0, 1.0]),
        v(&[1.0, 0.0, 1.0, 5.0]),
    ]
}

fn defect_norm(basis: &[Vector]) -> f64 {
    let q = basis_matrix(basis).unwrap();
    orthonormality_defect(&q).unwrap().frobenius_norm()
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn two_dimensional_example() {
    let input = vec![v(&[1.0, 0.0]), v(&[1.0, 1.0])];
    for method in GramSchmidt::ALL {
        let basis = method.orthonormalize(&input).unwrap();
        assert_eq!(basis, vec![v(&[1.0, 0.0]), v(&[0.0, 1.0])], "{}", method);
    }
}

#[test]
fn single_vector_is_normalized() {
    let input = vec![v(&[0.0, 3.0, 4.0])];
    let basis = classical_gram_schmidt(&input).unwrap();
    assert_eq!(basis.len(), 1);
    assert!((basis[0].norm() - 1.0).abs() < 1e-15);
    assert_eq!(basis, modified_gram_schmidt(&input).unwrap());
}

#[test]
fn modified_is_at_least_as_orthogonal_as_classical() {
    for k in [1e-1, 1e-5, 1e-10] {
        let input = near_dependent(k, 4);
        let cgs = classical_gram_schmidt(&input).unwrap();
        let mgs = modified_gram_schmidt(&input).unwrap();
        assert_eq!(cgs.len(), 4);
        assert_eq!(mgs.len(), 4);
        assert!(cgs.iter().chain(mgs.iter()).all(|q| q.dimension() == 5));

        let cgs_defect = defect_norm(&cgs);
        let mgs_defect = defect_norm(&mgs);
        assert!(
            mgs_defect <= cgs_defect,
            "k = {}: MGS defect {} > CGS defect {}",
            k,
            mgs_defect,
            cgs_defect
        );
    }
}

#[test]
fn classical_loses_orthogonality_for_tiny_k() {
    let input = near_dependent(1e-10, 4);
    let cgs = classical_gram_schmidt(&input).unwrap();
    let mgs = modified_gram_schmidt(&input).unwrap();
    assert!(defect_norm(&cgs) > 1e-2);
    assert!(defect_norm(&mgs) < 1e-6);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn outputs_are_orthonormal() {
    let input = well_conditioned();
    for method in GramSchmidt::ALL {
        let basis = method.orthonormalize(&input).unwrap();
        assert_eq!(basis.len(), input.len());
        assert!(is_orthonormal(&basis, 1e-9).unwrap(), "{}", method);
        for (i, q_i) in basis.iter().enumerate() {
            assert!((q_i.norm() - 1.0).abs() < 1e-9);
            for q_j in &basis[i + 1..] {
                assert!(q_i.inner_product(q_j).unwrap().abs() < 1e-9);
            }
        }
    }
}

#[test]
fn ill_conditioned_outputs_are_orthonormal_within_loose_tolerance() {
    let input = near_dependent(1e-5, 4);
    for method in GramSchmidt::ALL {
        let basis = method.orthonormalize(&input).unwrap();
        assert!(is_orthonormal(&basis, 1e-6).unwrap(), "{}", method);
    }
}

#[test]
fn span_is_preserved_incrementally() {
    // q_i lies in span(a_0..a_i): removing its projections onto a
    // Gram-Schmidt basis of a_0..a_i leaves nothing.
    let input = well_conditioned();
    for method in GramSchmidt::ALL {
        let basis = method.orthonormalize(&input).unwrap();
        for i in 0..input.len() {
            let prefix = modified_gram_schmidt(&input[..=i]).unwrap();
            let mut residual = basis[i].clone();
            for p in &prefix {
                let c = residual.inner_product(p).unwrap();
                residual = residual.sub(&p.scale(c)).unwrap();
            }
            assert!(residual.norm() < 1e-9, "{}: q_{} leaves the span", method, i);
        }
    }
}

#[test]
fn input_order_matters() {
    let input = vec![v(&[1.0, 0.0]), v(&[1.0, 1.0])];
    let reversed: Vec<Vector> = input.iter().rev().cloned().collect();
    let forward = classical_gram_schmidt(&input).unwrap();
    let backward = classical_gram_schmidt(&reversed).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn input_is_left_untouched() {
    let input = well_conditioned();
    let copy = input.clone();
    modified_gram_schmidt(&input).unwrap();
    assert_eq!(input, copy);
}

// ---------------------------------------------------------------------------
// Errors and degenerate input
// ---------------------------------------------------------------------------

#[test]
fn empty_input_errors() {
    assert_eq!(classical_gram_schmidt(&[]), Err(LinalgError::EmptyInput));
    assert_eq!(modified_gram_schmidt(&[]), Err(LinalgError::EmptyInput));
}

#[test]
fn mixed_dimensions_propagate_dimension_mismatch() {
    let input = vec![v(&[1.0, 0.0, 0.0]), v(&[0.0, 1.0, 0.0, 0.0])];
    for method in GramSchmidt::ALL {
        let err = method.orthonormalize(&input).unwrap_err();
        assert!(
            matches!(err, LinalgError::DimensionMismatch { .. }),
            "{}: {:?}",
            method,
            err
        );
    }
}

#[test]
fn dependent_input_yields_non_finite_vector() {
    // Not reported as an error: the collapsed vector normalizes to NaN.
    let input = vec![v(&[1.0, 2.0]), v(&[2.0, 4.0])];
    for method in GramSchmidt::ALL {
        let basis = method.orthonormalize(&input).unwrap();
        assert!(basis[0].is_finite());
        assert!(!basis[1].is_finite(), "{}", method);
        assert!(!basis_matrix(&basis).unwrap().is_finite());
    }
}

// ---------------------------------------------------------------------------
// Method selection
// ---------------------------------------------------------------------------

#[test]
fn method_from_str() {
    assert_eq!(GramSchmidt::from_str("classical"), Ok(GramSchmidt::Classical));
    assert_eq!(GramSchmidt::from_str("CGS"), Ok(GramSchmidt::Classical));
    assert_eq!(GramSchmidt::from_str("Modified"), Ok(GramSchmidt::Modified));
    assert_eq!(GramSchmidt::from_str("mgs"), Ok(GramSchmidt::Modified));
    assert!(GramSchmidt::from_str("householder").is_err());
}

#[test]
fn method_serde_names() {
    assert_eq!(
        serde_json::to_string(&GramSchmidt::Modified).unwrap(),
        "\"modified\""
    );
    let m: GramSchmidt = serde_json::from_str("\"classical\"").unwrap();
    assert_eq!(m, GramSchmidt::Classical);
}

#[test]
fn orthonormal_columns_have_small_defect() {
    let basis = modified_gram_schmidt(&well_conditioned()).unwrap();
    let q: Matrix = basis_matrix(&basis).unwrap();
    let defect = orthonormality_defect(&q).unwrap();
    assert_eq!(defect.shape(), (4, 4));
    assert!(defect.max_abs() < 1e-12);
}
