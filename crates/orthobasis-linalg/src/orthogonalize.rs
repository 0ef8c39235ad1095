//! Classical and modified Gram-Schmidt orthogonalization.
//!
//! Both procedures expect a non-empty list of linearly independent vectors
//! of one dimension and return the same number of orthonormal vectors, built
//! in input order. Linear dependence is not detected: the vector that
//! collapses to zero normalizes to NaN entries, and a warning is logged.
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::Vector;

/// Classical Gram-Schmidt.
///
/// Each `a_i` is projected onto every finished `q_j` (`j < i`) using the
/// original `a_i`, and the sum of those projections is removed in one step:
///
/// `q_i = normalize(a_i - sum_j <a_i, q_j> q_j)`
pub fn classical_gram_schmidt(vectors: &[Vector]) -> Result<Vec<Vector>> {
    let first = vectors.first().ok_or(LinalgError::EmptyInput)?;

    let mut orthonormals = Vec::with_capacity(vectors.len());
    orthonormals.push(first.normalize());

    for a_i in &vectors[1..] {
        let mut contribution = Vector::zeros(first.dimension());
        for q_j in &orthonormals {
            let coefficient = a_i.inner_product(q_j)?;
            contribution = contribution.add(&q_j.scale(coefficient))?;
        }
        let v_i = a_i.sub(&contribution)?;
        orthonormals.push(v_i.normalize());
    }

    debug!(
        "Classical Gram-Schmidt produced {} vectors in R^{}",
        orthonormals.len(),
        first.dimension()
    );
    warn_if_degenerate(GramSchmidt::Classical, &orthonormals);
    Ok(orthonormals)
}

/// Modified Gram-Schmidt.
///
/// As soon as `q_{i-1}` is known, every remaining working vector `v_j`
/// (`j >= i`) is deflated against it:
///
/// `v_j <- v_j - <v_j, q_{i-1}> q_{i-1}`
///
/// and then `q_i = normalize(v_i)`.
pub fn modified_gram_schmidt(vectors: &[Vector]) -> Result<Vec<Vector>> {
    let first = vectors.first().ok_or(LinalgError::EmptyInput)?;

    let mut working = vectors.to_vec();
    let mut orthonormals = Vec::with_capacity(vectors.len());
    orthonormals.push(first.normalize());

    for i in 1..vectors.len() {
        let q_prev = &orthonormals[i - 1];
        for v_j in working[i..].iter_mut() {
            let coefficient = v_j.inner_product(q_prev)?;
            *v_j = v_j.sub(&q_prev.scale(coefficient))?;
        }
        let q_i = working[i].normalize();
        orthonormals.push(q_i);
    }

    debug!(
        "Modified Gram-Schmidt produced {} vectors in R^{}",
        orthonormals.len(),
        first.dimension()
    );
    warn_if_degenerate(GramSchmidt::Modified, &orthonormals);
    Ok(orthonormals)
}

fn warn_if_degenerate(method: GramSchmidt, orthonormals: &[Vector]) {
    if let Some(index) = orthonormals.iter().position(|q| !q.is_finite()) {
        warn!(
            "{} produced a non-finite vector at index {}; the input is probably linearly dependent",
            method, index
        );
    }
}

/// Which Gram-Schmidt variant to run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GramSchmidt {
    Classical,
    Modified,
}

impl GramSchmidt {
    pub const ALL: [GramSchmidt; 2] = [GramSchmidt::Classical, GramSchmidt::Modified];

    pub fn orthonormalize(&self, vectors: &[Vector]) -> Result<Vec<Vector>> {
        match self {
            GramSchmidt::Classical => classical_gram_schmidt(vectors),
            GramSchmidt::Modified => modified_gram_schmidt(vectors),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GramSchmidt::Classical => "Classical Gram-Schmidt",
            GramSchmidt::Modified => "Modified Gram-Schmidt",
        }
    }
}

impl fmt::Display for GramSchmidt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GramSchmidt {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classical" | "cgs" => Ok(GramSchmidt::Classical),
            "modified" | "mgs" => Ok(GramSchmidt::Modified),
            _ => Err(format!(
                "Unknown Gram-Schmidt variant: {}. Expected one of: classical, cgs, modified, mgs",
                s
            )),
        }
    }
}
