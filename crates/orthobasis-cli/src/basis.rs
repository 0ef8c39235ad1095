//! Orthonormalize vectors supplied in a JSON file.
use std::path::Path;

use anyhow::{Context, Result};

use orthobasis_linalg::diagnostics::basis_matrix;
use orthobasis_linalg::{GramSchmidt, Matrix, Vector};

/// Read a JSON array of vectors, e.g. `[[1.0, 0.0], [1.0, 1.0]]`.
pub fn read_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<Vector>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read vectors: {}", path.as_ref().display()))?;
    let vectors: Vec<Vector> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse vectors: {}", path.as_ref().display()))?;
    if vectors.is_empty() {
        anyhow::bail!("No vectors found in {}", path.as_ref().display());
    }
    Ok(vectors)
}

/// Orthonormalize `vectors` and return the basis as the columns of a matrix.
pub fn orthonormal_basis(method: GramSchmidt, vectors: &[Vector]) -> Result<Matrix> {
    let basis = method
        .orthonormalize(vectors)
        .with_context(|| format!("{} failed", method))?;
    log::debug!("Orthonormalized {} vectors with {}", basis.len(), method);
    Ok(basis_matrix(&basis)?)
}

/// Write the basis as a JSON array of column vectors.
pub fn write_basis<P: AsRef<Path>>(path: P, basis: &Matrix) -> Result<()> {
    let json = serde_json::to_string_pretty(basis)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write basis: {}", path.as_ref().display()))?;
    Ok(())
}
