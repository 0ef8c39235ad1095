//! orthobasis-linalg: orthonormal bases by Gram-Schmidt orthogonalization.
//!
//! This crate provides small dense `Vector`/`Matrix` types, the classical and
//! modified Gram-Schmidt procedures built on top of them, and the diagnostics
//! and text rendering used to compare how well each variant keeps its output
//! orthonormal on ill-conditioned input.
pub mod diagnostics;
pub mod error;
pub mod math;
pub mod orthogonalize;
pub mod report;

pub use error::{LinalgError, Result};
pub use math::{Matrix, Vector};
pub use orthogonalize::{classical_gram_schmidt, modified_gram_schmidt, GramSchmidt};
