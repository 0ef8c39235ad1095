//! Dense real vectors and column-major matrices.
//!
//! `Vector` has a fixed dimension and `Matrix` keeps its columns as
//! `Vector`s. Both are immutable once built: every arithmetic method returns
//! a new value, and size mismatches are reported as `LinalgError`s.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
