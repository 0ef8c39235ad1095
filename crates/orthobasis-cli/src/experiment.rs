//! The near-dependent Gram-Schmidt experiment.
//!
//! For each `k` the input is `a_i = k e_i + e_n` (`i < n`) in `R^(n+1)`. As
//! `k` shrinks the vectors approach `e_n` and the system becomes badly
//! conditioned, which shows up as growth of `I - QᵀQ`.
use std::io::Write;

use anyhow::Result;

use orthobasis_linalg::diagnostics::{basis_matrix, orthonormality_defect};
use orthobasis_linalg::report::{render_matrix, RenderOptions};
use orthobasis_linalg::{GramSchmidt, Matrix, Vector};

use crate::config::ExperimentConfig;

/// Build the `n` test vectors for conditioning parameter `k`.
pub fn near_dependent_system(k: f64, n: usize) -> Vec<Vector> {
    (0..n)
        .map(|i| {
            let mut entries = vec![0.0; n + 1];
            entries[i] = k;
            entries[n] = 1.0;
            Vector::new(entries)
        })
        .collect()
}

/// Outcome of one method on one input system.
#[derive(Debug, Clone)]
pub struct MethodReport {
    pub method: GramSchmidt,
    pub basis: Vec<Vector>,
    /// `I - QᵀQ`
    pub defect: Matrix,
    pub defect_norm: f64,
}

impl MethodReport {
    pub fn compute(method: GramSchmidt, input: &[Vector]) -> Result<Self> {
        let basis = method.orthonormalize(input)?;
        let q = basis_matrix(&basis)?;
        let defect = orthonormality_defect(&q)?;
        let defect_norm = defect.frobenius_norm();
        Ok(Self {
            method,
            basis,
            defect,
            defect_norm,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExperimentRun {
    pub k: f64,
    pub reports: Vec<MethodReport>,
}

impl ExperimentRun {
    pub fn report(&self, method: GramSchmidt) -> Option<&MethodReport> {
        self.reports.iter().find(|r| r.method == method)
    }
}

pub fn run_experiment(config: &ExperimentConfig) -> Result<Vec<ExperimentRun>> {
    config.validate()?;

    let mut runs = Vec::with_capacity(config.ks.len());
    for &k in &config.ks {
        let input = near_dependent_system(k, config.vector_count);
        let reports = config
            .methods
            .iter()
            .map(|&method| MethodReport::compute(method, &input))
            .collect::<Result<Vec<_>>>()?;

        for report in &reports {
            log::info!(
                "{} for k = {:e}: ||I - Q^T Q||_F = {:e}",
                report.method,
                k,
                report.defect_norm
            );
        }
        runs.push(ExperimentRun { k, reports });
    }
    Ok(runs)
}

/// Write each `I - QᵀQ` with a header and its Frobenius norm.
pub fn write_experiment_report<W: Write>(
    out: &mut W,
    runs: &[ExperimentRun],
    options: &RenderOptions,
) -> Result<()> {
    for run in runs {
        for report in &run.reports {
            writeln!(out, "{} for k = {:e}", report.method, run.k)?;
            write!(out, "{}", render_matrix(&report.defect, options)?)?;
            writeln!(out, "||I - Q^T Q||_F = {:e}", report.defect_norm)?;
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
