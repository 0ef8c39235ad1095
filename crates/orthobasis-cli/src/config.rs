use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use orthobasis_linalg::report::{RenderOptions, DEFAULT_COLUMN_WIDTH};
use orthobasis_linalg::GramSchmidt;

/// Parameters for the near-dependent orthogonalization experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Values of the conditioning parameter `k`; smaller is worse conditioned.
    pub ks: Vec<f64>,
    /// Number of input vectors. They live in `R^(vector_count + 1)`.
    pub vector_count: usize,
    pub methods: Vec<GramSchmidt>,
    pub precision: Option<usize>,
    pub scientific: bool,
    pub column_width: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            ks: vec![1e-1, 1e-5, 1e-10],
            vector_count: 4,
            methods: GramSchmidt::ALL.to_vec(),
            precision: None,
            scientific: false,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl ExperimentConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            column_width: self.column_width,
            precision: self.precision,
            scientific: self.scientific,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ks.is_empty() {
            anyhow::bail!("At least one value of k is required");
        }
        if let Some(k) = self.ks.iter().find(|k| !k.is_finite() || **k == 0.0) {
            anyhow::bail!("k must be finite and non-zero, got {}", k);
        }
        if self.vector_count == 0 {
            anyhow::bail!("vector_count must be at least 1");
        }
        if self.methods.is_empty() {
            anyhow::bail!("At least one Gram-Schmidt method is required");
        }
        Ok(())
    }
}

/// Load an experiment configuration from a JSON file.
pub fn load_experiment_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ExperimentConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
