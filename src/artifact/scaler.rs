use serde::Deserialize;

use super::ArtifactError;

/// Per-feature transform fitted at training time.
pub trait FeatureScaler: Send + Sync {
    fn kind(&self) -> &'static str;
    fn transform(&self, row: &[f64]) -> Vec<f64>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerSpec {
    Identity,
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl ScalerSpec {
    pub(crate) fn validate(&self, n_columns: usize) -> Result<(), ArtifactError> {
        let (offset, scale, offset_name) = match self {
            ScalerSpec::Identity => return Ok(()),
            ScalerSpec::Standard { mean, scale } => (mean, scale, "mean"),
            ScalerSpec::MinMax { min, scale } => (min, scale, "min"),
        };
        check_width(offset_name, offset, n_columns)?;
        check_width("scale", scale, n_columns)?;
        Ok(())
    }
}

fn check_width(name: &str, values: &[f64], n_columns: usize) -> Result<(), ArtifactError> {
    if values.len() != n_columns {
        return Err(ArtifactError::InvalidScaler(format!(
            "{name} has {} entries, expected {n_columns}",
            values.len()
        )));
    }
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(ArtifactError::InvalidScaler(format!(
            "{name}[{idx}] is not a finite number"
        )));
    }
    Ok(())
}

impl FeatureScaler for ScalerSpec {
    fn kind(&self) -> &'static str {
        match self {
            ScalerSpec::Identity => "identity",
            ScalerSpec::Standard { .. } => "standard",
            ScalerSpec::MinMax { .. } => "min_max",
        }
    }

    fn transform(&self, row: &[f64]) -> Vec<f64> {
        match self {
            ScalerSpec::Identity => row.to_vec(),
            ScalerSpec::Standard { mean, scale } => row
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| {
                    // constant features are stored with zero spread
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (x - m) / s
                })
                .collect(),
            ScalerSpec::MinMax { min, scale } => row
                .iter()
                .zip(min.iter().zip(scale.iter()))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        }
    }
}
