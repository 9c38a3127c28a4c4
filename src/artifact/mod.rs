use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub mod classifier;
pub mod scaler;

use classifier::{Classifier, ModelSpec};
use scaler::{FeatureScaler, ScalerSpec};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed model artifact {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("unsupported artifact format_version {0} (expected {})", ARTIFACT_FORMAT_VERSION)]
    UnsupportedVersion(u32),
    #[error("invalid column list: {0}")]
    InvalidColumns(String),
    #[error("invalid scaler: {0}")]
    InvalidScaler(String),
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

/// On-disk layout of the trained bundle.
#[derive(Debug, Deserialize)]
struct ArtifactFile {
    format_version: u32,
    columns: Vec<String>,
    scaler: ScalerSpec,
    model: ModelSpec,
}

/// Fitted scaler, classifier and the column order they were trained on.
/// Immutable once built.
pub struct ModelArtifact {
    columns: Vec<String>,
    scaler: Box<dyn FeatureScaler>,
    classifier: Box<dyn Classifier>,
    n_estimators: usize,
}

impl ModelArtifact {
    pub fn new(
        columns: Vec<String>,
        scaler: Box<dyn FeatureScaler>,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self, ArtifactError> {
        check_columns(&columns)?;
        Ok(Self {
            columns,
            scaler,
            classifier,
            n_estimators: 1,
        })
    }

    pub fn from_json_str(raw: &str, origin: &str) -> Result<Self, ArtifactError> {
        let file: ArtifactFile =
            serde_json::from_str(raw).map_err(|source| ArtifactError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        if file.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(file.format_version));
        }
        file.scaler.validate(file.columns.len())?;
        file.model.validate(file.columns.len())?;

        let n_estimators = file.model.n_estimators();
        let mut artifact = Self::new(file.columns, Box::new(file.scaler), Box::new(file.model))?;
        artifact.n_estimators = n_estimators;
        Ok(artifact)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn scaler(&self) -> &dyn FeatureScaler {
        self.scaler.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }
}

impl fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("columns", &self.columns)
            .field("scaler", &self.scaler.kind())
            .field("classifier", &self.classifier.kind())
            .field("n_estimators", &self.n_estimators)
            .finish()
    }
}

pub fn load_artifact(path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = ModelArtifact::from_json_str(&raw, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        columns = artifact.columns.len(),
        scaler = artifact.scaler.kind(),
        classifier = artifact.classifier.kind(),
        estimators = artifact.n_estimators,
        "loaded model artifact"
    );
    Ok(artifact)
}

fn check_columns(columns: &[String]) -> Result<(), ArtifactError> {
    if columns.is_empty() {
        return Err(ArtifactError::InvalidColumns("no columns recorded".into()));
    }
    let mut seen = BTreeSet::new();
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(ArtifactError::InvalidColumns(format!(
                "column {name:?} appears more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/artifact/tests.rs"]
mod tests;
