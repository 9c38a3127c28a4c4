pub mod assemble;
pub mod label;
pub mod mapping;

use crate::artifact::ModelArtifact;
use crate::criteria::{self, Criterion, RatingInput};

use assemble::{ColumnBinding, FeatureVector, ScaledFeatureVector};
use label::label_for;
use mapping::NameMapping;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("model column {column:?} does not match any criterion")]
    ColumnMismatch { column: String },
    #[error("unrated criteria: {}", format_criteria(.missing))]
    IncompleteInput { missing: Vec<Criterion> },
}

fn format_criteria(criteria: &[Criterion]) -> String {
    criteria
        .iter()
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub prediction: i64,
    pub label: &'static str,
}

/// Outcome of one press of "predict".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    AwaitingInput { missing: Vec<Criterion> },
    Labeled(PredictionResult),
}

/// Turns rating inputs into labels against one loaded artifact.
#[derive(Debug)]
pub struct PredictionAssembler {
    artifact: ModelArtifact,
    binding: ColumnBinding,
}

impl PredictionAssembler {
    /// Fails with `ColumnMismatch` if the artifact names a column no criterion maps to.
    pub fn new(artifact: ModelArtifact, mapping: &NameMapping) -> Result<Self, PipelineError> {
        let binding = ColumnBinding::resolve(artifact.columns(), mapping)?;
        tracing::debug!(columns = binding.sources().len(), "column binding verified");
        Ok(Self { artifact, binding })
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn binding(&self) -> &ColumnBinding {
        &self.binding
    }

    pub fn assemble(&self, ratings: &RatingInput) -> Result<FeatureVector, PipelineError> {
        self.binding.assemble(ratings)
    }

    pub fn scale(&self, vector: &FeatureVector) -> ScaledFeatureVector {
        assemble::scale(vector, self.artifact.scaler())
    }

    pub fn predict(&self, scaled: &ScaledFeatureVector) -> i64 {
        assemble::predict(scaled, self.artifact.classifier())
    }

    pub fn submit(&self, ratings: &RatingInput) -> Result<Submission, PipelineError> {
        if !criteria::validate(ratings) {
            let missing = criteria::missing(ratings);
            tracing::info!(missing = missing.len(), "submission incomplete");
            return Ok(Submission::AwaitingInput { missing });
        }

        let vector = self.assemble(ratings)?;
        let scaled = self.scale(&vector);
        let prediction = self.predict(&scaled);
        let label = label_for(prediction);
        tracing::debug!(?vector, ?scaled, prediction, "prediction computed");
        tracing::info!(prediction, label, "submission labeled");

        Ok(Submission::Labeled(PredictionResult { prediction, label }))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
