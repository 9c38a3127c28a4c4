use crate::artifact::classifier::Classifier;
use crate::artifact::scaler::FeatureScaler;
use crate::criteria::{Criterion, RatingInput};
use crate::pipeline::PipelineError;
use crate::pipeline::mapping::NameMapping;

/// Single row in trained column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledFeatureVector(pub Vec<f64>);

/// Which criterion feeds each trained column, resolved once per artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    sources: Vec<Criterion>,
}

impl ColumnBinding {
    /// Every column must name a criterion; criteria the model never saw are dropped.
    pub fn resolve(column_order: &[String], mapping: &NameMapping) -> Result<Self, PipelineError> {
        let mut sources = Vec::with_capacity(column_order.len());
        for column in column_order {
            let criterion = mapping
                .criterion_for(column)
                .ok_or_else(|| PipelineError::ColumnMismatch {
                    column: column.clone(),
                })?;
            sources.push(criterion);
        }

        for criterion in Criterion::ALL {
            if !sources.contains(&criterion) {
                tracing::debug!(criterion = %criterion, "criterion not used by the model");
            }
        }
        Ok(Self { sources })
    }

    pub fn sources(&self) -> &[Criterion] {
        &self.sources
    }

    /// Fills the row for one submission; a needed criterion left unset is an error.
    pub fn assemble(&self, ratings: &RatingInput) -> Result<FeatureVector, PipelineError> {
        let mut row = Vec::with_capacity(self.sources.len());
        let mut unset = Vec::new();
        for &criterion in &self.sources {
            match ratings.get(criterion) {
                Some(rating) => row.push(f64::from(rating.value())),
                None => unset.push(criterion),
            }
        }
        if !unset.is_empty() {
            return Err(PipelineError::IncompleteInput { missing: unset });
        }
        Ok(FeatureVector(row))
    }
}

pub fn scale(vector: &FeatureVector, scaler: &dyn FeatureScaler) -> ScaledFeatureVector {
    ScaledFeatureVector(scaler.transform(&vector.0))
}

pub fn predict(scaled: &ScaledFeatureVector, classifier: &dyn Classifier) -> i64 {
    classifier.predict(&scaled.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/assemble.rs"]
mod tests;
