pub mod json;
pub mod text;

use crate::criteria::Criterion;
use crate::pipeline::PredictionAssembler;

pub const APP_TITLE: &str = "Student's Employability Prediction Model";
pub const DISCLAIMER: &str = "Disclaimer: This tool provides a prediction based on the given inputs \
and the trained machine learning model. Results are for educational and experimental purposes only \
and should not be treated as an absolute measure of employability.";
pub const INCOMPLETE_WARNING: &str = "Please rate all criteria before predicting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct BoundColumn {
    pub column: String,
    pub criterion_key: &'static str,
    pub criterion_name: &'static str,
}

#[derive(Debug, Clone)]
pub struct InspectSummary {
    pub model_path: String,
    pub scaler_kind: &'static str,
    pub classifier_kind: &'static str,
    pub n_estimators: usize,
    pub columns: Vec<BoundColumn>,
    pub unused_criteria: Vec<&'static str>,
    pub identity_mapping: bool,
}

impl InspectSummary {
    pub fn build(
        model_path: &str,
        assembler: &PredictionAssembler,
        identity_mapping: bool,
    ) -> Self {
        let artifact = assembler.artifact();
        let sources = assembler.binding().sources();
        let columns = artifact
            .columns()
            .iter()
            .zip(sources)
            .map(|(column, criterion)| BoundColumn {
                column: column.clone(),
                criterion_key: criterion.key(),
                criterion_name: criterion.display_name(),
            })
            .collect();
        let unused_criteria = Criterion::ALL
            .iter()
            .filter(|c| !sources.contains(*c))
            .map(|c| c.key())
            .collect();

        Self {
            model_path: model_path.to_string(),
            scaler_kind: artifact.scaler().kind(),
            classifier_kind: artifact.classifier().kind(),
            n_estimators: artifact.n_estimators(),
            columns,
            unused_criteria,
            identity_mapping,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
