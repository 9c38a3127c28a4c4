use crate::pipeline::Submission;
use crate::report::{INCOMPLETE_WARNING, InspectSummary};

pub fn render_submission_text(submission: &Submission) -> String {
    match submission {
        Submission::Labeled(result) => {
            format!("Prediction: {} → {}\n", result.prediction, result.label)
        }
        Submission::AwaitingInput { missing } => {
            let mut out = format!("Warning: {INCOMPLETE_WARNING}\n");
            for criterion in missing {
                out.push_str(&format!(
                    "  missing: {} ({})\n",
                    criterion.display_name(),
                    criterion.key()
                ));
            }
            out
        }
    }
}

pub fn render_inspect_text(summary: &InspectSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Model artifact: {}\n", summary.model_path));
    out.push_str(&format!("Scaler: {}\n", summary.scaler_kind));
    out.push_str(&format!(
        "Classifier: {} ({} estimator{})\n",
        summary.classifier_kind,
        summary.n_estimators,
        if summary.n_estimators == 1 { "" } else { "s" }
    ));
    out.push_str(&format!(
        "Column mapping: {}\n\n",
        if summary.identity_mapping {
            "identity"
        } else {
            "custom"
        }
    ));

    out.push_str("Columns (trained order)\n");
    for (idx, bound) in summary.columns.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} <- {} ({})\n",
            idx + 1,
            bound.column,
            bound.criterion_key,
            bound.criterion_name
        ));
    }

    if !summary.unused_criteria.is_empty() {
        out.push_str(&format!(
            "\nCriteria ignored by the model: {}\n",
            summary.unused_criteria.join(", ")
        ));
    }
    out
}
