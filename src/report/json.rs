use serde::Serialize;

use crate::pipeline::Submission;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum SubmissionReport<'a> {
    Labeled {
        prediction: i64,
        label: &'a str,
    },
    AwaitingInput {
        message: &'a str,
        missing: Vec<&'a str>,
    },
}

pub fn render_submission_json(submission: &Submission) -> Result<String, serde_json::Error> {
    let report = match submission {
        Submission::Labeled(result) => SubmissionReport::Labeled {
            prediction: result.prediction,
            label: result.label,
        },
        Submission::AwaitingInput { missing } => SubmissionReport::AwaitingInput {
            message: crate::report::INCOMPLETE_WARNING,
            missing: missing.iter().map(|c| c.key()).collect(),
        },
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
