mod artifact;
mod cli;
mod criteria;
mod form;
mod logging;
mod pipeline;
mod report;

use std::io::{self, Write};
use std::path::Path;

use crate::artifact::{ArtifactError, load_artifact};
use crate::cli::{Command, RunConfig, parse_args};
use crate::criteria::{InputError, collect, load_ratings_file};
use crate::form::{FormError, run_form};
use crate::pipeline::mapping::{MappingError, NameMapping, load_name_mapping};
use crate::pipeline::{PipelineError, PredictionAssembler, Submission};
use crate::report::json::render_submission_json;
use crate::report::text::{render_inspect_text, render_submission_text};
use crate::report::{InspectSummary, ReportFormat};

const EXIT_OK: i32 = 0;
const EXIT_FATAL: i32 = 1;
const EXIT_INCOMPLETE: i32 = 2;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    logging::init_logging(config.log_level);

    match run(&config) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn run(config: &RunConfig) -> Result<i32, AppError> {
    let mapping = match &config.column_map {
        Some(path) => load_name_mapping(path)?,
        None => NameMapping::default(),
    };
    let assembler = build_assembler(&config.model_path, &mapping)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Form => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let submission = run_form(&assembler, &mut input, &mut out)?;
            Ok(exit_code(&submission))
        }
        Command::Predict {
            ratings,
            ratings_file,
            format,
        } => {
            let mut entries = match ratings_file {
                Some(path) => load_ratings_file(path)?,
                None => Vec::new(),
            };
            entries.extend(ratings.iter().map(|&(c, r)| (c, Some(r))));
            let input = collect(entries);

            let submission = assembler.submit(&input)?;
            let rendered = match format {
                ReportFormat::Text => render_submission_text(&submission),
                ReportFormat::Json => render_submission_json(&submission)?,
            };
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
            Ok(exit_code(&submission))
        }
        Command::Inspect => {
            let summary = InspectSummary::build(
                &config.model_path.display().to_string(),
                &assembler,
                mapping.is_identity(),
            );
            out.write_all(render_inspect_text(&summary).as_bytes())?;
            out.flush()?;
            Ok(EXIT_OK)
        }
    }
}

/// Loads the artifact once and checks its columns against the criteria.
fn build_assembler(
    model_path: &Path,
    mapping: &NameMapping,
) -> Result<PredictionAssembler, AppError> {
    let artifact = load_artifact(model_path)?;
    Ok(PredictionAssembler::new(artifact, mapping)?)
}

fn exit_code(submission: &Submission) -> i32 {
    match submission {
        Submission::Labeled(_) => EXIT_OK,
        Submission::AwaitingInput { .. } => EXIT_INCOMPLETE,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
