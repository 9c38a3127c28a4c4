use std::io::{self, BufRead, Write};

use crate::criteria::defs::RATING_HINT;
use crate::criteria::{Criterion, Rating, RatingInput, parse_rating};
use crate::pipeline::{PipelineError, PredictionAssembler, Submission};
use crate::report::text::render_submission_text;
use crate::report::{APP_TITLE, DISCLAIMER};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

enum Answer {
    Rated(Option<Rating>),
    EndOfInput,
    Quit,
}

/// Interactive rating form. Unanswered criteria are asked again after the
/// warning, keeping earlier answers; ends on a label, `q`, or end of input.
pub fn run_form<R: BufRead, W: Write>(
    assembler: &PredictionAssembler,
    input: &mut R,
    out: &mut W,
) -> Result<Submission, FormError> {
    writeln!(out, "{APP_TITLE}")?;
    writeln!(out, "{}", "=".repeat(APP_TITLE.len()))?;
    writeln!(out, "{DISCLAIMER}")?;
    writeln!(out, "Leave a rating blank to skip it, or enter q to quit.")?;

    let mut ratings = RatingInput::default();
    let mut pending = Criterion::ALL.to_vec();

    loop {
        let mut finished = false;
        for &criterion in &pending {
            match ask(criterion, input, out)? {
                Answer::Rated(rating) => ratings.set(criterion, rating),
                Answer::EndOfInput | Answer::Quit => {
                    finished = true;
                    break;
                }
            }
        }

        let submission = assembler.submit(&ratings)?;
        writeln!(out)?;
        write!(out, "{}", render_submission_text(&submission))?;
        out.flush()?;

        match submission {
            Submission::AwaitingInput { ref missing } if !finished => {
                pending = missing.clone();
            }
            other => return Ok(other),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    criterion: Criterion,
    input: &mut R,
    out: &mut W,
) -> io::Result<Answer> {
    writeln!(out)?;
    writeln!(out, "{}", criterion.display_name())?;
    writeln!(out, "{RATING_HINT}")?;

    let mut line = String::new();
    loop {
        write!(out, "Select rating for {} [5-1]: ", criterion.display_name())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Answer::EndOfInput);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Answer::Rated(None));
        }
        if answer.eq_ignore_ascii_case("q") {
            return Ok(Answer::Quit);
        }
        match parse_rating(answer) {
            Ok(rating) => return Ok(Answer::Rated(Some(rating))),
            Err(err) => writeln!(out, "  {err}")?,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/form/tests.rs"]
mod tests;
