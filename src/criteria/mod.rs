pub mod defs;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use defs::builtin_criteria;

pub const CRITERION_COUNT: usize = 8;
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// The fixed soft-skill attributes rated on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    GeneralAppearance,
    SpeakingManner,
    PhysicalCondition,
    MentalAlertness,
    SelfConfidence,
    AbilityToPresentIdeas,
    CommunicationSkills,
    StudentPerformanceRating,
}

impl Criterion {
    pub const ALL: [Criterion; CRITERION_COUNT] = [
        Criterion::GeneralAppearance,
        Criterion::SpeakingManner,
        Criterion::PhysicalCondition,
        Criterion::MentalAlertness,
        Criterion::SelfConfidence,
        Criterion::AbilityToPresentIdeas,
        Criterion::CommunicationSkills,
        Criterion::StudentPerformanceRating,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        builtin_criteria()[self.index()].key
    }

    pub fn display_name(self) -> &'static str {
        builtin_criteria()[self.index()].name
    }

    pub fn from_key(key: &str) -> Option<Criterion> {
        builtin_criteria()
            .iter()
            .find(|def| def.key == key)
            .map(|def| def.criterion)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single ordinal answer, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Option<Rating> {
        (RATING_MIN..=RATING_MAX)
            .contains(&value)
            .then_some(Rating(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rating::new)
            .ok_or(InputError::RatingOutOfRange(value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(i64),
    #[error("invalid rating value: {0:?}")]
    InvalidRating(String),
    #[error("expected KEY=RATING, got {0:?}")]
    MalformedPair(String),
    #[error("failed to read ratings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed ratings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One slot per criterion; `None` means the question was left unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingInput {
    slots: [Option<Rating>; CRITERION_COUNT],
}

impl RatingInput {
    pub fn get(&self, criterion: Criterion) -> Option<Rating> {
        self.slots[criterion.index()]
    }

    pub fn set(&mut self, criterion: Criterion, rating: Option<Rating>) {
        self.slots[criterion.index()] = rating;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, Option<Rating>)> + '_ {
        Criterion::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// Accumulates answers into a rating input. Later entries overwrite earlier ones.
pub fn collect<I>(ratings_by_criterion: I) -> RatingInput
where
    I: IntoIterator<Item = (Criterion, Option<Rating>)>,
{
    let mut input = RatingInput::default();
    for (criterion, rating) in ratings_by_criterion {
        input.set(criterion, rating);
    }
    input
}

pub fn validate(ratings: &RatingInput) -> bool {
    ratings.slots.iter().all(Option::is_some)
}

/// Unset criteria in display order.
pub fn missing(ratings: &RatingInput) -> Vec<Criterion> {
    ratings
        .iter()
        .filter(|(_, rating)| rating.is_none())
        .map(|(criterion, _)| criterion)
        .collect()
}

pub fn parse_rating(raw: &str) -> Result<Rating, InputError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidRating(raw.to_string()))?;
    Rating::try_from(value)
}

/// Parses `general_appearance=4` style pairs from the command line.
pub fn parse_rating_pair(raw: &str) -> Result<(Criterion, Rating), InputError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| InputError::MalformedPair(raw.to_string()))?;
    let key = key.trim();
    let criterion =
        Criterion::from_key(key).ok_or_else(|| InputError::UnknownCriterion(key.to_string()))?;
    Ok((criterion, parse_rating(value)?))
}

/// Reads a JSON object of `criterion_key -> rating | null`.
pub fn load_ratings_file(path: &Path) -> Result<Vec<(Criterion, Option<Rating>)>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: BTreeMap<String, Option<i64>> =
        serde_json::from_str(&raw).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let criterion =
            Criterion::from_key(&key).ok_or_else(|| InputError::UnknownCriterion(key.clone()))?;
        let rating = value.map(Rating::try_from).transpose()?;
        out.push((criterion, rating));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/criteria/tests.rs"]
mod tests;
