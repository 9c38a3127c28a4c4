use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::criteria::{CRITERION_COUNT, Criterion};

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("failed to read column map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed column map {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("column map names unknown criterion {0:?}")]
    UnknownCriterion(String),
    #[error("column {column:?} is mapped from both {first} and {second}")]
    Ambiguous {
        column: String,
        first: Criterion,
        second: Criterion,
    },
}

/// Trained column name for each criterion. Identity unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
    columns: [String; CRITERION_COUNT],
}

impl Default for NameMapping {
    fn default() -> Self {
        Self {
            columns: Criterion::ALL.map(|c| c.key().to_string()),
        }
    }
}

impl NameMapping {
    pub fn from_overrides<I, K, V>(overrides: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut mapping = Self::default();
        for (key, column) in overrides {
            let key = key.as_ref();
            let criterion = Criterion::from_key(key)
                .ok_or_else(|| MappingError::UnknownCriterion(key.to_string()))?;
            mapping.columns[criterion.index()] = column.into();
        }

        for (i, a) in Criterion::ALL.iter().enumerate() {
            for b in &Criterion::ALL[i + 1..] {
                if mapping.column_for(*a) == mapping.column_for(*b) {
                    return Err(MappingError::Ambiguous {
                        column: mapping.column_for(*a).to_string(),
                        first: *a,
                        second: *b,
                    });
                }
            }
        }
        Ok(mapping)
    }

    pub fn column_for(&self, criterion: Criterion) -> &str {
        &self.columns[criterion.index()]
    }

    pub fn criterion_for(&self, column: &str) -> Option<Criterion> {
        Criterion::ALL
            .iter()
            .copied()
            .find(|c| self.column_for(*c) == column)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Reads a JSON object of `criterion_key -> column_name` overrides.
pub fn load_name_mapping(path: &Path) -> Result<NameMapping, MappingError> {
    let raw = std::fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides: BTreeMap<String, String> =
        serde_json::from_str(&raw).map_err(|source| MappingError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let mapping = NameMapping::from_overrides(overrides)?;
    tracing::info!(path = %path.display(), "loaded column name map");
    Ok(mapping)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mapping.rs"]
mod tests;
