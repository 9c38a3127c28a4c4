use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_file(contents: &str) -> PathBuf {
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "employability_column_map_test_{}_{}.json",
        std::process::id(),
        id
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_default_mapping_is_identity() {
    let mapping = NameMapping::default();
    assert!(mapping.is_identity());
    for criterion in Criterion::ALL {
        assert_eq!(mapping.column_for(criterion), criterion.key());
        assert_eq!(mapping.criterion_for(criterion.key()), Some(criterion));
    }
    assert_eq!(mapping.criterion_for("Self Confidence"), None);
}

#[test]
fn test_overrides_replace_only_named_criteria() {
    let mapping =
        NameMapping::from_overrides([("spr", "student_performance_rating")]).unwrap();
    assert!(!mapping.is_identity());
    assert_eq!(
        mapping.column_for(Criterion::StudentPerformanceRating),
        "student_performance_rating"
    );
    assert_eq!(
        mapping.column_for(Criterion::SelfConfidence),
        "self_confidence"
    );
    assert_eq!(mapping.criterion_for("spr"), None);
}

#[test]
fn test_unknown_key_rejected() {
    let err = NameMapping::from_overrides([("charisma", "CHARISMA")]).unwrap_err();
    assert!(matches!(err, MappingError::UnknownCriterion(k) if k == "charisma"));
}

#[test]
fn test_two_criteria_on_one_column_rejected() {
    let err = NameMapping::from_overrides([("spr", "self_confidence")]).unwrap_err();
    assert!(matches!(
        err,
        MappingError::Ambiguous {
            first: Criterion::SelfConfidence,
            second: Criterion::StudentPerformanceRating,
            ..
        }
    ));
}

#[test]
fn test_load_name_mapping_from_file() {
    let path = temp_file(r#"{"general_appearance": "GENERAL APPEARANCE"}"#);
    let mapping = load_name_mapping(&path).unwrap();
    assert_eq!(
        mapping.criterion_for("GENERAL APPEARANCE"),
        Some(Criterion::GeneralAppearance)
    );

    let bad = temp_file(r#"{"general_appearance": 3}"#);
    assert!(matches!(
        load_name_mapping(&bad),
        Err(MappingError::Parse { .. })
    ));
}
