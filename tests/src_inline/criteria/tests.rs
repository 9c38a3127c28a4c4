use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::defs::builtin_criteria;
use super::*;

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_file(contents: &str) -> PathBuf {
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "employability_ratings_test_{}_{}.json",
        std::process::id(),
        id
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn rating(v: u8) -> Option<Rating> {
    Some(Rating::new(v).unwrap())
}

fn all_rated(v: u8) -> RatingInput {
    collect(Criterion::ALL.iter().map(|&c| (c, rating(v))))
}

#[test]
fn test_criteria_table_matches_enum_order() {
    let defs = builtin_criteria();
    assert_eq!(defs.len(), CRITERION_COUNT);
    for (idx, def) in defs.iter().enumerate() {
        assert_eq!(def.criterion.index(), idx);
        assert_eq!(Criterion::ALL[idx], def.criterion);
    }
    assert_eq!(Criterion::GeneralAppearance.key(), "general_appearance");
    assert_eq!(Criterion::SpeakingManner.display_name(), "Manner Of Speaking");
    assert_eq!(Criterion::StudentPerformanceRating.key(), "spr");
}

#[test]
fn test_from_key_roundtrips_every_criterion() {
    for criterion in Criterion::ALL {
        assert_eq!(Criterion::from_key(criterion.key()), Some(criterion));
    }
    assert_eq!(Criterion::from_key("General Appearance"), None);
    assert_eq!(Criterion::from_key(""), None);
}

#[test]
fn test_rating_range_enforced_on_construction() {
    assert!(Rating::new(0).is_none());
    assert!(Rating::new(6).is_none());
    for v in 1..=5 {
        assert_eq!(Rating::new(v).unwrap().value(), v);
    }
    assert!(matches!(
        Rating::try_from(-3i64),
        Err(InputError::RatingOutOfRange(-3))
    ));
    assert!(matches!(
        Rating::try_from(300i64),
        Err(InputError::RatingOutOfRange(300))
    ));
}

#[test]
fn test_default_input_is_unset_not_zero() {
    let input = RatingInput::default();
    for (_, value) in input.iter() {
        assert_eq!(value, None);
    }
    assert!(!validate(&input));
    assert_eq!(missing(&input), Criterion::ALL.to_vec());
}

#[test]
fn test_validate_requires_every_criterion() {
    let full = all_rated(3);
    assert!(validate(&full));
    assert!(missing(&full).is_empty());

    for criterion in Criterion::ALL {
        let mut partial = full;
        partial.set(criterion, None);
        assert!(!validate(&partial));
        assert_eq!(missing(&partial), vec![criterion]);
    }
}

#[test]
fn test_collect_later_entries_overwrite() {
    let input = collect([
        (Criterion::SelfConfidence, rating(2)),
        (Criterion::SelfConfidence, rating(4)),
        (Criterion::MentalAlertness, rating(5)),
        (Criterion::MentalAlertness, None),
    ]);
    assert_eq!(input.get(Criterion::SelfConfidence), rating(4));
    assert_eq!(input.get(Criterion::MentalAlertness), None);
    assert_eq!(input.get(Criterion::GeneralAppearance), None);
}

#[test]
fn test_missing_lists_in_display_order() {
    let input = collect([
        (Criterion::GeneralAppearance, rating(5)),
        (Criterion::PhysicalCondition, rating(5)),
        (Criterion::SelfConfidence, rating(5)),
        (Criterion::CommunicationSkills, rating(5)),
    ]);
    assert_eq!(
        missing(&input),
        vec![
            Criterion::SpeakingManner,
            Criterion::MentalAlertness,
            Criterion::AbilityToPresentIdeas,
            Criterion::StudentPerformanceRating,
        ]
    );
}

#[test]
fn test_parse_rating_pair() {
    let (criterion, value) = parse_rating_pair("spr=4").unwrap();
    assert_eq!(criterion, Criterion::StudentPerformanceRating);
    assert_eq!(value.value(), 4);

    let (criterion, value) = parse_rating_pair(" self_confidence = 1").unwrap();
    assert_eq!(criterion, Criterion::SelfConfidence);
    assert_eq!(value.value(), 1);

    assert!(matches!(
        parse_rating_pair("spr"),
        Err(InputError::MalformedPair(_))
    ));
    assert!(matches!(
        parse_rating_pair("charisma=3"),
        Err(InputError::UnknownCriterion(k)) if k == "charisma"
    ));
    assert!(matches!(
        parse_rating_pair("spr=9"),
        Err(InputError::RatingOutOfRange(9))
    ));
    assert!(matches!(
        parse_rating_pair("spr=high"),
        Err(InputError::InvalidRating(_))
    ));
}

#[test]
fn test_load_ratings_file_keeps_nulls_unset() {
    let path = temp_file(r#"{"spr": 5, "self_confidence": null, "general_appearance": 2}"#);
    let entries = load_ratings_file(&path).unwrap();
    let input = collect(entries);

    assert_eq!(input.get(Criterion::StudentPerformanceRating), rating(5));
    assert_eq!(input.get(Criterion::GeneralAppearance), rating(2));
    assert_eq!(input.get(Criterion::SelfConfidence), None);
    assert!(!validate(&input));
}

#[test]
fn test_load_ratings_file_rejects_bad_entries() {
    let unknown = temp_file(r#"{"charisma": 3}"#);
    assert!(matches!(
        load_ratings_file(&unknown),
        Err(InputError::UnknownCriterion(_))
    ));

    let out_of_range = temp_file(r#"{"spr": 0}"#);
    assert!(matches!(
        load_ratings_file(&out_of_range),
        Err(InputError::RatingOutOfRange(0))
    ));

    let malformed = temp_file("[1, 2, 3]");
    assert!(matches!(
        load_ratings_file(&malformed),
        Err(InputError::Parse { .. })
    ));

    let absent = std::env::temp_dir().join("employability_ratings_does_not_exist.json");
    assert!(matches!(
        load_ratings_file(&absent),
        Err(InputError::Io { .. })
    ));
}
