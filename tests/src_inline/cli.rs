use super::*;

fn args(extra: &[&str]) -> Vec<String> {
    std::iter::once("employability-predict")
        .chain(extra.iter().copied())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_parse_args_predict_collects_ratings() {
    let config = parse_args(args(&[
        "--model",
        "m.json",
        "predict",
        "--rating",
        "spr=4",
        "--rating",
        "self_confidence=2",
        "--format",
        "json",
    ]))
    .unwrap();

    assert_eq!(config.model_path, PathBuf::from("m.json"));
    assert_eq!(config.log_level, LogLevel::Warn);
    match config.command {
        Command::Predict {
            ratings,
            ratings_file,
            format,
        } => {
            assert_eq!(ratings.len(), 2);
            assert_eq!(ratings[0].0, Criterion::StudentPerformanceRating);
            assert_eq!(ratings[0].1.value(), 4);
            assert_eq!(ratings[1].0, Criterion::SelfConfidence);
            assert!(ratings_file.is_none());
            assert_eq!(format, ReportFormat::Json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_args_rejects_bad_rating() {
    assert!(parse_args(args(&["predict", "--rating", "spr=6"])).is_err());
    assert!(parse_args(args(&["predict", "--rating", "charisma=3"])).is_err());
    assert!(parse_args(args(&["predict", "--rating", "spr"])).is_err());
}

#[test]
fn test_parse_args_verbosity() {
    let config = parse_args(args(&["-vv", "inspect"])).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.command, Command::Inspect);

    let config = parse_args(args(&["form", "-q"])).unwrap();
    assert_eq!(config.log_level, LogLevel::Error);
    assert_eq!(config.command, Command::Form);

    assert!(parse_args(args(&["-v", "-q", "form"])).is_err());
}

#[test]
fn test_parse_args_column_map_and_file() {
    let config = parse_args(args(&[
        "--column-map",
        "map.json",
        "predict",
        "--ratings-file",
        "r.json",
    ]))
    .unwrap();
    assert_eq!(config.column_map, Some(PathBuf::from("map.json")));
    assert!(matches!(
        config.command,
        Command::Predict { ratings_file: Some(ref p), .. } if p == &PathBuf::from("r.json")
    ));
}

#[test]
fn test_parse_args_requires_command() {
    assert!(parse_args(args(&[])).is_err());
}
