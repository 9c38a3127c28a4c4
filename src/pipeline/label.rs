pub const LABEL_LESS_EMPLOYABLE: &str = "Less Employable";
pub const LABEL_EMPLOYABLE: &str = "Employable";
pub const LABEL_UNKNOWN: &str = "Unknown";

/// Maps a raw class to its display label. Classes outside {0, 1} become "Unknown".
pub fn label_for(prediction: i64) -> &'static str {
    match prediction {
        0 => LABEL_LESS_EMPLOYABLE,
        1 => LABEL_EMPLOYABLE,
        other => {
            tracing::warn!(prediction = other, "classifier returned an unmapped class");
            LABEL_UNKNOWN
        }
    }
}
