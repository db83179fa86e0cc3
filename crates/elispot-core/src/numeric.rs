use tracing::debug;

use elispot_ingest::build_column_hints;
use elispot_model::{Frame, Result, columns};

/// Keep only the columns whose values are numeric (per the column hints),
/// preserving column order. The binary label and the count column are
/// numeric and therefore always survive. The (PATNUM, VISIT) join keys are
/// row identifiers, not features, and are dropped even when a site issues
/// all-numeric patient or visit codes. An empty frame passes through
/// unchanged, since no column can prove itself numeric on zero rows.
pub fn project_numeric(frame: &Frame) -> Result<Frame> {
    if frame.is_empty() {
        return Ok(frame.clone());
    }
    let hints = build_column_hints(frame);
    let kept: Vec<&str> = frame
        .headers
        .iter()
        .map(String::as_str)
        .filter(|header| !columns::JOIN_KEYS.contains(header) && hints[*header].is_numeric)
        .collect();
    debug!(
        kept = kept.len(),
        dropped = frame.width() - kept.len(),
        "numeric projection"
    );
    frame.select(&kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_numeric_columns() {
        let frame = Frame::from_rows(
            ["PATNUM", "MNF06", "TAT", "binned", "counts"],
            [
                ["P1", "95", "26", "1", "300"],
                ["P2", "88", "-1.5", "0", "700"],
            ],
        );
        let projected = project_numeric(&frame).unwrap();
        assert_eq!(projected.headers, vec!["MNF06", "TAT", "binned", "counts"]);
    }

    #[test]
    fn numeric_join_keys_are_still_dropped() {
        let frame = Frame::from_rows(
            ["PATNUM", "VISIT", "MNF06", "counts"],
            [["1001", "2", "95", "300"], ["1002", "2", "88", "700"]],
        );
        let projected = project_numeric(&frame).unwrap();
        assert_eq!(projected.headers, vec!["MNF06", "counts"]);
    }

    #[test]
    fn column_with_missing_values_stays_numeric() {
        let frame = Frame::from_rows(["MNF06", "ID"], [["95", "a"], ["", "b"]]);
        let projected = project_numeric(&frame).unwrap();
        assert_eq!(projected.headers, vec!["MNF06"]);
        assert_eq!(projected.value(1, "MNF06"), Some(""));
    }

    #[test]
    fn empty_frame_passes_through() {
        let frame = Frame::new(vec!["A".into(), "B".into()]);
        let projected = project_numeric(&frame).unwrap();
        assert_eq!(projected, frame);
    }
}
