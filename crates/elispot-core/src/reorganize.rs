use elispot_model::{Frame, Result, columns};

/// Rename the surviving manifest codes to readable names and move the
/// count column to the last position. Each renamed or moved column must
/// exist.
pub fn reorganize(frame: &Frame) -> Result<Frame> {
    let mut reorganized = frame.clone();
    reorganized.rename_column(columns::MNF06, columns::VIABILITY)?;
    reorganized.rename_column(columns::MNF14, columns::MIN_TEMP)?;
    reorganized.rename_column(columns::MNF15, columns::MAX_TEMP)?;

    reorganized.require_column(columns::COUNTS)?;
    let order: Vec<&str> = reorganized
        .headers
        .iter()
        .map(String::as_str)
        .filter(|header| *header != columns::COUNTS)
        .chain(std::iter::once(columns::COUNTS))
        .collect();
    reorganized.select(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elispot_model::PipelineError;

    #[test]
    fn renames_and_moves_counts_last() {
        let frame = Frame::from_rows(
            ["counts", "MNF06", "MNF14", "MNF15", "TAT", "binned"],
            [["300", "95", "2", "8", "26", "1"]],
        );
        let reorganized = reorganize(&frame).unwrap();
        assert_eq!(
            reorganized.headers,
            vec!["viability", "min_temp", "max_temp", "TAT", "binned", "counts"]
        );
        assert_eq!(reorganized.value(0, "viability"), Some("95"));
        assert_eq!(reorganized.headers.last().map(String::as_str), Some("counts"));
    }

    #[test]
    fn missing_renamed_column_is_schema_error() {
        let frame = Frame::from_rows(["counts", "MNF06", "MNF14"], [["300", "95", "2"]]);
        let error = reorganize(&frame).unwrap_err();
        assert!(matches!(error, PipelineError::Schema(_)));
    }
}
