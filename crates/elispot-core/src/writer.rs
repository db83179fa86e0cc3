use std::path::Path;

use tracing::debug;

use elispot_model::{Frame, PipelineError, Result};

/// Write the frame as CSV: header row, no index column.
pub fn write_frame(frame: &Frame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;
    writer
        .write_record(&frame.headers)
        .map_err(|error| PipelineError::Csv(error.to_string()))?;
    for row in &frame.rows {
        writer
            .write_record(row)
            .map_err(|error| PipelineError::Csv(error.to_string()))?;
    }
    writer
        .flush()
        .map_err(|error| PipelineError::Csv(error.to_string()))?;
    debug!(path = %path.display(), rows = frame.height(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use elispot_ingest::read_frame;

    #[test]
    fn write_then_read_round_trips() {
        let frame = Frame::from_rows(
            ["viability", "TAT", "binned", "counts"],
            [["95", "26", "1", "300"], ["", "-1.5", "0", "700"]],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_frame(&frame, &path).unwrap();
        let read_back = read_frame(&path).unwrap();
        assert_eq!(read_back, frame);
    }
}
