use elispot_model::{Frame, Result};

/// Union of the two pruned manifests: every row of `first` followed by
/// every row of `second`, no deduplication. Headers must already agree,
/// which pruning guarantees.
pub fn merge_manifests(first: &Frame, second: &Frame) -> Result<Frame> {
    // An empty second manifest has no headers at all; treat it as zero rows.
    if second.headers.is_empty() && second.is_empty() {
        return Ok(first.clone());
    }
    first.vstack(second)
}
