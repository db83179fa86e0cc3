use elispot_model::{Frame, Result, columns};

/// Restrict a manifest frame to the fixed keeper columns, in keeper order.
///
/// Any absent keeper column is a schema error.
pub fn prune_manifest_columns(manifest: &Frame) -> Result<Frame> {
    manifest.select(&columns::MANIFEST_KEEPERS)
}
