//! Column names and fixed marker values used across the pipeline.
//!
//! Manifest columns carry the source system's MNF* codes; they are only
//! renamed to readable names at the reorganize stage.

/// Patient identifier, shared join key between manifests and assay data.
pub const PATNUM: &str = "PATNUM";
/// Visit identifier, second half of the join key.
pub const VISIT: &str = "VISIT";

/// Sample collection date.
pub const MNFD: &str = "MNFD";
/// Sample collection time of day.
pub const MNFTM: &str = "MNFTM";
/// Lab processing timestamp.
pub const MNF01: &str = "MNF01";
/// Biological matrix type (e.g. "PBMC").
pub const MNFBIOM: &str = "MNFBIOM";
/// Viability percentage code.
pub const MNF06: &str = "MNF06";
/// Minimum shipping temperature code.
pub const MNF14: &str = "MNF14";
/// Maximum shipping temperature code.
pub const MNF15: &str = "MNF15";

/// Derived collection timestamp (MNFD + MNFTM).
pub const COLLECTION: &str = "Collection";
/// Derived turn-around time in fractional hours.
pub const TAT: &str = "TAT";

/// Assay spot count after the loader's header renames.
pub const COUNTS: &str = "counts";
/// Binary response label derived from the spot count.
pub const BINNED: &str = "binned";
/// Assay sample identifier.
pub const SAMPLE_ID: &str = "Sample.ID";
/// Assay sample date.
pub const SAMPLE_DATE: &str = "Sample.Date";

/// Readable names applied by the reorganize stage.
pub const VIABILITY: &str = "viability";
pub const MIN_TEMP: &str = "min_temp";
pub const MAX_TEMP: &str = "max_temp";

/// Columns the assay-to-manifest join matches on. They identify rows, never
/// features, and are excluded from the numeric projection even when their
/// values happen to be numeric.
pub const JOIN_KEYS: [&str; 2] = [PATNUM, VISIT];

/// Manifest columns retained by the pruning stage, in output order.
pub const MANIFEST_KEEPERS: [&str; 18] = [
    PATNUM, MNFD, MNFTM, VISIT, "MNFTPT", "MNFALID", "MNFCNTRY", "MNFSITE", "MNFSPRDT", MNFBIOM,
    "MNFTUBEN", MNF01, "MNFREFID", MNF06, MNF14, MNF15, "MNF16", "MNF17",
];

/// Manifest columns that become redundant once the assay join is done.
pub const JOIN_DROP_COLUMNS: [&str; 12] = [
    "MNFTPT", "MNFALID", "MNFCNTRY", "MNFSITE", "MNFSPRDT", MNFBIOM, "MNFTUBEN", MNF01, "MNFREFID",
    "MNF16", "MNF17", COLLECTION,
];

/// Assay header renames applied at load time.
pub const ASSAY_RENAMES: [(&str, &str); 3] = [
    ("Patient.ID", PATNUM),
    ("Visit", VISIT),
    ("Mean.Spot.Count", COUNTS),
];

/// Default stimulus marker value used for stimulus-column discovery.
pub const DEFAULT_STIMULUS: &str = "a-CD3";
/// Default cell type retained from the assay file.
pub const DEFAULT_CELL_TYPE: &str = "Bulk PBMC";
/// Biological matrix value retained from the manifests.
pub const MATRIX_PBMC: &str = "PBMC";

/// Suffix applied to overlapping assay-side columns during the join.
pub const JOIN_SUFFIX_LEFT: &str = "_caller";
/// Suffix applied to overlapping manifest-side columns during the join.
pub const JOIN_SUFFIX_RIGHT: &str = "_other";
