//! Pipeline driver.
//!
//! Stages run in a fixed order, each one a pure function from frame to
//! frame:
//! 1. **Load**: read both manifests and the IGS1 assay subset
//! 2. **Prune**: restrict manifests to the keeper columns
//! 3. **Merge**: union the two manifests
//! 4. **Derive**: collection timestamp and turn-around time
//! 5. **Filter**: biological matrix == PBMC
//! 6. **Join**: assay-driven left join on (PATNUM, VISIT)
//! 7. **Bin**: spot counts into the binary label
//! 8. **Project**: numeric columns only
//! 9. **Reorganize**: readable names, count column last
//! 10. **Write**: final CSV
//!
//! A failed stage aborts the run before the output file is created.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use elispot_ingest::{AssayOptions, read_assay, read_manifest};
use elispot_model::Frame;

use crate::binning::bin_counts;
use crate::join::join_assay;
use crate::matrix_filter::{filter_matrix, report_join_coverage};
use crate::merge::merge_manifests;
use crate::numeric::project_numeric;
use crate::prune::prune_manifest_columns;
use crate::reorganize::reorganize;
use crate::turnaround::derive_turnaround;
use crate::writer::write_frame;

/// Input paths and marker values for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub manifest1: PathBuf,
    pub manifest2: PathBuf,
    pub igs1: PathBuf,
    pub outfile: PathBuf,
    pub assay: AssayOptions,
}

/// Record count after one stage, for the run summary.
#[derive(Debug, Clone)]
pub struct StageCount {
    pub stage: &'static str,
    pub records: usize,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub stages: Vec<StageCount>,
    pub feature_columns: Vec<String>,
    pub rows_written: usize,
}

fn run_stage<T>(
    stage: &'static str,
    stages: &mut Vec<StageCount>,
    body: impl FnOnce() -> Result<T>,
    records: impl Fn(&T) -> usize,
) -> Result<T> {
    let span = info_span!("stage", stage);
    let _guard = span.enter();
    let start = Instant::now();
    let value = body().with_context(|| format!("stage {stage}"))?;
    let count = records(&value);
    info!(
        stage,
        records = count,
        duration_ms = start.elapsed().as_millis(),
        "stage complete"
    );
    stages.push(StageCount {
        stage,
        records: count,
    });
    Ok(value)
}

/// Execute the full pipeline once.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let mut stages = Vec::new();
    let frame_records = |frame: &Frame| frame.height();

    let manifest1 = run_stage(
        "load manifest 1",
        &mut stages,
        || read_manifest(&config.manifest1).map_err(Into::into),
        frame_records,
    )?;
    let manifest2 = run_stage(
        "load manifest 2",
        &mut stages,
        || read_manifest(&config.manifest2).map_err(Into::into),
        frame_records,
    )?;
    let assay = run_stage(
        "load assay",
        &mut stages,
        || read_assay(&config.igs1, &config.assay).map_err(Into::into),
        |assay| assay.frame.height(),
    )?;

    let pruned1 = run_stage(
        "prune manifest 1",
        &mut stages,
        || prune_manifest_columns(&manifest1).map_err(Into::into),
        frame_records,
    )?;
    let pruned2 = run_stage(
        "prune manifest 2",
        &mut stages,
        || prune_manifest_columns(&manifest2).map_err(Into::into),
        frame_records,
    )?;
    let merged = run_stage(
        "merge manifests",
        &mut stages,
        || merge_manifests(&pruned1, &pruned2).map_err(Into::into),
        frame_records,
    )?;
    let timed = run_stage(
        "derive turn-around time",
        &mut stages,
        || derive_turnaround(&merged).map_err(Into::into),
        frame_records,
    )?;
    let filtered = run_stage(
        "filter biological matrix",
        &mut stages,
        || filter_matrix(&timed).map_err(Into::into),
        frame_records,
    )?;
    report_join_coverage(&filtered, &assay.frame);

    let joined = run_stage(
        "join assay and manifests",
        &mut stages,
        || join_assay(&assay, &filtered).map_err(Into::into),
        frame_records,
    )?;
    let binned = run_stage(
        "bin spot counts",
        &mut stages,
        || bin_counts(&joined).map_err(Into::into),
        frame_records,
    )?;
    let numeric = run_stage(
        "project numeric features",
        &mut stages,
        || project_numeric(&binned).map_err(Into::into),
        frame_records,
    )?;
    let reorganized = run_stage(
        "reorganize columns",
        &mut stages,
        || reorganize(&numeric).map_err(Into::into),
        frame_records,
    )?;

    run_stage(
        "write output",
        &mut stages,
        || write_frame(&reorganized, &config.outfile).map_err(Into::into),
        |_| reorganized.height(),
    )?;

    info!(
        output = %config.outfile.display(),
        rows = reorganized.height(),
        columns = reorganized.width(),
        "pipeline complete"
    );
    Ok(RunSummary {
        output_path: config.outfile.clone(),
        stages,
        feature_columns: reorganized.headers.clone(),
        rows_written: reorganized.height(),
    })
}

impl PipelineConfig {
    pub fn new(
        manifest1: impl Into<PathBuf>,
        manifest2: impl Into<PathBuf>,
        igs1: impl Into<PathBuf>,
        outfile: impl Into<PathBuf>,
    ) -> Self {
        Self {
            manifest1: manifest1.into(),
            manifest2: manifest2.into(),
            igs1: igs1.into(),
            outfile: outfile.into(),
            assay: AssayOptions::default(),
        }
    }

    pub fn with_markers(mut self, stimulus: Option<String>, cell_type: Option<String>) -> Self {
        if let Some(stimulus) = stimulus {
            self.assay.stimulus = stimulus;
        }
        if let Some(cell_type) = cell_type {
            self.assay.cell_type = cell_type;
        }
        self
    }
}
