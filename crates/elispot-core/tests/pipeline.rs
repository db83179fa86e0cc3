//! End-to-end pipeline tests over on-disk CSV fixtures.

use std::fs;
use std::path::Path;

use elispot_core::{PipelineConfig, run};
use elispot_ingest::read_frame;

const MANIFEST_HEADER: &str = "PATNUM,MNFD,MNFTM,VISIT,MNFTPT,MNFALID,MNFCNTRY,MNFSITE,\
                               MNFSPRDT,MNFBIOM,MNFTUBEN,MNF01,MNFREFID,MNF06,MNF14,MNF15,\
                               MNF16,MNF17";
const ASSAY_HEADER: &str =
    "Patient.ID,Visit,Sample.ID,Sample.Date,Type.of.Cells,Stimulus.in.Readout,Mean.Spot.Count";

fn manifest_row(patnum: &str, visit: &str, matrix: &str, viability: &str) -> String {
    format!(
        "{patnum},2020-01-01,08:00,{visit},SCR,AL1,DE,S01,2020-01-03,{matrix},T1,\
         2020-01-02T10:00,R1,{viability},2,8,OK,OK"
    )
}

fn write_fixtures(dir: &Path, manifest1_rows: &[String], assay_rows: &[String]) -> PipelineConfig {
    let manifest1 = dir.join("manifest1.csv");
    let manifest2 = dir.join("manifest2.csv");
    let igs1 = dir.join("igs1.csv");
    let outfile = dir.join("features.csv");
    fs::write(
        &manifest1,
        format!("{MANIFEST_HEADER}\n{}\n", manifest1_rows.join("\n")),
    )
    .unwrap();
    // Second manifest is header-only: a valid, empty input.
    fs::write(&manifest2, format!("{MANIFEST_HEADER}\n")).unwrap();
    fs::write(&igs1, format!("{ASSAY_HEADER}\n{}\n", assay_rows.join("\n"))).unwrap();
    PipelineConfig::new(manifest1, manifest2, igs1, outfile)
}

#[test]
fn single_patient_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[manifest_row("P1", "V1", "PBMC", "95")],
        &["P1,V1,S1,2020-01-05,Bulk PBMC,a-CD3,300".to_string()],
    );

    let summary = run(&config).unwrap();
    assert_eq!(summary.rows_written, 1);

    let output = read_frame(&config.outfile).unwrap();
    assert_eq!(output.height(), 1);
    assert_eq!(output.headers.last().map(String::as_str), Some("counts"));
    assert_eq!(output.value(0, "viability"), Some("95"));
    assert_eq!(output.value(0, "binned"), Some("1"));
    let tat: f64 = output.value(0, "TAT").unwrap().parse().unwrap();
    assert!((tat - 26.0).abs() < 1e-9);
}

#[test]
fn out_of_range_count_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[manifest_row("P1", "V1", "PBMC", "95")],
        &["P1,V1,S1,2020-01-05,Bulk PBMC,a-CD3,1301".to_string()],
    );

    let error = run(&config).unwrap_err();
    let chain = format!("{error:#}");
    assert!(chain.contains("validation error"), "{chain}");
    assert!(!config.outfile.exists(), "failed run must not write output");
}

#[test]
fn non_pbmc_manifest_rows_never_join() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[
            manifest_row("P1", "V1", "PBMC", "95"),
            manifest_row("P2", "V1", "Serum", "90"),
        ],
        &[
            "P1,V1,S1,2020-01-05,Bulk PBMC,a-CD3,300".to_string(),
            "P2,V1,S2,2020-01-05,Bulk PBMC,a-CD3,700".to_string(),
        ],
    );

    let summary = run(&config).unwrap();
    // Left join keeps both assay rows; the Serum manifest contributes nothing.
    assert_eq!(summary.rows_written, 2);
    let output = read_frame(&config.outfile).unwrap();
    assert_eq!(output.value(0, "viability"), Some("95"));
    assert_eq!(output.value(1, "viability"), Some(""));
    assert_eq!(output.value(1, "binned"), Some("0"));
}

#[test]
fn output_round_trips_with_label_last() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[manifest_row("P1", "V1", "PBMC", "95")],
        &["P1,V1,S1,2020-01-05,Bulk PBMC,a-CD3,499.5".to_string()],
    );

    run(&config).unwrap();
    let first = read_frame(&config.outfile).unwrap();
    let rewritten = dir.path().join("rewritten.csv");
    elispot_core::writer::write_frame(&first, &rewritten).unwrap();
    let second = read_frame(&rewritten).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.headers.last().map(String::as_str), Some("counts"));
    assert_eq!(second.value(0, "counts"), Some("499.5"));
}

#[test]
fn numeric_identifiers_never_reach_the_feature_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[manifest_row("1001", "2", "PBMC", "95")],
        &["1001,2,S1,2020-01-05,Bulk PBMC,a-CD3,300".to_string()],
    );

    run(&config).unwrap();
    let output = read_frame(&config.outfile).unwrap();
    assert!(!output.has_column("PATNUM"));
    assert!(!output.has_column("VISIT"));
    assert_eq!(
        output.headers,
        vec!["viability", "min_temp", "max_temp", "TAT", "binned", "counts"]
    );
}

#[test]
fn duplicate_join_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(
        dir.path(),
        &[
            manifest_row("P1", "V1", "PBMC", "95"),
            manifest_row("P1", "V1", "PBMC", "96"),
        ],
        &["P1,V1,S1,2020-01-05,Bulk PBMC,a-CD3,300".to_string()],
    );

    let error = run(&config).unwrap_err();
    assert!(format!("{error:#}").contains("duplicate join key"));
}
