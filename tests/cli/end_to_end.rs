use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{EXPECTED_RIAU, Workspace, write_boundaries};

fn cmd(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ffmc_aggregate"));
    cmd.current_dir(ws.path());
    cmd
}

#[test]
fn writes_max_ffmc_per_kecamatan() {
    let ws = Workspace::new();

    cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "riau"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing complete. Results for 'riau' saved to './processed_riau_ffmc_grid.csv'",
        ));

    assert_eq!(ws.outputs(), ["processed_riau_ffmc_grid.csv"]);
    assert_eq!(ws.read("processed_riau_ffmc_grid.csv"), EXPECTED_RIAU);
}

#[test]
fn unknown_province_fails_without_output() {
    let ws = Workspace::new();

    cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "Papua Barat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: No data found for the province 'Papua Barat'.",
        ));

    assert!(ws.outputs().is_empty());
}

#[test]
fn missing_input_fails() {
    let ws = Workspace::new();

    cmd(&ws)
        .args(["--input", "nope.csv", "--province", "Riau"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: A required file was not found: nope.csv"));

    assert!(ws.outputs().is_empty());
}

#[test]
fn missing_shapefile_fails() {
    let ws = Workspace::new();

    cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "Riau"])
        .args(["--shapefile", "Desa_Indo.shp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("A required file was not found: Desa_Indo.shp"));
}

#[test]
fn multi_word_province_names_the_file() {
    let ws = Workspace::new();
    write_boundaries(
        &ws.path().join("kalteng.shp"),
        &[("KALIMANTAN TENGAH", "KOTAWARINGIN TIMUR", "BAAMANG", (101.0, 0.0))],
    );

    cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "Kalimantan Tengah"])
        .args(["--shapefile", "kalteng.shp", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        ws.read("processed_kalimantan_tengah_ffmc_grid.csv"),
        "Provinsi,Kabupaten/Kota,Kecamatan,Max FFMC,Kategori\n\
         KALIMANTAN TENGAH,KOTAWARINGIN TIMUR,BAAMANG,79.99,Mudah\n"
    );
}

#[test]
fn legacy_value_column() {
    let ws = Workspace::new();
    ws.write_file("old.csv", "X,Y,EXTRACT_FFMC_1\n102.5,0.5,81.999\n");

    cmd(&ws)
        .args(["--input", "old.csv", "--province", "RIAU"])
        .args(["--value-column", "EXTRACT_FFMC_1", "--quiet"])
        .assert()
        .success();

    assert_eq!(
        ws.read("processed_riau_old.csv"),
        "Provinsi,Kabupaten/Kota,Kecamatan,Max FFMC,Kategori\nRIAU,KAMPAR,TAPUNG,82.0,Sangat Mudah\n"
    );
}

#[test]
fn missing_value_column_is_an_error() {
    let ws = Workspace::new();
    ws.write_file("old.csv", "X,Y,EXTRACT_FFMC_1\n102.5,0.5,81.0\n");

    cmd(&ws)
        .args(["--input", "old.csv", "--province", "Riau"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Column 'EX_FFMC_001' not found"));

    assert!(ws.outputs().is_empty());
}

#[test]
fn output_dir_and_json_report() {
    let ws = Workspace::new();
    let out = tempfile::tempdir().unwrap();

    let assert = cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "riau", "--format", "json"])
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["rows"], 3);
    assert_eq!(report["points_read"], 7);
    assert_eq!(report["points_in_bounds"], 6);
    assert_eq!(report["categories"]["Mudah"], 1);

    let written = std::fs::read_to_string(out.path().join("processed_riau_ffmc_grid.csv")).unwrap();
    assert_eq!(written, EXPECTED_RIAU);
}

#[test]
fn summary_table_lists_categories() {
    let ws = Workspace::new();

    cmd(&ws)
        .args(["--input", "ffmc_grid.csv", "--province", "riau", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sangat Mudah"))
        .stdout(predicate::str::contains("Tidak Mudah"))
        .stdout(predicate::str::contains("7 points read, 6 inside province bounds"));
}
