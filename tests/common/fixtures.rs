// tests/common/fixtures.rs
#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};

use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, Polygon, PolygonRing};

/// (provinsi, kabupaten/kota, kecamatan, lower-left corner) of unit squares.
pub const KECAMATAN: &[(&str, &str, &str, (f64, f64))] = &[
    ("RIAU", "KAMPAR", "SIAK HULU", (101.0, 0.0)),
    ("RIAU", "KAMPAR", "TAPUNG", (102.0, 0.0)),
    ("RIAU", "KOTA PEKANBARU", "TAMPAN", (101.0, 1.0)),
    ("JAMBI", "MUARO JAMBI", "SEKERNAN", (103.0, -2.0)),
];

/// Points for the fixture above. Riau bounds are [101, 0] .. [103, 2].
pub const GRID_CSV: &str = "\
OBJECTID,X,Y,EX_FFMC_001
1,101.5,0.5,70.0
2,101.6,0.6,79.994
3,102.5,0.5,74
4,101.5,1.5,88.456
5,102.5,1.5,95.0
6,103.5,-1.5,99.0
7,101.2,0.2,
";

pub const EXPECTED_RIAU: &str = "\
Provinsi,Kabupaten/Kota,Kecamatan,Max FFMC,Kategori
RIAU,KAMPAR,SIAK HULU,79.99,Mudah
RIAU,KAMPAR,TAPUNG,74.0,Tidak Mudah
RIAU,KOTA PEKANBARU,TAMPAN,88.46,Sangat Mudah
";

/// A temp directory holding `Kecamatan_Indo.shp` (+ `.dbf`/`.shx`) and `ffmc_grid.csv`.
pub struct Workspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let ws = Self { dir: tempfile::tempdir().unwrap() };
        write_boundaries(&ws.shapefile(), KECAMATAN);
        ws.write_file("ffmc_grid.csv", GRID_CSV);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn shapefile(&self) -> PathBuf {
        self.path().join("Kecamatan_Indo.shp")
    }

    pub fn grid(&self) -> PathBuf {
        self.path().join("ffmc_grid.csv")
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }

    /// Names of every `processed_*.csv` in the workspace.
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("processed_"))
            .collect();
        names.sort();
        names
    }
}

pub fn write_boundaries(path: &Path, rows: &[(&str, &str, &str, (f64, f64))]) {
    let table = TableWriterBuilder::new()
        .add_character_field(FieldName::try_from("namaprovin").unwrap(), 50)
        .add_character_field(FieldName::try_from("namakota_k").unwrap(), 50)
        .add_character_field(FieldName::try_from("namakecama").unwrap(), 50);
    let mut writer = shapefile::Writer::from_path(path, table).unwrap();

    for (provinsi, kota, kecamatan, (x, y)) in rows {
        let square = Polygon::new(PolygonRing::Outer(vec![
            Point::new(*x, *y),
            Point::new(*x, *y + 1.0),
            Point::new(*x + 1.0, *y + 1.0),
            Point::new(*x + 1.0, *y),
            Point::new(*x, *y),
        ]));

        let mut record = Record::default();
        for (field, value) in [
            ("namaprovin", provinsi),
            ("namakota_k", kota),
            ("namakecama", kecamatan),
        ] {
            record.insert(field.to_string(), FieldValue::Character(Some((*value).to_string())));
        }
        writer.write_shape_and_record(&square, &record).unwrap();
    }
}
