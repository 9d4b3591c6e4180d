// crates/engine/src/boundary.rs
use ffmc_shared_kernel::{AdminKey, Bounds, InputError};
use geo::{BoundingRect, MultiPolygon};
use log::{debug, warn};
use shapefile::Shape;
use shapefile::dbase::{FieldValue, Record};
use std::path::Path;

pub const PROVINCE_FIELD: &str = "namaprovin";
pub const REGENCY_FIELD: &str = "namakota_k";
pub const DISTRICT_FIELD: &str = "namakecama";

/// A kecamatan polygon with its administrative names.
///
/// Null names are stored as empty strings with `named` cleared. A null
/// province never matches a filter; other null names still shape the
/// province bounds but never form an output group.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub key: AdminKey,
    pub geometry: MultiPolygon<f64>,
    pub named: bool,
}

impl Boundary {
    pub fn new(key: AdminKey, geometry: MultiPolygon<f64>) -> Self {
        Self { key, geometry, named: true }
    }

    /// Marks one of the admin names as null.
    #[must_use]
    pub fn with_null_name(mut self) -> Self {
        self.named = false;
        self
    }

    /// Case-insensitive substring match on the province name.
    pub fn matches_province(&self, province: &str) -> bool {
        let needle = province.to_lowercase();
        !needle.is_empty() && self.key.provinsi.to_lowercase().contains(&needle)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry
            .bounding_rect()
            .map(|r| Bounds::new(r.min().x, r.min().y, r.max().x, r.max().y))
    }
}

/// Coordinate reference system declared by the `.prj` sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsKind {
    Geographic,
    Projected,
    Undeclared,
}

/// Inspect the `.prj` next to `shapefile`. Coordinates are never reprojected;
/// a projected CRS only earns a warning.
pub fn check_crs(shapefile: &Path) -> CrsKind {
    let prj = shapefile.with_extension("prj");
    match std::fs::read_to_string(&prj) {
        Ok(wkt) if wkt.trim_start().starts_with("PROJCS") => {
            warn!(
                "{} declares a projected CRS; coordinates are treated as EPSG:4326 lon/lat",
                prj.display()
            );
            CrsKind::Projected
        }
        Ok(_) => CrsKind::Geographic,
        Err(_) => {
            debug!("no readable {}, assuming EPSG:4326", prj.display());
            CrsKind::Undeclared
        }
    }
}

/// Read every areal shape of the boundary file with its admin names.
///
/// # Errors
///
/// Fails when the file (or its `.dbf`/`.shx` siblings) cannot be read, or a
/// record lacks one of the required attributes.
pub fn read_boundaries(path: &Path) -> Result<Vec<Boundary>, InputError> {
    let mut reader = shapefile::Reader::from_path(path).map_err(|e| shapefile_error(path, e))?;

    let mut boundaries = Vec::new();
    let mut skipped = 0usize;
    for item in reader.iter_shapes_and_records() {
        let (shape, record) = item.map_err(|e| shapefile_error(path, e))?;
        let provinsi = text_attribute(&record, PROVINCE_FIELD, path)?;
        let kabupaten_kota = text_attribute(&record, REGENCY_FIELD, path)?;
        let kecamatan = text_attribute(&record, DISTRICT_FIELD, path)?;
        let named = provinsi.is_some() && kabupaten_kota.is_some() && kecamatan.is_some();
        let key = AdminKey::new(
            provinsi.unwrap_or_default(),
            kabupaten_kota.unwrap_or_default(),
            kecamatan.unwrap_or_default(),
        );

        match to_multipolygon(shape) {
            Some(geometry) if named => boundaries.push(Boundary::new(key, geometry)),
            Some(geometry) => boundaries.push(Boundary::new(key, geometry).with_null_name()),
            None => {
                debug!("skipping non-polygon shape for {}", key.kecamatan);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!("{skipped} shapes in {} were not polygons", path.display());
    }
    Ok(boundaries)
}

/// `None` for a null cell.
fn text_attribute(record: &Record, field: &str, path: &Path) -> Result<Option<String>, InputError> {
    let value = record.get(field).ok_or_else(|| InputError::MissingAttribute {
        path: path.to_path_buf(),
        attribute: field.to_string(),
    })?;

    Ok(match value {
        FieldValue::Character(Some(text)) => Some(text.trim().to_string()),
        FieldValue::Memo(text) => Some(text.trim().to_string()),
        FieldValue::Numeric(Some(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn to_multipolygon(shape: Shape) -> Option<MultiPolygon<f64>> {
    if !matches!(
        shape,
        Shape::Polygon(_) | Shape::PolygonM(_) | Shape::PolygonZ(_)
    ) {
        return None;
    }

    match geo::Geometry::<f64>::try_from(shape).ok()? {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon::new(vec![p])),
        _ => None,
    }
}

fn shapefile_error(path: &Path, err: shapefile::Error) -> InputError {
    match err {
        shapefile::Error::IoError(source) => crate::readings::open_error(path, source),
        other => InputError::Malformed {
            path: path.to_path_buf(),
            format: "shapefile".to_string(),
            details: other.to_string(),
        },
    }
}
