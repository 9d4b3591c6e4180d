// crates/shared-kernel/src/value_objects/admin.rs
use serde::{Deserialize, Serialize};

/// Province / regency-city / sub-district triple used as the group key.
///
/// Field order drives `Ord`, so sorted keys come out province first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdminKey {
    pub provinsi: String,
    pub kabupaten_kota: String,
    pub kecamatan: String,
}

impl AdminKey {
    pub fn new(
        provinsi: impl Into<String>,
        kabupaten_kota: impl Into<String>,
        kecamatan: impl Into<String>,
    ) -> Self {
        Self {
            provinsi: provinsi.into(),
            kabupaten_kota: kabupaten_kota.into(),
            kecamatan: kecamatan.into(),
        }
    }
}
