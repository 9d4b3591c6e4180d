// crates/shared-kernel/src/value_objects/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fire-danger category derived from a maximum FFMC value.
///
/// Thresholds are half-open: `v < 73` is `Aman`, `73 <= v < 78` is
/// `Tidak Mudah`, `78 <= v < 82` is `Mudah` and anything from 82 up is
/// `Sangat Mudah`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DangerCategory {
    #[serde(rename = "Aman")]
    Aman,
    #[serde(rename = "Tidak Mudah")]
    TidakMudah,
    #[serde(rename = "Mudah")]
    Mudah,
    #[serde(rename = "Sangat Mudah")]
    SangatMudah,
}

impl DangerCategory {
    pub const ALL: [Self; 4] = [Self::Aman, Self::TidakMudah, Self::Mudah, Self::SangatMudah];

    const TIDAK_MUDAH_FROM: f64 = 73.0;
    const MUDAH_FROM: f64 = 78.0;
    const SANGAT_MUDAH_FROM: f64 = 82.0;

    /// Classifies an FFMC value. NaN falls through to the top category.
    pub fn from_ffmc(value: f64) -> Self {
        if value < Self::TIDAK_MUDAH_FROM {
            Self::Aman
        } else if value < Self::MUDAH_FROM {
            Self::TidakMudah
        } else if value < Self::SANGAT_MUDAH_FROM {
            Self::Mudah
        } else {
            Self::SangatMudah
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Aman => "Aman",
            Self::TidakMudah => "Tidak Mudah",
            Self::Mudah => "Mudah",
            Self::SangatMudah => "Sangat Mudah",
        }
    }
}

impl fmt::Display for DangerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds to two decimal places, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
