//! Feature Layout
//!
//! Fixed schema of the KOI feature vector. Every caller (validator, ingest,
//! explainer, HTTP layer) resolves names and positions through this file.
//!
//! Any change to names or order must bump `FEATURE_VERSION`.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Feature names in the exact order they appear in the vector
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "koi_period", // 0: orbital period (days)
    "koi_prad",   // 1: planetary radius (Earth radii)
    "koi_sma",    // 2: semi-major axis (AU)
    "koi_incl",   // 3: inclination (degrees)
    "koi_teq",    // 4: equilibrium temperature (K)
    "koi_slogg",  // 5: stellar surface gravity (log10 cm/s^2)
    "koi_srad",   // 6: stellar radius (solar radii)
    "koi_smass",  // 7: stellar mass (solar masses)
    "koi_steff",  // 8: stellar effective temperature (K)
];

/// Total number of features
pub const FEATURE_COUNT: usize = 9;

pub const IDX_PERIOD: usize = 0;
pub const IDX_PRAD: usize = 1;
pub const IDX_TEQ: usize = 4;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of version + ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout description served by `GET /api/v1/features`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}
