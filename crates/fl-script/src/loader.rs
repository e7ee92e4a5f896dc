//! CSV destination-catalog loader.
//!
//! # CSV format
//!
//! One row per candidate destination.  The shared origin is supplied by the
//! caller, not the file; display distances are derived from it.
//!
//! ```csv
//! name,lat,lon,mode
//! Wolf Creek general store,46.9980,-112.0650,drone
//! Elliston co-op,46.5594,-112.4286,van
//! ```
//!
//! **`mode`** field:
//!
//! | Value   | Meaning               |
//! |---------|-----------------------|
//! | `drone` | `DeliveryMode::Drone` |
//! | `van`   | `DeliveryMode::Van`   |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fl_core::GeoPoint;

use crate::destination::{DeliveryMode, DestinationCatalog};
use crate::ScriptError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    name: String,
    lat:  f64,
    lon:  f64,
    mode: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DestinationCatalog`] from a CSV file, anchored at `origin`.
pub fn load_catalog_csv(path: &Path, origin: GeoPoint) -> Result<DestinationCatalog, ScriptError> {
    let file = std::fs::File::open(path).map_err(ScriptError::Io)?;
    load_catalog_reader(file, origin)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded in
/// the application binary.
pub fn load_catalog_reader<R: Read>(
    reader: R,
    origin: GeoPoint,
) -> Result<DestinationCatalog, ScriptError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut candidates = Vec::new();

    for result in csv_reader.deserialize::<CatalogRecord>() {
        let row = result.map_err(|e| ScriptError::Parse(e.to_string()))?;
        candidates.push((
            row.name,
            GeoPoint::new(row.lat, row.lon),
            parse_mode(&row.mode)?,
        ));
    }

    DestinationCatalog::new(origin, candidates)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_mode(s: &str) -> Result<DeliveryMode, ScriptError> {
    match s.trim() {
        "drone" => Ok(DeliveryMode::Drone),
        "van" => Ok(DeliveryMode::Van),
        other => Err(ScriptError::Parse(format!(
            "invalid delivery mode {other:?}: expected \"drone\" or \"van\""
        ))),
    }
}
