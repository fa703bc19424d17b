//! CSV snapshot loaders.
//!
//! # CSV formats
//!
//! Markers, one row per interchange:
//!
//! ```csv
//! id,name,road_name,lon,lat,weight
//! 101,서울TG,경부선,127.0420,37.4580,1
//! 102,판교JC,경부선,127.1030,37.4030,2
//! ```
//!
//! Facilities, one row per rest area or sleep area.  `direction` is parsed
//! with [`DirectionLabel::parse`]; an empty cell means unspecified.
//!
//! ```csv
//! id,name,road_name,lon,lat,direction
//! 7,망향휴게소,경부고속도로,127.1430,36.9200,하행
//! 8,안성휴게소,경부고속도로,127.2050,37.0100,BOTH
//! ```
//!
//! Rows with a malformed coordinate are rejected with their 1-based data row
//! number; the whole load fails rather than silently dropping records.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Coordinate, DirectionLabel, Facility, LoadError, Marker};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MarkerRecord {
    id:        u64,
    name:      String,
    road_name: String,
    lon:       f64,
    lat:       f64,
    weight:    i64,
}

#[derive(Deserialize)]
struct FacilityRecord {
    id:        u64,
    name:      String,
    road_name: String,
    lon:       f64,
    lat:       f64,
    #[serde(default)]
    direction: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load markers from a CSV file.
pub fn load_markers_csv(path: &Path) -> Result<Vec<Marker>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_markers_reader(file)
}

/// Like [`load_markers_csv`] but accepts any `Read` source.
pub fn load_markers_reader<R: Read>(reader: R) -> Result<Vec<Marker>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut markers = Vec::new();

    for (i, result) in csv_reader.deserialize::<MarkerRecord>().enumerate() {
        let row = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        let position = checked_position(i + 1, row.lon, row.lat)?;
        markers.push(Marker::new(row.id, row.name, row.road_name, position, row.weight));
    }

    debug!(count = markers.len(), "loaded marker snapshot");
    Ok(markers)
}

/// Load facilities from a CSV file.
pub fn load_facilities_csv(path: &Path) -> Result<Vec<Facility>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_facilities_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
pub fn load_facilities_reader<R: Read>(reader: R) -> Result<Vec<Facility>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut facilities = Vec::new();

    for (i, result) in csv_reader.deserialize::<FacilityRecord>().enumerate() {
        let row = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        let position = checked_position(i + 1, row.lon, row.lat)?;
        facilities.push(Facility::new(
            row.id,
            row.name,
            row.road_name,
            position,
            DirectionLabel::parse(&row.direction),
        ));
    }

    debug!(count = facilities.len(), "loaded facility snapshot");
    Ok(facilities)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn checked_position(row: usize, lon: f64, lat: f64) -> Result<Coordinate, LoadError> {
    Coordinate::try_new(lon, lat).map_err(|source| LoadError::Row { row, source })
}
