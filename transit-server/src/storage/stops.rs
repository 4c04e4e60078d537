//! Stop repository: `code;address;latitude;longitude` records.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::{Stop, StopId};

use super::error::StorageError;

/// Load all stops from a data file.
///
/// Empty lines are ignored; malformed records are skipped with a warning.
pub fn load_stops(path: &Path) -> Result<HashMap<StopId, Stop>, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut stops = HashMap::new();
    for (number, raw) in text.lines().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }
        match parse_stop(record) {
            Some(stop) => {
                stops.insert(stop.id(), stop);
            }
            None => warn!(
                file = %path.display(),
                line = number + 1,
                "skipping malformed stop record"
            ),
        }
    }

    Ok(stops)
}

fn parse_stop(record: &str) -> Option<Stop> {
    let mut fields = record.split(';').map(str::trim);
    let id = StopId(fields.next()?.parse().ok()?);
    let address = fields.next()?.to_string();
    let latitude: f64 = fields.next()?.parse().ok()?;
    let longitude: f64 = fields.next()?.parse().ok()?;
    Some(Stop::new(id, address, latitude, longitude))
}

/// Write all stops to a data file, ordered by code.
pub fn save_stops(path: &Path, stops: &HashMap<StopId, Stop>) -> Result<(), StorageError> {
    let mut ordered: Vec<&Stop> = stops.values().collect();
    ordered.sort_by_key(|stop| stop.id());

    let mut text = String::new();
    for stop in ordered {
        text.push_str(&format!(
            "{};{};{};{}\n",
            stop.id(),
            stop.address(),
            stop.latitude(),
            stop.longitude()
        ));
    }

    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
