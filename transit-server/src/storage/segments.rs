//! Segment repository: `start;end;minutes;kind` records.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::{Segment, SegmentKind, SegmentMap, Stop, StopId};

use super::error::StorageError;

/// Load all segments from a data file.
///
/// Records whose endpoints are not both present in `stops` are skipped,
/// as are malformed records; both with a warning.
pub fn load_segments(
    path: &Path,
    stops: &HashMap<StopId, Stop>,
) -> Result<SegmentMap, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut segments = SegmentMap::new();
    for (number, raw) in text.lines().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }
        let Some(segment) = parse_segment(record) else {
            warn!(
                file = %path.display(),
                line = number + 1,
                "skipping malformed segment record"
            );
            continue;
        };
        if !stops.contains_key(&segment.from) || !stops.contains_key(&segment.to) {
            warn!(segment = %segment.key(), "segment references unknown stop, dropped");
            continue;
        }
        segments.insert(segment.key(), segment);
    }

    Ok(segments)
}

fn parse_segment(record: &str) -> Option<Segment> {
    let mut fields = record.split(';').map(str::trim);
    let from = StopId(fields.next()?.parse().ok()?);
    let to = StopId(fields.next()?.parse().ok()?);
    let minutes: i64 = fields.next()?.parse().ok()?;
    let kind = SegmentKind::from_code(fields.next()?.parse().ok()?)?;
    if minutes < 0 {
        return None;
    }
    Some(Segment::new(from, to, minutes, kind))
}

/// Write all segments to a data file, ordered by key.
pub fn save_segments(path: &Path, segments: &SegmentMap) -> Result<(), StorageError> {
    let mut ordered: Vec<&Segment> = segments.values().collect();
    ordered.sort_by_key(|segment| segment.key());

    let mut text = String::new();
    for segment in ordered {
        text.push_str(&format!(
            "{};{};{};{}\n",
            segment.from,
            segment.to,
            segment.minutes,
            segment.kind.code()
        ));
    }

    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
