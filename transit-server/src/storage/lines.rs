//! Line repository: route and frequency records.
//!
//! Routes come from `code;name;stop1;stop2;...` records; departures come
//! from a separate frequency file of `lineCode;day;HH:MM` records that are
//! appended to the already-loaded lines.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use tracing::warn;

use crate::domain::{Line, LineCode, Stop, StopId, Weekday};

use super::error::StorageError;

/// Load all lines and their weekly schedules.
///
/// Returned in file order, which later becomes the registration order on
/// stops (and therefore the tie-break order of line-ownership
/// resolution). Route entries naming stops absent from `stops` are
/// dropped; malformed records in either file are skipped with a warning.
pub fn load_lines(
    lines_path: &Path,
    frequencies_path: &Path,
    stops: &HashMap<StopId, Stop>,
) -> Result<Vec<Line>, StorageError> {
    let text = fs::read_to_string(lines_path).map_err(|source| StorageError::Read {
        path: lines_path.to_path_buf(),
        source,
    })?;

    let mut lines: Vec<Line> = Vec::new();
    let mut index: HashMap<LineCode, usize> = HashMap::new();

    for (number, raw) in text.lines().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }
        match parse_line(record, stops) {
            Some(line) => {
                index.insert(line.code().clone(), lines.len());
                lines.push(line);
            }
            None => warn!(
                file = %lines_path.display(),
                line = number + 1,
                "skipping malformed line record"
            ),
        }
    }

    append_frequencies(frequencies_path, &mut lines, &index)?;
    Ok(lines)
}

fn parse_line(record: &str, stops: &HashMap<StopId, Stop>) -> Option<Line> {
    let mut fields = record.split(';').map(str::trim);
    let code = LineCode::parse(fields.next()?).ok()?;
    let name = fields.next()?;

    let mut line = Line::new(code, name);
    for field in fields {
        let stop = StopId(field.parse().ok()?);
        if stops.contains_key(&stop) {
            line.add_stop(stop);
        } else {
            warn!(line = %line.code(), stop = %stop, "route names unknown stop, dropped");
        }
    }
    Some(line)
}

fn append_frequencies(
    path: &Path,
    lines: &mut [Line],
    index: &HashMap<LineCode, usize>,
) -> Result<(), StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    for (number, raw) in text.lines().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }
        match parse_frequency(record) {
            Some((code, day, time)) => match index.get(&code) {
                Some(&at) => lines[at].add_departure(day, time),
                None => warn!(line = %code, "frequency for unknown line, dropped"),
            },
            None => warn!(
                file = %path.display(),
                line = number + 1,
                "skipping malformed frequency record"
            ),
        }
    }

    Ok(())
}

fn parse_frequency(record: &str) -> Option<(LineCode, Weekday, NaiveTime)> {
    let mut fields = record.split(';').map(str::trim);
    let code = LineCode::parse(fields.next()?).ok()?;
    let day = Weekday::new(fields.next()?.parse().ok()?).ok()?;
    let time = parse_clock(fields.next()?)?;
    Some((code, day, time))
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Write route records, in the given order.
pub fn save_lines(path: &Path, lines: &[Line]) -> Result<(), StorageError> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.code().as_str());
        text.push(';');
        text.push_str(line.name());
        for stop in line.route() {
            text.push_str(&format!(";{stop}"));
        }
        text.push('\n');
    }

    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write frequency records for every line, days ascending.
pub fn save_frequencies(path: &Path, lines: &[Line]) -> Result<(), StorageError> {
    let mut text = String::new();
    for line in lines {
        for day in Weekday::ALL {
            for departure in line.departures_on(day) {
                text.push_str(&format!(
                    "{};{};{}\n",
                    line.code(),
                    day,
                    departure.format("%H:%M")
                ));
            }
        }
    }

    fs::write(path, text).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(ids: &[u32]) -> HashMap<StopId, Stop> {
        ids.iter()
            .map(|&id| {
                (
                    StopId(id),
                    Stop::new(StopId(id), format!("Stop {id}"), 0.0, 0.0),
                )
            })
            .collect()
    }

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_routes_and_frequencies_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let lines_path = write(dir.path(), "lines.txt", "L2;Linea 2;2;3\nL1;Linea 1;1;2\n");
        let freq_path = write(
            dir.path(),
            "frequencies.txt",
            "L1;1;10:05\nL1;1;09:30\nL2;7;08:00:00\n",
        );

        let lines = load_lines(&lines_path, &freq_path, &stops(&[1, 2, 3])).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].code().as_str(), "L2");
        assert_eq!(lines[1].code().as_str(), "L1");
        assert_eq!(lines[1].route(), &[StopId(1), StopId(2)]);

        // Frequencies attached, ascending, format HH:MM and HH:MM:SS both.
        let mondays = lines[1].departures_on(Weekday::MONDAY);
        assert_eq!(mondays.len(), 2);
        assert!(mondays[0] < mondays[1]);
        assert_eq!(lines[0].departures_on(Weekday::SUNDAY).len(), 1);
    }

    #[test]
    fn unknown_route_stops_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let lines_path = write(dir.path(), "lines.txt", "L1;Linea 1;1;99;2\n");
        let freq_path = write(dir.path(), "frequencies.txt", "");

        let lines = load_lines(&lines_path, &freq_path, &stops(&[1, 2])).unwrap();

        assert_eq!(lines[0].route(), &[StopId(1), StopId(2)]);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let lines_path = write(dir.path(), "lines.txt", "L1;Linea 1;1;2\nbroken\n");
        let freq_path = write(
            dir.path(),
            "frequencies.txt",
            "L1;9;10:00\nL1;1;25:00\nL9;1;10:00\nL1;1;10:05\n",
        );

        let lines = load_lines(&lines_path, &freq_path, &stops(&[1, 2])).unwrap();

        assert_eq!(lines.len(), 1);
        // Only the one valid frequency survived: bad day, bad time and
        // unknown line were all dropped.
        assert_eq!(lines[0].departures_on(Weekday::MONDAY).len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let all_stops = stops(&[1, 2, 3]);

        let mut line = Line::new(LineCode::parse("L1").unwrap(), "Linea 1");
        line.add_stop(StopId(1));
        line.add_stop(StopId(2));
        line.add_stop(StopId(3));
        line.add_departure(Weekday::MONDAY, NaiveTime::from_hms_opt(10, 5, 0).unwrap());
        line.add_departure(Weekday::SUNDAY, NaiveTime::from_hms_opt(8, 0, 0).unwrap());

        let lines_path = dir.path().join("lines.txt");
        let freq_path = dir.path().join("frequencies.txt");
        save_lines(&lines_path, std::slice::from_ref(&line)).unwrap();
        save_frequencies(&freq_path, std::slice::from_ref(&line)).unwrap();

        let loaded = load_lines(&lines_path, &freq_path, &all_stops).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], line);
    }
}
