//! File-backed network repositories.
//!
//! The network is persisted as four semicolon-separated text files in one
//! directory. Loading is forgiving about individual records (skip and
//! warn) but strict about files being readable.

use std::path::Path;

use tracing::info;

use crate::network::NetworkData;

mod error;
mod lines;
mod segments;
mod stops;

pub use error::StorageError;
pub use lines::{load_lines, save_frequencies, save_lines};
pub use segments::{load_segments, save_segments};
pub use stops::{load_stops, save_stops};

/// File name of the stop records within a data directory.
pub const STOPS_FILE: &str = "stops.txt";
/// File name of the line route records.
pub const LINES_FILE: &str = "lines.txt";
/// File name of the departure frequency records.
pub const FREQUENCIES_FILE: &str = "frequencies.txt";
/// File name of the segment records.
pub const SEGMENTS_FILE: &str = "segments.txt";

/// Load and assemble the whole network from a data directory.
///
/// Stops are loaded first so that line routes and segment endpoints can
/// be checked against them; the arena then wires the back-references
/// (lines onto stops, walking neighbors both ways) as records are added.
/// Lines are added in file order, which fixes the line-registration order
/// on stops.
pub fn load_network(dir: &Path) -> Result<NetworkData, StorageError> {
    let stops = load_stops(&dir.join(STOPS_FILE))?;
    let lines = load_lines(&dir.join(LINES_FILE), &dir.join(FREQUENCIES_FILE), &stops)?;
    let segments = load_segments(&dir.join(SEGMENTS_FILE), &stops)?;

    let mut network = NetworkData::new();
    for stop in stops.into_values() {
        network.add_stop(stop);
    }
    for line in lines {
        network.add_line(line);
    }
    for segment in segments.into_values() {
        network.add_segment(segment);
    }

    info!(
        stops = network.stops().len(),
        lines = network.lines().len(),
        segments = network.segments().len(),
        "network loaded"
    );
    Ok(network)
}
