//! The in-memory network arena.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Line, LineCode, Segment, SegmentKey, SegmentKind, SegmentMap, Stop, StopId};

/// Fully materialized network data: stops, lines and segments, addressed
/// by stable keys.
///
/// Relationships between records are stored as key lists on the records
/// themselves and wired up here as data is added: adding a line registers
/// its code on every stop of its route, and adding a walk segment
/// registers both endpoints in each other's walking-neighbor sets (a
/// single directed walk record has an undirected effect).
///
/// The arena is built once before planning begins and is read-only during
/// planning calls.
#[derive(Debug, Clone, Default)]
pub struct NetworkData {
    stops: HashMap<StopId, Stop>,
    lines: HashMap<LineCode, Line>,
    segments: SegmentMap,
}

impl NetworkData {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop to the arena.
    pub fn add_stop(&mut self, stop: Stop) {
        self.stops.insert(stop.id(), stop);
    }

    /// Add a line, registering it on every stop of its route.
    ///
    /// Registration order across `add_line` calls is what line-ownership
    /// resolution later iterates, so callers add lines in data order.
    /// Route entries naming unknown stops are logged and skipped.
    pub fn add_line(&mut self, line: Line) {
        for &stop_id in line.route() {
            match self.stops.get_mut(&stop_id) {
                Some(stop) => stop.register_line(line.code().clone()),
                None => warn!(line = %line.code(), stop = %stop_id, "line references unknown stop"),
            }
        }
        self.lines.insert(line.code().clone(), line);
    }

    /// Add a segment, keyed by (start, end, kind).
    ///
    /// A walk segment additionally registers each endpoint as a walking
    /// neighbor of the other.
    pub fn add_segment(&mut self, segment: Segment) {
        if segment.kind == SegmentKind::Walk {
            if self.stops.contains_key(&segment.from) && self.stops.contains_key(&segment.to) {
                if let Some(stop) = self.stops.get_mut(&segment.from) {
                    stop.register_walking_neighbor(segment.to);
                }
                if let Some(stop) = self.stops.get_mut(&segment.to) {
                    stop.register_walking_neighbor(segment.from);
                }
            } else {
                warn!(segment = %segment.key(), "walk segment references unknown stop");
            }
        }
        self.segments.insert(segment.key(), segment);
    }

    /// Look up a stop by code.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(&id)
    }

    /// Look up a line by code.
    pub fn line(&self, code: &LineCode) -> Option<&Line> {
        self.lines.get(code)
    }

    /// Look up a segment by key.
    pub fn segment(&self, key: &SegmentKey) -> Option<&Segment> {
        self.segments.get(key)
    }

    /// All stops, keyed by code.
    pub fn stops(&self) -> &HashMap<StopId, Stop> {
        &self.stops
    }

    /// All lines, keyed by code.
    pub fn lines(&self) -> &HashMap<LineCode, Line> {
        &self.lines
    }

    /// All segments, keyed by (start, end, kind).
    pub fn segments(&self) -> &SegmentMap {
        &self.segments
    }
}
