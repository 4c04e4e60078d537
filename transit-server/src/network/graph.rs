//! Ride adjacency for shortest-path search.

use std::collections::{HashMap, HashSet};

use crate::domain::{Segment, SegmentKind, SegmentMap, StopId};

/// Directed adjacency from a stop to its outgoing ride segments.
///
/// Walk segments are deliberately excluded: they belong to the walking
/// strategy, not to schedule-aware search. The graph is immutable after
/// `build` and can be shared read-only across planning calls.
#[derive(Debug, Clone)]
pub struct RideGraph {
    outgoing: HashMap<StopId, Vec<Segment>>,
}

impl RideGraph {
    /// Build the adjacency structure for the given stop set.
    ///
    /// Every stop in `stop_ids` gets an (initially empty) outgoing list.
    /// Ride segments whose start stop is not in the set are skipped
    /// silently; with consistent input that does not occur.
    pub fn build(stop_ids: &HashSet<StopId>, segments: &SegmentMap) -> Self {
        let mut outgoing: HashMap<StopId, Vec<Segment>> =
            stop_ids.iter().map(|&id| (id, Vec::new())).collect();

        for segment in segments.values() {
            if segment.kind != SegmentKind::Ride {
                continue;
            }
            if let Some(list) = outgoing.get_mut(&segment.from) {
                list.push(*segment);
            }
        }

        Self { outgoing }
    }

    /// Outgoing ride segments from a stop; empty for unknown stops.
    pub fn outgoing(&self, stop: StopId) -> &[Segment] {
        self.outgoing
            .get(&stop)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stops in the graph.
    pub fn stop_count(&self) -> usize {
        self.outgoing.len()
    }
}

/// The set of stops referenced as an endpoint by any segment.
pub fn referenced_stops(segments: &SegmentMap) -> HashSet<StopId> {
    let mut stops = HashSet::new();
    for segment in segments.values() {
        stops.insert(segment.from);
        stops.insert(segment.to);
    }
    stops
}
