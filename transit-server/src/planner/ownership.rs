//! Line-ownership resolution for ride segments.
//!
//! A ride segment does not record which line operates it; ownership is
//! recovered at plan time by matching the segment's endpoints against the
//! routes of the lines registered on its start stop.

use crate::domain::{Line, Segment, SegmentKey};
use crate::network::NetworkData;

/// Find the line that operates a ride segment.
///
/// Scans the start stop's lines in registration order, looking for a route
/// with the adjacent pair (segment.from, segment.to) in that order, and
/// additionally requires that a ride segment keyed by that exact pair
/// exists in the collection (a consistency guard; callers normally already
/// hold such a segment).
///
/// When two or more lines share the same consecutive stop pair, whichever
/// was registered first on the stop wins. That nondeterminism is inherited
/// from the data order on purpose; it is not a ranking decision.
///
/// Returns `None` if no line owns the pair, which callers treat as a leg
/// that is not schedule-bound.
pub fn resolve_owning_line<'a>(network: &'a NetworkData, segment: &Segment) -> Option<&'a Line> {
    let start = network.stop(segment.from)?;

    for code in start.lines() {
        let Some(line) = network.line(code) else {
            continue;
        };
        for pair in line.route().windows(2) {
            if pair[0] == segment.from && pair[1] == segment.to {
                let key = SegmentKey::ride(segment.from, segment.to);
                if network.segment(&key).is_some() {
                    return Some(line);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, SegmentKind, Stop, StopId};

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    fn stop(id: u32) -> Stop {
        Stop::new(StopId(id), format!("Stop {id}"), 0.0, 0.0)
    }

    fn line(c: &str, route: &[u32]) -> Line {
        let mut line = Line::new(code(c), c);
        for &id in route {
            line.add_stop(StopId(id));
        }
        line
    }

    #[test]
    fn resolves_the_line_covering_the_pair() {
        let mut network = NetworkData::new();
        for id in [1, 2, 3] {
            network.add_stop(stop(id));
        }
        network.add_line(line("L1", &[1, 2, 3]));
        network.add_segment(Segment::new(StopId(1), StopId(2), 5, SegmentKind::Ride));
        network.add_segment(Segment::new(StopId(2), StopId(3), 5, SegmentKind::Ride));

        let segment = Segment::new(StopId(2), StopId(3), 5, SegmentKind::Ride);
        let owner = resolve_owning_line(&network, &segment).unwrap();
        assert_eq!(owner.code().as_str(), "L1");
    }

    #[test]
    fn direction_matters() {
        let mut network = NetworkData::new();
        for id in [1, 2] {
            network.add_stop(stop(id));
        }
        network.add_line(line("L1", &[1, 2]));
        network.add_segment(Segment::new(StopId(1), StopId(2), 5, SegmentKind::Ride));

        // The reverse pair is not on any route.
        let reverse = Segment::new(StopId(2), StopId(1), 5, SegmentKind::Ride);
        assert!(resolve_owning_line(&network, &reverse).is_none());
    }

    #[test]
    fn requires_the_ride_segment_to_exist() {
        let mut network = NetworkData::new();
        for id in [1, 2] {
            network.add_stop(stop(id));
        }
        network.add_line(line("L1", &[1, 2]));
        // Only a walk segment exists for the pair.
        network.add_segment(Segment::new(StopId(1), StopId(2), 10, SegmentKind::Walk));

        let segment = Segment::new(StopId(1), StopId(2), 10, SegmentKind::Walk);
        assert!(resolve_owning_line(&network, &segment).is_none());
    }

    #[test]
    fn overlapping_lines_resolve_by_registration_order() {
        let mut network = NetworkData::new();
        for id in [1, 2, 3] {
            network.add_stop(stop(id));
        }
        // Both lines cover the pair (1, 2); LA is registered first.
        network.add_line(line("LA", &[1, 2]));
        network.add_line(line("LB", &[1, 2, 3]));
        network.add_segment(Segment::new(StopId(1), StopId(2), 5, SegmentKind::Ride));

        let segment = Segment::new(StopId(1), StopId(2), 5, SegmentKind::Ride);
        let owner = resolve_owning_line(&network, &segment).unwrap();
        assert_eq!(owner.code().as_str(), "LA");
    }

    #[test]
    fn unknown_start_stop_resolves_to_none() {
        let network = NetworkData::new();
        let segment = Segment::new(StopId(1), StopId(2), 5, SegmentKind::Ride);
        assert!(resolve_owning_line(&network, &segment).is_none());
    }
}
