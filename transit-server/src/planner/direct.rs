//! Direct single-line search.

use crate::domain::{Itinerary, Leg, SegmentKey};
use crate::network::NetworkData;

use super::strategy::{PlanError, PlanRequest, RouteStrategy};

/// The direct-line strategy.
///
/// Emits one candidate per line that visits the origin before the
/// destination in route order, riding every consecutive pair in between.
/// Schedules, day and time are ignored entirely; this answers "which
/// single line gets me there", not "when".
pub struct DirectLine;

impl RouteStrategy for DirectLine {
    fn plan(
        &self,
        request: &PlanRequest,
        network: &NetworkData,
    ) -> Result<Vec<Itinerary>, PlanError> {
        request.validate(network)?;
        let origin = network
            .stop(request.origin)
            .ok_or(PlanError::UnknownStop(request.origin))?;

        let mut candidates = Vec::new();

        for code in origin.lines() {
            let Some(line) = network.line(code) else {
                continue;
            };
            let route = line.route();

            let Some(origin_at) = route.iter().position(|&s| s == request.origin) else {
                continue;
            };
            let Some(destination_at) = route.iter().position(|&s| s == request.destination) else {
                continue;
            };
            if origin_at >= destination_at {
                continue;
            }

            // Every consecutive pair between the two indices must have a
            // ride segment, or the whole candidate is abandoned.
            let mut legs = Vec::with_capacity(destination_at - origin_at);
            let mut complete = true;
            for pair in route[origin_at..=destination_at].windows(2) {
                match network.segment(&SegmentKey::ride(pair[0], pair[1])) {
                    Some(segment) => legs.push(Leg::ride(
                        code.clone(),
                        segment.from,
                        segment.to,
                        segment.minutes,
                    )),
                    None => {
                        complete = false;
                        break;
                    }
                }
            }

            if complete {
                candidates.push(Itinerary::new(legs)?);
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineCode, Segment, SegmentKind, Stop, StopId, Weekday};
    use chrono::NaiveTime;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    fn network_with(
        stop_ids: &[u32],
        lines: &[(&str, &[u32])],
        rides: &[(u32, u32, i64)],
    ) -> NetworkData {
        let mut network = NetworkData::new();
        for &id in stop_ids {
            network.add_stop(Stop::new(StopId(id), format!("Stop {id}"), 0.0, 0.0));
        }
        for &(c, route) in lines {
            let mut line = Line::new(code(c), c);
            for &id in route {
                line.add_stop(StopId(id));
            }
            network.add_line(line);
        }
        for &(from, to, minutes) in rides {
            network.add_segment(Segment::new(StopId(from), StopId(to), minutes, SegmentKind::Ride));
        }
        network
    }

    fn plan(network: &NetworkData, from: u32, to: u32) -> Vec<Itinerary> {
        // Day and time are irrelevant to this strategy.
        let request = PlanRequest::new(StopId(from), StopId(to), Weekday::SUNDAY, time("23:59"));
        DirectLine.plan(&request, network).unwrap()
    }

    /// Both stops on "L2" with no stop between them.
    #[test]
    fn adjacent_stops_give_one_single_leg_candidate() {
        let network = network_with(&[1, 2], &[("L2", &[1, 2])], &[(1, 2, 5)]);

        let candidates = plan(&network, 1, 2);

        assert_eq!(candidates.len(), 1);
        let legs = candidates[0].legs();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].line.as_ref().unwrap().as_str(), "L2");
        assert_eq!(legs[0].minutes, 5);
    }

    #[test]
    fn multi_hop_candidate_has_one_leg_per_pair() {
        let network = network_with(
            &[1, 2, 3, 4],
            &[("L1", &[1, 2, 3, 4])],
            &[(1, 2, 5), (2, 3, 6), (3, 4, 7)],
        );

        let candidates = plan(&network, 1, 4);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].leg_count(), 3);
        assert_eq!(candidates[0].total_minutes(), 18);
        // Single-line soundness: every leg on the same line.
        assert!(
            candidates[0]
                .legs()
                .iter()
                .all(|leg| leg.line == candidates[0].legs()[0].line)
        );
    }

    #[test]
    fn wrong_direction_gives_no_candidate() {
        let network = network_with(&[1, 2], &[("L1", &[1, 2])], &[(1, 2, 5)]);

        assert!(plan(&network, 2, 1).is_empty());
    }

    #[test]
    fn missing_intermediate_segment_abandons_the_candidate() {
        // Route covers 1-2-3 but only the 1-2 ride segment exists.
        let network = network_with(&[1, 2, 3], &[("L1", &[1, 2, 3])], &[(1, 2, 5)]);

        assert!(plan(&network, 1, 3).is_empty());
        // The intact prefix still works.
        assert_eq!(plan(&network, 1, 2).len(), 1);
    }

    #[test]
    fn one_candidate_per_qualifying_line_in_stop_order() {
        let network = network_with(
            &[1, 2],
            &[("LA", &[1, 2]), ("LB", &[1, 2])],
            &[(1, 2, 5)],
        );

        let candidates = plan(&network, 1, 2);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].legs()[0].line.as_ref().unwrap().as_str(), "LA");
        assert_eq!(candidates[1].legs()[0].line.as_ref().unwrap().as_str(), "LB");
    }

    #[test]
    fn line_not_reaching_the_destination_is_skipped() {
        let network = network_with(
            &[1, 2, 3],
            &[("L1", &[1, 2]), ("L2", &[1, 2, 3])],
            &[(1, 2, 5), (2, 3, 6)],
        );

        let candidates = plan(&network, 1, 3);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].legs()[0].line.as_ref().unwrap().as_str(), "L2");
    }
}
