//! Time-dependent shortest path over the ride network.
//!
//! A Dijkstra variant where the cost of an edge depends on when the rider
//! reaches its start: cost = minutes waiting for the next departure of the
//! owning line + ride minutes. All edge costs are non-negative, so the
//! first extraction of a stop from the queue settles it, and the search
//! can stop as soon as the destination is extracted.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use chrono::{Duration, NaiveTime};
use tracing::{debug, trace};

use crate::domain::{DomainError, Itinerary, Leg, Line, Segment, StopId, Weekday};
use crate::network::{NetworkData, RideGraph, referenced_stops};

use super::ownership::resolve_owning_line;
use super::strategy::{PlanError, PlanRequest, RouteStrategy};

/// The time-dependent shortest-path strategy.
///
/// Returns zero or one itinerary: the least-total-time path, or nothing
/// if the destination is unreachable with the day's remaining departures.
pub struct ShortestPath;

impl RouteStrategy for ShortestPath {
    fn plan(
        &self,
        request: &PlanRequest,
        network: &NetworkData,
    ) -> Result<Vec<Itinerary>, PlanError> {
        request.validate(network)?;

        let segments = network.segments();
        let stop_ids = referenced_stops(segments);
        let graph = RideGraph::build(&stop_ids, segments);

        // Transient search state, local to this call.
        let mut best: HashMap<StopId, i64> = HashMap::new();
        let mut parent: HashMap<StopId, Segment> = HashMap::new();
        let mut queue: BinaryHeap<Reverse<(i64, StopId)>> = BinaryHeap::new();

        best.insert(request.origin, 0);
        queue.push(Reverse((0, request.origin)));

        while let Some(Reverse((elapsed, stop))) = queue.pop() {
            // Stale entry: a cheaper path already settled this stop.
            if elapsed > best.get(&stop).copied().unwrap_or(i64::MAX) {
                continue;
            }

            // First extraction of the destination is its true shortest
            // distance; nothing beyond it can improve the answer.
            if stop == request.destination {
                break;
            }

            for segment in graph.outgoing(stop) {
                let Some(cost) =
                    edge_cost(network, segment, elapsed, request.day, request.ready_time)
                else {
                    // No more service on this edge today.
                    trace!(segment = %segment.key(), elapsed, "edge unusable, skipped");
                    continue;
                };

                let candidate = elapsed + cost;
                if candidate < best.get(&segment.to).copied().unwrap_or(i64::MAX) {
                    best.insert(segment.to, candidate);
                    parent.insert(segment.to, *segment);
                    queue.push(Reverse((candidate, segment.to)));
                }
            }
        }

        if !parent.contains_key(&request.destination) {
            debug!(origin = %request.origin, destination = %request.destination,
                "destination unreachable");
            return Ok(Vec::new());
        }

        let itinerary = reconstruct(network, &parent, request.destination)?;
        Ok(vec![itinerary])
    }
}

/// Minutes to traverse a segment for a rider who has already spent
/// `elapsed` minutes since `ready_time`.
///
/// Resolves the owning line and adds the wait for its next departure on
/// `day`. `None` means the edge is unusable for this traversal (no more
/// departures today). A segment with no owning line costs its ride time
/// alone; such legs are not schedule-bound.
fn edge_cost(
    network: &NetworkData,
    segment: &Segment,
    elapsed: i64,
    day: Weekday,
    ready_time: NaiveTime,
) -> Option<i64> {
    let Some(line) = resolve_owning_line(network, segment) else {
        return Some(segment.minutes);
    };

    let departures = line.departures_on(day);
    // The day of week is fixed for the whole search even if this wraps
    // past midnight; schedules are single-day.
    let at_stop = ready_time + Duration::minutes(elapsed);
    let wait = Line::next_departure(departures, at_stop)?;

    Some(wait + segment.minutes)
}

/// Walk the predecessor segments backward from the destination, then
/// reverse into travel order.
fn reconstruct(
    network: &NetworkData,
    parent: &HashMap<StopId, Segment>,
    destination: StopId,
) -> Result<Itinerary, DomainError> {
    let mut legs = Vec::new();
    let mut current = parent.get(&destination);

    while let Some(segment) = current {
        let line = resolve_owning_line(network, segment).map(|line| line.code().clone());
        let leg = match line {
            Some(code) => Leg::ride(code, segment.from, segment.to, segment.minutes),
            None => Leg::unowned(segment.from, segment.to, segment.minutes),
        };
        legs.push(leg);
        current = parent.get(&segment.from);
    }

    legs.reverse();
    Itinerary::new(legs)
}
