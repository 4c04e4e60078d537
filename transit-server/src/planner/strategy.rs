//! Strategy abstraction and the planning context.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Itinerary, StopId, Weekday};
use crate::network::NetworkData;

use super::direct::DirectLine;
use super::shortest_path::ShortestPath;
use super::walking::Walking;

/// Error from a planning call.
///
/// Absence of a route is not an error (it is an empty candidate list);
/// these variants cover caller contract violations and internal
/// inconsistencies only.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The request names a stop that is not in the network
    #[error("unknown stop {0}")]
    UnknownStop(StopId),

    /// A computed itinerary failed domain validation
    #[error("invalid itinerary: {0}")]
    Itinerary(#[from] DomainError),
}

/// A planning request: where from, where to, and when the rider is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub origin: StopId,
    pub destination: StopId,
    pub day: Weekday,
    pub ready_time: NaiveTime,
}

impl PlanRequest {
    /// Create a new planning request.
    pub fn new(origin: StopId, destination: StopId, day: Weekday, ready_time: NaiveTime) -> Self {
        Self {
            origin,
            destination,
            day,
            ready_time,
        }
    }

    /// Check that both endpoints exist in the network.
    pub fn validate(&self, network: &NetworkData) -> Result<(), PlanError> {
        if network.stop(self.origin).is_none() {
            return Err(PlanError::UnknownStop(self.origin));
        }
        if network.stop(self.destination).is_none() {
            return Err(PlanError::UnknownStop(self.destination));
        }
        Ok(())
    }
}

/// A route-planning algorithm.
///
/// Implementations return candidate itineraries in discovery order; an
/// empty list means no candidate was found, which is a normal outcome.
pub trait RouteStrategy: Send + Sync {
    /// Plan candidate itineraries for the request over the given network.
    fn plan(
        &self,
        request: &PlanRequest,
        network: &NetworkData,
    ) -> Result<Vec<Itinerary>, PlanError>;
}

/// The planning context: holds the active strategy and delegates to it.
///
/// Pure delegation; its value is that a caller can swap the algorithm
/// between calls without touching the call site.
pub struct TripPlanner {
    strategy: Box<dyn RouteStrategy>,
}

impl TripPlanner {
    /// Create a planner with an initial strategy.
    pub fn new(strategy: Box<dyn RouteStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy. Prior results are unaffected.
    pub fn set_strategy(&mut self, strategy: Box<dyn RouteStrategy>) {
        self.strategy = strategy;
    }

    /// Delegate planning to the active strategy.
    pub fn plan(
        &self,
        request: &PlanRequest,
        network: &NetworkData,
    ) -> Result<Vec<Itinerary>, PlanError> {
        self.strategy.plan(request, network)
    }
}

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Time-dependent shortest path (wait + ride minutes).
    #[default]
    Fastest,
    /// Single-line candidates, schedules ignored.
    Direct,
    /// Straight-line walk between the two stops.
    Walking,
}

impl StrategyKind {
    /// Instantiate the strategy this selector names.
    pub fn strategy(self) -> Box<dyn RouteStrategy> {
        match self {
            StrategyKind::Fastest => Box::new(ShortestPath),
            StrategyKind::Direct => Box::new(DirectLine),
            StrategyKind::Walking => Box::new(Walking),
        }
    }
}
