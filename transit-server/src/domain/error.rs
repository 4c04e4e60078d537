//! Domain error types.

use super::StopId;

/// Validation failures in the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary must contain at least one leg")]
    EmptyItinerary,

    /// Consecutive legs do not share the intermediate stop
    #[error("legs do not connect: arrived at stop {0} but next leg starts at stop {1}")]
    DisconnectedLegs(StopId, StopId),
}
