//! Itineraries: validated sequences of legs.

use super::{DomainError, Leg, StopId};

/// A complete trip option from an origin stop to a destination stop.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect: `leg[i].to == leg[i + 1].from`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Construct an itinerary, validating the leg chain.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or if any two consecutive legs do
    /// not share the intermediate stop.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            if window[0].to != window[1].from {
                return Err(DomainError::DisconnectedLegs(window[0].to, window[1].from));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the origin stop.
    pub fn origin(&self) -> StopId {
        // Safe: validated non-empty at construction
        self.legs.first().unwrap().from
    }

    /// Returns the destination stop.
    pub fn destination(&self) -> StopId {
        // Safe: validated non-empty at construction
        self.legs.last().unwrap().to
    }

    /// Total riding/walking minutes across all legs.
    pub fn total_minutes(&self) -> i64 {
        self.legs.iter().map(|leg| leg.minutes).sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::LineCode;
    use proptest::prelude::*;

    /// Build a connected chain of legs through the given stop codes.
    fn chain(stops: &[u32]) -> Vec<Leg> {
        stops
            .windows(2)
            .map(|pair| {
                Leg::ride(
                    LineCode::parse("L1").unwrap(),
                    StopId(pair[0]),
                    StopId(pair[1]),
                    1,
                )
            })
            .collect()
    }

    proptest! {
        /// Any connected chain of two or more stops is a valid itinerary,
        /// and its endpoints match the chain's.
        #[test]
        fn connected_chains_validate(stops in proptest::collection::vec(0u32..1000, 2..12)) {
            let legs = chain(&stops);
            let itinerary = Itinerary::new(legs).unwrap();

            prop_assert_eq!(itinerary.origin(), StopId(stops[0]));
            prop_assert_eq!(itinerary.destination(), StopId(*stops.last().unwrap()));
            prop_assert_eq!(itinerary.leg_count(), stops.len() - 1);
        }

        /// Breaking any interior link makes validation fail.
        #[test]
        fn broken_chains_fail(
            stops in proptest::collection::vec(0u32..1000, 3..12),
            break_at in 0usize..10,
        ) {
            let mut legs = chain(&stops);
            let at = break_at % (legs.len() - 1);
            // Redirect one leg to a stop outside the chain's range.
            legs[at].to = StopId(5000);

            prop_assert!(Itinerary::new(legs).is_err());
        }
    }
}
