//! Walking fallback.

use crate::domain::{Itinerary, Leg};
use crate::network::NetworkData;

use super::strategy::{PlanError, PlanRequest, RouteStrategy};

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed walking speed in km/h.
const WALKING_SPEED_KMH: f64 = 5.0;

/// The walking fallback strategy.
///
/// Always produces exactly one candidate with exactly one leg on the
/// on-foot pseudo-line, whatever the day and time: the great-circle
/// distance between the stops at walking pace, rounded to whole minutes.
pub struct Walking;

impl RouteStrategy for Walking {
    fn plan(
        &self,
        request: &PlanRequest,
        network: &NetworkData,
    ) -> Result<Vec<Itinerary>, PlanError> {
        request.validate(network)?;
        let origin = network
            .stop(request.origin)
            .ok_or(PlanError::UnknownStop(request.origin))?;
        let destination = network
            .stop(request.destination)
            .ok_or(PlanError::UnknownStop(request.destination))?;

        let km = haversine_km(
            origin.latitude(),
            origin.longitude(),
            destination.latitude(),
            destination.longitude(),
        );
        let minutes = (km / WALKING_SPEED_KMH * 60.0).round() as i64;

        let leg = Leg::on_foot(request.origin, request.destination, minutes);
        Ok(vec![Itinerary::new(vec![leg])?])
    }
}

/// Great-circle distance between two coordinates, in kilometers.
pub(crate) fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
