//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Line, Stop};
use crate::network::NetworkData;
use crate::planner::{PlanError, StrategyKind};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Origin stop code
    pub origin: u32,

    /// Destination stop code
    pub destination: u32,

    /// Day of week, 1 (Monday) through 7 (Sunday)
    pub day: u8,

    /// Time the rider is ready at the origin, "HH:MM"
    pub time: String,

    /// Planning strategy (defaults to the fastest-route search)
    #[serde(default)]
    pub strategy: StrategyKind,
}

/// One leg of a planned itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Line code, absent for legs with no resolved line
    pub line: Option<String>,

    /// Line display name
    pub line_name: Option<String>,

    /// Origin stop code
    pub from: u32,

    /// Destination stop code
    pub to: u32,

    /// Duration in whole minutes
    pub minutes: i64,
}

/// One candidate itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Sum of leg durations in minutes
    pub total_minutes: i64,
}

impl ItineraryResult {
    /// Map a domain itinerary, resolving line display names.
    pub fn from_itinerary(itinerary: &Itinerary, network: &NetworkData) -> Self {
        let legs = itinerary
            .legs()
            .iter()
            .map(|leg| {
                let line_name = leg.line.as_ref().map(|code| {
                    if leg.is_on_foot() {
                        crate::domain::ON_FOOT_NAME.to_string()
                    } else {
                        network
                            .line(code)
                            .map(|line| line.name().to_string())
                            .unwrap_or_else(|| code.as_str().to_string())
                    }
                });
                LegResult {
                    line: leg.line.as_ref().map(|code| code.as_str().to_string()),
                    line_name,
                    from: leg.from.0,
                    to: leg.to.0,
                    minutes: leg.minutes,
                }
            })
            .collect();

        Self {
            legs,
            total_minutes: itinerary.total_minutes(),
        }
    }
}

/// Response for a plan request.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Candidate itineraries in discovery order; may be empty
    pub itineraries: Vec<ItineraryResult>,
}

/// A stop in listing results.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub code: u32,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Codes of the lines serving this stop
    pub lines: Vec<String>,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            code: stop.id().0,
            address: stop.address().to_string(),
            latitude: stop.latitude(),
            longitude: stop.longitude(),
            lines: stop
                .lines()
                .iter()
                .map(|code| code.as_str().to_string())
                .collect(),
        }
    }
}

/// Response listing all stops.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopResult>,
}

/// A line in listing results.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub code: String,
    pub name: String,

    /// Route stop codes in travel order
    pub stops: Vec<u32>,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            code: line.code().as_str().to_string(),
            name: line.name().to_string(),
            stops: line.route().iter().map(|stop| stop.0).collect(),
        }
    }
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request input
    #[error("{message}")]
    BadRequest { message: String },

    /// A referenced resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected internal failure
    #[error("{message}")]
    Internal { message: String },
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownStop(stop) => ApiError::NotFound {
                message: format!("unknown stop {stop}"),
            },
            PlanError::Itinerary(err) => ApiError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, LineCode, StopId};

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    fn network() -> NetworkData {
        let mut network = NetworkData::new();
        network.add_stop(Stop::new(StopId(1), "Origin", 0.0, 0.0));
        network.add_stop(Stop::new(StopId(2), "Destination", 0.01, 0.0));
        let mut line = Line::new(code("L1"), "Linea 1");
        line.add_stop(StopId(1));
        line.add_stop(StopId(2));
        network.add_line(line);
        network
    }

    #[test]
    fn plan_request_deserializes_with_default_strategy() {
        let request: PlanTripRequest = serde_json::from_str(
            r#"{"origin": 31, "destination": 75, "day": 1, "time": "10:00"}"#,
        )
        .unwrap();

        assert_eq!(request.origin, 31);
        assert_eq!(request.strategy, StrategyKind::Fastest);

        let request: PlanTripRequest = serde_json::from_str(
            r#"{"origin": 31, "destination": 75, "day": 1, "time": "10:00", "strategy": "direct"}"#,
        )
        .unwrap();
        assert_eq!(request.strategy, StrategyKind::Direct);
    }

    #[test]
    fn itinerary_result_resolves_line_names() {
        let network = network();
        let itinerary =
            Itinerary::new(vec![Leg::ride(code("L1"), StopId(1), StopId(2), 8)]).unwrap();

        let result = ItineraryResult::from_itinerary(&itinerary, &network);

        assert_eq!(result.total_minutes, 8);
        assert_eq!(result.legs.len(), 1);
        assert_eq!(result.legs[0].line.as_deref(), Some("L1"));
        assert_eq!(result.legs[0].line_name.as_deref(), Some("Linea 1"));
    }

    #[test]
    fn on_foot_leg_gets_the_fixed_label() {
        let network = network();
        let itinerary = Itinerary::new(vec![Leg::on_foot(StopId(1), StopId(2), 13)]).unwrap();

        let result = ItineraryResult::from_itinerary(&itinerary, &network);

        assert_eq!(result.legs[0].line.as_deref(), Some("WALK"));
        assert_eq!(result.legs[0].line_name.as_deref(), Some("On foot"));
    }

    #[test]
    fn unowned_leg_serializes_with_null_line() {
        let network = network();
        let itinerary = Itinerary::new(vec![Leg::unowned(StopId(1), StopId(2), 8)]).unwrap();

        let result = ItineraryResult::from_itinerary(&itinerary, &network);
        let value = serde_json::to_value(&result).unwrap();

        assert!(value["legs"][0]["line"].is_null());
        assert_eq!(value["total_minutes"], 8);
    }

    #[test]
    fn stop_result_includes_serving_lines() {
        let network = network();
        let result = StopResult::from_stop(network.stop(StopId(1)).unwrap());

        assert_eq!(result.code, 1);
        assert_eq!(result.lines, vec!["L1".to_string()]);
    }
}
