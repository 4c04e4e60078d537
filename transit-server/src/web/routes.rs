//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::NaiveTime;

use crate::domain::{StopId, Weekday};
use crate::planner::PlanRequest;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/lines", get(list_lines))
        .route("/api/plan", post(plan_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stops, ordered by code.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    let mut stops: Vec<StopResult> = state
        .network
        .stops()
        .values()
        .map(StopResult::from_stop)
        .collect();
    stops.sort_by_key(|stop| stop.code);

    Json(StopsResponse { stops })
}

/// List all lines, ordered by code.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let mut lines: Vec<LineResult> = state
        .network
        .lines()
        .values()
        .map(LineResult::from_line)
        .collect();
    lines.sort_by(|a, b| a.code.cmp(&b.code));

    Json(LinesResponse { lines })
}

/// Plan a trip with the requested strategy.
async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, ApiError> {
    let day = Weekday::new(request.day).map_err(|err| ApiError::BadRequest {
        message: err.to_string(),
    })?;
    let time = parse_clock(&request.time).ok_or_else(|| ApiError::BadRequest {
        message: format!("invalid time: {}", request.time),
    })?;

    let plan = PlanRequest::new(
        StopId(request.origin),
        StopId(request.destination),
        day,
        time,
    );
    let candidates = state.planner.plan(request.strategy, plan).await?;

    let itineraries = candidates
        .iter()
        .map(|itinerary| ItineraryResult::from_itinerary(itinerary, &state.network))
        .collect();

    Ok(Json(PlanTripResponse { itineraries }))
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_accepts_both_formats() {
        assert!(parse_clock("10:00").is_some());
        assert!(parse_clock("10:00:30").is_some());
        assert!(parse_clock("25:00").is_none());
        assert!(parse_clock("10am").is_none());
    }
}
