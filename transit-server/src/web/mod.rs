//! JSON API over the planning engine.

mod dto;
mod routes;
mod state;

pub use dto::{ApiError, ItineraryResult, PlanTripRequest, PlanTripResponse};
pub use routes::create_router;
pub use state::AppState;
