//! The route-planning engine.
//!
//! Three algorithms behind one `RouteStrategy` interface, selected at
//! runtime through the `TripPlanner` context:
//!
//! - `ShortestPath`: schedule-aware Dijkstra, least wait + ride minutes
//! - `DirectLine`: every single line connecting origin to destination
//! - `Walking`: straight-line walk at a fixed pace, always succeeds
//!
//! Strategies consume the read-only network arena and return candidate
//! itineraries; all search state is local to one call.

mod direct;
mod ownership;
mod shortest_path;
mod strategy;
mod walking;

pub use direct::DirectLine;
pub use ownership::resolve_owning_line;
pub use shortest_path::ShortestPath;
pub use strategy::{PlanError, PlanRequest, RouteStrategy, StrategyKind, TripPlanner};
pub use walking::Walking;
