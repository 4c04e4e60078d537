//! Domain types for the transit trip planner.
//!
//! This module contains the core model types that represent the transit
//! network and planning results. Types enforce their invariants at
//! construction time where they have any, so code that receives them can
//! trust their validity.

mod day;
mod error;
mod itinerary;
mod leg;
mod line;
mod segment;
mod stop;

pub use day::{InvalidWeekday, Weekday};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use line::{InvalidLineCode, Line, LineCode, ON_FOOT_CODE, ON_FOOT_NAME};
pub use segment::{Segment, SegmentKey, SegmentKind, SegmentMap};
pub use stop::{Stop, StopId};
