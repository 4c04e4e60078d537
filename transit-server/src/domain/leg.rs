//! Itinerary legs.

use super::{LineCode, StopId};

/// One step of an itinerary: ride a line between two stops, or walk.
///
/// `line` is `None` only in the defensive case where a ride segment could
/// not be matched to any owning line; walking legs carry the on-foot
/// pseudo-line code. Durations are whole minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub line: Option<LineCode>,
    pub from: StopId,
    pub to: StopId,
    pub minutes: i64,
}

impl Leg {
    /// A leg riding `line` between two stops.
    pub fn ride(line: LineCode, from: StopId, to: StopId, minutes: i64) -> Self {
        Self {
            line: Some(line),
            from,
            to,
            minutes,
        }
    }

    /// A leg on a ride segment whose owning line could not be resolved.
    pub fn unowned(from: StopId, to: StopId, minutes: i64) -> Self {
        Self {
            line: None,
            from,
            to,
            minutes,
        }
    }

    /// A walking leg on the on-foot pseudo-line.
    pub fn on_foot(from: StopId, to: StopId, minutes: i64) -> Self {
        Self {
            line: Some(LineCode::on_foot()),
            from,
            to,
            minutes,
        }
    }

    /// True if this leg is on the on-foot pseudo-line.
    pub fn is_on_foot(&self) -> bool {
        self.line
            .as_ref()
            .is_some_and(|code| code.as_str() == super::ON_FOOT_CODE)
    }
}
