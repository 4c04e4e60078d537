//! Line records, line codes and schedule lookup.
//!
//! A line owns two things the planner cares about: the ordered route of
//! stops it visits (order defines travel direction) and a weekly timetable
//! of departure times at its originating stop. Waiting time at any stop the
//! line serves is computed against that single departure list.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;

use super::{StopId, Weekday};

/// Code of the on-foot pseudo-line used by the walking strategy.
///
/// Reserved: network data must not define a real line with this code.
pub const ON_FOOT_CODE: &str = "WALK";

/// Display name of the on-foot pseudo-line.
pub const ON_FOOT_NAME: &str = "On foot";

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A validated line code (e.g. "L1").
///
/// Codes are non-empty and free of whitespace and the `;` record
/// separator, so they can round-trip through the data files.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() {
            return Err(InvalidLineCode {
                reason: "must not be empty",
            });
        }
        if s.chars().any(|c| c.is_whitespace() || c == ';') {
            return Err(InvalidLineCode {
                reason: "must not contain whitespace or ';'",
            });
        }
        Ok(LineCode(s.to_string()))
    }

    /// The code of the on-foot pseudo-line.
    pub fn on_foot() -> Self {
        LineCode(ON_FOOT_CODE.to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit line: display name, ordered route, weekly timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    code: LineCode,
    name: String,
    route: Vec<StopId>,
    timetable: BTreeMap<Weekday, Vec<NaiveTime>>,
}

impl Line {
    /// Create a line with an empty route and timetable.
    pub fn new(code: LineCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            route: Vec::new(),
            timetable: BTreeMap::new(),
        }
    }

    /// The on-foot pseudo-line used for walking legs.
    ///
    /// It serves no stops and has no timetable; it exists so that a
    /// walking leg can name a line like any other leg.
    pub fn on_foot() -> Self {
        Self {
            code: LineCode::on_foot(),
            name: ON_FOOT_NAME.to_string(),
            route: Vec::new(),
            timetable: BTreeMap::new(),
        }
    }

    /// Returns the line code.
    pub fn code(&self) -> &LineCode {
        &self.code
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered sequence of stops this line visits.
    pub fn route(&self) -> &[StopId] {
        &self.route
    }

    /// Append a stop to the route.
    ///
    /// Registration of the line on the stop itself is done by the network
    /// arena, which owns both sides of the relationship.
    pub fn add_stop(&mut self, stop: StopId) {
        self.route.push(stop);
    }

    /// Add a departure time for a day, keeping the day's list ascending.
    pub fn add_departure(&mut self, day: Weekday, time: NaiveTime) {
        let departures = self.timetable.entry(day).or_default();
        let at = departures.partition_point(|&t| t <= time);
        departures.insert(at, time);
    }

    /// The ascending departures configured for a day; empty if none.
    pub fn departures_on(&self, day: Weekday) -> &[NaiveTime] {
        self.timetable
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Minutes of waiting until the next departure at or after `ready`.
    ///
    /// A departure exactly at `ready` counts as zero wait. Returns `None`
    /// once the last departure of the day has passed; there is no rollover
    /// to the next day.
    pub fn next_departure(departures: &[NaiveTime], ready: NaiveTime) -> Option<i64> {
        departures
            .iter()
            .find(|&&departure| departure >= ready)
            .map(|departure| departure.signed_duration_since(ready).num_minutes())
    }
}
