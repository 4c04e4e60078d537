//! Stop records and stop identifiers.

use std::fmt;

use super::LineCode;

/// Unique numeric code of a stop.
///
/// Stop codes come from the network data files and identify a stop for
/// the lifetime of the process. The newtype keeps them from being mixed
/// up with other integers (durations, indices) in search code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u32);

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transit stop.
///
/// Besides its own attributes, a stop carries two back-references that are
/// wired up while the network is assembled: the lines that serve it (in
/// registration order, which later drives line-ownership resolution) and
/// the stops reachable from it on foot. Both are key lists, not owning
/// references.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    id: StopId,
    address: String,
    latitude: f64,
    longitude: f64,
    lines: Vec<LineCode>,
    walking_neighbors: Vec<StopId>,
}

impl Stop {
    /// Create a stop with no registered lines or walking neighbors.
    pub fn new(id: StopId, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            address: address.into(),
            latitude,
            longitude,
            lines: Vec::new(),
            walking_neighbors: Vec::new(),
        }
    }

    /// Returns the stop code.
    pub fn id(&self) -> StopId {
        self.id
    }

    /// Returns the street address label.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Lines serving this stop, in registration order.
    pub fn lines(&self) -> &[LineCode] {
        &self.lines
    }

    /// Stops reachable on foot directly from this stop.
    pub fn walking_neighbors(&self) -> &[StopId] {
        &self.walking_neighbors
    }

    /// Register a line as serving this stop.
    ///
    /// Called by the network arena while lines are added; registration
    /// order is preserved.
    pub(crate) fn register_line(&mut self, code: LineCode) {
        self.lines.push(code);
    }

    /// Register a stop as reachable on foot from this stop.
    pub(crate) fn register_walking_neighbor(&mut self, id: StopId) {
        self.walking_neighbors.push(id);
    }
}
