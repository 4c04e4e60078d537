//! Segment records: the directed edges of the network.

use std::collections::HashMap;
use std::fmt;

use super::StopId;

/// How a segment is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    /// Riding a line between two consecutive stops.
    Ride,
    /// Walking between two nearby stops.
    Walk,
}

impl SegmentKind {
    /// Numeric code used by the data files (1 = ride, 2 = walk).
    pub fn code(self) -> u8 {
        match self {
            SegmentKind::Ride => 1,
            SegmentKind::Walk => 2,
        }
    }

    /// Parse the numeric file code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SegmentKind::Ride),
            2 => Some(SegmentKind::Walk),
            _ => None,
        }
    }
}

/// Unique key of a segment: (start, end, kind).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentKey {
    pub from: StopId,
    pub to: StopId,
    pub kind: SegmentKind,
}

impl SegmentKey {
    /// Key of a ride segment between two stops.
    pub fn ride(from: StopId, to: StopId) -> Self {
        Self {
            from,
            to,
            kind: SegmentKind::Ride,
        }
    }

    /// Key of a walk segment between two stops.
    pub fn walk(from: StopId, to: StopId) -> Self {
        Self {
            from,
            to,
            kind: SegmentKind::Walk,
        }
    }
}

impl fmt::Debug for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentKey({self})")
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.from, self.to, self.kind.code())
    }
}

/// A directed edge between two stops with a whole-minute travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: StopId,
    pub to: StopId,
    pub minutes: i64,
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a segment.
    pub fn new(from: StopId, to: StopId, minutes: i64, kind: SegmentKind) -> Self {
        Self {
            from,
            to,
            minutes,
            kind,
        }
    }

    /// Returns this segment's map key.
    pub fn key(&self) -> SegmentKey {
        SegmentKey {
            from: self.from,
            to: self.to,
            kind: self.kind,
        }
    }
}

/// The segment collection handed to the planning engine.
pub type SegmentMap = HashMap<SegmentKey, Segment>;
