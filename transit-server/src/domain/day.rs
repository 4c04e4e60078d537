//! Day-of-week type for weekly schedules.

use std::fmt;

/// Error returned when a day-of-week number is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("day of week must be 1-7, got {0}")]
pub struct InvalidWeekday(pub u8);

/// A day of the week, numbered 1 (Monday) through 7 (Sunday).
///
/// Schedules are keyed by this type, so an out-of-range day cannot reach
/// the planning engine: validation happens once, at the boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Weekday = Weekday(1);
    pub const TUESDAY: Weekday = Weekday(2);
    pub const WEDNESDAY: Weekday = Weekday(3);
    pub const THURSDAY: Weekday = Weekday(4);
    pub const FRIDAY: Weekday = Weekday(5);
    pub const SATURDAY: Weekday = Weekday(6);
    pub const SUNDAY: Weekday = Weekday(7);

    /// All days, Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::MONDAY,
        Weekday::TUESDAY,
        Weekday::WEDNESDAY,
        Weekday::THURSDAY,
        Weekday::FRIDAY,
        Weekday::SATURDAY,
        Weekday::SUNDAY,
    ];

    /// Validate a 1-7 day number.
    pub fn new(number: u8) -> Result<Self, InvalidWeekday> {
        if (1..=7).contains(&number) {
            Ok(Weekday(number))
        } else {
            Err(InvalidWeekday(number))
        }
    }

    /// Returns the 1-7 day number.
    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Weekday {
    type Error = InvalidWeekday;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Weekday::new(number)
    }
}

impl fmt::Debug for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weekday({})", self.0)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
