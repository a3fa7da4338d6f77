//! Wall-clock time of day with whole-minute resolution.

use wallclock_core::{DomainError, DomainResult, ValueObject};

pub const HOURS_PER_DAY: i32 = 24;
pub const MINUTES_PER_HOUR: i32 = 60;

/// Immutable time of day, independent of date and time zone.
///
/// Fields are private and there are no setters, so a `Time` always holds an
/// hour in `[0, 24)` and a minute in `[0, 60)`.
///
/// ```
/// use wallclock_time::Time;
///
/// let t = Time::new(9, 5).unwrap();
/// assert_eq!(t.hour(), 9);
/// assert_eq!(t.minute(), 5);
/// assert_eq!(t.to_string(), "9:5");
/// ```
///
/// Fields cannot be written from outside the crate:
///
/// ```compile_fail
/// let mut t = wallclock_time::Time::new(15, 50).unwrap();
/// t.hour = 3;
/// ```
///
/// ```compile_fail
/// let t = wallclock_time::Time::new(15, 50).unwrap();
/// let _ = t.minute;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    hour: i32,
    minute: i32,
}

impl Time {
    /// Validates and builds a time of day.
    ///
    /// The hour is checked before the minute, so when both are out of range
    /// the error names the hour.
    pub fn new(hour: i32, minute: i32) -> DomainResult<Self> {
        if !(0..HOURS_PER_DAY).contains(&hour) {
            return Err(DomainError::invalid_argument(format!("Hour: {hour}")));
        }
        if !(0..MINUTES_PER_HOUR).contains(&minute) {
            return Err(DomainError::invalid_argument(format!("Min: {minute}")));
        }

        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }
}

impl ValueObject for Time {}

impl TryFrom<(i32, i32)> for Time {
    type Error = DomainError;

    fn try_from((hour, minute): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(hour, minute)
    }
}

/// Unpadded `hour:minute`, e.g. `9:5`.
impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}
