// this file contains the caller-facing description of a time shift

/// Whether an offset moves subtitles later or earlier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

/// An unsigned hours/minutes/seconds/milliseconds amount plus a direction.
///
/// Front-ends collect these four fields from the user; the core only ever
/// sees the signed millisecond total from [`Offset::as_millis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
    pub direction: Direction,
}

impl Offset {
    pub fn new(hours: u64, minutes: u64, seconds: u64, millis: u64, direction: Direction) -> Self {
        Offset {
            hours,
            minutes,
            seconds,
            millis,
            direction,
        }
    }

    /// Signed delta in milliseconds, saturating at the `i64` range
    pub fn as_millis(&self) -> i64 {
        let magnitude = self
            .hours
            .saturating_mul(3_600_000)
            .saturating_add(self.minutes.saturating_mul(60_000))
            .saturating_add(self.seconds.saturating_mul(1_000))
            .saturating_add(self.millis);
        let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);

        match self.direction {
            Direction::Add => magnitude,
            Direction::Subtract => -magnitude,
        }
    }
}
