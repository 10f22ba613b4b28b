// a single SRT point in time, e.g. `01:02:03,456`

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Result, SrtError};

const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

// two-or-more digit hours, two digit minutes and seconds, any number of millisecond digits
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d+)$").unwrap());

/// A non-negative point in time with millisecond precision.
///
/// Stored as a flat millisecond count so the hour/minute/second/millisecond
/// view can never drift out of range. Hours are unbounded; SRT files longer
/// than a day are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    total_millis: u64,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp { total_millis: 0 };

    /// Builds a timestamp from components, carrying oversized components into
    /// the next unit (`00:00:75,000` becomes `00:01:15,000`).
    pub fn new(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        let total_millis = hours
            .saturating_mul(MILLIS_PER_HOUR)
            .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE))
            .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND))
            .saturating_add(millis);
        Timestamp { total_millis }
    }

    /// Negative totals clamp to zero, SRT cannot express them.
    pub fn from_millis(total_millis: i64) -> Self {
        Timestamp {
            total_millis: u64::try_from(total_millis).unwrap_or(0),
        }
    }

    pub fn as_millis(&self) -> u64 {
        self.total_millis
    }

    pub fn hours(&self) -> u64 {
        self.total_millis / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> u64 {
        self.total_millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> u64 {
        self.total_millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND
    }

    pub fn millis(&self) -> u64 {
        self.total_millis % MILLIS_PER_SECOND
    }

    /// Returns a new timestamp moved by `delta_millis`, floored at zero.
    pub fn shift(&self, delta_millis: i64) -> Self {
        Timestamp {
            total_millis: self.total_millis.saturating_add_signed(delta_millis),
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || SrtError::MalformedTimestamp {
            text: text.to_string(),
        };

        let captures = TIMESTAMP_REGEX.captures(text).ok_or_else(malformed)?;
        let mut fields = [0u64; 4];
        for (field, capture) in fields.iter_mut().zip(captures.iter().skip(1)) {
            // only digits reach here, so the sole failure is overflow
            *field = capture
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse()
                .map_err(|_| malformed())?;
        }
        let [hours, minutes, seconds, millis] = fields;

        let total_millis = hours
            .checked_mul(MILLIS_PER_HOUR)
            .and_then(|t| t.checked_add(minutes * MILLIS_PER_MINUTE))
            .and_then(|t| t.checked_add(seconds * MILLIS_PER_SECOND))
            .and_then(|t| t.checked_add(millis))
            .ok_or_else(malformed)?;

        Ok(Timestamp { total_millis })
    }
}

impl FromStr for Timestamp {
    type Err = SrtError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}

// milliseconds are written without padding, so 74ms renders as `,74`
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components() {
        let ts = Timestamp::parse("01:02:03,456").unwrap();
        assert_eq!(ts.hours(), 1);
        assert_eq!(ts.minutes(), 2);
        assert_eq!(ts.seconds(), 3);
        assert_eq!(ts.millis(), 456);
        assert_eq!(ts.as_millis(), 3_723_456);
    }

    #[test]
    fn parses_long_hours_and_short_millis() {
        let ts: Timestamp = "100:00:00,5".parse().unwrap();
        assert_eq!(ts.as_millis(), 100 * 3_600_000 + 5);
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "1:02:03,456",
            "01:2:03,456",
            "01:02:03.456",
            "01:02:03,",
            "01:02:03,45a",
            " 01:02:03,456",
            "",
        ] {
            assert!(
                matches!(
                    Timestamp::parse(text),
                    Err(SrtError::MalformedTimestamp { .. })
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflowing_hours() {
        let err = Timestamp::parse("99999999999999999999:00:00,000").unwrap_err();
        assert!(matches!(err, SrtError::MalformedTimestamp { .. }));
    }

    #[test]
    fn formats_canonically() {
        assert_eq!(Timestamp::new(0, 0, 1, 0).to_string(), "00:00:01,0");
        assert_eq!(Timestamp::new(0, 0, 4, 74).to_string(), "00:00:04,74");
        assert_eq!(Timestamp::new(0, 0, 6, 574).to_string(), "00:00:06,574");
        assert_eq!(Timestamp::new(123, 4, 5, 678).to_string(), "123:04:05,678");
    }

    #[test]
    fn new_carries_into_larger_units() {
        assert_eq!(Timestamp::new(0, 0, 75, 0), Timestamp::new(0, 1, 15, 0));
        assert_eq!(Timestamp::new(0, 59, 59, 1_000), Timestamp::new(1, 0, 0, 0));
    }

    #[test]
    fn from_millis_decomposes_and_clamps() {
        let ts = Timestamp::from_millis(3_723_456);
        assert_eq!(
            (ts.hours(), ts.minutes(), ts.seconds(), ts.millis()),
            (1, 2, 3, 456)
        );
        assert_eq!(Timestamp::from_millis(-1), Timestamp::ZERO);
        assert_eq!(Timestamp::from_millis(i64::MIN), Timestamp::ZERO);
    }

    #[test]
    fn shift_rolls_hours_over_without_wrapping() {
        let ts = Timestamp::parse("23:59:59,900").unwrap().shift(200);
        assert_eq!(ts, Timestamp::new(24, 0, 0, 100));
        assert_eq!(ts.to_string(), "24:00:00,100");
    }

    #[test]
    fn shift_clamps_at_zero() {
        assert_eq!(Timestamp::ZERO.shift(-1), Timestamp::ZERO);
        assert_eq!(Timestamp::ZERO.shift(i64::MIN), Timestamp::ZERO);
        assert_eq!(Timestamp::new(0, 0, 1, 0).shift(-1_500), Timestamp::ZERO);
    }

    #[test]
    fn shift_by_zero_is_identity_and_does_not_mutate() {
        let ts = Timestamp::new(0, 1, 2, 3);
        let shifted = ts.shift(0);
        assert_eq!(shifted, ts);
        let _ = ts.shift(10_000);
        assert_eq!(ts.as_millis(), 62_003);
    }
}
