use serde::{Deserialize, Serialize};

/// Time of day expressed as fractional hours since midnight.
///
/// Values are not wrapped at 24:00: adding a visit duration to a late start
/// may produce a value past midnight, which is how the scheduler detects that
/// a visit overruns the day. Serialized as an "HH:MM" string.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Create from fractional hours since midnight.
    pub fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Parse an "HH:MM" string.
    pub fn parse(s: &str) -> Result<Self, String> {
        use chrono::Timelike;

        let time = chrono::NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|e| format!("invalid time of day '{}': {}", s, e))?;
        Ok(Self(time.hour() as f64 + time.minute() as f64 / 60.0))
    }

    /// Raw value as fractional hours.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Time shifted forward by the given number of hours.
    pub fn add_hours(&self, hours: f64) -> Self {
        Self(self.0 + hours)
    }

    /// Hours elapsed since `earlier`; negative if `earlier` is in the future.
    pub fn hours_since(&self, earlier: TimeOfDay) -> f64 {
        self.0 - earlier.0
    }

    /// The later of two times.
    pub fn max(self, other: TimeOfDay) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// The earlier of two times.
    pub fn min(self, other: TimeOfDay) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total_minutes = (self.0 * 60.0).round() as i64;
        write!(f, "{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// The daily window all visits must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DailyWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfDay;

    #[test]
    fn test_parse_valid() {
        let t = TimeOfDay::parse("08:30").unwrap();
        assert!((t.value() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_midnight() {
        let t = TimeOfDay::parse("00:00").unwrap();
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("8am").is_err());
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["00:00", "08:05", "12:30", "23:59"] {
            assert_eq!(TimeOfDay::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_add_hours_no_wrap() {
        let t = TimeOfDay::parse("23:00").unwrap().add_hours(2.0);
        assert!((t.value() - 25.0).abs() < 1e-9);
        let end = TimeOfDay::parse("20:00").unwrap();
        assert!(t > end);
    }

    #[test]
    fn test_hours_since() {
        let start = TimeOfDay::parse("09:00").unwrap();
        let end = TimeOfDay::parse("11:30").unwrap();
        assert!((end.hours_since(start) - 2.5).abs() < 1e-9);
        assert!(start.hours_since(end) < 0.0);
    }

    #[test]
    fn test_ordering() {
        let a = TimeOfDay::parse("08:00").unwrap();
        let b = TimeOfDay::parse("09:15").unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(a.min(b), a);
    }
}
