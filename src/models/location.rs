use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

fn default_opening() -> TimeOfDay {
    TimeOfDay::from_hours(8.0)
}

fn default_closing() -> TimeOfDay {
    TimeOfDay::from_hours(20.0)
}

/// A place to visit. Immutable input to the planning pipeline.
///
/// `coordinates` is a latitude/longitude pair in degrees. Opening and closing
/// hours default to 08:00 and 20:00 when omitted from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier of the location.
    pub name: String,
    /// Latitude/longitude pair in degrees.
    pub coordinates: [f64; 2],
    #[serde(default = "default_opening")]
    pub opening_hours: TimeOfDay,
    #[serde(default = "default_closing")]
    pub closing_hours: TimeOfDay,
    /// Visit duration in hours, fractional values allowed.
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "name": "Museum",
            "coordinates": [41.39, 2.16],
            "duration": 1.5
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.name, "Museum");
        assert_eq!(location.opening_hours.value(), 8.0);
        assert_eq!(location.closing_hours.value(), 20.0);
        assert_eq!(location.duration, 1.5);
    }

    #[test]
    fn test_deserialize_explicit_hours() {
        let json = r#"{
            "name": "Market",
            "coordinates": [41.38, 2.17],
            "opening_hours": "06:30",
            "closing_hours": "14:00",
            "duration": 1.0
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        assert!((location.opening_hours.value() - 6.5).abs() < 1e-9);
        assert_eq!(location.closing_hours.value(), 14.0);
    }
}
