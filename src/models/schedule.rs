use serde::{Deserialize, Serialize};

use super::location::Location;
use super::time::TimeOfDay;

/// One placed visit inside a group schedule.
///
/// Within a group the entries are kept sorted ascending by start time and are
/// pairwise non-overlapping. `reason` and `proximity_to_next` are internal
/// annotations; the minimal response DTO does not expose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub coordinates: [f64; 2],
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Human-readable note on why this location was picked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Distance to the next entry in the schedule, e.g. "3.21 km".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_to_next: Option<String>,
}

impl ScheduleEntry {
    /// Build an entry for a location placed at the given times.
    pub fn new(location: &Location, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            name: location.name.clone(),
            coordinates: location.coordinates,
            start_time,
            end_time,
            reason: None,
            proximity_to_next: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Schedule of one group plus the locations that could not be placed in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupResult {
    pub schedule: Vec<ScheduleEntry>,
    pub unvisitable: Vec<Location>,
}

impl GroupResult {
    /// Insert an entry keeping the schedule sorted ascending by start time.
    pub fn insert_sorted(&mut self, entry: ScheduleEntry) {
        let index = self
            .schedule
            .partition_point(|e| e.start_time.value() <= entry.start_time.value());
        self.schedule.insert(index, entry);
    }
}
