//! Request and response DTOs for the planning engine.
//!
//! These are the types the transport layer exchanges with the engine. The
//! response is the minimal contract: per-group ordered visits plus the final
//! unvisitable list. Internal annotations (placement reasons, proximity,
//! centroids, composite score) stay on the engine's `PlanOutcome`.

use serde::{Deserialize, Serialize};

use crate::engine::PlanOutcome;
use crate::models::{Location, TimeOfDay};
use crate::scheduler::UNVISITABLE_REASON;

fn default_daily_start() -> TimeOfDay {
    TimeOfDay::from_hours(8.0)
}

fn default_daily_end() -> TimeOfDay {
    TimeOfDay::from_hours(20.0)
}

/// A planning request: locations, target group count and the daily window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub points: Vec<Location>,
    pub num_groups: usize,
    #[serde(default = "default_daily_start")]
    pub daily_start_time: TimeOfDay,
    #[serde(default = "default_daily_end")]
    pub daily_end_time: TimeOfDay,
}

/// One visit in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledVisit {
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Ordered schedule of one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupPlan {
    pub group: usize,
    pub schedule: Vec<ScheduledVisit>,
}

/// A location that no group could fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnvisitableEntry {
    pub name: String,
    pub reason: String,
}

/// Minimal planning response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub groups: Vec<GroupPlan>,
    pub unvisitable: Vec<UnvisitableEntry>,
}

impl From<&PlanOutcome> for PlanResponse {
    fn from(outcome: &PlanOutcome) -> Self {
        let groups = outcome
            .groups
            .iter()
            .enumerate()
            .map(|(group, result)| GroupPlan {
                group,
                schedule: result
                    .schedule
                    .iter()
                    .map(|entry| ScheduledVisit {
                        name: entry.name.clone(),
                        start_time: entry.start_time,
                        end_time: entry.end_time,
                    })
                    .collect(),
            })
            .collect();

        let unvisitable = outcome
            .unvisitable
            .iter()
            .map(|location| UnvisitableEntry {
                name: location.name.clone(),
                reason: UNVISITABLE_REASON.to_string(),
            })
            .collect();

        Self { groups, unvisitable }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_daily_window_defaults() {
        let request: PlanRequest = serde_json::from_str(
            r#"{
                "points": [
                    {"name": "a", "coordinates": [41.39, 2.16], "duration": 1.0}
                ],
                "num_groups": 1
            }"#,
        )
        .unwrap();

        assert_eq!(request.daily_start_time.value(), 8.0);
        assert_eq!(request.daily_end_time.value(), 20.0);
    }

    #[test]
    fn test_response_serialization_shape() {
        let response = PlanResponse {
            groups: vec![GroupPlan {
                group: 0,
                schedule: vec![ScheduledVisit {
                    name: "a".to_string(),
                    start_time: TimeOfDay::from_hours(8.0),
                    end_time: TimeOfDay::from_hours(9.5),
                }],
            }],
            unvisitable: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["groups"][0]["schedule"][0]["start_time"], "08:00");
        assert_eq!(json["groups"][0]["schedule"][0]["end_time"], "09:30");
    }
}
