//! Input record types consumed by the analytics engine.
//!
//! The engine never mutates these: callers (operator input, seeding, CSV
//! import — all outside this crate) own the records, the engine reads them
//! and returns fresh value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a discrete asset event.
///
/// Only [`EventType::Failure`] participates in TBF/Weibull derivation;
/// all types participate in downtime-split and maintenance-interval metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Unplanned functional failure.
    Failure,
    /// Planned maintenance activity.
    Maintenance,
    /// Planned inspection.
    Inspection,
}

impl EventType {
    /// True for planned (maintenance/inspection) events.
    pub fn is_planned(self) -> bool {
        !matches!(self, EventType::Failure)
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    /// Case-insensitive parse; boundary code normalizes free-text input here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "failure" => Ok(EventType::Failure),
            "maintenance" => Ok(EventType::Maintenance),
            "inspection" => Ok(EventType::Inspection),
            other => Err(format!("unknown event type: {:?}", other)),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::Failure => "failure",
            EventType::Maintenance => "maintenance",
            EventType::Inspection => "inspection",
        };
        f.write_str(s)
    }
}

/// One contiguous operating interval for an asset.
///
/// Exposure logs for one asset are assumed non-overlapping; the engine sorts
/// them defensively by `start_time` before deriving intervals. Callers are
/// responsible for `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureLog {
    /// Asset this interval belongs to.
    pub asset_id: i64,
    /// Interval start.
    pub start_time: DateTime<Utc>,
    /// Interval end.
    pub end_time: DateTime<Utc>,
    /// Logged operating hours; 0.0 means "derive from the wall clock".
    #[serde(default)]
    pub hours: f64,
    /// Production cycles completed during the interval.
    #[serde(default)]
    pub cycles: f64,
}

impl ExposureLog {
    /// Wall-clock span of the interval in seconds.
    pub fn wall_seconds(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1_000.0
    }

    /// Operating hours, deriving from the wall clock when `hours` is unset.
    pub fn effective_hours(&self) -> f64 {
        if self.hours > 0.0 {
            self.hours
        } else {
            self.wall_seconds() / 3_600.0
        }
    }
}

/// One discrete occurrence (failure, maintenance, inspection) at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Asset the event belongs to.
    pub asset_id: i64,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Kind of event.
    pub event_type: EventType,
    /// Downtime caused by the event, in minutes.
    #[serde(default)]
    pub downtime_minutes: f64,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Event {
    /// True when this event counts toward TBF/Weibull derivation.
    pub fn is_failure(&self) -> bool {
        self.event_type == EventType::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_parse_is_case_insensitive() {
        assert_eq!("FAILURE".parse::<EventType>().unwrap(), EventType::Failure);
        assert_eq!(
            " Maintenance ".parse::<EventType>().unwrap(),
            EventType::Maintenance
        );
        assert_eq!(
            "inspection".parse::<EventType>().unwrap(),
            EventType::Inspection
        );
        assert!("overhaul".parse::<EventType>().is_err());
    }

    #[test]
    fn effective_hours_derives_from_wall_clock() {
        let start = Utc::now();
        let log = ExposureLog {
            asset_id: 1,
            start_time: start,
            end_time: start + chrono::Duration::hours(8),
            hours: 0.0,
            cycles: 0.0,
        };
        assert!((log.effective_hours() - 8.0).abs() < 1e-9);

        let explicit = ExposureLog { hours: 7.5, ..log };
        assert!((explicit.effective_hours() - 7.5).abs() < 1e-12);
    }
}
