use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Largest number of points a single position may award.
pub const MAX_POINTS: i64 = 1_000_000;

/// Points awarded for each finishing position of an event.
///
/// Schedules are stored as JSON objects keyed by position, e.g. `{"1": 5, "2": 3, "3": 1}`.
/// Positions missing from the schedule score zero points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsSchedule {
    points: BTreeMap<i64, i64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("points schedule is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("points schedule must be a JSON object of position to points")]
    NotAnObject,

    #[error("position '{0}' must be an integer of at least 1")]
    InvalidPosition(String),

    #[error("points for position {0} must be an integer between 0 and 1000000")]
    InvalidPoints(i64),
}

impl Default for PointsSchedule {
    fn default() -> Self {
        Self {
            points: BTreeMap::from([(1, 5), (2, 3), (3, 1)]),
        }
    }
}

impl PointsSchedule {
    /// Strictly parses a JSON schedule.
    ///
    /// Values may be JSON integers, whole-valued floats or strings holding
    /// integers, each within `0..=MAX_POINTS`.
    pub fn parse(raw: &str) -> Result<Self, ScheduleError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ScheduleError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, ScheduleError> {
        let object = value.as_object().ok_or(ScheduleError::NotAnObject)?;

        let mut points = BTreeMap::new();
        for (key, value) in object {
            let position = key
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| ScheduleError::InvalidPosition(key.clone()))?;

            let awarded = match value {
                Value::Number(n) => n.as_i64().or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && (0.0..=MAX_POINTS as f64).contains(f))
                        .map(|f| f as i64)
                }),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            }
            .filter(|p| (0..=MAX_POINTS).contains(p))
            .ok_or(ScheduleError::InvalidPoints(position))?;

            points.insert(position, awarded);
        }

        Ok(Self { points })
    }

    /// Resolves the schedule stored on an event, falling back to the default
    /// when it is missing, blank or malformed.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match Self::parse(raw) {
            Ok(schedule) => schedule,
            Err(e) => {
                tracing::debug!("Falling back to default points schedule: {}", e);
                Self::default()
            }
        }
    }

    pub fn points_for(&self, position: i64) -> i64 {
        self.points.get(&position).copied().unwrap_or(0)
    }

    /// Canonical JSON text, as written to the `events.points_json` column.
    pub fn to_json(&self) -> String {
        let object: serde_json::Map<String, Value> = self
            .points
            .iter()
            .map(|(position, points)| (position.to_string(), Value::from(*points)))
            .collect();
        Value::Object(object).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = PointsSchedule::default();
        assert_eq!(schedule.points_for(1), 5);
        assert_eq!(schedule.points_for(2), 3);
        assert_eq!(schedule.points_for(3), 1);
        assert_eq!(schedule.points_for(4), 0);
    }

    #[test]
    fn test_parse_custom_schedule() {
        let schedule = PointsSchedule::parse(r#"{"1":10,"2":7,"3":5,"4":3,"5":1}"#).unwrap();
        assert_eq!(schedule.points_for(1), 10);
        assert_eq!(schedule.points_for(5), 1);
        assert_eq!(schedule.points_for(6), 0);
    }

    #[test]
    fn test_parse_accepts_string_values() {
        let schedule = PointsSchedule::parse(r#"{"1":"8", " 2 ":"4"}"#).unwrap();
        assert_eq!(schedule.points_for(1), 8);
        assert_eq!(schedule.points_for(2), 4);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            PointsSchedule::parse("not json"),
            Err(ScheduleError::InvalidJson(_))
        ));
        assert_eq!(
            PointsSchedule::parse("[1, 2, 3]"),
            Err(ScheduleError::NotAnObject)
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"first": 5}"#),
            Err(ScheduleError::InvalidPosition("first".to_string()))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"0": 5}"#),
            Err(ScheduleError::InvalidPosition("0".to_string()))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"1": -5}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"1": 2.5}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
    }

    #[test]
    fn test_parse_accepts_whole_floats() {
        let schedule = PointsSchedule::parse(r#"{"1": 5.0, "2": 3.0}"#).unwrap();
        assert_eq!(schedule.points_for(1), 5);
        assert_eq!(schedule.points_for(2), 3);
    }

    #[test]
    fn test_parse_bounds_points() {
        let schedule = PointsSchedule::parse(r#"{"1": 1000000, "2": "1000000"}"#).unwrap();
        assert_eq!(schedule.points_for(1), MAX_POINTS);
        assert_eq!(schedule.points_for(2), MAX_POINTS);

        assert_eq!(
            PointsSchedule::parse(r#"{"1": 1000001}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"1": "1000001"}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"1": 9223372036854775807}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
        assert_eq!(
            PointsSchedule::parse(r#"{"1": 1e300}"#),
            Err(ScheduleError::InvalidPoints(1))
        );
    }

    #[test]
    fn test_from_stored_falls_back_to_default() {
        let default = PointsSchedule::default();
        assert_eq!(PointsSchedule::from_stored(None), default);
        assert_eq!(PointsSchedule::from_stored(Some("   ")), default);
        assert_eq!(PointsSchedule::from_stored(Some("{broken")), default);
        assert_eq!(PointsSchedule::from_stored(Some("null")), default);
        assert_eq!(PointsSchedule::from_stored(Some(r#"{"1": "x"}"#)), default);
    }

    #[test]
    fn test_empty_object_awards_nothing() {
        let schedule = PointsSchedule::from_stored(Some("{}"));
        assert_eq!(schedule.points_for(1), 0);
    }

    #[test]
    fn test_to_json_is_canonical() {
        let schedule = PointsSchedule::parse(r#"{"3": 1, "1": 5, "2": "3"}"#).unwrap();
        assert_eq!(schedule.to_json(), r#"{"1":5,"2":3,"3":1}"#);
        assert_eq!(PointsSchedule::parse(&schedule.to_json()).unwrap(), schedule);
    }
}
