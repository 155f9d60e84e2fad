//! Condition — the recognized shape of a trigger predicate.
//!
//! Every predicate classifies into exactly one of these shapes. Shapes the
//! classifier does not recognize map to [`Condition::Unrecognized`], which
//! is a regular value, not an error.

use serde::{Deserialize, Serialize};

use crate::characteristic::Characteristic;
use crate::predicate::{SUNRISE_KEY_PATH, SUNSET_KEY_PATH};
use crate::time::TimeOfDay;
use crate::value::Value;

/// The recognized shape of a trigger predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Requires a characteristic to hold a given value.
    Characteristic {
        characteristic: Characteristic,
        value: Value,
    },
    /// Relative to a solar event, e.g. after sunrise.
    Solar { order: TimeOrder, event: SolarEvent },
    /// Relative to an exact wall-clock time.
    ExactTime { order: TimeOrder, time: TimeOfDay },
    /// No recognized shape matched.
    Unrecognized,
}

/// Temporal ordering against a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOrder {
    Before,
    After,
    At,
}

/// A solar event the home tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// The key-path this event is referenced by in predicates.
    #[must_use]
    pub fn key_path(self) -> &'static str {
        match self {
            Self::Sunrise => SUNRISE_KEY_PATH,
            Self::Sunset => SUNSET_KEY_PATH,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Characteristic {
                characteristic,
                value,
            } => {
                write!(f, "When {characteristic} becomes {value}")
            }
            Self::Solar { order, event } => write!(f, "{order} {event}"),
            Self::ExactTime { order, time } => write!(f, "{order} {time}"),
            Self::Unrecognized => f.write_str("Unrecognized condition"),
        }
    }
}

impl std::fmt::Display for TimeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Before => "Before",
            Self::After => "After",
            Self::At => "At",
        };
        f.write_str(word)
    }
}

impl std::fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_characteristic_condition() {
        let c = Condition::Characteristic {
            characteristic: Characteristic::new("Garage Door"),
            value: Value::from("Open"),
        };
        assert_eq!(c.to_string(), "When Garage Door becomes Open");
    }

    #[test]
    fn should_display_solar_condition() {
        let c = Condition::Solar {
            order: TimeOrder::After,
            event: SolarEvent::Sunrise,
        };
        assert_eq!(c.to_string(), "After sunrise");

        let c = Condition::Solar {
            order: TimeOrder::Before,
            event: SolarEvent::Sunset,
        };
        assert_eq!(c.to_string(), "Before sunset");
    }

    #[test]
    fn should_display_exact_time_condition() {
        let c = Condition::ExactTime {
            order: TimeOrder::At,
            time: TimeOfDay::new(12, 0).unwrap(),
        };
        assert_eq!(c.to_string(), "At 12:00");

        let c = Condition::ExactTime {
            order: TimeOrder::Before,
            time: TimeOfDay::new(6, 30).unwrap(),
        };
        assert_eq!(c.to_string(), "Before 06:30");
    }

    #[test]
    fn should_display_unrecognized_fallback() {
        assert_eq!(Condition::Unrecognized.to_string(), "Unrecognized condition");
    }

    #[test]
    fn should_expose_solar_event_key_paths() {
        assert_eq!(SolarEvent::Sunrise.key_path(), "sunrise");
        assert_eq!(SolarEvent::Sunset.key_path(), "sunset");
    }

    #[test]
    fn should_roundtrip_conditions_through_serde_json() {
        let conditions = vec![
            Condition::Characteristic {
                characteristic: Characteristic::new("Garage Door"),
                value: Value::from("Open"),
            },
            Condition::Solar {
                order: TimeOrder::After,
                event: SolarEvent::Sunrise,
            },
            Condition::ExactTime {
                order: TimeOrder::Before,
                time: TimeOfDay::new(22, 15).unwrap(),
            },
            Condition::Unrecognized,
        ];

        for condition in &conditions {
            let json = serde_json::to_string(condition).unwrap();
            let parsed: Condition = serde_json::from_str(&json).unwrap();
            assert_eq!(&parsed, condition);
        }
    }

    #[test]
    fn should_deserialize_solar_from_tagged_json() {
        let json = serde_json::json!({
            "type": "solar",
            "order": "before",
            "event": "sunset"
        });
        let c: Condition = serde_json::from_value(json).unwrap();
        assert_eq!(
            c,
            Condition::Solar {
                order: TimeOrder::Before,
                event: SolarEvent::Sunset,
            }
        );
    }
}
