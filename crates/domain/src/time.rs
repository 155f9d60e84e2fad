//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// UTC timestamp used for `last_fired`, audit times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A wall-clock time of day, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay")]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Build a time of day, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when `hour` is not below 24
    /// or `minute` is not below 60.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= 60 {
            return Err(ValidationError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }
}

/// Wire shape of [`TimeOfDay`] before bounds are checked.
#[derive(Deserialize)]
struct RawTimeOfDay {
    hour: u8,
    minute: u8,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
