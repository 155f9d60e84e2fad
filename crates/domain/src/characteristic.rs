//! Characteristic — a reference to an observable/controllable aspect of a
//! device (e.g., a garage door's target state, a thermostat's setpoint).

use serde::{Deserialize, Serialize};

use crate::id::CharacteristicId;

/// A named reference to a device characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: CharacteristicId,
    pub name: String,
}

impl Characteristic {
    /// Create a characteristic reference with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacteristicId::new(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}
