//! Trigger — a named rule holding the conditions under which it fires.
//!
//! A trigger owns a list of [`Predicate`]s. Each predicate classifies into
//! a [`Condition`](crate::condition::Condition) shape independently; the
//! trigger itself stays agnostic of what the predicates mean.

use serde::{Deserialize, Serialize};

use crate::error::{RuleHubError, ValidationError};
use crate::id::TriggerId;
use crate::predicate::Predicate;
use crate::time::Timestamp;

/// A rule that fires when its conditions hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: TriggerId,
    pub name: String,
    pub enabled: bool,
    pub conditions: Vec<Predicate>,
    pub last_fired: Option<Timestamp>,
}

impl Trigger {
    /// Create a builder for constructing a [`Trigger`].
    #[must_use]
    pub fn builder() -> TriggerBuilder {
        TriggerBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::Validation`] when `name` is empty
    /// ([`ValidationError::EmptyName`]).
    pub fn validate(&self) -> Result<(), RuleHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Human-readable description of each condition, in stored order.
    #[must_use]
    pub fn describe_conditions(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|predicate| predicate.classify().to_string())
            .collect()
    }
}

/// Step-by-step builder for [`Trigger`].
#[derive(Debug, Default)]
pub struct TriggerBuilder {
    id: Option<TriggerId>,
    name: Option<String>,
    enabled: Option<bool>,
    conditions: Vec<Predicate>,
    last_fired: Option<Timestamp>,
}

impl TriggerBuilder {
    #[must_use]
    pub fn id(mut self, id: TriggerId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Predicate) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn last_fired(mut self, ts: Timestamp) -> Self {
        self.last_fired = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Trigger`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::Validation`] if required fields are missing
    /// or empty.
    pub fn build(self) -> Result<Trigger, RuleHubError> {
        let trigger = Trigger {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            conditions: self.conditions,
            last_fired: self.last_fired,
        };
        trigger.validate()?;
        Ok(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::Characteristic;
    use crate::condition::SolarEvent;
    use crate::time::TimeOfDay;
    use crate::value::Value;

    fn valid_trigger() -> Trigger {
        Trigger::builder()
            .name("Open garage after sunrise")
            .condition(Predicate::after_solar(SolarEvent::Sunrise))
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_trigger_when_required_fields_provided() {
        let trigger = valid_trigger();
        assert_eq!(trigger.name, "Open garage after sunrise");
        assert!(trigger.enabled);
        assert_eq!(trigger.conditions.len(), 1);
        assert!(trigger.last_fired.is_none());
    }

    #[test]
    fn should_default_to_enabled_when_not_specified() {
        let trigger = valid_trigger();
        assert!(trigger.enabled);
    }

    #[test]
    fn should_build_disabled_trigger_when_enabled_is_false() {
        let trigger = Trigger::builder()
            .name("Disabled rule")
            .enabled(false)
            .build()
            .unwrap();
        assert!(!trigger.enabled);
    }

    #[test]
    fn should_build_trigger_without_conditions() {
        let trigger = Trigger::builder().name("Manual rule").build().unwrap();
        assert!(trigger.conditions.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Trigger::builder()
            .condition(Predicate::after_solar(SolarEvent::Sunset))
            .build();
        assert!(matches!(
            result,
            Err(RuleHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_accumulate_multiple_conditions() {
        let trigger = Trigger::builder()
            .name("Evening rule")
            .condition(Predicate::after_solar(SolarEvent::Sunset))
            .condition(Predicate::before_time(TimeOfDay::new(23, 0).unwrap()))
            .build()
            .unwrap();
        assert_eq!(trigger.conditions.len(), 2);
    }

    #[test]
    fn should_set_last_fired_via_builder() {
        let ts = crate::time::now();
        let trigger = Trigger::builder()
            .name("With timestamp")
            .last_fired(ts)
            .build()
            .unwrap();
        assert_eq!(trigger.last_fired, Some(ts));
    }

    #[test]
    fn should_set_custom_id_via_builder() {
        let id = TriggerId::new();
        let trigger = Trigger::builder().id(id).name("Custom ID").build().unwrap();
        assert_eq!(trigger.id, id);
    }

    #[test]
    fn should_describe_conditions_in_stored_order() {
        let trigger = Trigger::builder()
            .name("Garage door watcher")
            .condition(Predicate::characteristic_is(
                Characteristic::new("Garage Door"),
                Value::from("Open"),
            ))
            .condition(Predicate::after_solar(SolarEvent::Sunrise))
            .condition(Predicate::at_time(TimeOfDay::new(12, 0).unwrap()))
            .build()
            .unwrap();

        assert_eq!(
            trigger.describe_conditions(),
            vec![
                "When Garage Door becomes Open".to_string(),
                "After sunrise".to_string(),
                "At 12:00".to_string(),
            ]
        );
    }

    #[test]
    fn should_describe_unclassifiable_condition_with_fallback() {
        let trigger = Trigger::builder()
            .name("Odd rule")
            .condition(Predicate::comparison(
                crate::predicate::Expression::key_path("temperature"),
                crate::predicate::Operator::Equal,
                crate::predicate::Expression::now(),
            ))
            .build()
            .unwrap();

        assert_eq!(
            trigger.describe_conditions(),
            vec!["Unrecognized condition".to_string()]
        );
    }

    #[test]
    fn should_roundtrip_trigger_through_serde_json() {
        let trigger = valid_trigger();
        let json = serde_json::to_string(&trigger).unwrap();
        let parsed: Trigger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trigger);
    }
}
