//! Trigger repository port — persistence for triggers.

use std::future::Future;

use rulehub_domain::error::RuleHubError;
use rulehub_domain::id::TriggerId;
use rulehub_domain::trigger::Trigger;

/// Repository for persisting and querying [`Trigger`]s.
pub trait TriggerRepository {
    /// Create a new trigger in storage.
    fn create(
        &self,
        trigger: Trigger,
    ) -> impl Future<Output = Result<Trigger, RuleHubError>> + Send;

    /// Get a trigger by its unique identifier.
    fn get_by_id(
        &self,
        id: TriggerId,
    ) -> impl Future<Output = Result<Option<Trigger>, RuleHubError>> + Send;

    /// Get all triggers.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Trigger>, RuleHubError>> + Send;

    /// Get all enabled triggers.
    fn get_enabled(&self) -> impl Future<Output = Result<Vec<Trigger>, RuleHubError>> + Send;

    /// Update an existing trigger.
    fn update(
        &self,
        trigger: Trigger,
    ) -> impl Future<Output = Result<Trigger, RuleHubError>> + Send;

    /// Delete a trigger by its unique identifier.
    fn delete(&self, id: TriggerId) -> impl Future<Output = Result<(), RuleHubError>> + Send;
}
