//! Trigger service — use-cases for managing triggers and their conditions.

use rulehub_domain::error::{NotFoundError, RuleHubError};
use rulehub_domain::id::TriggerId;
use rulehub_domain::trigger::Trigger;

use crate::ports::TriggerRepository;

/// Application service for trigger CRUD and condition descriptions.
pub struct TriggerService<R> {
    repo: R,
}

impl<R: TriggerRepository> TriggerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new trigger after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, trigger), fields(trigger_name = %trigger.name))]
    pub async fn create_trigger(&self, trigger: Trigger) -> Result<Trigger, RuleHubError> {
        trigger.validate()?;
        self.repo.create(trigger).await
    }

    /// Look up a trigger by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::NotFound`] when no trigger with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_trigger(&self, id: TriggerId) -> Result<Trigger, RuleHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Trigger",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all triggers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_triggers(&self) -> Result<Vec<Trigger>, RuleHubError> {
        self.repo.get_all().await
    }

    /// Get all enabled triggers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_enabled(&self) -> Result<Vec<Trigger>, RuleHubError> {
        self.repo.get_enabled().await
    }

    /// Update an existing trigger.
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, trigger))]
    pub async fn update_trigger(&self, trigger: Trigger) -> Result<Trigger, RuleHubError> {
        trigger.validate()?;
        self.repo.update(trigger).await
    }

    /// Delete a trigger by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_trigger(&self, id: TriggerId) -> Result<(), RuleHubError> {
        self.repo.delete(id).await
    }

    /// Describe each condition of a stored trigger, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleHubError::NotFound`] when no trigger with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn describe_conditions(&self, id: TriggerId) -> Result<Vec<String>, RuleHubError> {
        let trigger = self.get_trigger(id).await?;
        let descriptions = trigger.describe_conditions();
        tracing::debug!(
            trigger_name = %trigger.name,
            conditions = descriptions.len(),
            "described trigger conditions"
        );
        Ok(descriptions)
    }
}
