//! # rulehub-adapter-memory
//!
//! In-memory implementation of the trigger repository port. Triggers live in
//! a process-local map; nothing survives a restart. This adapter backs the
//! CLI and serves as a lightweight repository for embedding in tests of
//! downstream crates.
//!
//! ## Dependency rule
//!
//! Depends on `rulehub-app` (port traits) and `rulehub-domain` only.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rulehub_app::ports::TriggerRepository;
use rulehub_domain::error::{RuleHubError, StorageError};
use rulehub_domain::id::TriggerId;
use rulehub_domain::trigger::Trigger;

/// Process-local trigger repository.
pub struct InMemoryTriggerRepository {
    store: Mutex<HashMap<TriggerId, Trigger>>,
}

impl Default for InMemoryTriggerRepository {
    fn default() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

impl InMemoryTriggerRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given triggers.
    #[must_use]
    pub fn with_triggers(triggers: Vec<Trigger>) -> Self {
        let store = triggers
            .into_iter()
            .map(|trigger| (trigger.id, trigger))
            .collect();
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<TriggerId, Trigger>>, RuleHubError> {
        self.store
            .lock()
            .map_err(|_| StorageError::new("trigger store lock poisoned").into())
    }
}

impl TriggerRepository for InMemoryTriggerRepository {
    async fn create(&self, trigger: Trigger) -> Result<Trigger, RuleHubError> {
        let mut store = self.lock()?;
        store.insert(trigger.id, trigger.clone());
        Ok(trigger)
    }

    async fn get_by_id(&self, id: TriggerId) -> Result<Option<Trigger>, RuleHubError> {
        let store = self.lock()?;
        Ok(store.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Trigger>, RuleHubError> {
        let store = self.lock()?;
        let mut all: Vec<Trigger> = store.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn get_enabled(&self) -> Result<Vec<Trigger>, RuleHubError> {
        let store = self.lock()?;
        let mut enabled: Vec<Trigger> = store.values().filter(|t| t.enabled).cloned().collect();
        enabled.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(enabled)
    }

    async fn update(&self, trigger: Trigger) -> Result<Trigger, RuleHubError> {
        let mut store = self.lock()?;
        store.insert(trigger.id, trigger.clone());
        Ok(trigger)
    }

    async fn delete(&self, id: TriggerId) -> Result<(), RuleHubError> {
        let mut store = self.lock()?;
        store.remove(&id);
        Ok(())
    }
}
