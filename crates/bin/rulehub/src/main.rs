//! # rulehub — trigger condition describer
//!
//! Composition root that wires the trigger service to the in-memory
//! repository, loads a JSON trigger document, and prints each enabled
//! trigger with its classified condition descriptions.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Load trigger definitions from the rules document
//! - Store them through the trigger service (validating on the way in)
//! - Print each enabled trigger's name and condition descriptions
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use rulehub_adapter_memory::InMemoryTriggerRepository;
use rulehub_app::services::trigger_service::TriggerService;
use rulehub_domain::trigger::Trigger;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .context("invalid logging filter")?,
        )
        .init();

    let path = std::env::args().nth(1).unwrap_or(config.rules.file);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read rules document {path}"))?;
    let triggers: Vec<Trigger> =
        serde_json::from_str(&content).context("failed to parse rules document")?;
    tracing::info!(count = triggers.len(), document = %path, "loaded trigger definitions");

    let service = TriggerService::new(InMemoryTriggerRepository::new());
    for trigger in triggers {
        service
            .create_trigger(trigger)
            .await
            .context("failed to store trigger")?;
    }

    for trigger in service.list_enabled().await? {
        println!("{}", trigger.name);
        for description in service.describe_conditions(trigger.id).await? {
            println!("  - {description}");
        }
    }

    Ok(())
}
