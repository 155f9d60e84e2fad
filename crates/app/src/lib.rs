//! # rulehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TriggerRepository` — CRUD for triggers and their condition predicates
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TriggerService` — create, query, update, delete, describe conditions
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `rulehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
