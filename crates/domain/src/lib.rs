//! # rulehub-domain
//!
//! Pure domain model for the rulehub automation rule engine.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Predicates** (boolean expression trees over home state)
//! - Define **Conditions** (the recognized shapes a predicate classifies into:
//!   characteristic pairs, solar comparisons, exact-time comparisons)
//! - Define **Characteristics** (references to device aspects) and their values
//! - Define **Triggers** (named rules owning a list of condition predicates)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod characteristic;
pub mod condition;
pub mod predicate;
pub mod trigger;
pub mod value;
