//! # restohub-domain
//!
//! Pure domain model for the restohub restaurant catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Restaurant** record and the partial **changes** applied by updates
//! - Contain all invariant enforcement (required, non-empty fields)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod restaurant;
