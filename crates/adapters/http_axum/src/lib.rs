//! # restohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/restaurants` (list, get, create, update, delete)
//! - Accept create/update bodies as `multipart/form-data` (with an optional
//!   `image` file), urlencoded forms, or JSON
//! - Serve stored images read-only under `/uploads`
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `restohub-app` (for port traits and services) and `restohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
