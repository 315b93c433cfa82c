//! # Survey Service
//!
//! REST API over a catalog of statistical surveys and their classifier
//! taxonomy, persisted in PostgreSQL.
//!
//! ## Architecture
//!
//! The crate is organized into layered modules:
//!
//! - [`api`]: core domain types shared across all layers
//! - [`db`]: repository pattern, backends, and the domain service layer
//! - [`services`]: stateless business rules (payload validation)
//! - [`http`]: axum-based HTTP server, Basic auth, and request handlers
//!
//! Reads flow HTTP → service → repository → database; writes additionally
//! pass through the validator, and multi-statement writes (classifier
//! selector creation) run inside a single repository-owned transaction.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
