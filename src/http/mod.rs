//! HTTP server module.
//!
//! Axum-based REST adapter over the service layer: request parsing, UUID
//! path validation, Basic authentication, and the mapping of domain
//! outcomes onto HTTP status codes and bodies.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use auth::BasicCredentials;
pub use router::create_router;
pub use state::AppState;
