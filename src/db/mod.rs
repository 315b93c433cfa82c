//! Database module for the survey catalog.
//!
//! Follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Adapter (http module)                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Domain Protocols          │
//! │  - Legal-basis resolution                                │
//! │  - Uniqueness pre-checks and conflict mapping            │
//! │  - Missing-parent vs empty-collection distinction        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │  PostgresRepository           │  LocalRepository
//!     │  (Diesel + r2d2, migrations)  │  (in-memory, tests)
//!     └──────────────────────────────┘
//! ```
//!
//! The repository instance is constructed once at startup and injected as
//! an `Arc<dyn FullRepository>`; there is no process-global handle.

// Feature flag priority: postgres > local
// When multiple features are enabled (e.g., --all-features), postgres takes precedence.
#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::{PoolStats, PostgresConfig, PostgresRepository};
pub use repositories::LocalRepository;

pub use factory::RepositoryFactory;
pub use repository::{
    ClassifierRepository, CreateSelectorOutcome, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult, SurveyRepository,
};
pub use services::{ServiceError, ServiceResult};
