//! Factory for creating repository instances.

use std::sync::Arc;

use crate::db::repository::FullRepository;
#[cfg(feature = "postgres-repo")]
use crate::db::repository::RepositoryResult;
use crate::db::repositories::LocalRepository;

#[cfg(feature = "postgres-repo")]
use crate::db::repositories::{PostgresConfig, PostgresRepository};

/// Creates repository instances for the available backends.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository with the standard legal-basis catalog.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Connect to Postgres, wait for readiness, and run migrations.
    #[cfg(feature = "postgres-repo")]
    pub async fn create_postgres(
        config: PostgresConfig,
    ) -> RepositoryResult<Arc<PostgresRepository>> {
        Ok(Arc::new(PostgresRepository::connect(config).await?))
    }
}
