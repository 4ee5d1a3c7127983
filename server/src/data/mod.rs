//! Data storage layer
//!
//! - `filters` - Filter compiler (client filters to SQL predicates)
//! - `sqlite` - Employee and preset storage
//! - `types` - Row and parameter types shared by repositories and the API
//! - `traits` - Repository trait the API and seeder depend on
//! - `error` - Unified error type

pub mod error;
pub mod filters;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::DirectoryRepository;

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::storage::AppStorage;

/// Directory database service
///
/// Wraps the SQLite service behind `Arc` so handlers, the seeder and the
/// checkpoint task can share it.
pub struct DirectoryService {
    sqlite: Arc<SqliteService>,
}

impl DirectoryService {
    /// Open (or create) the database under the storage directory
    pub async fn init(storage: &AppStorage) -> Result<Self, DataError> {
        let service = SqliteService::init(storage).await?;
        Ok(Self {
            sqlite: Arc::new(service),
        })
    }

    /// Wrap an existing pool (primarily for testing)
    #[cfg(test)]
    pub fn from_pool(pool: sqlx::SqlitePool) -> Self {
        Self {
            sqlite: Arc::new(SqliteService::from_pool(pool)),
        }
    }

    /// Run a WAL checkpoint
    pub async fn checkpoint(&self) -> Result<(), DataError> {
        self.sqlite.checkpoint().await.map_err(Into::into)
    }

    /// Close the database connection gracefully
    pub async fn close(&self) {
        self.sqlite.close().await
    }

    /// Start the background checkpoint task
    pub fn start_checkpoint_task(&self, shutdown_rx: watch::Receiver<bool>) -> JoinHandle<()> {
        self.sqlite.start_checkpoint_task(shutdown_rx)
    }

    /// Get the repository trait object for data operations
    pub fn repository(&self) -> Box<dyn DirectoryRepository + Send + Sync> {
        Box::new(Arc::clone(&self.sqlite))
    }
}
