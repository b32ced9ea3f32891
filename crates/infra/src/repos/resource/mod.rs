mod inmemory;
mod postgres;

use crate::repos::shared::{query_structs::ListQuery, repo_error::RepoError};
use concierge_domain::{Record, Resource, ID};
pub use inmemory::InMemoryResourceRepo;
pub(crate) use postgres::{into_records, RecordRaw};
pub use postgres::PostgresResourceRepo;

/// Storage of one `Resource`. Every method maps onto a single statement.
#[async_trait::async_trait]
pub trait IResourceRepo<R: Resource>: Send + Sync {
    async fn insert(&self, fields: &R) -> Result<Record<R>, RepoError>;
    /// Replaces the writable fields. `None` if the row does not exist.
    async fn save(&self, id: ID, fields: &R) -> Result<Option<Record<R>>, RepoError>;
    async fn find(&self, id: ID) -> Result<Option<Record<R>>, RepoError>;
    async fn find_many(&self, query: ListQuery) -> Result<Vec<Record<R>>, RepoError>;
    async fn delete(&self, id: ID) -> Result<Option<Record<R>>, RepoError>;
}
