mod inmemory;
mod postgres;

use crate::repos::shared::repo_error::RepoError;
use concierge_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Stores a new user and returns it with the assigned id.
    /// A taken username gives `RepoError::Constraint`.
    async fn insert(&self, user: &User) -> Result<User, RepoError>;
    async fn find(&self, user_id: ID) -> Result<Option<User>, RepoError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}
