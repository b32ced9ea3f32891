use super::IUserRepo;
use crate::repos::shared::{inmemory_repo::*, repo_error::RepoError};
use concierge_domain::{User, ID};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint(format!(
                "Username {} is already taken",
                user.username
            )));
        }
        let mut user = user.clone();
        user.id = ID::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        users.push(user.clone());
        Ok(user)
    }

    async fn find(&self, user_id: ID) -> Result<Option<User>, RepoError> {
        Ok(find(user_id, &self.users))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(find_by(&self.users, |u| u.username == username).into_iter().next())
    }
}
