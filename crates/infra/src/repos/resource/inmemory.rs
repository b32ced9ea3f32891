use super::IResourceRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::ListQuery, repo_error::RepoError};
use chrono::Utc;
use concierge_domain::{Record, Resource, ID};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

pub struct InMemoryResourceRepo<R> {
    pub(crate) records: Mutex<Vec<Record<R>>>,
    next_id: AtomicI64,
}

impl<R: Resource> InMemoryResourceRepo<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<R: Resource> Default for InMemoryResourceRepo<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<R: Resource> IResourceRepo<R> for InMemoryResourceRepo<R> {
    async fn insert(&self, fields: &R) -> Result<Record<R>, RepoError> {
        let id = ID::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = Record::new(id, fields.clone(), Utc::now());
        insert(&record, &self.records);
        Ok(record)
    }

    async fn save(&self, id: ID, fields: &R) -> Result<Option<Record<R>>, RepoError> {
        Ok(update_one(id, &self.records, |record| {
            let mut fields = fields.clone();
            fields.prepare_update(&record.fields);
            record.fields = fields;
            record.updated_at = Utc::now();
        }))
    }

    async fn find(&self, id: ID) -> Result<Option<Record<R>>, RepoError> {
        Ok(find(id, &self.records))
    }

    async fn find_many(&self, query: ListQuery) -> Result<Vec<Record<R>>, RepoError> {
        Ok(find_page(&self.records, query))
    }

    async fn delete(&self, id: ID) -> Result<Option<Record<R>>, RepoError> {
        Ok(delete(id, &self.records))
    }
}
