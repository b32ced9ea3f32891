use crate::{APIResponse, BaseClient};
use concierge_domain::{Record, Resource, ID};
use reqwest::StatusCode;
use std::{marker::PhantomData, sync::Arc};

/// CRUD client for one resource collection, e.g. `api/v1/rooms`
pub struct ResourceClient<R> {
    base: Arc<BaseClient>,
    path: &'static str,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            path: self.path,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub(crate) fn new(base: Arc<BaseClient>, path: &'static str) -> Self {
        Self {
            base,
            path,
            _resource: PhantomData,
        }
    }

    pub async fn list(
        &self,
        skip: Option<usize>,
        limit: Option<usize>,
    ) -> APIResponse<Vec<Record<R>>> {
        let mut query = Vec::new();
        if let Some(skip) = skip {
            query.push(format!("skip={}", skip));
        }
        if let Some(limit) = limit {
            query.push(format!("limit={}", limit));
        }
        let path = if query.is_empty() {
            format!("api/v1/{}", self.path)
        } else {
            format!("api/v1/{}?{}", self.path, query.join("&"))
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get(&self, id: ID) -> APIResponse<Record<R>> {
        self.base
            .get(format!("api/v1/{}/{}", self.path, id), StatusCode::OK)
            .await
    }

    pub async fn create(&self, fields: &R) -> APIResponse<Record<R>> {
        self.base
            .post(
                fields,
                format!("api/v1/{}", self.path),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn update(&self, id: ID, fields: &R) -> APIResponse<Record<R>> {
        self.base
            .put(
                fields,
                format!("api/v1/{}/{}", self.path, id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, id: ID) -> APIResponse<Record<R>> {
        self.base
            .delete(format!("api/v1/{}/{}", self.path, id), StatusCode::OK)
            .await
    }
}
