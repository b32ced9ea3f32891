use concierge_domain::ID;
use serde::{Deserialize, Serialize};

/// Path of a single resource row, `/{resource}/{id}`
#[derive(Debug, Deserialize, Serialize)]
pub struct ResourcePathParams {
    pub id: ID,
}

pub mod list_resources {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        pub skip: Option<usize>,
        pub limit: Option<usize>,
    }
}
