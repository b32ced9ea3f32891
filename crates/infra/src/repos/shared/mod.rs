pub mod inmemory_repo;
pub mod query_structs;
pub mod repo_error;
