use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    /// The store rejected the write, e.g. a foreign key or unique violation
    #[error("{0}")]
    Constraint(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &e {
            // SQLSTATE class 22 is data exception, class 23 is integrity constraint violation
            let is_client_error = db_error
                .code()
                .map(|code| code.starts_with("22") || code.starts_with("23"))
                .unwrap_or(false);
            if is_client_error {
                return Self::Constraint(db_error.message().to_string());
            }
        }
        Self::Storage(anyhow::Error::new(e))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage(anyhow::Error::new(e))
    }
}
