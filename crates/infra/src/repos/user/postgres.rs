use super::IUserRepo;
use crate::repos::shared::repo_error::RepoError;
use chrono::{DateTime, Utc};
use concierge_domain::{User, ID};
use sqlx::{FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    id: i64,
    username: String,
    full_name: String,
    role: String,
    room_id: Option<i64>,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRaw> for User {
    type Error = RepoError;

    fn try_from(raw: UserRaw) -> Result<Self, Self::Error> {
        Ok(User {
            id: raw.id.into(),
            role: raw.role.parse().map_err(anyhow::Error::new)?,
            username: raw.username,
            full_name: raw.full_name,
            room_id: raw.room_id.map(ID::from),
            password_hash: raw.password_hash,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> Result<User, RepoError> {
        let raw: UserRaw = sqlx::query_as(
            r#"
            INSERT INTO users(username, full_name, role, room_id, password_hash)
            VALUES($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(user.role.as_str())
        .bind(user.room_id.map(|id| id.inner()))
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        raw.try_into()
    }

    async fn find(&self, user_id: ID) -> Result<Option<User>, RepoError> {
        let raw: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.id = $1
            "#,
        )
        .bind(user_id.inner())
        .fetch_optional(&self.pool)
        .await?;
        raw.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let raw: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        raw.map(User::try_from).transpose()
    }
}
