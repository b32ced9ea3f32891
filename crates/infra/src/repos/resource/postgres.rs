use super::IResourceRepo;
use crate::repos::shared::{query_structs::ListQuery, repo_error::RepoError};
use concierge_domain::{Record, Resource, ID};
use serde_json::Value;
use sqlx::{types::Json, FromRow, PgPool};
use std::marker::PhantomData;
use tracing::error;

/// Stores any `Resource` in its table.
///
/// Rows are read back with `row_to_json` and written with
/// `jsonb_populate_record`, so the only per resource knowledge needed is the
/// table and the writable columns from the resource descriptor.
pub struct PostgresResourceRepo<R> {
    pub(crate) pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> PostgresResourceRepo<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RecordRaw {
    data: Value,
}

impl RecordRaw {
    pub(crate) fn into_record<R: Resource>(self) -> Result<Record<R>, RepoError> {
        serde_json::from_value(self.data).map_err(|e| {
            error!("Unable to decode {} row: {:?}", R::NAME, e);
            RepoError::from(e)
        })
    }
}

pub(crate) fn into_records<R: Resource>(rows: Vec<RecordRaw>) -> Result<Vec<Record<R>>, RepoError> {
    rows.into_iter().map(RecordRaw::into_record::<R>).collect()
}

pub(crate) mod statements {
    use concierge_domain::Resource;

    pub fn insert<R: Resource>() -> String {
        let columns = R::COLUMNS.join(", ");
        format!(
            "INSERT INTO {table} AS t ({columns}) \
             SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1) \
             RETURNING row_to_json(t) AS data",
            table = R::TABLE,
            columns = columns
        )
    }

    /// Merged columns are resolved against the row being replaced, within
    /// the same statement
    pub fn update<R: Resource>() -> String {
        let assignments = R::COLUMNS
            .iter()
            .map(|column| {
                match R::MERGED_COLUMNS.iter().find(|(merged, _)| merged == column) {
                    Some((_, expression)) => format!("{} = {}", column, expression),
                    None => format!("{} = n.{}", column, column),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {table} AS t SET {assignments}, updated_at = now() \
             FROM jsonb_populate_record(NULL::{table}, $2) AS n \
             WHERE t.id = $1 \
             RETURNING row_to_json(t) AS data",
            table = R::TABLE,
            assignments = assignments
        )
    }

    pub fn find<R: Resource>() -> String {
        format!(
            "SELECT row_to_json(t) AS data FROM {} AS t WHERE t.id = $1",
            R::TABLE
        )
    }

    pub fn find_many<R: Resource>() -> String {
        format!(
            "SELECT row_to_json(t) AS data FROM {} AS t ORDER BY t.id LIMIT $1 OFFSET $2",
            R::TABLE
        )
    }

    pub fn delete<R: Resource>() -> String {
        format!(
            "DELETE FROM {} AS t WHERE t.id = $1 RETURNING row_to_json(t) AS data",
            R::TABLE
        )
    }
}

#[async_trait::async_trait]
impl<R: Resource> IResourceRepo<R> for PostgresResourceRepo<R> {
    async fn insert(&self, fields: &R) -> Result<Record<R>, RepoError> {
        let row: RecordRaw = sqlx::query_as(&statements::insert::<R>())
            .bind(Json(fields))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Unable to insert {}: {:?}", R::NAME, e);
                e
            })?;
        row.into_record()
    }

    async fn save(&self, id: ID, fields: &R) -> Result<Option<Record<R>>, RepoError> {
        let row: Option<RecordRaw> = sqlx::query_as(&statements::update::<R>())
            .bind(id.inner())
            .bind(Json(fields))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Unable to update {}: {:?}", R::NAME, e);
                e
            })?;
        row.map(RecordRaw::into_record::<R>).transpose()
    }

    async fn find(&self, id: ID) -> Result<Option<Record<R>>, RepoError> {
        let row: Option<RecordRaw> = sqlx::query_as(&statements::find::<R>())
            .bind(id.inner())
            .fetch_optional(&self.pool)
            .await?;
        row.map(RecordRaw::into_record::<R>).transpose()
    }

    async fn find_many(&self, query: ListQuery) -> Result<Vec<Record<R>>, RepoError> {
        let rows: Vec<RecordRaw> = sqlx::query_as(&statements::find_many::<R>())
            .bind(query.limit as i64)
            .bind(query.skip as i64)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    async fn delete(&self, id: ID) -> Result<Option<Record<R>>, RepoError> {
        let row: Option<RecordRaw> = sqlx::query_as(&statements::delete::<R>())
            .bind(id.inner())
            .fetch_optional(&self.pool)
            .await?;
        row.map(RecordRaw::into_record::<R>).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::statements;
    use concierge_domain::{HotelReview, Reservation};

    #[test]
    fn builds_insert_from_descriptor() {
        assert_eq!(
            statements::insert::<HotelReview>(),
            "INSERT INTO hotel_reviews AS t (user_id, guest_name, rating, comment) \
             SELECT user_id, guest_name, rating, comment FROM jsonb_populate_record(NULL::hotel_reviews, $1) \
             RETURNING row_to_json(t) AS data"
        );
    }

    #[test]
    fn update_touches_updated_at_and_targets_id() {
        assert_eq!(
            statements::update::<HotelReview>(),
            "UPDATE hotel_reviews AS t SET user_id = n.user_id, guest_name = n.guest_name, \
             rating = n.rating, comment = n.comment, updated_at = now() \
             FROM jsonb_populate_record(NULL::hotel_reviews, $2) AS n \
             WHERE t.id = $1 \
             RETURNING row_to_json(t) AS data"
        );
    }

    #[test]
    fn update_resolves_reminded_against_stored_row() {
        let sql = statements::update::<Reservation>();
        assert!(sql.starts_with("UPDATE reservations AS t SET room_id = n.room_id, "));
        assert!(sql.contains(
            "reminded = CASE WHEN t.checkout_at IS DISTINCT FROM n.checkout_at THEN false ELSE t.reminded END"
        ));
        assert!(!sql.contains("reminded = n.reminded"));
    }

    #[test]
    fn reads_are_keyed_by_id() {
        assert_eq!(
            statements::find::<HotelReview>(),
            "SELECT row_to_json(t) AS data FROM hotel_reviews AS t WHERE t.id = $1"
        );
        assert!(statements::find_many::<HotelReview>().ends_with("ORDER BY t.id LIMIT $1 OFFSET $2"));
        assert!(statements::delete::<HotelReview>().starts_with("DELETE FROM hotel_reviews AS t WHERE t.id = $1"));
    }
}
