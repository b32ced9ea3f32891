use crate::shared::{
    entity::{Entity, ID},
    validation::ValidationError,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

/// Describes a CRUD resource: where it is stored, which columns a client may
/// write and which rules a payload must satisfy.
///
/// The implementing type is the set of writable fields. The store owns `id`,
/// `created_at` and `updated_at`, see [`Record`].
pub trait Resource:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// Singular name used in error messages, e.g. "room type"
    const NAME: &'static str;
    /// Table holding the rows of this resource
    const TABLE: &'static str;
    /// Writable columns. Must match the serialized field names.
    const COLUMNS: &'static [&'static str];

    /// Columns whose stored value is kept or derived from the stored row on
    /// update, as a SQL expression over the stored row `t` and the new
    /// payload `n`. Must agree with `prepare_update`.
    const MERGED_COLUMNS: &'static [(&'static str, &'static str)] = &[];

    fn validate(&self) -> Result<(), ValidationError>;

    /// Runs before a new row is stored
    fn prepare_insert(&mut self) {}

    /// Merges the `current` stored fields into `self`. Stores call this in the
    /// same write that replaces the row.
    fn prepare_update(&mut self, _current: &Self) {}
}

/// A stored row of a `Resource`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<R> {
    pub id: ID,
    #[serde(flatten)]
    pub fields: R,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<R> Record<R> {
    pub fn new(id: ID, fields: R, now: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }
}

impl<R> Entity for Record<R> {
    fn id(&self) -> ID {
        self.id
    }
}
