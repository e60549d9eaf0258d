//! Database models for the key-value table.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::storage::schema;

/// One stored key and its value.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, Getters, new)]
#[diesel(table_name = schema::kv_entries)]
pub struct KvEntry {
    key: String,
    value: String,
}
