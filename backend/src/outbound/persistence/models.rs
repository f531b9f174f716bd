//! Diesel row models for the thread items table.
//!
//! These structs are internal to the persistence layer; repositories convert
//! them to domain types before anything crosses the port boundary. Reads
//! select only the columns the domain needs; `created_at` stays in the
//! database as an audit column.

use diesel::prelude::*;

use super::schema::thread_items;

/// Queryable row for thread items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = thread_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ThreadItemRow {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub parent_id: Option<i64>,
}

/// Insertable row for new thread items; the database assigns `id` and
/// `created_at`.
#[derive(Debug, Insertable)]
#[diesel(table_name = thread_items)]
pub(crate) struct NewThreadItemRow<'a> {
    pub author: &'a str,
    pub message: &'a str,
    pub parent_id: Option<i64>,
}
