//! PostgreSQL-backed `ThreadItemRepository` implementation using Diesel ORM.
//!
//! The adapter only translates between rows and domain types. Reply
//! collections are resolved with a single reply query per call and grouped
//! through an index keyed by parent id, never with a scan per root.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ThreadItemRepository, ThreadItemRepositoryError};
use crate::domain::thread::{NewThreadItem, ThreadItem, ThreadItemId};

use super::models::{NewThreadItemRow, ThreadItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::thread_items;

/// Diesel-backed implementation of the thread item store port.
#[derive(Clone)]
pub struct DieselThreadItemRepository {
    pool: DbPool,
}

impl DieselThreadItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> ThreadItemRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ThreadItemRepositoryError::connection(message)
}

/// Map common Diesel error variants to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ThreadItemRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ThreadItemRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ThreadItemRepositoryError::connection("database connection error")
        }
        _ => ThreadItemRepositoryError::query("database error"),
    }
}

/// Convert a database row into a domain thread item with no replies.
fn row_to_item(row: ThreadItemRow) -> ThreadItem {
    let ThreadItemRow {
        id,
        author,
        message,
        parent_id,
    } = row;

    ThreadItem::new(
        ThreadItemId::new(id),
        author,
        message,
        parent_id.map(ThreadItemId::new),
    )
}

/// Attach reply rows to their root items, preserving both orders.
///
/// Reply rows must arrive in creation order; grouping keeps that order per
/// root. Rows whose parent is not among `roots` are dropped.
fn attach_replies(roots: Vec<ThreadItemRow>, replies: Vec<ThreadItemRow>) -> Vec<ThreadItem> {
    let mut by_parent: HashMap<i64, Vec<ThreadItem>> = HashMap::new();
    for row in replies {
        if let Some(parent_id) = row.parent_id {
            by_parent.entry(parent_id).or_default().push(row_to_item(row));
        }
    }

    roots
        .into_iter()
        .map(|row| {
            let replies = by_parent.remove(&row.id).unwrap_or_default();
            row_to_item(row).with_replies(replies)
        })
        .collect()
}

#[async_trait]
impl ThreadItemRepository for DieselThreadItemRepository {
    async fn create(&self, draft: NewThreadItem) -> Result<ThreadItem, ThreadItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewThreadItemRow {
            author: draft.author(),
            message: draft.message(),
            parent_id: draft.parent_id().map(ThreadItemId::as_i64),
        };

        let row = diesel::insert_into(thread_items::table)
            .values(&new_row)
            .returning(ThreadItemRow::as_returning())
            .get_result::<ThreadItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_item(row))
    }

    async fn find_by_id(
        &self,
        id: ThreadItemId,
    ) -> Result<Option<ThreadItem>, ThreadItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = thread_items::table
            .filter(thread_items::id.eq(id.as_i64()))
            .select(ThreadItemRow::as_select())
            .first::<ThreadItemRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let replies: Vec<ThreadItemRow> = thread_items::table
            .filter(thread_items::parent_id.eq(id.as_i64()))
            .order(thread_items::id.asc())
            .select(ThreadItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(
            row_to_item(row).with_replies(replies.into_iter().map(row_to_item).collect()),
        ))
    }

    async fn find_root_items(&self) -> Result<Vec<ThreadItem>, ThreadItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let roots: Vec<ThreadItemRow> = thread_items::table
            .filter(thread_items::parent_id.is_null())
            .order(thread_items::id.asc())
            .select(ThreadItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let replies: Vec<ThreadItemRow> = thread_items::table
            .filter(thread_items::parent_id.is_not_null())
            .order(thread_items::id.asc())
            .select(ThreadItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(attach_replies(roots, replies))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use rstest::rstest;

    use super::*;

    fn row(id: i64, author: &str, message: &str, parent_id: Option<i64>) -> ThreadItemRow {
        ThreadItemRow {
            id,
            author: author.to_owned(),
            message: message.to_owned(),
            parent_id,
        }
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            ThreadItemRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_a_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ThreadItemRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn rows_convert_to_domain_items() {
        let item = row_to_item(row(2, "Bo", "Hello", Some(1)));

        assert_eq!(item.id(), ThreadItemId::new(2));
        assert_eq!(item.author(), "Bo");
        assert_eq!(item.parent_id(), Some(ThreadItemId::new(1)));
        assert!(item.replies().is_empty());
    }

    #[rstest]
    fn attach_replies_groups_by_parent_preserving_order() {
        let roots = vec![row(1, "Ann", "Hi", None), row(2, "Bo", "Hello", None)];
        let replies = vec![
            row(3, "Cy", "first", Some(1)),
            row(4, "Di", "welcome", Some(2)),
            row(5, "Cy", "second", Some(1)),
        ];

        let items = attach_replies(roots, replies);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].reply_count(), 2);
        let messages: Vec<&str> = items[0].replies().iter().map(ThreadItem::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(items[1].reply_count(), 1);
    }

    #[rstest]
    fn attach_replies_drops_orphans() {
        let roots = vec![row(1, "Ann", "Hi", None)];
        let replies = vec![row(9, "Zo", "lost", Some(8))];

        let items = attach_replies(roots, replies);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].reply_count(), 0);
    }
}
