//! Port for thread item persistence.
//!
//! The store owns the persisted collection of thread items. It assigns
//! identifiers, resolves each item's reply collection, and reports failures
//! as persistence errors only; validation never happens here.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::thread::{NewThreadItem, ThreadItem, ThreadItemId};

/// Errors raised by thread item store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThreadItemRepositoryError {
    /// Store connection could not be established.
    #[error("thread item store connection failed: {message}")]
    Connection { message: String },

    /// Query or write failed during execution.
    #[error("thread item store query failed: {message}")]
    Query { message: String },
}

impl ThreadItemRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading thread items.
///
/// Identifiers handed out by `create` are unique and monotonically
/// non-reused. Reads resolve the `replies` collection in creation order, so
/// reply counts are available without a further query per item.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadItemRepository: Send + Sync {
    /// Persist a draft and return the stored item with its fresh identifier.
    async fn create(&self, draft: NewThreadItem) -> Result<ThreadItem, ThreadItemRepositoryError>;

    /// Find a thread item by id, with its reply collection resolved.
    ///
    /// A missing id is `Ok(None)`, not an error.
    async fn find_by_id(
        &self,
        id: ThreadItemId,
    ) -> Result<Option<ThreadItem>, ThreadItemRepositoryError>;

    /// Return all root items in storage order, replies resolved.
    async fn find_root_items(&self) -> Result<Vec<ThreadItem>, ThreadItemRepositoryError>;
}

/// Stored row of the in-memory store.
#[derive(Debug, Clone)]
struct StoredItem {
    id: ThreadItemId,
    author: String,
    message: String,
    parent_id: Option<ThreadItemId>,
}

impl StoredItem {
    fn to_item(&self) -> ThreadItem {
        ThreadItem::new(
            self.id,
            self.author.clone(),
            self.message.clone(),
            self.parent_id,
        )
    }
}

/// Deterministic in-memory store.
///
/// Identifiers start at 1 and increase by one per write; storage order is
/// insertion order. Used by tests and as the serving fallback when no
/// database is configured.
#[derive(Debug, Default)]
pub struct InMemoryThreadItemRepository {
    next_id: AtomicI64,
    items: Mutex<Vec<StoredItem>>,
}

impl InMemoryThreadItemRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(0),
            items: Mutex::new(Vec::new()),
        }
    }

    fn lock_items(&self) -> std::sync::MutexGuard<'_, Vec<StoredItem>> {
        // A poisoned lock means a panic mid-push; the store holds no
        // intermediate state, so the data is still consistent.
        match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Group stored replies under their parents without a scan per root.
    fn index_replies(items: &[StoredItem]) -> HashMap<ThreadItemId, Vec<ThreadItem>> {
        let mut by_parent: HashMap<ThreadItemId, Vec<ThreadItem>> = HashMap::new();
        for item in items {
            if let Some(parent_id) = item.parent_id {
                by_parent.entry(parent_id).or_default().push(item.to_item());
            }
        }
        by_parent
    }
}

#[async_trait]
impl ThreadItemRepository for InMemoryThreadItemRepository {
    async fn create(&self, draft: NewThreadItem) -> Result<ThreadItem, ThreadItemRepositoryError> {
        let id = ThreadItemId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = StoredItem {
            id,
            author: draft.author().to_owned(),
            message: draft.message().to_owned(),
            parent_id: draft.parent_id(),
        };
        let item = stored.to_item();
        self.lock_items().push(stored);
        Ok(item)
    }

    async fn find_by_id(
        &self,
        id: ThreadItemId,
    ) -> Result<Option<ThreadItem>, ThreadItemRepositoryError> {
        let items = self.lock_items();
        let Some(found) = items.iter().find(|item| item.id == id) else {
            return Ok(None);
        };
        let replies = items
            .iter()
            .filter(|item| item.parent_id == Some(id))
            .map(StoredItem::to_item)
            .collect();
        Ok(Some(found.to_item().with_replies(replies)))
    }

    async fn find_root_items(&self) -> Result<Vec<ThreadItem>, ThreadItemRepositoryError> {
        let items = self.lock_items();
        let mut by_parent = Self::index_replies(&items);
        Ok(items
            .iter()
            .filter(|item| item.parent_id.is_none())
            .map(|item| {
                let replies = by_parent.remove(&item.id).unwrap_or_default();
                item.to_item().with_replies(replies)
            })
            .collect())
    }
}
