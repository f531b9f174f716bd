//! Thread item data model.
//!
//! A thread item is either a root question or a reply to one; both share a
//! single shape and are distinguished by the optional parent reference. The
//! thread is exactly two levels deep: a reply's parent is always a root.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`PostBody::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBodyValidationError {
    EmptyAuthor,
    EmptyMessage,
}

impl fmt::Display for PostBodyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAuthor => write!(f, "author must not be empty"),
            Self::EmptyMessage => write!(f, "message must not be empty"),
        }
    }
}

impl std::error::Error for PostBodyValidationError {}

/// Store-assigned identifier of a persisted thread item.
///
/// Identifiers are unique and monotonically non-reused; only the store hands
/// them out. Drafts awaiting persistence have no identifier at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadItemId(i64);

impl ThreadItemId {
    /// Wrap a raw identifier produced by the store.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ThreadItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ThreadItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Unvalidated inbound post payload, as received from the transport layer.
///
/// Absent fields deserialize to `None` so that validation, not
/// deserialization, decides how missing input is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPayload {
    pub author: Option<String>,
    pub message: Option<String>,
}

impl PostPayload {
    /// Convenience constructor for tests and callers with owned strings.
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            message: Some(message.into()),
        }
    }
}

/// Validated author/message pair, the only form the store accepts for writes.
///
/// ## Invariants
/// - `author` and `message` are non-empty. Emptiness is the literal empty
///   string; whitespace-only input is accepted unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody {
    author: String,
    message: String,
}

impl PostBody {
    /// Validate an inbound payload.
    ///
    /// The author field is checked first and the first violation
    /// short-circuits, so exactly one violation is surfaced per call.
    pub fn parse(payload: PostPayload) -> Result<Self, PostBodyValidationError> {
        let author = payload
            .author
            .filter(|value| !value.is_empty())
            .ok_or(PostBodyValidationError::EmptyAuthor)?;
        let message = payload
            .message
            .filter(|value| !value.is_empty())
            .ok_or(PostBodyValidationError::EmptyMessage)?;
        Ok(Self { author, message })
    }

    /// Author of the post.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Message text of the post.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Draft of a thread item awaiting persistence; carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThreadItem {
    body: PostBody,
    parent_id: Option<ThreadItemId>,
}

impl NewThreadItem {
    /// Draft a new root question.
    pub const fn question(body: PostBody) -> Self {
        Self {
            body,
            parent_id: None,
        }
    }

    /// Draft a reply to the question with the given identifier.
    pub const fn reply(body: PostBody, question_id: ThreadItemId) -> Self {
        Self {
            body,
            parent_id: Some(question_id),
        }
    }

    /// Author of the draft.
    pub fn author(&self) -> &str {
        self.body.author()
    }

    /// Message text of the draft.
    pub fn message(&self) -> &str {
        self.body.message()
    }

    /// Parent question identifier, absent for root questions.
    pub const fn parent_id(&self) -> Option<ThreadItemId> {
        self.parent_id
    }
}

/// Persisted thread item with its resolved reply collection.
///
/// Items are created once and never mutated or deleted afterwards. The
/// `replies` collection is derived from the inverse of `parent_id` and is
/// resolved by the store, ordered by creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadItem {
    id: ThreadItemId,
    author: String,
    message: String,
    parent_id: Option<ThreadItemId>,
    replies: Vec<ThreadItem>,
}

impl ThreadItem {
    /// Construct a stored item from its persisted fields, with no replies.
    pub fn new(
        id: ThreadItemId,
        author: impl Into<String>,
        message: impl Into<String>,
        parent_id: Option<ThreadItemId>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            message: message.into(),
            parent_id,
            replies: Vec::new(),
        }
    }

    /// Attach the resolved reply collection.
    #[must_use]
    pub fn with_replies(mut self, replies: Vec<ThreadItem>) -> Self {
        self.replies = replies;
        self
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> ThreadItemId {
        self.id
    }

    /// Author of the item.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Message text of the item.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Parent question identifier, absent for root questions.
    pub const fn parent_id(&self) -> Option<ThreadItemId> {
        self.parent_id
    }

    /// Replies to this item, ordered by creation.
    pub fn replies(&self) -> &[ThreadItem] {
        self.replies.as_slice()
    }

    /// Whether this item is a root question.
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Number of replies resolved for this item.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}
