//! Outbound view shapes assembled from stored thread items.
//!
//! Each use case returns its own shape; assembly is pure and side-effect
//! free. Views serialize to camelCase JSON and are handed to the transport
//! layer as-is.

use serde::Serialize;

use crate::domain::thread::{ThreadItem, ThreadItemId};

/// View returned after registering a new question.
///
/// `reply_count` is always zero here: a question cannot have replies at the
/// moment it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCreatedView {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub reply_count: usize,
}

impl From<&ThreadItem> for QuestionCreatedView {
    fn from(item: &ThreadItem) -> Self {
        Self {
            id: item.id().as_i64(),
            author: item.author().to_owned(),
            message: item.message().to_owned(),
            reply_count: item.reply_count(),
        }
    }
}

/// View returned after posting a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCreatedView {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub question_id: Option<i64>,
}

impl From<&ThreadItem> for ReplyCreatedView {
    fn from(item: &ThreadItem) -> Self {
        Self {
            id: item.id().as_i64(),
            author: item.author().to_owned(),
            message: item.message().to_owned(),
            question_id: item.parent_id().map(ThreadItemId::as_i64),
        }
    }
}

/// One question row in the list-all-questions view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummaryView {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub reply_count: usize,
}

impl From<&ThreadItem> for QuestionSummaryView {
    fn from(item: &ThreadItem) -> Self {
        Self {
            id: item.id().as_i64(),
            author: item.author().to_owned(),
            message: item.message().to_owned(),
            reply_count: item.reply_count(),
        }
    }
}

/// Reply entry nested inside [`QuestionDetailView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyView {
    pub id: i64,
    pub author: String,
    pub message: String,
}

impl From<&ThreadItem> for ReplyView {
    fn from(item: &ThreadItem) -> Self {
        Self {
            id: item.id().as_i64(),
            author: item.author().to_owned(),
            message: item.message().to_owned(),
        }
    }
}

/// Full question view with its reply list, ordered by creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetailView {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub replies: Vec<ReplyView>,
}

impl From<&ThreadItem> for QuestionDetailView {
    fn from(item: &ThreadItem) -> Self {
        Self {
            id: item.id().as_i64(),
            author: item.author().to_owned(),
            message: item.message().to_owned(),
            replies: item.replies().iter().map(ReplyView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::thread::ThreadItemId;

    fn question_with_reply() -> ThreadItem {
        ThreadItem::new(ThreadItemId::new(1), "Ann", "Hi", None).with_replies(vec![
            ThreadItem::new(ThreadItemId::new(2), "Bo", "Hello", Some(ThreadItemId::new(1))),
        ])
    }

    #[test]
    fn created_view_reports_zero_replies_for_a_fresh_question() {
        let question = ThreadItem::new(ThreadItemId::new(1), "Ann", "Hi", None);

        let view = QuestionCreatedView::from(&question);
        assert_eq!(
            serde_json::to_value(&view).expect("view serializes"),
            json!({ "id": 1, "author": "Ann", "message": "Hi", "replyCount": 0 })
        );
    }

    #[test]
    fn summary_view_counts_resolved_replies() {
        let view = QuestionSummaryView::from(&question_with_reply());

        assert_eq!(view.reply_count, 1);
        assert_eq!(view.id, 1);
    }

    #[test]
    fn reply_view_carries_the_parent_question_id() {
        let reply = ThreadItem::new(
            ThreadItemId::new(2),
            "Bo",
            "Hello",
            Some(ThreadItemId::new(1)),
        );

        let view = ReplyCreatedView::from(&reply);
        assert_eq!(
            serde_json::to_value(&view).expect("view serializes"),
            json!({ "id": 2, "author": "Bo", "message": "Hello", "questionId": 1 })
        );
    }

    #[test]
    fn detail_view_nests_replies_in_creation_order() {
        let question = ThreadItem::new(ThreadItemId::new(1), "Ann", "Hi", None).with_replies(vec![
            ThreadItem::new(ThreadItemId::new(2), "Bo", "Hello", Some(ThreadItemId::new(1))),
            ThreadItem::new(ThreadItemId::new(3), "Cy", "Also hi", Some(ThreadItemId::new(1))),
        ]);

        let view = QuestionDetailView::from(&question);
        assert_eq!(
            serde_json::to_value(&view).expect("view serializes"),
            json!({
                "id": 1,
                "author": "Ann",
                "message": "Hi",
                "replies": [
                    { "id": 2, "author": "Bo", "message": "Hello" },
                    { "id": 3, "author": "Cy", "message": "Also hi" },
                ],
            })
        );
    }
}
