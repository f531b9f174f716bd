//! Tests for the question service.

use std::sync::Arc;

use super::*;
use crate::domain::error::ErrorCode;
use crate::domain::ports::{MockThreadItemRepository, ThreadItemRepositoryError};
use crate::domain::thread::ThreadItem;

fn service(repo: MockThreadItemRepository) -> QuestionServiceImpl<MockThreadItemRepository> {
    QuestionServiceImpl::new(Arc::new(repo))
}

fn stored_question(id: i64, author: &str, message: &str) -> ThreadItem {
    ThreadItem::new(ThreadItemId::new(id), author, message, None)
}

#[tokio::test]
async fn register_question_persists_and_reports_zero_replies() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_create()
        .withf(|draft| draft.parent_id().is_none() && draft.author() == "Ann")
        .times(1)
        .return_once(|_| Ok(stored_question(1, "Ann", "Hi")));

    let view = service(repo)
        .register_question(PostPayload::new("Ann", "Hi"))
        .await
        .expect("registration succeeds");

    assert_eq!(view.id, 1);
    assert_eq!(view.author, "Ann");
    assert_eq!(view.message, "Hi");
    assert_eq!(view.reply_count, 0);
}

#[tokio::test]
async fn register_question_with_empty_author_never_reaches_the_store() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_create().times(0);

    let error = service(repo)
        .register_question(PostPayload {
            author: Some(String::new()),
            message: Some("Hi".to_owned()),
        })
        .await
        .expect_err("empty author");

    assert_eq!(error.code(), ErrorCode::EmptyAuthor);
}

#[tokio::test]
async fn register_question_wraps_store_failures() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(ThreadItemRepositoryError::connection("pool unavailable")));

    let error = service(repo)
        .register_question(PostPayload::new("Ann", "Hi"))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::RegistrationFailed);
    assert!(error.description().contains("pool unavailable"));
}

#[tokio::test]
async fn post_reply_confirms_existence_then_writes() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == ThreadItemId::new(1))
        .times(1)
        .return_once(|_| Ok(Some(stored_question(1, "Ann", "Hi"))));
    repo.expect_create()
        .withf(|draft| draft.parent_id() == Some(ThreadItemId::new(1)))
        .times(1)
        .return_once(|_| {
            Ok(ThreadItem::new(
                ThreadItemId::new(2),
                "Bo",
                "Hello",
                Some(ThreadItemId::new(1)),
            ))
        });

    let view = service(repo)
        .post_reply(ThreadItemId::new(1), PostPayload::new("Bo", "Hello"))
        .await
        .expect("reply succeeds");

    assert_eq!(view.id, 2);
    assert_eq!(view.question_id, Some(1));
}

#[tokio::test]
async fn post_reply_to_a_missing_question_performs_no_write() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_create().times(0);

    let error = service(repo)
        .post_reply(ThreadItemId::new(9), PostPayload::new("Bo", "Hello"))
        .await
        .expect_err("question missing");

    assert_eq!(error.code(), ErrorCode::QuestionNotFound);
    assert!(error.message().contains('9'));
}

#[tokio::test]
async fn post_reply_rejects_a_reply_as_target() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| {
        Ok(Some(ThreadItem::new(
            ThreadItemId::new(2),
            "Bo",
            "Hello",
            Some(ThreadItemId::new(1)),
        )))
    });
    repo.expect_create().times(0);

    let error = service(repo)
        .post_reply(ThreadItemId::new(2), PostPayload::new("Cy", "Nested"))
        .await
        .expect_err("target is a reply");

    assert_eq!(error.code(), ErrorCode::QuestionNotFound);
}

#[tokio::test]
async fn post_reply_with_empty_message_never_reaches_the_store() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_create().times(0);

    let error = service(repo)
        .post_reply(
            ThreadItemId::new(1),
            PostPayload {
                author: Some("Bo".to_owned()),
                message: None,
            },
        )
        .await
        .expect_err("empty message");

    assert_eq!(error.code(), ErrorCode::EmptyMessage);
}

#[tokio::test]
async fn post_reply_wraps_store_failures_with_their_cause() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_question(1, "Ann", "Hi"))));
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(ThreadItemRepositoryError::query("unique violation")));

    let error = service(repo)
        .post_reply(ThreadItemId::new(1), PostPayload::new("Bo", "Hello"))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::ReplyFailed);
    assert!(error.description().contains("unique violation"));
}

#[tokio::test]
async fn list_questions_maps_roots_to_summaries() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_root_items().times(1).return_once(|| {
        Ok(vec![
            stored_question(1, "Ann", "Hi").with_replies(vec![ThreadItem::new(
                ThreadItemId::new(3),
                "Cy",
                "Welcome",
                Some(ThreadItemId::new(1)),
            )]),
            stored_question(2, "Bo", "Hello"),
        ])
    });

    let views = service(repo).list_questions().await.expect("list succeeds");

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].reply_count, 1);
    assert_eq!(views[1].reply_count, 0);
}

#[tokio::test]
async fn list_questions_wraps_store_failures() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_root_items()
        .times(1)
        .return_once(|| Err(ThreadItemRepositoryError::query("relation missing")));

    let error = service(repo).list_questions().await.expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::ListFailed);
    assert!(error.description().contains("relation missing"));
}

#[tokio::test]
async fn question_detail_returns_the_full_reply_list() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| {
        Ok(Some(stored_question(1, "Ann", "Hi").with_replies(vec![
            ThreadItem::new(ThreadItemId::new(2), "Bo", "Hello", Some(ThreadItemId::new(1))),
        ])))
    });

    let view = service(repo)
        .question_detail(ThreadItemId::new(1))
        .await
        .expect("detail succeeds");

    assert_eq!(view.id, 1);
    assert_eq!(view.replies.len(), 1);
    assert_eq!(view.replies[0].author, "Bo");
}

#[tokio::test]
async fn question_detail_reports_missing_questions() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = service(repo)
        .question_detail(ThreadItemId::new(5))
        .await
        .expect_err("question missing");

    assert_eq!(error.code(), ErrorCode::QuestionNotFound);
}

#[tokio::test]
async fn question_detail_wraps_store_failures() {
    let mut repo = MockThreadItemRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(ThreadItemRepositoryError::connection("timed out")));

    let error = service(repo)
        .question_detail(ThreadItemId::new(1))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::DetailFailed);
    assert!(error.description().contains("timed out"));
}
