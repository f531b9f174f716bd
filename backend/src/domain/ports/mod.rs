//! Domain ports for the hexagonal boundary.
//!
//! The driven side is the thread item store; the driving side is the
//! question use-case surface consumed by inbound adapters.

mod question_service;
mod thread_item_repository;

#[cfg(test)]
pub use question_service::MockQuestionService;
pub use question_service::QuestionService;
#[cfg(test)]
pub use thread_item_repository::MockThreadItemRepository;
pub use thread_item_repository::{
    InMemoryThreadItemRepository, ThreadItemRepository, ThreadItemRepositoryError,
};
