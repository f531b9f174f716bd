//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Thread items table: root questions and their replies in one shape.
    ///
    /// `parent_id` is null for root questions and references a root's `id`
    /// for replies. `id` rides a sequence, so identifiers are unique and
    /// monotonically non-reused and storage order is insertion order.
    thread_items (id) {
        /// Primary key assigned by the `thread_items_id_seq` sequence.
        id -> Int8,
        /// Author of the item.
        author -> Varchar,
        /// Message text of the item.
        message -> Text,
        /// Parent question id; null for root questions.
        parent_id -> Nullable<Int8>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
