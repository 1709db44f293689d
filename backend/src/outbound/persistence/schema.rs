//! Diesel table definitions for the PostgreSQL schema.
//!
//! The tables are created outside this service; these definitions must match
//! them exactly. `diesel print-schema` can regenerate them from a live
//! database.

diesel::table! {
    /// Trivia questions.
    ///
    /// `id` is a `SERIAL` primary key, so deleted ids are never handed out
    /// again.
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        /// Category id; not a foreign key.
        category -> Int4,
        difficulty -> Int4,
    }
}

diesel::table! {
    /// Read-only question categories.
    categories (id) {
        id -> Int4,
        /// Display label, stored in a column named `type`.
        #[sql_name = "type"]
        type_ -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(questions, categories);
