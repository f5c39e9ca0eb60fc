//! Database integration for seeding.
//!
//! The [`Seeder`] inserts the sample rows through any
//! [`TableStore`](trainu::database::TableStore) and reports completion.

mod seeder;

pub use seeder::{COMPLETION_MESSAGE, SeedError, Seeder};
