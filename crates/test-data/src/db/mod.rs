//! Database integration for seeding test data.
//!
//! The [`Seeder`] clears the campaigns table and inserts generated rows.

mod seeder;

pub use seeder::{SeedError, Seeder};
