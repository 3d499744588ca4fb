//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They describe
//! the seeded aircraft configurations that factories then persist.

pub mod seat_map;
